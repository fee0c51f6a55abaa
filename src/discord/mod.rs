//! The Discord front-end.
//!
//! Slash commands, plain messages and menu button clicks are all turned into a [`Command`] and
//! handed to the shared [`App`].

mod commands;
pub mod config;
mod reply;
mod token;

use std::{error::Error, pin::pin, sync::Arc};

use poise::serenity_prelude::{
	self as serenity,
	ActivityData,
	ComponentInteraction,
	GatewayIntents,
	GuildId,
	Interaction,
	Message,
	RatelimitInfo,
	Ready,
	ResumedEvent,
	UserId,
};
use tokio_util::sync::CancellationToken;

pub use self::{config::Config, token::Token};
use crate::{app::App, command::Command};

type Context<'a> = poise::Context<'a, State, DiscordError>;

#[derive(Debug)]
pub struct Bot
{
	token: Token,
	guild_id: Option<GuildId>,
	app: Arc<App>,
}

#[derive(Debug, Display, Error, From)]
pub enum DiscordError
{
	#[display("missing Discord token")]
	#[from(ignore)]
	MissingToken,

	Serenity(serenity::Error),
}

#[derive(Debug)]
struct State
{
	app: Arc<App>,

	/// Our own user, for recognizing mentions.
	bot_id: UserId,
}

impl Bot
{
	#[tracing::instrument(skip(config, app), err)]
	pub fn new(config: &Config, app: Arc<App>) -> Result<Self, DiscordError>
	{
		let token = config.token.clone().ok_or(DiscordError::MissingToken)?;

		Ok(Self { token, guild_id: config.guild_id, app })
	}

	/// Runs the bot until `cancellation_token` is cancelled or the gateway connection fails
	/// for good.
	#[tracing::instrument(skip(self, cancellation_token), err)]
	pub async fn run(self, cancellation_token: CancellationToken) -> Result<(), DiscordError>
	{
		let framework = poise::Framework::builder()
			.options(framework_options())
			.setup({
				let guild_id = self.guild_id;
				let app = Arc::clone(&self.app);
				move |cx, ready, framework| {
					Box::pin(framework_setup(cx, ready, framework, guild_id, app))
				}
			})
			.build();

		let mut client = serenity::Client::builder(self.token.as_str(), gateway_intents())
			.framework(framework)
			.activity(ActivityData::custom("Send me a SteamID"))
			.await?;

		{
			let client_future = pin!(client.start());

			tokio::select! {
				() = cancellation_token.cancelled() => {
					info!("discord bot shutting down");
				},

				client_result = client_future => {
					if let Err(err) = client_result {
						error!(error = &err as &dyn Error, "failed to run discord bot");
						return Err(err.into());
					}
				},
			}
		}

		client.shard_manager.shutdown_all().await;

		Ok(())
	}
}

fn framework_options() -> poise::FrameworkOptions<State, DiscordError>
{
	poise::FrameworkOptions {
		commands: vec![
			commands::start(),
			commands::help(),
			commands::stats(),
			commands::meta(),
			commands::support(),
		],
		on_error: |error| Box::pin(on_error(error)),
		pre_command: |cx| Box::pin(pre_command(cx)),
		post_command: |cx| Box::pin(post_command(cx)),
		event_handler: |client_cx, event, framework_cx, state| {
			Box::pin(on_event(client_cx, event, framework_cx, state))
		},
		..Default::default()
	}
}

fn gateway_intents() -> GatewayIntents
{
	GatewayIntents::GUILDS
		| GatewayIntents::GUILD_MESSAGES
		| GatewayIntents::DIRECT_MESSAGES
}

#[tracing::instrument(skip_all, err)]
async fn framework_setup(
	cx: &serenity::Context,
	ready: &serenity::Ready,
	framework: &poise::Framework<State, DiscordError>,
	guild_id: Option<GuildId>,
	app: Arc<App>,
) -> Result<State, DiscordError>
{
	let commands = &framework.options().commands;

	match guild_id {
		Some(guild_id) => {
			poise::builtins::register_in_guild(&cx.http, commands, guild_id).await?;
			info!(%guild_id, "registered commands in guild");
		},
		None => {
			poise::builtins::register_globally(&cx.http, commands).await?;
			info!("registered commands globally");
		},
	}

	Ok(State { app, bot_id: ready.user.id })
}

#[tracing::instrument(level = "error", skip_all)]
async fn on_error(error: poise::FrameworkError<'_, State, DiscordError>)
{
	error!(%error);
}

#[tracing::instrument(level = "trace", skip_all)]
async fn pre_command(cx: Context<'_>)
{
	trace!(command = cx.invoked_command_name(), "executing command");
}

#[tracing::instrument(level = "trace", skip_all)]
async fn post_command(cx: Context<'_>)
{
	trace!(command = cx.invoked_command_name(), "executed command");
}

#[tracing::instrument(skip_all, err)]
async fn on_event(
	client_cx: &serenity::Context,
	event: &serenity::FullEvent,
	_framework_cx: poise::FrameworkContext<'_, State, DiscordError>,
	state: &State,
) -> Result<(), DiscordError>
{
	debug!(event = event.snake_case_name(), "received event");

	#[allow(clippy::wildcard_enum_match_arm)]
	match event {
		serenity::FullEvent::Message { new_message } => {
			on_message(client_cx, state, new_message).await
		},
		serenity::FullEvent::InteractionCreate { interaction: Interaction::Component(component) } => {
			on_component(client_cx, state, component).await
		},
		serenity::FullEvent::Ready { data_about_bot } => on_ready(data_about_bot).await,
		serenity::FullEvent::Resume { event } => on_resume(event).await,
		serenity::FullEvent::Ratelimit { data } => on_ratelimit(data).await,
		_ => Ok(()),
	}
}

#[tracing::instrument(skip(client_cx, state, message), fields(author = %message.author.id), err)]
async fn on_message(
	client_cx: &serenity::Context,
	state: &State,
	message: &Message,
) -> Result<(), DiscordError>
{
	if message.author.bot {
		return Ok(());
	}

	let is_direct_message = message.guild_id.is_none();
	let Some(command) = addressed_command(&message.content, is_direct_message, state.bot_id) else {
		trace!("ignoring message not addressed to us");
		return Ok(());
	};

	if matches!(command, Command::Lookup(_)) {
		if let Err(err) = message.channel_id.broadcast_typing(&client_cx.http).await {
			debug!(error = &err as &dyn Error, "failed to send typing indicator");
		}
	}

	let reply = state.app.handle(command).await;

	message
		.channel_id
		.send_message(client_cx, reply::create_message(&reply))
		.await?;

	Ok(())
}

/// Interprets a plain message, if it was meant for the bot.
///
/// Direct messages always are. In guild channels the message has to start with a mention of
/// the bot; the mention is stripped and a bare mention counts as [`Command::Start`].
fn addressed_command(content: &str, is_direct_message: bool, bot_id: UserId) -> Option<Command>
{
	let content = content.trim();

	if is_direct_message {
		return (!content.is_empty()).then(|| Command::from_text(content));
	}

	let mention = format!("<@{bot_id}>");
	let nickname_mention = format!("<@!{bot_id}>");
	let rest = content
		.strip_prefix(mention.as_str())
		.or_else(|| content.strip_prefix(nickname_mention.as_str()))?
		.trim();

	if rest.is_empty() {
		return Some(Command::Start);
	}

	Some(Command::from_text(rest))
}

#[tracing::instrument(skip(client_cx, state, component), fields(custom_id = %component.data.custom_id), err)]
async fn on_component(
	client_cx: &serenity::Context,
	state: &State,
	component: &ComponentInteraction,
) -> Result<(), DiscordError>
{
	let Some(command) = Command::from_custom_id(&component.data.custom_id) else {
		trace!("ignoring unknown component");
		return Ok(());
	};

	component.defer(client_cx).await?;

	let reply = state.app.handle(command).await;

	component
		.create_followup(client_cx, reply::create_followup(&reply))
		.await?;

	Ok(())
}

#[tracing::instrument(skip(ready), fields(user = %ready.user.name), err)]
async fn on_ready(ready: &Ready) -> Result<(), DiscordError>
{
	info!(guilds = ready.guilds.len(), "discord bot is online");

	Ok(())
}

#[tracing::instrument(err)]
async fn on_resume(event: &ResumedEvent) -> Result<(), DiscordError>
{
	warn!("discord bot was disconnected but is back online");

	Ok(())
}

#[tracing::instrument(err)]
async fn on_ratelimit(data: &RatelimitInfo) -> Result<(), DiscordError>
{
	warn!(path = %data.path, timeout = ?data.timeout, "getting rate limited");

	Ok(())
}

#[cfg(test)]
mod tests
{
	use super::*;

	const BOT_ID: UserId = UserId::new(1234);

	#[test]
	fn direct_messages_are_always_handled()
	{
		assert_eq!(
			addressed_command("76561198012345678", true, BOT_ID),
			Some(Command::Lookup("76561198012345678".to_owned())),
		);

		assert_eq!(addressed_command("  ", true, BOT_ID), None);
	}

	#[test]
	fn guild_chatter_is_ignored()
	{
		assert_eq!(addressed_command("gg", false, BOT_ID), None);
		assert_eq!(addressed_command("76561198012345678", false, BOT_ID), None);
		assert_eq!(addressed_command("<@999> 76561198012345678", false, BOT_ID), None);
	}

	#[test]
	fn guild_mentions_are_handled()
	{
		assert_eq!(
			addressed_command("<@1234> 76561198012345678", false, BOT_ID),
			Some(Command::Lookup("76561198012345678".to_owned())),
		);

		assert_eq!(addressed_command("<@!1234> /help", false, BOT_ID), Some(Command::Help));
		assert_eq!(addressed_command("<@1234>", false, BOT_ID), Some(Command::Start));
	}
}
