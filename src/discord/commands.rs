use super::{Context, DiscordError, reply};
use crate::command::Command;

/// Show the welcome message and the menu.
#[poise::command(slash_command)]
pub(super) async fn start(cx: Context<'_>) -> Result<(), DiscordError>
{
	respond(cx, Command::Start).await
}

/// Show which Steam profile formats are understood.
#[poise::command(slash_command)]
pub(super) async fn help(cx: Context<'_>) -> Result<(), DiscordError>
{
	respond(cx, Command::Help).await
}

/// Look up a player's Dota 2 statistics.
#[poise::command(slash_command)]
pub(super) async fn stats(
	cx: Context<'_>,
	#[description = "SteamID, account ID, or Steam profile URL"] player: String,
) -> Result<(), DiscordError>
{
	respond(cx, Command::Lookup(player)).await
}

/// Show the currently most picked heroes.
#[poise::command(slash_command)]
pub(super) async fn meta(cx: Context<'_>) -> Result<(), DiscordError>
{
	respond(cx, Command::Meta).await
}

/// Ways to support the project.
#[poise::command(slash_command)]
pub(super) async fn support(cx: Context<'_>) -> Result<(), DiscordError>
{
	respond(cx, Command::Support).await
}

#[tracing::instrument(skip(cx), err)]
async fn respond(cx: Context<'_>, command: Command) -> Result<(), DiscordError>
{
	// these hit OpenDota, which can take longer than Discord's 3 second window
	if matches!(command, Command::Lookup(_) | Command::Meta) {
		cx.defer().await?;
	}

	let reply = cx.data().app.handle(command).await;

	cx.send(reply::create_reply(&reply)).await?;

	Ok(())
}
