//! The transport-independent part of the bot.
//!
//! [`App`] takes a [`Command`] and produces a [`Reply`]. It never fails: every error ends up
//! as a message for the user.

use {
	crate::{
		command::Command,
		config::{Config, SupportLink},
		opendota,
		resolver::{self, ResolveError, ResolveVanity},
		stats::{self, ReportError, StatsApi},
		steam,
	},
	std::{error::Error, sync::Arc},
	url::Url,
};

mod messages;

#[derive(Debug, Display, Error, From)]
pub enum InitError
{
	#[display("failed to create OpenDota client")]
	OpenDota(opendota::ApiError),

	#[display("failed to create Steam client")]
	Steam(steam::ApiError),
}

/// What to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply
{
	pub text: String,

	/// An image to show alongside the text.
	pub avatar: Option<Url>,

	pub buttons: Option<Buttons>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Buttons
{
	/// The main menu (see [`MenuButton`]).
	///
	/// [`MenuButton`]: crate::command::MenuButton
	Menu,

	/// One link button per entry.
	Support(Vec<SupportLink>),
}

/// The bot's request handler.
///
/// Immutable after construction, so it can be shared freely between event handlers.
#[derive(Debug)]
pub struct App<S = opendota::Client, V = steam::Client>
{
	stats_api: S,

	/// [`None`] if no Steam API key was configured.
	vanity_resolver: Option<V>,

	min_pick_rate: f64,
	support_links: Vec<SupportLink>,
}

impl App
{
	/// Creates the HTTP clients described by `config`.
	pub fn new(config: &Config) -> Result<Self, InitError>
	{
		let opendota = opendota::Client::new(
			config.opendota.base_url.clone(),
			non_empty(config.opendota.api_key.as_deref()).map(Arc::from),
			config.opendota.timeout,
		)?;

		let steam = non_empty(config.steam.api_key.as_deref())
			.map(|api_key| steam::Client::new(api_key, config.steam.timeout))
			.transpose()?;

		if steam.is_none() {
			warn!("no Steam API key configured; custom profile URLs cannot be resolved");
		}

		Ok(Self::with_clients(
			opendota,
			steam,
			config.meta.min_pick_rate,
			config.support.links.clone(),
		))
	}
}

impl<S, V> App<S, V>
{
	pub fn with_clients(
		stats_api: S,
		vanity_resolver: Option<V>,
		min_pick_rate: f64,
		support_links: Vec<SupportLink>,
	) -> Self
	{
		Self { stats_api, vanity_resolver, min_pick_rate, support_links }
	}
}

impl<S, V> App<S, V>
where
	S: StatsApi + Sync,
	V: ResolveVanity + Sync,
{
	#[tracing::instrument(skip(self))]
	pub async fn handle(&self, command: Command) -> Reply
	{
		match command {
			Command::Start | Command::Help => Reply::with_menu(messages::WELCOME),
			Command::MyStats => Reply::text(messages::MY_STATS),
			Command::FindPlayer => Reply::text(messages::FIND_PLAYER),
			Command::Meta => self.meta().await,
			Command::Support => Reply {
				text: messages::SUPPORT.to_owned(),
				avatar: None,
				buttons: (!self.support_links.is_empty())
					.then(|| Buttons::Support(self.support_links.clone())),
			},
			Command::Lookup(input) => self.lookup(&input).await,
		}
	}

	/// Resolves `input` and builds the player's report.
	pub async fn lookup(&self, input: &str) -> Reply
	{
		let player_id = match resolver::resolve(input, self.vanity_resolver.as_ref()).await {
			Ok(player_id) => player_id,
			Err(error) => return resolve_error_reply(&error),
		};

		match stats::report::fetch(&self.stats_api, player_id).await {
			Ok(report) => Reply {
				text: report.to_string(),
				avatar: report.avatar_url().cloned(),
				buttons: None,
			},
			Err(ReportError::NotFound) => Reply::text(messages::PLAYER_NOT_FOUND),
			Err(ReportError::Timeout) => Reply::text(messages::STATS_TIMEOUT),
			Err(ReportError::Upstream(error)) => {
				error!(error = &error as &dyn Error, %player_id, "failed to fetch statistics");
				Reply::text(messages::STATS_FAILED)
			},
		}
	}

	pub async fn meta(&self) -> Reply
	{
		match stats::meta::fetch(&self.stats_api, self.min_pick_rate).await {
			Ok(report) => Reply::text(report.to_string()),
			Err(opendota::ApiError::Timeout) => Reply::text(messages::STATS_TIMEOUT),
			Err(error) => {
				error!(error = &error as &dyn Error, "failed to fetch hero stats");
				Reply::text(messages::META_FAILED)
			},
		}
	}
}

impl Reply
{
	pub fn text(text: impl Into<String>) -> Self
	{
		Self { text: text.into(), avatar: None, buttons: None }
	}

	pub fn with_menu(text: impl Into<String>) -> Self
	{
		Self { buttons: Some(Buttons::Menu), ..Self::text(text) }
	}
}

/// Blank keys (e.g. `STEAM_API_KEY=` in a `.env` file) count as not configured.
fn non_empty(api_key: Option<&str>) -> Option<&str>
{
	api_key.filter(|api_key| !api_key.trim().is_empty())
}

fn resolve_error_reply(error: &ResolveError) -> Reply
{
	match error {
		ResolveError::UnrecognizedFormat => Reply::text(messages::USAGE_HINT),
		ResolveError::NoCredential => Reply::text(messages::NO_STEAM_KEY),
		ResolveError::VanityNotFound { name } => Reply::text(messages::vanity_not_found(name)),
		ResolveError::VanityLookup(source) => {
			warn!(error = source as &dyn Error, "failed to resolve custom URL");
			Reply::text(messages::VANITY_LOOKUP_FAILED)
		},
	}
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		crate::{
			opendota::{HeroStats, RecentMatch, WinLoss},
			stats::testing::{FakeApi, player, upstream_error},
			time::Seconds,
		},
		steam_id::SteamId,
	};

	/// Resolves every custom URL to the same account.
	#[derive(Debug)]
	struct EveryoneIsFoo;

	impl ResolveVanity for EveryoneIsFoo
	{
		async fn resolve_vanity(&self, _: &str) -> steam::Result<Option<SteamId>>
		{
			Ok(Some(SteamId::from_u64(76561198012345678_u64)))
		}
	}

	fn app(stats_api: FakeApi) -> App<FakeApi, EveryoneIsFoo>
	{
		App::with_clients(stats_api, None, 1.0, Vec::new())
	}

	fn foo() -> FakeApi
	{
		FakeApi {
			player: Ok(Some(opendota::PlayerProfile {
				avatar_url: Url::parse("https://avatars.steamstatic.com/foo_full.jpg").ok(),
				..player("Foo", Some(4500.0))
			})),
			win_loss: Ok(WinLoss { wins: 10, losses: 5 }),
			recent_matches: Ok(vec![RecentMatch {
				hero_id: 1,
				kills: 5,
				deaths: 2,
				assists: 8,
				duration: Seconds::new(1800),
				player_slot: 0,
				radiant_win: true,
				..Default::default()
			}]),
			heroes: Ok(FakeApi::hero_directory()),
			..FakeApi::default()
		}
	}

	#[tokio::test]
	async fn end_to_end_lookup()
	{
		let reply = app(foo()).handle(Command::Lookup("76561198012345678".to_owned())).await;

		assert!(reply.text.contains("Foo"), "{}", reply.text);
		assert!(reply.text.contains("66.7%"), "{}", reply.text);
		assert!(reply.text.contains('✅'), "{}", reply.text);
		assert!(reply.text.contains("30:00"), "{}", reply.text);
		assert!(reply.avatar.is_some());
		assert_eq!(reply.buttons, None);
	}

	#[tokio::test]
	async fn unrecognized_input_gets_usage_hint()
	{
		let reply = app(foo()).handle(Command::Lookup("hello there".to_owned())).await;

		assert_eq!(reply.text, messages::USAGE_HINT);
	}

	#[tokio::test]
	async fn vanity_url_without_key()
	{
		let reply = app(foo())
			.handle(Command::Lookup("https://steamcommunity.com/id/foo".to_owned()))
			.await;

		assert_eq!(reply.text, messages::NO_STEAM_KEY);
	}

	#[tokio::test]
	async fn vanity_url_with_key()
	{
		let app = App::with_clients(foo(), Some(EveryoneIsFoo), 1.0, Vec::new());
		let reply = app.lookup("https://steamcommunity.com/id/foo").await;

		assert!(reply.text.contains("Foo"), "{}", reply.text);
	}

	#[tokio::test]
	async fn private_profile()
	{
		let reply = app(FakeApi::default()).lookup("12345678").await;

		assert_eq!(reply.text, messages::PLAYER_NOT_FOUND);
	}

	#[tokio::test]
	async fn generic_profile_failure_message()
	{
		let broken = FakeApi { player: Err(upstream_error()), ..FakeApi::default() };
		let reply = app(broken).lookup("76561198012345678").await;

		assert_eq!(reply.text, messages::STATS_FAILED);
	}

	#[tokio::test]
	async fn blank_steam_key_disables_vanity_urls()
	{
		let config = match Config::parse("[steam]\napi-key = \"\"") {
			Ok(config) => config,
			Err(err) => panic!("config should parse: {err:?}"),
		};

		let app = match App::new(&config) {
			Ok(app) => app,
			Err(err) => panic!("app should initialize: {err}"),
		};

		assert!(app.vanity_resolver.is_none());

		let reply = app.lookup("https://steamcommunity.com/id/foo").await;

		assert_eq!(reply.text, messages::NO_STEAM_KEY);
	}

	#[tokio::test]
	async fn timeouts_are_distinct_from_other_failures()
	{
		let timeout = FakeApi { player: Err(opendota::ApiError::Timeout), ..FakeApi::default() };
		let reply = app(timeout).lookup("12345678").await;

		assert_eq!(reply.text, messages::STATS_TIMEOUT);

		let timeout = FakeApi { hero_stats: Err(opendota::ApiError::Timeout), ..FakeApi::default() };
		let reply = app(timeout).handle(Command::Meta).await;

		assert_eq!(reply.text, messages::STATS_TIMEOUT);
	}

	#[tokio::test]
	async fn meta_failure()
	{
		let broken = FakeApi { hero_stats: Err(opendota::ApiError::NotFound), ..FakeApi::default() };
		let reply = app(broken).handle(Command::Meta).await;

		assert_eq!(reply.text, messages::META_FAILED);
	}

	#[tokio::test]
	async fn meta_falls_back_to_unfiltered_list()
	{
		let api = FakeApi {
			hero_stats: Ok(vec![HeroStats {
				localized_name: "Io".to_owned(),
				pick_rate: 0.3,
				win_rate: 48.0,
			}]),
			..FakeApi::default()
		};

		let reply = app(api).handle(Command::Meta).await;

		assert!(reply.text.contains("1. Io"), "{}", reply.text);
	}

	#[tokio::test]
	async fn start_shows_menu()
	{
		let reply = app(foo()).handle(Command::Start).await;

		assert_eq!(reply.buttons, Some(Buttons::Menu));
	}

	#[tokio::test]
	async fn support_links_become_buttons()
	{
		let link = SupportLink {
			label: "Donate".into(),
			url: Url::parse("https://example.org/donate").unwrap_or_else(|err| panic!("{err}")),
		};

		let with_links =
			App::<_, EveryoneIsFoo>::with_clients(foo(), None, 1.0, vec![link.clone()]);
		let reply = with_links.handle(Command::Support).await;

		assert_eq!(reply.buttons, Some(Buttons::Support(vec![link])));
		assert_eq!(app(foo()).handle(Command::Support).await.buttons, None);
	}
}
