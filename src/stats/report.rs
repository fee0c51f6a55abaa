//! The per-player report.

use {
	super::StatsApi,
	crate::{
		opendota::{ApiError, HeroDirectory, PlayerProfile, RecentMatch, WinLoss},
		time::Seconds,
	},
	std::{error::Error, fmt},
	steam_id::SteamId,
	url::Url,
};

/// How many recent matches end up in a report.
pub const MAX_MATCHES: usize = 5;

const SEPARATOR: &str = "----------------------------";

#[derive(Debug, Display, Error)]
pub enum ReportError
{
	#[display("player not found or profile is private")]
	NotFound,

	#[display("stats service timed out")]
	Timeout,

	#[display("failed to fetch player statistics")]
	Upstream(ApiError),
}

/// Everything shown for a single player.
///
/// The [`Display`] implementation renders the text that is sent back to the user.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone)]
pub struct Report
{
	pub player_id: SteamId,
	pub profile: PlayerProfile,
	pub win_loss: WinLoss,
	pub matches: Vec<MatchLine>,
}

/// A single recent match, with the outcome already derived and the hero name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLine
{
	pub won: bool,
	pub hero: String,
	pub kills: u32,
	pub deaths: u32,
	pub assists: u32,
	pub duration: Seconds,
}

impl From<ApiError> for ReportError
{
	fn from(error: ApiError) -> Self
	{
		match error {
			ApiError::Timeout => Self::Timeout,
			ApiError::NotFound => Self::NotFound,
			error => Self::Upstream(error),
		}
	}
}

impl Report
{
	pub fn avatar_url(&self) -> Option<&Url>
	{
		self.profile.avatar_url.as_ref()
	}
}

impl MatchLine
{
	fn new(game: &RecentMatch, heroes: &HeroDirectory) -> Self
	{
		let hero = heroes
			.name(game.hero_id)
			.map_or_else(|| format!("Hero {}", game.hero_id), ToOwned::to_owned);

		Self {
			won: game.won(),
			hero,
			kills: game.kills,
			deaths: game.deaths,
			assists: game.assists,
			duration: game.duration,
		}
	}
}

/// Fetches everything needed for a player's [`Report`].
///
/// Only the profile is essential: if it is missing the report is aborted with
/// [`ReportError::NotFound`] before anything else is requested. Failures fetching the
/// win/loss counts, recent matches, or hero names are logged and replaced with empty data.
/// A timeout on any request aborts the report.
#[tracing::instrument(skip(api), err(level = "debug"))]
pub async fn fetch<S>(api: &S, player_id: SteamId) -> Result<Report, ReportError>
where
	S: StatsApi,
{
	let profile = api.player(player_id).await?.ok_or(ReportError::NotFound)?;

	let win_loss = or_default(api.win_loss(player_id).await, "win/loss counts")?;
	let mut recent_matches =
		or_default(api.recent_matches(player_id).await, "recent matches")?;

	recent_matches.truncate(MAX_MATCHES);

	let heroes = if recent_matches.is_empty() {
		HeroDirectory::default()
	} else {
		or_default(api.heroes().await, "hero directory")?
	};

	let matches = recent_matches
		.iter()
		.map(|game| MatchLine::new(game, &heroes))
		.collect();

	Ok(Report { player_id, profile, win_loss, matches })
}

/// Swallows non-essential failures, except for timeouts.
fn or_default<T>(result: Result<T, ApiError>, what: &'static str) -> Result<T, ReportError>
where
	T: Default,
{
	match result {
		Ok(value) => Ok(value),
		Err(ApiError::Timeout) => Err(ReportError::Timeout),
		Err(error) => {
			warn!(error = &error as &dyn Error, what, "falling back to empty data");
			Ok(T::default())
		},
	}
}

impl fmt::Display for Report
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let name = self.profile.name.as_deref().unwrap_or("Unknown");
		let WinLoss { wins, losses } = self.win_loss;

		writeln!(fmt, "👤 Player: {name}")?;

		match self.profile.mmr_estimate {
			Some(mmr) => writeln!(fmt, "🎯 Estimated MMR: {mmr:.0}")?,
			None => writeln!(fmt, "🎯 Estimated MMR: unknown")?,
		}

		writeln!(fmt)?;
		writeln!(fmt, "📊 Statistics:")?;
		writeln!(fmt, "🔥 Win rate: {:.1}% ({wins}W - {losses}L)", self.win_loss.win_rate())?;

		if self.matches.is_empty() {
			return Ok(());
		}

		writeln!(fmt)?;
		writeln!(fmt, "🎮 Last {} games:", self.matches.len())?;

		for (idx, line) in self.matches.iter().enumerate() {
			if idx > 0 {
				writeln!(fmt, "{SEPARATOR}")?;
			}

			writeln!(fmt, "{line}")?;
		}

		Ok(())
	}
}

impl fmt::Display for MatchLine
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let glyph = if self.won { "✅" } else { "❌" };

		writeln!(fmt, "{glyph} {}", self.hero)?;
		write!(
			fmt,
			"   📊 KDA: {}/{}/{} | 🕒 {}",
			self.kills, self.deaths, self.assists, self.duration,
		)
	}
}
