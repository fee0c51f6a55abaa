use {
	super::{ApiError, Client, Result},
	crate::{time::Seconds, util::serde::{empty_as_none, null_as_default}},
	serde::Deserialize,
	steam_id::SteamId,
	url::Url,
};

/// Player slots below this value are on the Radiant side, the rest are on Dire.
const FIRST_DIRE_SLOT: u8 = 128;

/// The public part of a player's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile
{
	/// Steam persona name.
	pub name: Option<String>,

	#[debug("{:?}", avatar_url.as_ref().map(Url::as_str))]
	pub avatar_url: Option<Url>,

	/// OpenDota's MMR estimate, if it has one.
	pub mmr_estimate: Option<f64>,
}

/// Lifetime win/loss counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WinLoss
{
	#[serde(rename = "win", default, deserialize_with = "null_as_default")]
	pub wins: u32,

	#[serde(rename = "lose", default, deserialize_with = "null_as_default")]
	pub losses: u32,
}

/// The team a player was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side
{
	Radiant,
	Dire,
}

/// One entry of `/players/{id}/recentMatches`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecentMatch
{
	#[serde(deserialize_with = "null_as_default")]
	pub match_id: u64,

	#[serde(deserialize_with = "null_as_default")]
	pub hero_id: u32,

	#[serde(deserialize_with = "null_as_default")]
	pub kills: u32,

	#[serde(deserialize_with = "null_as_default")]
	pub deaths: u32,

	#[serde(deserialize_with = "null_as_default")]
	pub assists: u32,

	#[serde(deserialize_with = "null_as_default")]
	pub duration: Seconds,

	#[serde(deserialize_with = "null_as_default")]
	pub player_slot: u8,

	#[serde(deserialize_with = "null_as_default")]
	pub radiant_win: bool,
}

impl WinLoss
{
	/// Percentage of games won, `0.0` if no games were played.
	pub fn win_rate(self) -> f64
	{
		let total = f64::from(self.wins) + f64::from(self.losses);

		if total == 0.0 {
			return 0.0;
		}

		f64::from(self.wins) / total * 100.0
	}
}

impl Side
{
	pub const fn from_player_slot(player_slot: u8) -> Self
	{
		if player_slot < FIRST_DIRE_SLOT { Self::Radiant } else { Self::Dire }
	}
}

impl RecentMatch
{
	pub const fn side(&self) -> Side
	{
		Side::from_player_slot(self.player_slot)
	}

	/// Whether the player won this match.
	///
	/// OpenDota only records whether Radiant won, so Dire players won exactly when that
	/// flag is `false`.
	pub const fn won(&self) -> bool
	{
		match self.side() {
			Side::Radiant => self.radiant_win,
			Side::Dire => !self.radiant_win,
		}
	}
}

/// Fetches a player's profile.
///
/// Returns [`None`] if OpenDota does not know the account or the profile is private.
#[tracing::instrument(skip(api_client), ret(level = "debug"), err(level = "debug"))]
pub async fn get_player(api_client: &Client, player_id: SteamId) -> Result<Option<PlayerProfile>>
{
	let player_id = player_id.to_string();
	let PlayerObject { profile, mmr_estimate } =
		match api_client.get::<PlayerObject>(&["players", player_id.as_str()]).await {
			Ok(player) => player,
			Err(ApiError::NotFound) => return Ok(None),
			Err(error) => return Err(error),
		};

	Ok(profile.map(|ProfileObject { personaname, avatarfull }| PlayerProfile {
		name: personaname.filter(|name| !name.is_empty()),
		avatar_url: avatarfull,
		mmr_estimate: mmr_estimate.and_then(|MmrEstimate { estimate }| estimate),
	}))
}

/// Fetches a player's lifetime win/loss counts.
#[tracing::instrument(skip(api_client), ret(level = "debug"), err(level = "debug"))]
pub async fn get_win_loss(api_client: &Client, player_id: SteamId) -> Result<WinLoss>
{
	let player_id = player_id.to_string();

	api_client.get(&["players", player_id.as_str(), "wl"]).await
}

/// Fetches a player's most recent matches, newest first.
#[tracing::instrument(skip(api_client), err(level = "debug"))]
pub async fn get_recent_matches(api_client: &Client, player_id: SteamId) -> Result<Vec<RecentMatch>>
{
	let player_id = player_id.to_string();

	api_client.get(&["players", player_id.as_str(), "recentMatches"]).await
}

#[derive(Debug, Deserialize)]
struct PlayerObject
{
	#[serde(default)]
	profile: Option<ProfileObject>,

	#[serde(default)]
	mmr_estimate: Option<MmrEstimate>,
}

#[derive(Debug, Deserialize)]
struct ProfileObject
{
	#[serde(default)]
	personaname: Option<String>,

	#[serde(default, deserialize_with = "empty_as_none")]
	#[debug("{:?}", avatarfull.as_ref().map(Url::as_str))]
	avatarfull: Option<Url>,
}

#[derive(Debug, Deserialize)]
struct MmrEstimate
{
	#[serde(default)]
	estimate: Option<f64>,
}
