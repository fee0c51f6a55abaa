//! Turning OpenDota data into reports.
//!
//! Everything in here is generic over [`StatsApi`], so the report logic never sees an HTTP
//! client and can be exercised against canned data.

use {
	crate::opendota::{HeroDirectory, HeroStats, PlayerProfile, RecentMatch, Result, WinLoss},
	steam_id::SteamId,
};

pub mod meta;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;

pub use self::{
	meta::{MetaReport, top_heroes},
	report::{Report, ReportError},
};

/// The subset of the OpenDota API the reports are built from.
pub trait StatsApi
{
	/// Returns [`None`] if the player does not exist or their profile is private.
	fn player(
		&self,
		player_id: SteamId,
	) -> impl Future<Output = Result<Option<PlayerProfile>>> + Send;

	fn win_loss(&self, player_id: SteamId) -> impl Future<Output = Result<WinLoss>> + Send;

	/// Most recent matches first.
	fn recent_matches(
		&self,
		player_id: SteamId,
	) -> impl Future<Output = Result<Vec<RecentMatch>>> + Send;

	fn heroes(&self) -> impl Future<Output = Result<HeroDirectory>> + Send;

	fn hero_stats(&self) -> impl Future<Output = Result<Vec<HeroStats>>> + Send;
}
