//! [OpenDota] API client.
//!
//! [OpenDota]: https://docs.opendota.com

pub use self::{
	api::{ApiError, Client, Result},
	heroes::{Hero, HeroDirectory, HeroStats, get_hero_stats, get_heroes},
	players::{
		PlayerProfile,
		RecentMatch,
		Side,
		WinLoss,
		get_player,
		get_recent_matches,
		get_win_loss,
	},
};
use {crate::stats::StatsApi, steam_id::SteamId};

mod api;
mod heroes;
mod players;

impl StatsApi for Client
{
	async fn player(&self, player_id: SteamId) -> Result<Option<PlayerProfile>>
	{
		get_player(self, player_id).await
	}

	async fn win_loss(&self, player_id: SteamId) -> Result<WinLoss>
	{
		get_win_loss(self, player_id).await
	}

	async fn recent_matches(&self, player_id: SteamId) -> Result<Vec<RecentMatch>>
	{
		get_recent_matches(self, player_id).await
	}

	async fn heroes(&self) -> Result<HeroDirectory>
	{
		get_heroes(self).await
	}

	async fn hero_stats(&self) -> Result<Vec<HeroStats>>
	{
		get_hero_stats(self).await
	}
}
