//! An in-memory [`StatsApi`] for tests.

use {
	super::StatsApi,
	crate::opendota::{
		ApiError,
		Hero,
		HeroDirectory,
		HeroStats,
		PlayerProfile,
		RecentMatch,
		Result,
		WinLoss,
	},
	bytes::Bytes,
	std::sync::atomic::{AtomicUsize, Ordering},
	steam_id::SteamId,
};

/// Answers every request with the configured result and counts how many requests were made.
#[derive(Debug)]
pub(crate) struct FakeApi
{
	pub(crate) player: Result<Option<PlayerProfile>>,
	pub(crate) win_loss: Result<WinLoss>,
	pub(crate) recent_matches: Result<Vec<RecentMatch>>,
	pub(crate) heroes: Result<HeroDirectory>,
	pub(crate) hero_stats: Result<Vec<HeroStats>>,
	pub(crate) calls: AtomicUsize,
}

pub(crate) fn player(name: &str, mmr_estimate: Option<f64>) -> PlayerProfile
{
	PlayerProfile { name: Some(name.to_owned()), avatar_url: None, mmr_estimate }
}

/// A failure that is neither a timeout nor a 404, like OpenDota answering with garbage.
pub(crate) fn upstream_error() -> ApiError
{
	let body = Bytes::from_static(b"<html>502 Bad Gateway</html>");
	let parsed = serde_json::from_slice::<serde_json::Value>(&body[..]);

	match parsed {
		Err(error) => ApiError::DeserializeResponse { error, body },
		Ok(value) => panic!("`{value}` should not be valid JSON"),
	}
}

impl FakeApi
{
	pub(crate) fn hero_directory() -> HeroDirectory
	{
		[(1, "Anti-Mage"), (2, "Axe"), (14, "Pudge")]
			.into_iter()
			.map(|(id, name)| Hero { id, localized_name: name.to_owned() })
			.collect()
	}

	pub(crate) fn calls(&self) -> usize
	{
		self.calls.load(Ordering::SeqCst)
	}

	/// Hands out a copy of `result`.
	///
	/// [`ApiError`] is not [`Clone`], so errors are replayed by kind: timeouts and 404s as
	/// themselves, everything else as [`upstream_error`].
	fn replay<T>(&self, result: &Result<T>) -> Result<T>
	where
		T: Clone,
	{
		self.calls.fetch_add(1, Ordering::SeqCst);

		match result {
			Ok(value) => Ok(value.clone()),
			Err(ApiError::Timeout) => Err(ApiError::Timeout),
			Err(ApiError::NotFound) => Err(ApiError::NotFound),
			Err(_) => Err(upstream_error()),
		}
	}
}

impl Default for FakeApi
{
	fn default() -> Self
	{
		Self {
			player: Ok(None),
			win_loss: Ok(WinLoss::default()),
			recent_matches: Ok(Vec::new()),
			heroes: Ok(HeroDirectory::default()),
			hero_stats: Ok(Vec::new()),
			calls: AtomicUsize::new(0),
		}
	}
}

impl StatsApi for FakeApi
{
	async fn player(&self, _: SteamId) -> Result<Option<PlayerProfile>>
	{
		self.replay(&self.player)
	}

	async fn win_loss(&self, _: SteamId) -> Result<WinLoss>
	{
		self.replay(&self.win_loss)
	}

	async fn recent_matches(&self, _: SteamId) -> Result<Vec<RecentMatch>>
	{
		self.replay(&self.recent_matches)
	}

	async fn heroes(&self) -> Result<HeroDirectory>
	{
		self.replay(&self.heroes)
	}

	async fn hero_stats(&self) -> Result<Vec<HeroStats>>
	{
		self.replay(&self.hero_stats)
	}
}
