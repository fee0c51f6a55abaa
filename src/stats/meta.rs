//! The "current meta" report: the most picked heroes right now.

use {
	super::StatsApi,
	crate::opendota::{ApiError, HeroStats},
	std::fmt,
};

/// How many heroes the report lists.
pub const TOP_HEROES: usize = 5;

/// Heroes sorted by pick rate, most popular first.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaReport
{
	pub heroes: Vec<HeroStats>,
}

/// Picks the [`TOP_HEROES`] most picked heroes with a pick rate strictly above
/// `min_pick_rate`.
///
/// If no hero clears the threshold, the threshold is ignored and the overall top
/// [`TOP_HEROES`] are returned instead, so the result is only empty if `heroes` is.
pub fn top_heroes(mut heroes: Vec<HeroStats>, min_pick_rate: f64) -> Vec<HeroStats>
{
	heroes.sort_by(|lhs, rhs| rhs.pick_rate.total_cmp(&lhs.pick_rate));

	let above_threshold = heroes
		.iter()
		.take_while(|hero| hero.pick_rate > min_pick_rate)
		.count();

	if above_threshold == 0 {
		debug!(min_pick_rate, "no hero above threshold, using overall top heroes");
		heroes.truncate(TOP_HEROES);
	} else {
		heroes.truncate(above_threshold.min(TOP_HEROES));
	}

	heroes
}

/// Fetches global hero stats and builds a [`MetaReport`] from them.
#[tracing::instrument(skip(api), err(level = "debug"))]
pub async fn fetch<S>(api: &S, min_pick_rate: f64) -> Result<MetaReport, ApiError>
where
	S: StatsApi,
{
	let heroes = api.hero_stats().await?;

	Ok(MetaReport { heroes: top_heroes(heroes, min_pick_rate) })
}

impl fmt::Display for MetaReport
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		writeln!(fmt, "🏆 Top {TOP_HEROES} popular heroes:")?;

		if self.heroes.is_empty() {
			return writeln!(fmt, "\nNo hero data available right now.");
		}

		for (rank, hero) in (1..).zip(&self.heroes) {
			writeln!(fmt)?;
			writeln!(fmt, "{rank}. {}", hero.localized_name)?;
			writeln!(fmt, "   📊 Pick rate: {:.1}%", hero.pick_rate)?;
			writeln!(fmt, "   🏆 Win rate: {:.1}%", hero.win_rate)?;
		}

		Ok(())
	}
}
