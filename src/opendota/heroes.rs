use {
	super::{Client, Result},
	crate::util::serde::null_as_default,
	serde::Deserialize,
	std::collections::HashMap,
};

/// One entry of `/heroes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero
{
	pub id: u32,

	#[serde(default, deserialize_with = "null_as_default")]
	pub localized_name: String,
}

/// Hero ID → display name.
#[derive(Debug, Default, Clone)]
pub struct HeroDirectory(HashMap<u32, String>);

/// One entry of `/heroStats`. Rates are percentages.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroStats
{
	#[serde(deserialize_with = "null_as_default")]
	pub localized_name: String,

	#[serde(deserialize_with = "null_as_default")]
	pub pick_rate: f64,

	#[serde(deserialize_with = "null_as_default")]
	pub win_rate: f64,
}

impl HeroDirectory
{
	pub fn name(&self, hero_id: u32) -> Option<&str>
	{
		self.0
			.get(&hero_id)
			.map(String::as_str)
			.filter(|name| !name.is_empty())
	}

	pub fn len(&self) -> usize
	{
		self.0.len()
	}

	pub fn is_empty(&self) -> bool
	{
		self.0.is_empty()
	}
}

impl FromIterator<Hero> for HeroDirectory
{
	fn from_iter<I>(heroes: I) -> Self
	where
		I: IntoIterator<Item = Hero>,
	{
		Self(heroes.into_iter().map(|hero| (hero.id, hero.localized_name)).collect())
	}
}

/// Fetches every hero's display name.
#[tracing::instrument(skip(api_client), err(level = "debug"))]
pub async fn get_heroes(api_client: &Client) -> Result<HeroDirectory>
{
	let heroes = api_client.get::<Vec<Hero>>(&["heroes"]).await?;

	debug!(count = heroes.len(), "fetched hero directory");

	Ok(heroes.into_iter().collect())
}

/// Fetches global pick and win rates for every hero.
#[tracing::instrument(skip(api_client), err(level = "debug"))]
pub async fn get_hero_stats(api_client: &Client) -> Result<Vec<HeroStats>>
{
	api_client.get(&["heroStats"]).await
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn directory_looks_up_names()
	{
		let directory = [
			Hero { id: 1, localized_name: "Anti-Mage".to_owned() },
			Hero { id: 2, localized_name: String::new() },
		]
		.into_iter()
		.collect::<HeroDirectory>();

		assert_eq!(directory.len(), 2);
		assert_eq!(directory.name(1), Some("Anti-Mage"));
		assert_eq!(directory.name(2), None);
		assert_eq!(directory.name(3), None);
	}

	#[test]
	fn deserializes_hero_stats_with_nulls()
	{
		let stats = serde_json::from_str::<Vec<HeroStats>>(
			r#"[
				{ "id": 1, "localized_name": "Anti-Mage", "pick_rate": 4.2, "win_rate": 48.9 },
				{ "id": 2, "localized_name": "Axe", "pick_rate": null }
			]"#,
		);

		let Ok(stats) = stats else {
			panic!("hero stats should deserialize");
		};

		assert_eq!(stats.len(), 2);
		assert_eq!(stats[1].pick_rate, 0.0);
		assert_eq!(stats[1].localized_name, "Axe");
	}
}
