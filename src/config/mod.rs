//! Configuration for the bot.
//!
//! Everything is read from a single TOML file (see the `dotastats.example.toml` file in the root
//! of the repository). Secrets can additionally be supplied through the environment, which the
//! binary merges in before anything is constructed.

#![allow(
	missing_copy_implementations,
	reason = "configs won't be copied around"
)]

mod meta;
mod opendota;
mod runtime;
mod steam;
mod support;
pub mod tracing;

use std::{fs, path::Path, time::Duration};

use color_eyre::{
	Section,
	eyre::{self, WrapErr},
};
use serde::{Deserialize, Deserializer};

pub use self::{
	meta::MetaConfig,
	opendota::OpenDotaConfig,
	runtime::RuntimeConfig,
	steam::SteamConfig,
	support::{SupportConfig, SupportLink},
	tracing::TracingConfig,
};
use crate::discord;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub runtime: RuntimeConfig,
	pub tracing: TracingConfig,
	pub discord: discord::Config,
	pub steam: SteamConfig,
	pub opendota: OpenDotaConfig,
	pub meta: MetaConfig,
	pub support: SupportConfig,
}

impl Config
{
	pub fn load_from_file(path: impl AsRef<Path>) -> eyre::Result<Self>
	{
		let file = fs::read_to_string(path.as_ref())
			.wrap_err_with(|| format!("failed to read configuration file at {:?}", path.as_ref()))
			.suggestion("create the file or run with `--config` to specify an alternative path")?;

		Self::parse(&file)
	}

	pub fn parse(file: &str) -> eyre::Result<Self>
	{
		toml::from_str(file).wrap_err("failed to parse configuration file")
	}
}

/// Deserializes a whole number of seconds into a [`Duration`].
fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	u64::deserialize(deserializer).map(Duration::from_secs)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn empty_file_uses_defaults()
	{
		let config = Config::parse("");

		assert!(matches!(config, Ok(ref config) if config.discord.token.is_none()));
		assert!(matches!(config, Ok(ref config) if config.steam.api_key.is_none()));
		assert!(matches!(
			config,
			Ok(ref config) if config.opendota.timeout == Duration::from_secs(5)
		));
		assert!(matches!(
			config,
			Ok(ref config) if config.steam.timeout == Duration::from_secs(10)
		));
		assert!(matches!(config, Ok(ref config) if config.meta.min_pick_rate == 1.0));
	}

	#[test]
	fn parses_full_file()
	{
		let config = match Config::parse(
			r#"
			[tracing]
			enable = true
			filters = ["dotastats=debug"]

			[tracing.stderr]
			enable = true
			ansi = false

			[discord]
			token = "secret"
			guild-id = 1234

			[steam]
			api-key = "steam-secret"
			timeout = 3

			[opendota]
			base-url = "https://opendota.example.org/api"
			timeout = 7

			[meta]
			min-pick-rate = 0.5

			[[support.links]]
			label = "Donate"
			url = "https://example.org/donate"
			"#,
		) {
			Ok(config) => config,
			Err(err) => panic!("config should parse: {err:?}"),
		};

		assert_eq!(config.discord.token.as_ref().map(|token| token.as_str()), Some("secret"));
		assert_eq!(config.discord.guild_id.map(|guild_id| guild_id.get()), Some(1234));
		assert_eq!(config.steam.api_key.as_deref(), Some("steam-secret"));
		assert_eq!(config.steam.timeout, Duration::from_secs(3));
		assert_eq!(config.opendota.base_url.as_str(), "https://opendota.example.org/api");
		assert_eq!(config.opendota.timeout, Duration::from_secs(7));
		assert!((config.meta.min_pick_rate - 0.5).abs() < f64::EPSILON);
		assert_eq!(config.support.links.len(), 1);
		assert_eq!(config.tracing.filters.len(), 1);
	}

	#[test]
	fn rejects_unknown_fields()
	{
		assert!(Config::parse("[steam]\napi_key = \"snake case\"").is_err());
	}
}
