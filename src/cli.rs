//! CLI argument handling.

use std::path::PathBuf;

use clap::Parser;
use dotastats::{Config, discord::Token};

/// A Discord bot that looks up Dota 2 statistics for Steam accounts.
///
/// Everything can be configured through a TOML file; secrets can also be passed through the
/// environment (or a `.env` file).
#[derive(Debug, Parser)]
pub(crate) struct Args
{
	/// Path to the configuration file.
	///
	/// Defaults to `./dotastats.toml` if that file exists.
	#[arg(long = "config")]
	pub config_path: Option<PathBuf>,

	/// Load environment variables from this file instead of `./.env`.
	#[arg(long)]
	pub env_file: Option<PathBuf>,

	/// The Discord bot token.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
	pub discord_token: Option<String>,

	/// Steam Web API key, used to resolve custom profile URLs.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
	pub steam_api_key: Option<String>,
}

impl Args
{
	/// Applies any overrides specified as CLI flags or environment variables to `config`.
	pub(crate) fn apply_to_config(self, config: &mut Config)
	{
		if let Some(token) = self.discord_token {
			config.discord.token = Some(Token::from(token));
		}

		if let Some(api_key) = self.steam_api_key {
			config.steam.api_key = Some(api_key.into_boxed_str());
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn flags_override_config()
	{
		let args = Args::parse_from([
			"dotastats",
			"--discord-token",
			"from-cli",
			"--steam-api-key",
			"steam-from-cli",
		]);

		let mut config = Config::default();
		args.apply_to_config(&mut config);

		assert_eq!(config.discord.token.as_ref().map(Token::as_str), Some("from-cli"));
		assert_eq!(config.steam.api_key.as_deref(), Some("steam-from-cli"));
	}
}
