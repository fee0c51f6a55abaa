use {serde::Deserialize, std::time::Duration};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SteamConfig
{
	/// Steam Web API key.
	///
	/// Only needed to resolve custom profile URLs (`steamcommunity.com/id/…`). If it is missing,
	/// that capability is disabled and everything else keeps working.
	pub api_key: Option<Box<str>>,

	/// How long to wait for the Steam Web API before giving up, in seconds.
	#[serde(deserialize_with = "super::deserialize_seconds")]
	pub timeout: Duration,
}

impl Default for SteamConfig
{
	fn default() -> Self
	{
		Self { api_key: None, timeout: Duration::from_secs(10) }
	}
}
