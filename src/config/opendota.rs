use {serde::Deserialize, std::time::Duration, url::Url};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct OpenDotaConfig
{
	/// Base URL every endpoint path is appended to.
	#[debug("{:?}", base_url.as_str())]
	pub base_url: Url,

	/// Optional API key, sent as the `api_key` query parameter.
	pub api_key: Option<Box<str>>,

	/// How long to wait for OpenDota before giving up, in seconds.
	#[serde(deserialize_with = "super::deserialize_seconds")]
	pub timeout: Duration,
}

impl Default for OpenDotaConfig
{
	fn default() -> Self
	{
		Self {
			base_url: default_base_url(),
			api_key: None,
			timeout: Duration::from_secs(5),
		}
	}
}

fn default_base_url() -> Url
{
	Url::parse("https://api.opendota.com/api").unwrap_or_else(|err| {
		panic!("hard-coded OpenDota URL should be valid: {err}");
	})
}
