use {serde::Deserialize, url::Url};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SupportConfig
{
	/// Links shown as buttons under the support message.
	pub links: Vec<SupportLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SupportLink
{
	pub label: Box<str>,

	#[debug("{:?}", url.as_str())]
	pub url: Url,
}
