use {
	super::{Client, Result, api::send_request},
	serde::{Deserialize, Serialize},
	steam_id::SteamId,
};

const URL: &str = "https://api.steampowered.com/ISteamUser/ResolveVanityURL/v0001";

/// The `success` value Steam uses for "found a match".
const SUCCESS: u8 = 1;

/// Resolves the custom part of a `steamcommunity.com/id/…` URL into a [`SteamId`].
///
/// Returns [`None`] if Steam does not know the name.
#[tracing::instrument(skip(api_client), ret(level = "debug"), err(level = "debug"))]
pub async fn resolve_vanity_url(api_client: &Client, vanity_name: &str) -> Result<Option<SteamId>>
{
	#[derive(Serialize)]
	struct Query<'a>
	{
		#[serde(rename = "key")]
		api_key: &'a str,

		#[serde(rename = "vanityurl")]
		vanity_name: &'a str,
	}

	let request = api_client
		.as_ref()
		.get(URL)
		.query(&Query { api_key: api_client.api_key(), vanity_name });

	send_request::<Response>(request).await.map(Response::into_steam_id)
}

#[derive(Debug, Deserialize)]
struct Response
{
	success: u8,

	#[serde(default, rename = "steamid")]
	steam_id: Option<SteamId>,
}

impl Response
{
	fn into_steam_id(self) -> Option<SteamId>
	{
		self.steam_id.filter(|_| self.success == SUCCESS)
	}
}
