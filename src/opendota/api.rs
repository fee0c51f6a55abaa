use {
	bytes::Bytes,
	reqwest::{RequestBuilder, StatusCode},
	serde::Deserialize,
	std::{fmt, sync::Arc, time::Duration},
	url::Url,
};

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Display, Error, From)]
#[display("OpenDota API error: {_variant}")]
pub enum ApiError
{
	#[display("request timed out")]
	Timeout,

	#[display("resource not found")]
	NotFound,

	#[display("base URL `{base_url}` cannot have path segments")]
	#[from(ignore)]
	InvalidBaseUrl
	{
		base_url: Url,
	},

	#[display("failed to make http request")]
	Http(reqwest::Error),

	#[display("failed to deserialize response from OpenDota")]
	#[from(ignore)]
	DeserializeResponse
	{
		#[error(source)]
		error: serde_json::Error,
		body: Bytes,
	},
}

/// An OpenDota API client.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Client
{
	http_client: reqwest::Client,

	#[debug("{:?}", base_url.as_str())]
	base_url: Url,

	#[debug(skip)]
	api_key: Option<Arc<str>>,
}

impl Client
{
	/// Creates a client whose requests give up after `timeout`.
	///
	/// Endpoint paths are appended to `base_url`, so it should point at the API root
	/// (e.g. `https://api.opendota.com/api`).
	pub fn new(base_url: Url, api_key: Option<Arc<str>>, timeout: Duration) -> Result<Self>
	{
		if base_url.cannot_be_a_base() {
			return Err(ApiError::InvalidBaseUrl { base_url });
		}

		let http_client = reqwest::Client::builder().timeout(timeout).build()?;

		Ok(Self { http_client, base_url, api_key })
	}

	/// Builds the URL for the endpoint at `base_url/segments…`.
	pub(super) fn endpoint(&self, segments: &[&str]) -> Url
	{
		let mut url = self.base_url.clone();

		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}

		url
	}

	/// Sends a `GET` request to the endpoint at `segments` and deserializes the response.
	pub(super) async fn get<T>(&self, segments: &[&str]) -> Result<T>
	where
		T: fmt::Debug + for<'de> Deserialize<'de>,
	{
		let mut request = self.http_client.get(self.endpoint(segments));

		if let Some(api_key) = self.api_key.as_deref() {
			request = request.query(&[("api_key", api_key)]);
		}

		send_request(request).await
	}
}

impl ApiError
{
	/// Classifies a transport error, singling out timeouts and 404s.
	fn from_reqwest(error: reqwest::Error) -> Self
	{
		if error.is_timeout() {
			Self::Timeout
		} else if error.status() == Some(StatusCode::NOT_FOUND) {
			Self::NotFound
		} else {
			Self::Http(error)
		}
	}
}

#[tracing::instrument(level = "debug", ret(level = "trace"), err(Debug, level = "debug"))]
async fn send_request<T>(request: RequestBuilder) -> Result<T>
where
	T: fmt::Debug + for<'de> Deserialize<'de>,
{
	let response = request
		.send()
		.await
		.and_then(reqwest::Response::error_for_status)
		.map_err(ApiError::from_reqwest)?;

	let body = response.bytes().await.map_err(ApiError::from_reqwest)?;

	serde_json::from_slice(&body[..]).map_err(|error| ApiError::DeserializeResponse { error, body })
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn client(base_url: &str) -> Client
	{
		let base_url = Url::parse(base_url).unwrap_or_else(|err| panic!("{err}"));

		Client::new(base_url, None, Duration::from_secs(5)).unwrap_or_else(|err| panic!("{err}"))
	}

	#[test]
	fn endpoint_appends_segments()
	{
		let client = client("https://api.opendota.com/api");
		let url = client.endpoint(&["players", "76561198012345678", "wl"]);

		assert_eq!(url.as_str(), "https://api.opendota.com/api/players/76561198012345678/wl");
	}

	#[test]
	fn endpoint_handles_trailing_slash()
	{
		let client = client("https://api.opendota.com/api/");
		let url = client.endpoint(&["heroStats"]);

		assert_eq!(url.as_str(), "https://api.opendota.com/api/heroStats");
	}

	#[test]
	fn rejects_unusable_base_url()
	{
		let base_url = Url::parse("mailto:someone@example.org").unwrap_or_else(|err| panic!("{err}"));

		assert!(matches!(
			Client::new(base_url, None, Duration::from_secs(5)),
			Err(ApiError::InvalidBaseUrl { .. }),
		));
	}
}
