use {
	bytes::Bytes,
	reqwest::RequestBuilder,
	serde::Deserialize,
	std::{fmt, sync::Arc, time::Duration},
};

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Display, Error, From)]
#[display("Steam API error: {_variant}")]
pub enum ApiError
{
	#[display("request timed out")]
	Timeout,

	#[display("failed to make http request")]
	Http(reqwest::Error),

	#[display("failed to deserialize response from Steam")]
	#[from(ignore)]
	DeserializeResponse
	{
		#[error(source)]
		error: serde_json::Error,
		body: Bytes,
	},
}

/// An authenticated Steam Web API client.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Client
{
	http_client: reqwest::Client,

	#[debug(skip)]
	api_key: Arc<str>,
}

impl Client
{
	/// Creates a client whose requests give up after `timeout`.
	pub fn new(api_key: impl Into<Arc<str>>, timeout: Duration) -> Result<Self>
	{
		let http_client = reqwest::Client::builder().timeout(timeout).build()?;

		Ok(Self { http_client, api_key: api_key.into() })
	}

	pub(super) fn api_key(&self) -> &str
	{
		&self.api_key
	}
}

impl AsRef<reqwest::Client> for Client
{
	fn as_ref(&self) -> &reqwest::Client
	{
		&self.http_client
	}
}

impl ApiError
{
	/// Classifies a transport error, singling out timeouts.
	fn from_reqwest(error: reqwest::Error) -> Self
	{
		if error.is_timeout() { Self::Timeout } else { Self::Http(error) }
	}
}

/// Sends `request` and unwraps the `{ "response": … }` envelope every Steam endpoint uses.
#[tracing::instrument(level = "debug", ret(level = "debug"), err(Debug, level = "debug"))]
pub(super) async fn send_request<T>(request: RequestBuilder) -> Result<T>
where
	T: fmt::Debug + for<'de> Deserialize<'de>,
{
	#[derive(Debug, serde::Deserialize)]
	struct ApiResponse<T>
	{
		response: T,
	}

	let response = request
		.send()
		.await
		.and_then(reqwest::Response::error_for_status)
		.map_err(ApiError::from_reqwest)?;

	let body = response.bytes().await.map_err(ApiError::from_reqwest)?;

	serde_json::from_slice(&body[..])
		.map(|ApiResponse { response }| response)
		.map_err(|error| ApiError::DeserializeResponse { error, body })
}
