use std::sync::Arc;

use serde::Deserialize;

/// A Discord bot token.
#[derive(Debug, Clone, Deserialize)]
#[debug("Token(*****)")]
pub struct Token(Arc<str>);

impl Token
{
	pub fn as_str(&self) -> &str
	{
		&self.0
	}
}

impl From<String> for Token
{
	fn from(token: String) -> Self
	{
		Self(token.into())
	}
}
