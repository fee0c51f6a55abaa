//! Helper functions for [`serde`], for use with `#[serde(deserialize_with = "…")]`.
//!
//! OpenDota is liberal with `null`s and empty strings; these normalize them.
//!
//! [`serde`]: ::serde

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};

/// Deserializes `null` as `T::default()`.
///
/// Pair this with `#[serde(default)]` to also cover missing fields.
pub(crate) fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
	T: Default + Deserialize<'de>,
	D: Deserializer<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes a string via [`FromStr`], treating `null` and `""` as [`None`].
pub(crate) fn empty_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
	T: FromStr,
	T::Err: fmt::Display,
	D: Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer)?
		.filter(|value| !value.is_empty())
		.map(|value| value.parse::<T>().map_err(de::Error::custom))
		.transpose()
}

#[cfg(test)]
mod tests
{
	use serde::Deserialize;
	use url::Url;

	#[derive(Debug, Deserialize)]
	struct Object
	{
		#[serde(default, deserialize_with = "super::null_as_default")]
		count: u32,

		#[serde(default, deserialize_with = "super::empty_as_none")]
		url: Option<Url>,
	}

	#[test]
	fn null_and_missing_become_default()
	{
		let from_null = serde_json::from_str::<Object>(r#"{ "count": null, "url": null }"#);
		let from_missing = serde_json::from_str::<Object>("{}");

		assert!(matches!(from_null, Ok(Object { count: 0, url: None })));
		assert!(matches!(from_missing, Ok(Object { count: 0, url: None })));
	}

	#[test]
	fn empty_string_becomes_none()
	{
		let empty = serde_json::from_str::<Object>(r#"{ "url": "" }"#);
		let present = serde_json::from_str::<Object>(r#"{ "url": "https://example.org/a.png" }"#);

		assert!(matches!(empty, Ok(Object { url: None, .. })));
		assert!(matches!(present, Ok(Object { url: Some(_), .. })));
	}
}
