use {
	crate::SteamId,
	serde::{
		de::{self, Deserialize, Deserializer},
		ser::{Serialize, Serializer},
	},
	std::fmt,
};

/// Serializes as a stringified SteamID64, which is what the Steam Web API returns.
impl Serialize for SteamId
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_u64_stringified(serializer)
	}
}

/// Accepts integers as well as any string [`SteamId`]'s `FromStr` implementation understands.
impl<'de> Deserialize<'de> for SteamId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct CatchallVisitor;

		impl de::Visitor<'_> for CatchallVisitor
		{
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
			{
				fmt.write_str("a SteamID")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				Ok(SteamId::from_u64(value))
			}

			fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				u64::try_from(value)
					.map(SteamId::from_u64)
					.map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				value.parse::<SteamId>().map_err(E::custom)
			}
		}

		deserializer.deserialize_any(CatchallVisitor)
	}
}

impl SteamId
{
	/// Serializes using the SteamID64 format.
	pub fn serialize_u64<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_u64().serialize(serializer)
	}

	/// Serializes using a stringified version of the SteamID64 format.
	pub fn serialize_u64_stringified<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{}", self.as_u64()).serialize(serializer)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn deserializes_strings_and_integers()
	{
		let from_str = serde_json::from_str::<SteamId>(r#""76561198282622073""#);
		let from_int = serde_json::from_str::<SteamId>("76561198282622073");

		assert!(matches!(from_str, Ok(id) if id.as_u64() == 76561198282622073_u64));
		assert!(matches!(from_int, Ok(id) if id.as_u64() == 76561198282622073_u64));
	}

	#[test]
	fn serializes_as_string()
	{
		let json = serde_json::to_string(&SteamId::from_u64(76561198282622073_u64));

		assert!(matches!(json.as_deref(), Ok(r#""76561198282622073""#)));
	}
}
