//! A 64-bit [SteamID] and the textual forms players tend to paste into chat.
//!
//! The canonical form is the 17-digit SteamID64. Everything else (32-bit account IDs,
//! `STEAM_X:Y:Z`, `[U:1:N]`) is converted into it through [`ACCOUNT_ID_OFFSET`].
//!
//! [SteamID]: https://developer.valvesoftware.com/wiki/SteamID

#[macro_use(Display, From, Error)]
extern crate derive_more as _;

pub use self::error::{ParseSteam2IdError, ParseSteam3IdError, ParseSteamIdError};
use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

mod error;

#[cfg(feature = "serde")]
mod serde_impls;

/// The difference between a SteamID64 and the 32-bit account ID of the same account.
pub const ACCOUNT_ID_OFFSET: u64 = 76561197960265728_u64;

/// Number of decimal digits in a canonical SteamID64.
pub const STEAM_ID64_DIGITS: usize = 17;

/// A [SteamID] in its canonical 64-bit form.
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId
{
	/// Wraps a raw SteamID64.
	///
	/// No range checks are performed; upstream services are the authority on whether an
	/// account actually exists.
	pub const fn from_u64(value: u64) -> Self
	{
		Self(value)
	}

	/// Converts a 32-bit account ID into a SteamID64 by adding [`ACCOUNT_ID_OFFSET`].
	///
	/// Returns [`None`] if the addition overflows.
	pub const fn from_account_id(account_id: u64) -> Option<Self>
	{
		match account_id.checked_add(ACCOUNT_ID_OFFSET) {
			Some(value) => Some(Self(value)),
			None => None,
		}
	}

	/// Returns the 64-bit representation of this [`SteamId`].
	pub const fn as_u64(&self) -> u64
	{
		self.0
	}

	/// Returns the 32-bit account ID, if this SteamID lies above [`ACCOUNT_ID_OFFSET`].
	pub const fn account_id(&self) -> Option<u64>
	{
		self.0.checked_sub(ACCOUNT_ID_OFFSET)
	}

	/// Parses a string assuming the Steam2ID format (`STEAM_X:Y:Z`).
	///
	/// The `X` (universe) segment is validated but otherwise ignored, as every public
	/// account lives in universe 1 regardless of what older games printed.
	pub fn parse_id2(input: &str) -> Result<Self, ParseSteam2IdError>
	{
		let mut segments = input
			.strip_prefix("STEAM_")
			.ok_or(ParseSteam2IdError::MissingPrefix)?
			.splitn(3, ':');

		match segments.next() {
			Some("0" | "1") => {},
			Some("") | None => return Err(ParseSteam2IdError::MissingX),
			Some(_) => return Err(ParseSteam2IdError::InvalidX),
		}

		let y = match segments.next() {
			Some("0") => 0_u64,
			Some("1") => 1_u64,
			Some("") | None => return Err(ParseSteam2IdError::MissingY),
			Some(_) => return Err(ParseSteam2IdError::InvalidY),
		};

		let z = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam2IdError::MissingZ)?
			.parse::<u32>()?;

		Self::from_account_id((u64::from(z) * 2) + y).ok_or(ParseSteam2IdError::OutOfRange)
	}

	/// Parses a string assuming the Steam3ID format (`U:1:N`), optionally enclosed in `[]`.
	pub fn parse_id3(input: &str) -> Result<Self, ParseSteam3IdError>
	{
		let input = match (input.strip_prefix('['), input.ends_with(']')) {
			(Some(inner), true) => &inner[..inner.len() - 1],
			(None, false) => input,
			(Some(_), false) | (None, true) => {
				return Err(ParseSteam3IdError::InconsistentBrackets);
			},
		};

		let mut segments = input.splitn(3, ':');

		if segments.next() != Some("U") {
			return Err(ParseSteam3IdError::MissingAccountType);
		}

		if segments.next() != Some("1") {
			return Err(ParseSteam3IdError::MissingUniverse);
		}

		let account_id = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam3IdError::MissingAccountId)?
			.parse::<u32>()?;

		Self::from_account_id(u64::from(account_id)).ok_or(ParseSteam3IdError::OutOfRange)
	}
}

/// `{}` prints the SteamID64, `{:#}` prints the Steam3ID (`[U:1:N]`).
impl fmt::Display for SteamId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		if fmt.alternate() {
			match self.account_id() {
				Some(account_id) => write!(fmt, "[U:1:{account_id}]"),
				None => write!(fmt, "{}", self.0),
			}
		} else {
			write!(fmt, "{}", self.0)
		}
	}
}

impl Borrow<u64> for SteamId
{
	fn borrow(&self) -> &u64
	{
		&self.0
	}
}

impl AsRef<u64> for SteamId
{
	fn as_ref(&self) -> &u64
	{
		self.borrow()
	}
}

impl Deref for SteamId
{
	type Target = u64;

	fn deref(&self) -> &Self::Target
	{
		self.borrow()
	}
}

impl From<u64> for SteamId
{
	fn from(value: u64) -> Self
	{
		Self::from_u64(value)
	}
}

impl From<SteamId> for u64
{
	fn from(steam_id: SteamId) -> Self
	{
		steam_id.as_u64()
	}
}

impl FromStr for SteamId
{
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		if value.starts_with("STEAM_") {
			return Ok(Self::parse_id2(value)?);
		}

		if value.starts_with("[U:") || value.starts_with("U:") {
			return Ok(Self::parse_id3(value)?);
		}

		if !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit()) {
			return value
				.parse::<u64>()
				.map(Self::from_u64)
				.map_err(|_| ParseSteamIdError::OutOfRange);
		}

		Err(ParseSteamIdError::UnknownFormat)
	}
}
