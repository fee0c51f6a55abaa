//! Time-related types.

use std::fmt;

use serde::Deserialize;

/// A match length, as reported by OpenDota.
///
/// Displays as `m:ss`; minutes are not wrapped into hours, so a 75 minute game prints as
/// `75:00`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deserialize)]
#[serde(transparent)]
pub struct Seconds(u32);

impl Seconds
{
	pub const fn new(seconds: u32) -> Self
	{
		Self(seconds)
	}

	pub const fn minutes(self) -> u32
	{
		self.0 / 60
	}

	/// The seconds left over after taking out full [minutes].
	///
	/// [minutes]: Seconds::minutes
	pub const fn remainder(self) -> u32
	{
		self.0 % 60
	}
}

impl fmt::Display for Seconds
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "{}:{:02}", self.minutes(), self.remainder())
	}
}
