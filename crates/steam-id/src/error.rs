use std::num::ParseIntError;

/// Error type for conversions from strings to [`SteamId`]
///
/// [`SteamId`]: crate::SteamId
#[derive(Debug, Display, Error, From)]
#[display("failed to parse SteamID: {_variant}")]
pub enum ParseSteamIdError
{
	/// The format could not be detected.
	#[display("unknown format")]
	UnknownFormat,

	/// The input was numeric, but too large for 64 bits.
	#[display("value out of range")]
	OutOfRange,

	/// The input looked like a Steam2ID, but was invalid.
	#[display("{_0}")]
	Steam2(ParseSteam2IdError),

	/// The input looked like a Steam3ID, but was invalid.
	#[display("{_0}")]
	Steam3(ParseSteam3IdError),
}

/// Error type for parsing Steam2ID strings (`STEAM_X:Y:Z`)
#[derive(Debug, Display, Error, From)]
#[display("failed to parse Steam2ID: {_variant}")]
pub enum ParseSteam2IdError
{
	#[display("missing `STEAM_` prefix")]
	MissingPrefix,

	#[display("missing `X` segment")]
	MissingX,

	#[display("invalid `X` segment")]
	InvalidX,

	#[display("missing `Y` segment")]
	MissingY,

	#[display("invalid `Y` segment")]
	InvalidY,

	#[display("missing `Z` segment")]
	MissingZ,

	#[display("invalid `Z` segment: {_0}")]
	InvalidZ(ParseIntError),

	#[display("SteamID out of range")]
	OutOfRange,
}

/// Error type for parsing Steam3ID strings (`[U:1:N]`)
#[derive(Debug, Display, Error, From)]
#[display("failed to parse Steam3ID: {_variant}")]
pub enum ParseSteam3IdError
{
	#[display("inconsistent brackets surrounding SteamID")]
	InconsistentBrackets,

	#[display("missing account type segment")]
	MissingAccountType,

	#[display("missing `1` segment")]
	MissingUniverse,

	#[display("missing account ID segment")]
	MissingAccountId,

	#[display("invalid account ID segment: {_0}")]
	InvalidAccountId(ParseIntError),

	#[display("SteamID out of range")]
	OutOfRange,
}
