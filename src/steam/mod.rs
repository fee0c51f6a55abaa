//! Steam Web API client.
//!
//! The only thing the bot needs from Steam itself is turning custom profile URLs into
//! SteamIDs; everything else comes from OpenDota.

pub use self::{
	api::{ApiError, Client, Result},
	vanity::resolve_vanity_url,
};

mod api;
mod vanity;
