//! Fixed texts sent back to users.

pub(super) const WELCOME: &str = "\
Hi! 👋
I'm DotaStats, a Dota 2 match analyzer.

Send me a link to your Steam profile to see your statistics.

Supported formats:
• https://steamcommunity.com/id/username
• https://steamcommunity.com/profiles/7656119xxxxxxxxxx
• a SteamID64 (e.g. 76561198012345678)
• an account ID (e.g. 12345678)";

pub(super) const MY_STATS: &str = "\
📊 To see your statistics, send your SteamID or a link to your profile.

Examples:
• https://steamcommunity.com/id/username
• 76561198012345678";

pub(super) const FIND_PLAYER: &str = "\
🔍 Send the SteamID or profile link of any player:

Formats:
• https://steamcommunity.com/id/username
• https://steamcommunity.com/profiles/7656119xxxxxxxxxx
• 76561198012345678";

pub(super) const USAGE_HINT: &str = "\
🤖 Use the menu buttons or send a SteamID to get statistics.

Examples:
• https://steamcommunity.com/id/username
• https://steamcommunity.com/profiles/76561198012345678
• 76561198012345678";

pub(super) const SUPPORT: &str = "\
💖 Supporting the project:

If you like the bot and want to help it grow, the links below are the way to do it.";

pub(super) const PLAYER_NOT_FOUND: &str = "❌ Player not found or profile is private.";

pub(super) const STATS_TIMEOUT: &str = "⌛ OpenDota took too long to respond, try again later.";

pub(super) const STATS_FAILED: &str = "⚠️ Something went wrong while fetching statistics.";

pub(super) const META_FAILED: &str = "❌ Could not fetch hero data.";

pub(super) const NO_STEAM_KEY: &str = "\
❌ Custom profile URLs cannot be resolved right now.
Send the numeric SteamID or a `/profiles/` link instead.";

pub(super) const VANITY_LOOKUP_FAILED: &str =
	"⚠️ Steam could not be reached to resolve that link, try again later.";

pub(super) fn vanity_not_found(name: &str) -> String
{
	format!("❌ No Steam profile uses the custom URL `{name}`.")
}
