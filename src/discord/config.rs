use poise::serenity_prelude::GuildId;
use serde::Deserialize;

use super::Token;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	/// The bot token.
	///
	/// Usually supplied through `DISCORD_TOKEN` instead of the config file.
	pub token: Option<Token>,

	/// Register slash commands only in this guild.
	///
	/// Guild commands show up immediately, global ones can take a while to propagate, so this
	/// is mostly useful during development.
	pub guild_id: Option<GuildId>,
}
