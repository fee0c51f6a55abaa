//! Everything a user can ask the bot for.
//!
//! Slash commands, menu buttons and free text all end up as a [`Command`] before anything
//! else happens.

/// A user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command
{
	/// Greeting plus the menu.
	Start,

	/// Accepted input formats.
	Help,

	/// Explains how to look up your own stats.
	MyStats,

	/// Explains how to look up somebody else.
	FindPlayer,

	/// Currently most picked heroes.
	Meta,

	/// Links for supporting the project.
	Support,

	/// Something that is hopefully a Steam profile.
	Lookup(String),
}

/// The buttons attached to the welcome message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton
{
	MyStats,
	FindPlayer,
	Meta,
	Support,
}

impl Command
{
	/// Interprets a free-text message.
	///
	/// `/start`, `/help` and the menu labels map to their commands; anything else is a
	/// [`Command::Lookup`].
	pub fn from_text(text: &str) -> Self
	{
		let text = text.trim();

		match text {
			"/start" => return Self::Start,
			"/help" => return Self::Help,
			_ => {},
		}

		MenuButton::ALL
			.into_iter()
			.find(|button| button.label() == text)
			.map_or_else(|| Self::Lookup(text.to_owned()), MenuButton::command)
	}

	/// Interprets the custom ID of a clicked button.
	pub fn from_custom_id(custom_id: &str) -> Option<Self>
	{
		MenuButton::from_custom_id(custom_id).map(MenuButton::command)
	}
}

impl MenuButton
{
	/// In display order.
	pub const ALL: [Self; 4] = [Self::MyStats, Self::FindPlayer, Self::Meta, Self::Support];

	pub const fn custom_id(self) -> &'static str
	{
		match self {
			Self::MyStats => "menu:my-stats",
			Self::FindPlayer => "menu:find-player",
			Self::Meta => "menu:meta",
			Self::Support => "menu:support",
		}
	}

	pub const fn label(self) -> &'static str
	{
		match self {
			Self::MyStats => "📊 My stats",
			Self::FindPlayer => "🔍 Find player",
			Self::Meta => "📈 Meta heroes",
			Self::Support => "🛠 Support",
		}
	}

	pub fn from_custom_id(custom_id: &str) -> Option<Self>
	{
		Self::ALL
			.into_iter()
			.find(|button| button.custom_id() == custom_id)
	}

	pub fn command(self) -> Command
	{
		match self {
			Self::MyStats => Command::MyStats,
			Self::FindPlayer => Command::FindPlayer,
			Self::Meta => Command::Meta,
			Self::Support => Command::Support,
		}
	}
}
