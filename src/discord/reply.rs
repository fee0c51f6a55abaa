//! Turning [`Reply`]s into Discord messages.
//!
//! Replies carrying an avatar become an embed with the avatar as its thumbnail, everything else
//! is sent as plain content.

use poise::{
	CreateReply,
	serenity_prelude::{
		ButtonStyle,
		CreateActionRow,
		CreateButton,
		CreateEmbed,
		CreateInteractionResponseFollowup,
		CreateMessage,
	},
};

use crate::{
	app::{Buttons, Reply},
	command::MenuButton,
};

/// Discord's limit for buttons in a single action row.
const BUTTONS_PER_ROW: usize = 5;

pub(super) fn create_message(reply: &Reply) -> CreateMessage
{
	let message = match embed(reply) {
		Some(embed) => CreateMessage::new().embed(embed),
		None => CreateMessage::new().content(&reply.text),
	};

	match components(reply) {
		Some(rows) => message.components(rows),
		None => message,
	}
}

pub(super) fn create_reply(reply: &Reply) -> CreateReply
{
	let mut create_reply = match embed(reply) {
		Some(embed) => CreateReply::default().embed(embed),
		None => CreateReply::default().content(&reply.text),
	};

	if let Some(rows) = components(reply) {
		create_reply = create_reply.components(rows);
	}

	create_reply
}

pub(super) fn create_followup(reply: &Reply) -> CreateInteractionResponseFollowup
{
	let followup = match embed(reply) {
		Some(embed) => CreateInteractionResponseFollowup::new().embed(embed),
		None => CreateInteractionResponseFollowup::new().content(&reply.text),
	};

	match components(reply) {
		Some(rows) => followup.components(rows),
		None => followup,
	}
}

fn embed(reply: &Reply) -> Option<CreateEmbed>
{
	let avatar = reply.avatar.as_ref()?;

	Some(CreateEmbed::new().description(&reply.text).thumbnail(avatar.as_str()))
}

fn components(reply: &Reply) -> Option<Vec<CreateActionRow>>
{
	let buttons = match reply.buttons.as_ref()? {
		Buttons::Menu => MenuButton::ALL
			.into_iter()
			.map(|button| {
				CreateButton::new(button.custom_id())
					.label(button.label())
					.style(ButtonStyle::Primary)
			})
			.collect::<Vec<_>>(),
		Buttons::Support(links) => links
			.iter()
			.map(|link| CreateButton::new_link(link.url.as_str()).label(&*link.label))
			.collect::<Vec<_>>(),
	};

	if buttons.is_empty() {
		return None;
	}

	let rows = buttons
		.chunks(BUTTONS_PER_ROW)
		.map(|row| CreateActionRow::Buttons(row.to_vec()))
		.collect();

	Some(rows)
}
