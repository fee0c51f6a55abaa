//! dotastats - a Discord bot that looks up Dota 2 statistics for Steam accounts.
//!
//! The interesting bits live in [`resolver`] (turning whatever a user pasted into a
//! [`SteamId`]) and [`stats`] (turning OpenDota responses into text). [`discord`] is the
//! transport, and [`app`] glues the two together.
//!
//! [`SteamId`]: steam_id::SteamId

/*
 * dotastats
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

#[macro_use(Debug, Display, Error, From, Into)]
extern crate derive_more as _;

#[macro_use]
extern crate tracing as _;

pub mod app;
pub mod command;
pub mod config;
pub mod discord;
pub mod opendota;
pub mod resolver;
pub mod runtime;
pub mod stats;
pub mod steam;
pub mod time;

mod util;

pub use self::{app::App, config::Config};
