//! dotastats - a Discord bot that looks up Dota 2 statistics for Steam accounts.

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

use std::{path::Path, sync::Arc};

use clap::Parser;
use color_eyre::{
	Section,
	eyre::{self, WrapErr},
};
use dotastats::{App, Config, discord::Bot, runtime};
use tokio_util::sync::CancellationToken;

mod cli;
mod logging;

const DEFAULT_CONFIG_PATH: &str = "./dotastats.toml";

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	// `.env` must be loaded before clap looks at the environment
	let env_file = cli::Args::parse().env_file;

	match env_file.as_deref() {
		Some(path) => {
			dotenvy::from_path(path).wrap_err("failed to load custom `.env` file")?;
		},
		None => {
			// not having one is fine, everything can also come from the real environment
			let _ = dotenvy::dotenv();
		},
	}

	let args = cli::Args::parse();
	let mut config = match args.config_path.as_deref() {
		Some(path) => Config::load_from_file(path)?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
			Config::load_from_file(DEFAULT_CONFIG_PATH)?
		},
		None => Config::default(),
	};

	args.apply_to_config(&mut config);

	let _guard = logging::init(&config.tracing).wrap_err("failed to initialize tracing")?;

	runtime::panic_hook::install();

	if config.discord.token.is_none() {
		return Err(eyre::eyre!("missing Discord token"))
			.suggestion("set `DISCORD_TOKEN` or add `discord.token` to the config file");
	}

	runtime::build(&config.runtime)
		.wrap_err("failed to build tokio runtime")?
		.block_on(run(config))
}

async fn run(config: Config) -> eyre::Result<()>
{
	let app = App::new(&config).map(Arc::new).wrap_err("failed to initialize bot")?;
	let bot = Bot::new(&config.discord, app).wrap_err("failed to initialize Discord bot")?;
	let cancellation_token = CancellationToken::new();

	tokio::spawn(runtime::signal::cancel_on_shutdown(cancellation_token.clone()));

	tracing::info!("starting Discord bot");

	bot.run(cancellation_token).await.wrap_err("failed to run Discord bot")
}
