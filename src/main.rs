//! cafe-api
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::path::Path;

use cafe_api::cli::Args;
use clap::Parser;
use color_eyre::eyre::WrapErr;

/// Used when `--config` is not passed explicitly.
const DEFAULT_CONFIG_PATH: &str = "./cafe-api.toml";

fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	// `.env` files are optional; the config file and CLI flags cover everything
	// that is strictly required.
	if let Err(error) = dotenvy::dotenv() {
		if !error.not_found() {
			return Err(error).wrap_err("failed to load `.env` file");
		}
	}

	let args = Args::parse();
	let config_path = args.config_path.as_deref().map_or_else(
		|| Path::new(DEFAULT_CONFIG_PATH).is_file().then_some(Path::new(DEFAULT_CONFIG_PATH)),
		Some,
	);

	let mut config =
		cafe_api::Config::load(config_path).wrap_err("failed to load configuration")?;

	args.apply_to_config(&mut config);

	cafe_api::serve(config).wrap_err("failed to run API")
}
