//! A small HTTP API for discovering cafes to work from.
//!
//! Cafes are stored in a single SQLite table and exposed under `/api/V1/cafes`.
//! See [`services::cafes`] for the individual operations.

/*
 * cafe-api
 *
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
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

#[macro_use]
extern crate tracing as _;

#[macro_use]
extern crate thiserror as _;

#[cfg(test)]
mod testing;

#[macro_use]
mod macros;

mod http;
mod logging;
mod serde;
mod signals;

pub mod auth;
pub mod cli;
pub mod config;
pub use config::Config;

pub mod database;

pub mod services;

mod serve;
pub use serve::{ServeError, serve};
