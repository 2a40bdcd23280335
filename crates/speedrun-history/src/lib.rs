//! Top-10 leaderboard history for speedrun.com categories.
//!
//! This crate fetches every verified run of a category from the speedrun.com
//! API and replays them in chronological order, producing a sequence of
//! "frames" that describe what the top 10 looked like on every day something
//! changed.

/*
 * speedrun-history
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

mod tracing;
pub use self::tracing::{Tracing, init as init_tracing};

pub mod config;
pub use config::Config;

pub mod history;
pub mod notifications;
pub mod selection;
pub mod services;
