// This crate is part of the speedrun-history project.
//
// Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see https://www.gnu.org/licenses.

//! Types shared by everything that talks about speedruns.
//!
//! The [speedrun.com] API identifies games, categories, variables and runs by
//! short opaque strings; this crate gives each of them its own type, and adds
//! the few value types the leaderboard logic is built on ([`Time`],
//! [`Contributor`], [`VariableSelections`], [`Run`]).
//!
//! [speedrun.com]: https://www.speedrun.com

#[macro_use]
mod macros;

mod ids;
pub use ids::{CategoryId, GameId, RunId, UserId, ValueId, VariableId};

pub mod time;

#[doc(inline)]
pub use self::time::Time;

pub mod contributor;

#[doc(inline)]
pub use contributor::{Contributor, ContributorKey};

mod variables;
pub use variables::VariableSelections;

mod run;
pub use run::Run;
