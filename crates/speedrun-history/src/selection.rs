//! What the user is currently looking at.
//!
//! Fetching all runs of a large category can take a while. If the user picks a
//! different game, category, or variable in the meantime, the old fetch keeps
//! running, but its result must not replace the newer one. Every fetch
//! therefore carries a [`Ticket`], and results are only [accepted] if their
//! ticket is still the latest.
//!
//! [accepted]: SelectionTracker::accept

use std::fmt;
use std::sync::atomic::{self, AtomicU64};

use derive_more::Constructor;
use serde::Serialize;
use speedrun::{CategoryId, GameId, VariableSelections};

/// A leaderboard: a category of a game, narrowed down by variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Constructor, Serialize)]
pub struct Selection
{
	/// The game.
	pub game: GameId,

	/// The category.
	pub category: CategoryId,

	/// The selected variable values.
	pub variables: VariableSelections,
}

impl fmt::Display for Selection
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "{}/{}", self.game, self.category)?;

		for (idx, (variable, value)) in self.variables.iter().enumerate() {
			let sep = if idx == 0 { '?' } else { '&' };
			write!(f, "{sep}{variable}={value}")?;
		}

		Ok(())
	}
}

/// Hands out [`Ticket`]s and decides which results are still wanted.
#[derive(Debug, Default)]
pub struct SelectionTracker
{
	generation: AtomicU64,
}

/// Proof of which selection a fetch was started for.
#[derive(Debug, Clone)]
pub struct Ticket
{
	generation: u64,
	selection: Selection,
}

impl Ticket
{
	/// The selection this ticket was issued for.
	pub fn selection(&self) -> &Selection
	{
		&self.selection
	}
}

impl SelectionTracker
{
	/// Creates a new tracker.
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Makes `selection` the current selection.
	///
	/// All previously issued tickets become stale.
	pub fn select(&self, selection: Selection) -> Ticket
	{
		let generation = self.generation.fetch_add(1, atomic::Ordering::AcqRel) + 1;

		debug!(%selection, generation, "selection changed");

		Ticket { generation, selection }
	}

	/// Checks if `ticket` belongs to the current selection.
	pub fn is_current(&self, ticket: &Ticket) -> bool
	{
		self.generation.load(atomic::Ordering::Acquire) == ticket.generation
	}

	/// Returns `value` if `ticket` belongs to the current selection.
	pub fn accept<T>(&self, ticket: &Ticket, value: T) -> Option<T>
	{
		if self.is_current(ticket) {
			return Some(value);
		}

		debug!(selection = %ticket.selection, "discarding result for stale selection");

		None
	}
}

#[cfg(test)]
mod tests
{
	use speedrun::{ValueId, VariableId};

	use super::*;

	fn selection(category: &str) -> Selection
	{
		Selection::new(GameId::from("o1y9wo6q"), CategoryId::from(category), VariableSelections::new())
	}

	#[test]
	fn latest_selection_wins()
	{
		let tracker = SelectionTracker::new();
		let first = tracker.select(selection("a"));

		assert_eq!(tracker.accept(&first, 1), Some(1));

		let second = tracker.select(selection("b"));

		assert_eq!(tracker.accept(&first, 1), None);
		assert_eq!(tracker.accept(&second, 2), Some(2));
		assert_eq!(second.selection().category.as_str(), "b");
	}

	#[test]
	fn reselecting_invalidates_too()
	{
		let tracker = SelectionTracker::new();
		let first = tracker.select(selection("a"));
		let second = tracker.select(selection("a"));

		assert!(!tracker.is_current(&first));
		assert!(tracker.is_current(&second));
	}

	#[test]
	fn display()
	{
		let mut selection = selection("7dgrrxk4");

		assert_eq!(selection.to_string(), "o1y9wo6q/7dgrrxk4");

		selection.variables.insert(VariableId::from("b"), ValueId::from("2"));
		selection.variables.insert(VariableId::from("a"), ValueId::from("1"));

		assert_eq!(selection.to_string(), "o1y9wo6q/7dgrrxk4?a=1&b=2");
	}
}
