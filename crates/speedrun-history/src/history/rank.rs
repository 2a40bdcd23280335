use std::fmt;

use serde::Serialize;

/// A position on a leaderboard.
///
/// Ranks are 0-indexed internally, but displayed as English ordinals starting
/// at `1st`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rank(usize);

impl Rank
{
	/// The first place.
	pub const FIRST: Self = Self(0);

	/// Creates a rank from a 0-based index.
	pub const fn from_index(index: usize) -> Self
	{
		Self(index)
	}

	/// Returns the 0-based index of this rank.
	pub const fn index(self) -> usize
	{
		self.0
	}

	/// Returns the 1-based place of this rank.
	pub const fn place(self) -> usize
	{
		self.0 + 1
	}
}

impl fmt::Display for Rank
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let place = self.place();
		let suffix = match (place % 10, place % 100) {
			(_, 11..=13) => "th",
			(1, _) => "st",
			(2, _) => "nd",
			(3, _) => "rd",
			(_, _) => "th",
		};

		write!(f, "{place}{suffix}")
	}
}
