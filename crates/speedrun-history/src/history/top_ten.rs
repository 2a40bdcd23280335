//! Incremental top-10 maintenance.

use std::sync::Arc;

use serde::Serialize;
use speedrun::{ContributorKey, Run, Time};

use super::Rank;

/// How many entries a [`TopTen`] holds at most.
pub const SIZE: usize = 10;

/// A run occupying a slot in the top 10.
///
/// Two entries are equal if they have the same contributor and the same
/// time. The run itself is shared between all frames it appears in.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry
{
	key: ContributorKey,
	time: Time,
	run: Arc<Run>,
}

impl RankedEntry
{
	fn new(run: &Run) -> Self
	{
		Self { key: run.contributor_key(), time: run.time, run: Arc::new(run.clone()) }
	}

	/// The contributor this entry belongs to.
	pub fn key(&self) -> &ContributorKey
	{
		&self.key
	}

	/// The entry's time.
	pub fn time(&self) -> Time
	{
		self.time
	}

	/// The run backing this entry.
	pub fn run(&self) -> &Run
	{
		&self.run
	}
}

impl PartialEq for RankedEntry
{
	fn eq(&self, other: &Self) -> bool
	{
		self.key == other.key && self.time == other.time
	}
}

impl Eq for RankedEntry {}

/// What happened to the top 10 after a run was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update
{
	/// The run did not affect the top 10.
	Unchanged,

	/// A contributor who wasn't in the top 10 entered it.
	Entered(Rank),

	/// A contributor already in the top 10 improved their time.
	Improved
	{
		/// Where they were before.
		from: Rank,

		/// Where they are now.
		to: Rank,
	},
}

/// The fastest 10 contributors seen so far, sorted by time.
///
/// Every contributor occupies at most one slot, holding their best time.
/// Contributors with equal times are ordered by who got there first.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopTen
{
	entries: Vec<RankedEntry>,
}

impl TopTen
{
	/// Creates an empty top 10.
	pub fn new() -> Self
	{
		Self { entries: Vec::with_capacity(SIZE) }
	}

	/// Returns the occupied slots, fastest first.
	pub fn entries(&self) -> &[RankedEntry]
	{
		&self.entries
	}

	/// Returns all [`SIZE`] slots, `None` for unoccupied ones.
	pub fn slots(&self) -> impl ExactSizeIterator<Item = Option<&RankedEntry>>
	{
		slots(&self.entries)
	}

	/// Returns the entry at `rank`.
	pub fn get(&self, rank: Rank) -> Option<&RankedEntry>
	{
		self.entries.get(rank.index())
	}

	/// Returns the rank held by `key`, if they are in the top 10.
	pub fn rank_of(&self, key: &ContributorKey) -> Option<Rank>
	{
		self.entries
			.iter()
			.position(|entry| entry.key == *key)
			.map(Rank::from_index)
	}

	/// Returns the number of occupied slots.
	pub fn len(&self) -> usize
	{
		self.entries.len()
	}

	/// Checks if no slots are occupied.
	pub fn is_empty(&self) -> bool
	{
		self.entries.is_empty()
	}

	/// Processes a run.
	///
	/// Runs must be fed in chronological order for ties to be resolved
	/// correctly.
	pub fn insert(&mut self, run: &Run) -> Update
	{
		let key = run.contributor_key();

		if let Some(from) = self.rank_of(&key) {
			if run.time >= self.entries[from.index()].time {
				return Update::Unchanged;
			}

			self.entries.remove(from.index());
			let to = self.insert_sorted(RankedEntry::new(run));

			return Update::Improved { from, to };
		}

		let is_full = self.entries.len() >= SIZE;

		if is_full && self.entries.last().is_some_and(|slowest| run.time >= slowest.time) {
			return Update::Unchanged;
		}

		let rank = self.insert_sorted(RankedEntry::new(run));
		self.entries.truncate(SIZE);

		Update::Entered(rank)
	}

	/// Inserts after every entry that is at least as fast.
	fn insert_sorted(&mut self, entry: RankedEntry) -> Rank
	{
		let idx = self.entries.partition_point(|existing| existing.time <= entry.time);
		self.entries.insert(idx, entry);

		Rank::from_index(idx)
	}
}

pub(super) fn slots(entries: &[RankedEntry]) -> impl ExactSizeIterator<Item = Option<&RankedEntry>>
{
	(0..SIZE).map(|idx| entries.get(idx))
}
