//! Compacting the top 10's evolution into frames.

use serde::Serialize;
use speedrun::Run;
use time::Date;

use super::top_ten::{self, RankedEntry, TopTen, Update};

/// The top 10 as it stood from `date` until the next frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame
{
	date: Date,
	top_ten: Box<[RankedEntry]>,
}

impl Frame
{
	/// The day this frame starts on.
	pub fn date(&self) -> Date
	{
		self.date
	}

	/// The occupied slots, fastest first.
	pub fn entries(&self) -> &[RankedEntry]
	{
		&self.top_ten
	}

	/// All 10 slots, `None` for unoccupied ones.
	pub fn slots(&self) -> impl ExactSizeIterator<Item = Option<&RankedEntry>>
	{
		top_ten::slots(&self.top_ten)
	}
}

/// Chronologically ordered frames.
///
/// Frame dates never decrease, and two consecutive frames always differ in at
/// least one slot. Multiple frames may share a date if the top 10 changed more
/// than once on that day.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrameSequence
{
	frames: Vec<Frame>,
}

impl FrameSequence
{
	/// Returns all frames.
	pub fn as_slice(&self) -> &[Frame]
	{
		&self.frames
	}

	/// Returns an iterator over all frames.
	pub fn iter(&self) -> std::slice::Iter<'_, Frame>
	{
		self.frames.iter()
	}

	/// Returns the number of frames.
	pub fn len(&self) -> usize
	{
		self.frames.len()
	}

	/// Checks if there are no frames.
	pub fn is_empty(&self) -> bool
	{
		self.frames.is_empty()
	}

	/// Returns the frame at `idx`.
	pub fn get(&self, idx: usize) -> Option<&Frame>
	{
		self.frames.get(idx)
	}

	/// Returns the index of the frame that was current on `date`.
	///
	/// This is the last frame dated on or before `date`.
	pub fn index_at(&self, date: Date) -> Option<usize>
	{
		self.frames
			.partition_point(|frame| frame.date <= date)
			.checked_sub(1)
	}

	/// Returns the frame that was current on `date`.
	///
	/// Returns `None` if `date` predates the first frame.
	pub fn at(&self, date: Date) -> Option<&Frame>
	{
		self.index_at(date).and_then(|idx| self.frames.get(idx))
	}
}

impl<'a> IntoIterator for &'a FrameSequence
{
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter
	{
		self.iter()
	}
}

/// Replays `runs` and records a frame every time the top 10 changes.
///
/// `runs` must be sorted by date. Runs without a date are skipped.
pub fn build_animation_frames(runs: &[Run]) -> FrameSequence
{
	let mut top_ten = TopTen::new();
	let mut frames = Vec::<Frame>::new();

	for run in runs {
		let Some(date) = run.date else {
			continue;
		};

		debug_assert!(
			frames.last().is_none_or(|frame| frame.date <= date),
			"runs must be sorted by date",
		);

		if top_ten.insert(run) == Update::Unchanged {
			continue;
		}

		let previous = frames.last().map_or(&[][..], |frame| &frame.top_ten[..]);

		if previous != top_ten.entries() {
			frames.push(Frame { date, top_ten: top_ten.entries().into() });
		}
	}

	trace!(runs = runs.len(), frames = frames.len(), "built animation frames");

	FrameSequence { frames }
}
