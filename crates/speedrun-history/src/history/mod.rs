//! Reconstructing the history of a leaderboard's top 10.
//!
//! Given every run of a leaderboard sorted by date, the runs are replayed in
//! order through a [`TopTen`]. Every time the top 10 changes, a [`Frame`] is
//! recorded. Holding each frame until the next one starts reproduces the top
//! 10 as it stood on any given day, which is what the animation is driven by.

use serde::Serialize;
use speedrun::{Run, Time};
use time::Date;

mod rank;
pub use rank::Rank;

mod top_ten;
pub use top_ten::{RankedEntry, SIZE, TopTen, Update};

mod frames;
pub use frames::{Frame, FrameSequence, build_animation_frames};

mod lookup;
pub use lookup::{top_ten_as_of, world_record};

mod playback;
pub use playback::{BASE_TICK, ParsePlaybackSpeedError, Playback, PlaybackSpeed};


/// Every run of a leaderboard together with the frames built from them.
#[derive(Debug, Clone, Serialize)]
pub struct TopTenHistory
{
	runs: Vec<Run>,
	frames: FrameSequence,
}

impl TopTenHistory
{
	/// Builds the frames for `runs`, which must be sorted by date.
	pub fn new(runs: Vec<Run>) -> Self
	{
		let frames = build_animation_frames(&runs);

		Self { runs, frames }
	}

	/// All runs, oldest first.
	pub fn runs(&self) -> &[Run]
	{
		&self.runs
	}

	/// The frames built from [`runs()`](Self::runs).
	pub fn frames(&self) -> &FrameSequence
	{
		&self.frames
	}

	/// The top 10 as it stood at the end of `date`.
	pub fn top_ten_as_of(&self, date: Date) -> TopTen
	{
		top_ten_as_of(&self.runs, date)
	}

	/// The fastest time ever recorded.
	pub fn world_record(&self) -> Option<Time>
	{
		world_record(&self.runs)
	}

	/// Starts playing back the frames, up until `today`.
	pub fn playback(&self, today: Date) -> Option<Playback<'_>>
	{
		Playback::new(&self.frames, today)
	}
}
