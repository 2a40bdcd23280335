//! Stepping through frames like a video.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use time::Date;

use super::{Frame, FrameSequence};

/// How long one day lasts at normal speed.
pub const BASE_TICK: Duration = Duration::from_millis(100);

/// A playback speed multiplier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackSpeed
{
	/// 0.25x
	Quarter,

	/// 0.5x
	Half,

	/// 1x
	#[default]
	Normal,

	/// 2x
	Double,

	/// 4x
	Quadruple,
}

impl PlaybackSpeed
{
	/// Every supported speed, slowest first.
	pub const ALL: [Self; 5] = [Self::Quarter, Self::Half, Self::Normal, Self::Double, Self::Quadruple];

	/// Returns the speed multiplier.
	pub const fn multiplier(self) -> f64
	{
		match self {
			Self::Quarter => 0.25,
			Self::Half => 0.5,
			Self::Normal => 1.0,
			Self::Double => 2.0,
			Self::Quadruple => 4.0,
		}
	}

	/// Returns how much real time passes between two ticks.
	pub fn tick_interval(self) -> Duration
	{
		BASE_TICK.div_f64(self.multiplier())
	}
}

impl fmt::Display for PlaybackSpeed
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "{}x", self.multiplier())
	}
}

/// Error returned when parsing an unsupported [`PlaybackSpeed`].
#[derive(Debug, Error)]
#[error("unsupported playback speed (expected one of 0.25x, 0.5x, 1x, 2x, 4x)")]
pub struct ParsePlaybackSpeedError;

impl FromStr for PlaybackSpeed
{
	type Err = ParsePlaybackSpeedError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		let multiplier = value
			.strip_suffix('x')
			.unwrap_or(value)
			.parse::<f64>()
			.map_err(|_| ParsePlaybackSpeedError)?;

		Self::ALL
			.into_iter()
			.find(|speed| speed.multiplier() == multiplier)
			.ok_or(ParsePlaybackSpeedError)
	}
}

/// A cursor over a [`FrameSequence`] that advances one day per tick.
///
/// The cursor starts at the first frame and stops at `today`. Whoever drives
/// it is responsible for calling [`tick()`] every
/// [`PlaybackSpeed::tick_interval()`].
///
/// [`tick()`]: Playback::tick
#[derive(Debug, Clone)]
pub struct Playback<'a>
{
	frames: &'a FrameSequence,
	frame_idx: usize,
	date: Date,
	today: Date,
	speed: PlaybackSpeed,
}

impl<'a> Playback<'a>
{
	/// Starts playback at the first frame.
	///
	/// Returns `None` if there are no frames.
	pub fn new(frames: &'a FrameSequence, today: Date) -> Option<Self>
	{
		let first = frames.get(0)?;

		Some(Self { frames, frame_idx: 0, date: first.date(), today, speed: PlaybackSpeed::default() })
	}

	/// The day playback is currently at.
	pub fn date(&self) -> Date
	{
		self.date
	}

	/// The frame that is current on [`date()`](Self::date).
	pub fn frame(&self) -> &'a Frame
	{
		&self.frames.as_slice()[self.frame_idx]
	}

	/// The index of the current frame.
	pub fn frame_index(&self) -> usize
	{
		self.frame_idx
	}

	/// The current speed.
	pub fn speed(&self) -> PlaybackSpeed
	{
		self.speed
	}

	/// Changes the speed.
	pub fn set_speed(&mut self, speed: PlaybackSpeed)
	{
		self.speed = speed;
	}

	/// Checks if playback has reached `today`.
	pub fn is_finished(&self) -> bool
	{
		self.date >= self.today
	}

	/// Advances by one day.
	///
	/// Returns `false` without moving if playback already reached `today`.
	pub fn tick(&mut self) -> bool
	{
		if self.is_finished() {
			return false;
		}

		let Some(date) = self.date.next_day() else {
			return false;
		};

		self.date = date;

		if let Some(idx) = self.frames.index_at(date) {
			self.frame_idx = idx;
		}

		true
	}

	/// Jumps to the next frame.
	///
	/// Returns `false` if this already is the last frame.
	pub fn next_frame(&mut self) -> bool
	{
		self.jump_to(self.frame_idx + 1)
	}

	/// Jumps to the previous frame.
	///
	/// Returns `false` if this already is the first frame.
	pub fn previous_frame(&mut self) -> bool
	{
		self.frame_idx
			.checked_sub(1)
			.is_some_and(|idx| self.jump_to(idx))
	}

	/// Jumps back to the first frame.
	pub fn rewind(&mut self)
	{
		self.jump_to(0);
	}

	/// Jumps to `today`, showing the latest frame.
	pub fn skip_to_today(&mut self)
	{
		self.date = self.today;
		self.frame_idx = self.frames.len().saturating_sub(1);
	}

	fn jump_to(&mut self, idx: usize) -> bool
	{
		let Some(frame) = self.frames.get(idx) else {
			return false;
		};

		self.frame_idx = idx;
		self.date = frame.date();

		true
	}
}
