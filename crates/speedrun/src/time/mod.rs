//! Run times.

use std::num::FpCategory;
use std::time::Duration;
use std::{cmp, fmt};

mod errors;
pub use errors::InvalidTime;

cfg_serde! {
	mod serde;
}

/// The primary time of a run, in seconds.
///
/// This is always a finite, strictly positive number, which gives [`Time`] a
/// total order. That is what the leaderboard logic sorts by.
#[derive(Debug, Clone, Copy)]
pub struct Time(f64);

impl Time
{
	/// Creates a new [`Time`] from a number of seconds.
	pub fn from_secs_f64(secs: f64) -> Result<Self, InvalidTime>
	{
		match secs.classify() {
			FpCategory::Nan => Err(InvalidTime::IsNaN),
			FpCategory::Infinite => Err(InvalidTime::IsInfinity),
			FpCategory::Subnormal => Err(InvalidTime::IsSubnormal),
			FpCategory::Zero => Err(InvalidTime::IsZero),
			FpCategory::Normal if secs.is_sign_negative() => Err(InvalidTime::IsNegative),
			FpCategory::Normal => Ok(Self(secs)),
		}
	}

	/// Returns the amount of seconds as an `f64`.
	pub const fn as_secs_f64(self) -> f64
	{
		self.0
	}

	/// Converts this time into a [`Duration`].
	pub fn as_duration(self) -> Duration
	{
		Duration::try_from_secs_f64(self.0).unwrap_or(Duration::MAX)
	}
}

impl TryFrom<f64> for Time
{
	type Error = InvalidTime;

	fn try_from(secs: f64) -> Result<Self, Self::Error>
	{
		Self::from_secs_f64(secs)
	}
}

impl From<Time> for Duration
{
	fn from(time: Time) -> Self
	{
		time.as_duration()
	}
}

impl PartialEq for Time
{
	fn eq(&self, other: &Self) -> bool
	{
		self.cmp(other).is_eq()
	}
}

impl Eq for Time
{
}

impl PartialOrd for Time
{
	fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering>
	{
		Some(self.cmp(other))
	}
}

impl Ord for Time
{
	fn cmp(&self, other: &Self) -> cmp::Ordering
	{
		self.0.total_cmp(&other.0)
	}
}

/// Formats the time the way leaderboards show it: `59s`, `01m05s`, `1h02m03s`.
///
/// Fractions of a second are truncated.
impl fmt::Display for Time
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let total = self.as_duration().as_secs();
		let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

		if hours > 0 {
			write!(f, "{hours}h")?;
		}

		if hours > 0 || minutes > 0 {
			write!(f, "{minutes:02}m")?;
		}

		write!(f, "{seconds:02}s")
	}
}

#[cfg(test)]
mod tests
{
	use super::{InvalidTime, Time};

	#[test]
	fn rejects_nonsense()
	{
		assert_eq!(Time::from_secs_f64(f64::NAN), Err(InvalidTime::IsNaN));
		assert_eq!(Time::from_secs_f64(f64::INFINITY), Err(InvalidTime::IsInfinity));
		assert_eq!(Time::from_secs_f64(0.0), Err(InvalidTime::IsZero));
		assert_eq!(Time::from_secs_f64(-3.5), Err(InvalidTime::IsNegative));
		assert!(Time::from_secs_f64(42.069).is_ok());
	}

	#[test]
	fn orders_by_seconds() -> anyhow::Result<()>
	{
		let fast = Time::from_secs_f64(40.0)?;
		let slow = Time::from_secs_f64(50.5)?;

		assert!(fast < slow);
		assert_eq!(fast.max(slow), slow);
		assert_eq!(fast, Time::from_secs_f64(40.0)?);

		Ok(())
	}

	#[test]
	fn display() -> anyhow::Result<()>
	{
		let fmt = |secs: f64| Time::from_secs_f64(secs).map(|time| time.to_string());

		assert_eq!(fmt(5.9)?, "05s");
		assert_eq!(fmt(59.0)?, "59s");
		assert_eq!(fmt(65.25)?, "01m05s");
		assert_eq!(fmt(3600.0)?, "1h00m00s");
		assert_eq!(fmt(3723.999)?, "1h02m03s");
		assert_eq!(fmt(36_000.0 + 61.0)?, "10h01m01s");

		Ok(())
	}
}
