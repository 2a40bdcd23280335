//! Error types used by the [`time`] module.
//!
//! [`time`]: crate::time

use thiserror::Error;

/// Error returned when a number of seconds is not a valid [`Time`].
///
/// [`Time`]: super::Time
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTime
{
	/// The value is NaN.
	#[error("time is NaN")]
	IsNaN,

	/// The value is infinite.
	#[error("time is infinite")]
	IsInfinity,

	/// The value is too close to zero to be a real time.
	#[error("time is subnormal")]
	IsSubnormal,

	/// The value is negative.
	#[error("time is negative")]
	IsNegative,

	/// The value is zero.
	#[error("time is zero")]
	IsZero,
}
