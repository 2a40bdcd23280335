//! Error types used by the [`contributor`] module.
//!
//! [`contributor`]: crate::contributor

use thiserror::Error;

/// Error returned when parsing a string into a [`ContributorKey`].
///
/// [`ContributorKey`]: super::ContributorKey
#[non_exhaustive]
#[derive(Debug, PartialEq, Error)]
#[error("contributor key must look like `user:<id>` or `guest:<name>`")]
pub struct ParseContributorKeyError;
