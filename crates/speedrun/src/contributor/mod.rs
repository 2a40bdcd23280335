//! The people credited with runs.

use std::fmt;
use std::str::FromStr;

use crate::UserId;

mod errors;
pub use errors::ParseContributorKeyError;

cfg_serde! {
	mod serde;
}

/// The person credited with a run.
///
/// Runs are either submitted by registered users, who have a stable ID, or on
/// behalf of "guests", who are only known by the name that was typed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "rel", rename_all = "lowercase"))]
pub enum Contributor
{
	/// A registered user.
	User
	{
		/// The user's ID.
		id: UserId,

		/// The user's display name, if it was included in the response.
		#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
		name: Option<Box<str>>,
	},

	/// An unregistered guest.
	Guest
	{
		/// The name the guest was submitted under.
		name: Box<str>,
	},
}

impl Contributor
{
	/// Returns the key that identifies this contributor on a leaderboard.
	pub fn key(&self) -> ContributorKey
	{
		match self {
			Self::User { id, .. } => ContributorKey::User(id.clone()),
			Self::Guest { name } => ContributorKey::Guest(name.clone()),
		}
	}

	/// Returns the name to show for this contributor, if we know one.
	pub fn display_name(&self) -> Option<&str>
	{
		match self {
			Self::User { name, .. } => name.as_deref(),
			Self::Guest { name } => Some(name),
		}
	}
}

/// Identity of a [`Contributor`] for the purposes of ranking.
///
/// Formatted as `user:<id>` or `guest:<name>`. A user and a guest can never
/// compare equal, even if the guest's name happens to be a user ID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContributorKey
{
	/// Key of a registered user.
	User(UserId),

	/// Key of a guest.
	Guest(Box<str>),
}

impl fmt::Display for ContributorKey
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self {
			Self::User(id) => write!(f, "user:{id}"),
			Self::Guest(name) => write!(f, "guest:{name}"),
		}
	}
}

impl FromStr for ContributorKey
{
	type Err = ParseContributorKeyError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value.split_once(':') {
			Some(("user", id)) if !id.is_empty() => Ok(Self::User(UserId::from(id))),
			Some(("guest", name)) if !name.is_empty() => Ok(Self::Guest(Box::from(name))),
			_ => Err(ParseContributorKeyError),
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::{Contributor, ContributorKey};
	use crate::UserId;

	#[test]
	fn keys()
	{
		let user = Contributor::User { id: UserId::new("8e9xw2j2"), name: Some("Alpha".into()) };
		let guest = Contributor::Guest { name: "8e9xw2j2".into() };

		assert_eq!(user.key().to_string(), "user:8e9xw2j2");
		assert_eq!(guest.key().to_string(), "guest:8e9xw2j2");
		assert_ne!(user.key(), guest.key());
	}

	#[test]
	fn parse_key()
	{
		assert_eq!(
			"guest:some name".parse::<ContributorKey>(),
			Ok(ContributorKey::Guest("some name".into())),
		);
		assert_eq!(
			"user:abc".parse::<ContributorKey>(),
			Ok(ContributorKey::User(UserId::new("abc"))),
		);
		assert!("user:".parse::<ContributorKey>().is_err());
		assert!("admin:abc".parse::<ContributorKey>().is_err());
	}
}
