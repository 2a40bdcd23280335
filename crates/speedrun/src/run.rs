use time::Date;
use url::Url;

use crate::{Contributor, ContributorKey, RunId, Time, VariableSelections};

/// A single verified run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run
{
	/// The run's ID.
	pub id: RunId,

	/// The primary time.
	pub time: Time,

	/// The date the run was performed on.
	///
	/// Older runs sometimes have no date at all.
	pub date: Option<Date>,

	/// Who gets credit for the run.
	pub contributor: Contributor,

	/// The variable values this run was submitted with.
	pub variables: VariableSelections,

	/// Link to video proof, if there is any.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	pub video: Option<Url>,
}

impl Run
{
	/// Returns the leaderboard key of the run's contributor.
	pub fn contributor_key(&self) -> ContributorKey
	{
		self.contributor.key()
	}
}
