use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::{ValueId, VariableId};

/// A mapping from variable to the value selected for it.
///
/// Categories are partitioned into separate leaderboards by their variables
/// (platform, difficulty, ...). A run belongs to a leaderboard if it has the
/// selected value for every selected variable.
///
/// Entries are kept sorted by variable ID, so two selections with the same
/// content always compare, hash, and serialize the same way.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VariableSelections(BTreeMap<VariableId, ValueId>);

impl VariableSelections
{
	/// Creates an empty selection.
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Selects `value` for `variable`, returning the previously selected value.
	pub fn insert(&mut self, variable: VariableId, value: ValueId) -> Option<ValueId>
	{
		self.0.insert(variable, value)
	}

	/// Returns the value selected for `variable`.
	pub fn get(&self, variable: &VariableId) -> Option<&ValueId>
	{
		self.0.get(variable)
	}

	/// Returns the number of selected variables.
	pub fn len(&self) -> usize
	{
		self.0.len()
	}

	/// Checks if no variables are selected.
	pub fn is_empty(&self) -> bool
	{
		self.0.is_empty()
	}

	/// Returns an iterator over all `(variable, value)` pairs.
	pub fn iter(&self) -> btree_map::Iter<'_, VariableId, ValueId>
	{
		self.0.iter()
	}

	/// Checks if `values` agrees with every pair in this selection.
	///
	/// `values` may contain additional variables.
	pub fn is_satisfied_by(&self, values: &Self) -> bool
	{
		self.0
			.iter()
			.all(|(variable, value)| values.get(variable) == Some(value))
	}

	/// Returns the `var-<id>=<value>` query parameters the speedrun.com API
	/// uses to filter by variables.
	pub fn query_pairs(&self) -> impl Iterator<Item = (String, &str)>
	{
		self.0
			.iter()
			.map(|(variable, value)| (format!("var-{variable}"), value.as_str()))
	}
}

impl FromIterator<(VariableId, ValueId)> for VariableSelections
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (VariableId, ValueId)>,
	{
		Self(iter.into_iter().collect())
	}
}

impl Extend<(VariableId, ValueId)> for VariableSelections
{
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (VariableId, ValueId)>,
	{
		self.0.extend(iter);
	}
}

impl<'a> IntoIterator for &'a VariableSelections
{
	type Item = (&'a VariableId, &'a ValueId);
	type IntoIter = btree_map::Iter<'a, VariableId, ValueId>;

	fn into_iter(self) -> Self::IntoIter
	{
		self.iter()
	}
}
