//! Games, their categories, and their variables.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use speedrun::{CategoryId, GameId, ValueId, VariableId, VariableSelections};
use url::Url;

/// A game on speedrun.com.
#[derive(Debug, Clone, Serialize)]
pub struct Game
{
	/// The game's ID.
	pub id: GameId,

	/// The game's name.
	pub name: Box<str>,

	/// Link to the game on the website.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weblink: Option<Url>,

	/// All categories, in the order speedrun.com lists them.
	pub categories: Vec<Category>,

	/// All variables, in the order speedrun.com lists them.
	pub variables: Vec<Variable>,
}

/// A category of a game.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category
{
	/// The category's ID.
	pub id: CategoryId,

	/// The category's name.
	pub name: Box<str>,

	/// Whether runs cover the whole game or a single level.
	#[serde(rename = "type")]
	pub kind: CategoryKind,
}

/// See [`Category::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind
{
	/// Runs of the whole game.
	PerGame,

	/// Runs of individual levels.
	PerLevel,
}

/// A variable that splits a category into multiple leaderboards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Variable
{
	/// The variable's ID.
	pub id: VariableId,

	/// The variable's name.
	pub name: Box<str>,

	/// The category this variable applies to.
	///
	/// Variables without a category apply to the whole game.
	#[serde(default)]
	pub category: Option<CategoryId>,

	/// Whether every run has to specify a value for this variable.
	#[serde(default)]
	pub mandatory: bool,

	/// The possible values, in the order speedrun.com lists them.
	#[serde(deserialize_with = "deserialize_values")]
	pub values: Vec<VariableValue>,
}

/// A possible value of a [`Variable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableValue
{
	/// The value's ID.
	pub id: ValueId,

	/// Human readable label.
	pub label: Box<str>,
}

impl Game
{
	/// Returns the categories that cover the whole game.
	pub fn full_game_categories(&self) -> impl Iterator<Item = &Category>
	{
		self.categories
			.iter()
			.filter(|category| category.kind != CategoryKind::PerLevel)
	}

	/// Returns the variables a run of `category` has to specify.
	pub fn mandatory_variables<'a>(&'a self, category: &'a CategoryId) -> impl Iterator<Item = &'a Variable>
	{
		self.variables.iter().filter(move |variable| {
			variable.mandatory && variable.category.as_ref() == Some(category)
		})
	}

	/// Returns the selection a user starts out with after picking `category`.
	///
	/// This is the first value of every mandatory variable.
	pub fn default_selections(&self, category: &CategoryId) -> VariableSelections
	{
		self.mandatory_variables(category)
			.filter_map(|variable| {
				variable
					.values
					.first()
					.map(|value| (variable.id.clone(), value.id.clone()))
			})
			.collect()
	}
}

impl<'de> Deserialize<'de> for Game
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		struct Helper
		{
			id: GameId,
			names: Names,

			#[serde(default)]
			weblink: Option<Url>,

			#[serde(default)]
			categories: Option<Embedded<Category>>,

			#[serde(default)]
			variables: Option<Embedded<Variable>>,
		}

		#[derive(Deserialize)]
		struct Names
		{
			international: Box<str>,
		}

		#[derive(Deserialize)]
		struct Embedded<T>
		{
			data: Vec<T>,
		}

		Helper::deserialize(deserializer).map(|game| Self {
			id: game.id,
			name: game.names.international,
			weblink: game.weblink,
			categories: game.categories.map(|embedded| embedded.data).unwrap_or_default(),
			variables: game.variables.map(|embedded| embedded.data).unwrap_or_default(),
		})
	}
}

/// Variable values come as `{ "values": { "<id>": { "label": ... }, ... } }`.
///
/// The order of that object is meaningful, so it is collected into a list
/// instead of a map.
fn deserialize_values<'de, D>(deserializer: D) -> Result<Vec<VariableValue>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	struct Helper
	{
		#[serde(deserialize_with = "deserialize_ordered")]
		values: Vec<VariableValue>,
	}

	Helper::deserialize(deserializer).map(|Helper { values }| values)
}

fn deserialize_ordered<'de, D>(deserializer: D) -> Result<Vec<VariableValue>, D::Error>
where
	D: Deserializer<'de>,
{
	struct OrderedValues;

	impl<'de> Visitor<'de> for OrderedValues
	{
		type Value = Vec<VariableValue>;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			f.write_str("a map of variable values")
		}

		fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
		where
			A: MapAccess<'de>,
		{
			#[derive(Deserialize)]
			struct Label
			{
				label: Box<str>,
			}

			let mut values = Vec::with_capacity(map.size_hint().unwrap_or_default());

			while let Some((id, Label { label })) = map.next_entry::<ValueId, Label>()? {
				values.push(VariableValue { id, label });
			}

			Ok(values)
		}
	}

	deserializer.deserialize_map(OrderedValues)
}
