//! Raw shapes of speedrun.com API objects.
//!
//! These are deserialized as leniently as possible and then converted into
//! the types from the [`speedrun`] crate, dropping anything we cannot make
//! sense of.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use speedrun::time::InvalidTime;
use speedrun::{Contributor, Run, RunId, Time, UserId, VariableSelections};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use url::Url;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A run object, as returned by `/runs` and `/leaderboards`.
#[derive(Debug, Deserialize)]
pub(super) struct ApiRun
{
	pub(super) id: RunId,

	#[serde(default, deserialize_with = "deserialize_date")]
	pub(super) date: Option<Date>,

	times: ApiTimes,
	players: ApiPlayers,

	#[serde(default, deserialize_with = "deserialize_values")]
	values: VariableSelections,

	#[serde(default)]
	videos: Option<ApiVideos>,
}

#[derive(Debug, Deserialize)]
struct ApiTimes
{
	#[serde(default)]
	primary_t: Option<f64>,
}

/// `players` is a plain list of references, unless `embed=players` was
/// requested, in which case the full objects are wrapped in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiPlayers
{
	Embedded
	{
		data: Vec<ApiPlayer>,
	},
	References(Vec<ApiPlayer>),
}

/// A player, either embedded or as a reference.
#[derive(Debug, Deserialize)]
#[serde(tag = "rel", rename_all = "lowercase")]
pub(super) enum ApiPlayer
{
	User
	{
		id: UserId,

		#[serde(default)]
		names: Option<ApiNames>,
	},
	Guest
	{
		name: Box<str>,
	},
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiNames
{
	international: Box<str>,
}

#[derive(Debug, Deserialize)]
struct ApiVideos
{
	#[serde(default)]
	links: Vec<ApiVideoLink>,
}

#[derive(Debug, Deserialize)]
struct ApiVideoLink
{
	uri: Box<str>,
}

/// Reasons an [`ApiRun`] cannot be turned into a [`Run`].
#[derive(Debug, Error)]
pub(super) enum InvalidRun
{
	#[error("run has no primary time")]
	MissingTime,

	#[error(transparent)]
	Time(#[from] InvalidTime),

	#[error("run has no players")]
	NoPlayers,
}

impl ApiRun
{
	/// Checks if the run was submitted with every selected variable value.
	pub(super) fn matches(&self, selections: &VariableSelections) -> bool
	{
		selections.is_satisfied_by(&self.values)
	}

	/// Converts into a [`Run`], crediting the first listed player.
	pub(super) fn into_run(self) -> Result<Run, InvalidRun>
	{
		let time = self.times.primary_t.ok_or(InvalidRun::MissingTime)?;
		let time = Time::try_from(time)?;
		let contributor = match self.players {
			ApiPlayers::Embedded { data: players } | ApiPlayers::References(players) => players,
		}
		.into_iter()
		.next()
		.map(Contributor::from)
		.ok_or(InvalidRun::NoPlayers)?;

		let video = self
			.videos
			.into_iter()
			.flat_map(|videos| videos.links)
			.find_map(|link| Url::parse(&link.uri).ok());

		Ok(Run { id: self.id, time, date: self.date, contributor, variables: self.values, video })
	}
}

impl From<ApiPlayer> for Contributor
{
	fn from(player: ApiPlayer) -> Self
	{
		match player {
			ApiPlayer::User { id, names } => Self::User { id, name: names.map(|names| names.international) },
			ApiPlayer::Guest { name } => Self::Guest { name },
		}
	}
}

/// Malformed dates are treated like missing ones.
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
	D: Deserializer<'de>,
{
	let Some(date) = Option::<Box<str>>::deserialize(deserializer)? else {
		return Ok(None);
	};

	match Date::parse(&date, DATE_FORMAT) {
		Ok(date) => Ok(Some(date)),
		Err(error) => {
			debug!(%error, %date, "ignoring malformed run date");
			Ok(None)
		},
	}
}

/// Empty objects are sometimes serialized as `[]`.
fn deserialize_values<'de, D>(deserializer: D) -> Result<VariableSelections, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Helper
	{
		Map(VariableSelections),
		List(Vec<IgnoredAny>),
	}

	Helper::deserialize(deserializer).map(|helper| match helper {
		Helper::Map(values) => values,
		Helper::List(_) => VariableSelections::new(),
	})
}
