//! Fetching every run of a leaderboard.
//!
//! speedrun.com refuses to paginate past 10,000 results. To get all runs of
//! larger leaderboards, we first page forward (oldest runs first) until we hit
//! that limit, and then page backwards (newest runs first) from the other end
//! until we are back where the forward sweep stopped. The date of the last run
//! the forward sweep is guaranteed to have seen is called the pivot.
//!
//! Both sweeps feed into the same pile of runs, which is deduplicated, filtered,
//! and sorted at the end.

use std::collections::HashSet;

use speedrun::{Run, VariableSelections};
use time::Date;
use url::Url;

use super::{ApiRun, FetchError, Page, SpeedrunComService, Transport};
use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction
{
	Ascending,
	Descending,
}

impl Direction
{
	const fn as_str(self) -> &'static str
	{
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}
}

/// Follows `next` links through the runs endpoint.
struct Cursor<'a, T>
{
	service: &'a SpeedrunComService<T>,
	next: Option<Url>,
	direction: Direction,
	pages: usize,
}

impl<T> Cursor<'_, T>
where
	T: Transport,
{
	async fn next_page(&mut self) -> Result<Option<Vec<ApiRun>>, FetchError>
	{
		let Some(url) = self.next.take() else {
			return Ok(None);
		};

		let page = self.service.get_json::<Page<ApiRun>>(&url).await?;
		self.next = page.next_url().map_err(FetchError::InvalidCursor)?;
		self.pages += 1;

		trace!(
			direction = self.direction.as_str(),
			page = self.pages,
			runs = page.data.len(),
			"fetched page",
		);

		Ok(Some(page.data))
	}
}

impl<T> SpeedrunComService<T>
where
	T: Transport,
{
	/// Fetches every verified run of a leaderboard.
	///
	/// The returned runs all have a date, match every selected variable, and
	/// are sorted from oldest to newest. Either all runs are returned, or the
	/// whole fetch fails.
	#[instrument(skip_all, fields(selection = %selection), err(Debug, level = "debug"))]
	pub async fn fetch_all_runs(&self, selection: &Selection) -> Result<Vec<Run>, FetchError>
	{
		let threshold = self.config.sweep_threshold.get();
		let mut collected = Vec::new();
		let mut forward = self.cursor(selection, Direction::Ascending)?;
		let mut truncated = false;

		while let Some(runs) = forward.next_page().await? {
			collected.extend(runs);

			if collected.len() >= threshold {
				truncated = true;
				break;
			}
		}

		if truncated {
			let pivot = pivot_date(&collected[..threshold]);

			info!(fetched = collected.len(), ?pivot, "reached sweep threshold; sweeping backwards");

			let mut backward = self.cursor(selection, Direction::Descending)?;

			while let Some(runs) = backward.next_page().await? {
				let oldest = runs.iter().filter_map(|run| run.date).min();
				collected.extend(runs);

				if pivot.zip(oldest).is_some_and(|(pivot, oldest)| oldest < pivot) {
					break;
				}
			}
		}

		let runs = merge_sweeps(collected, &selection.variables);

		debug!(runs = runs.len(), "fetched all runs");

		Ok(runs)
	}

	fn cursor(&self, selection: &Selection, direction: Direction) -> Result<Cursor<'_, T>, FetchError>
	{
		let mut url = self.endpoint(&["runs"])?;

		url.query_pairs_mut()
			.append_pair("game", selection.game.as_str())
			.append_pair("category", selection.category.as_str())
			.append_pair("status", "verified")
			.append_pair("orderby", "date")
			.append_pair("direction", direction.as_str())
			.append_pair("max", &self.config.page_size.to_string())
			.append_pair("embed", "players")
			.extend_pairs(selection.variables.query_pairs());

		Ok(Cursor { service: self, next: Some(url), direction, pages: 0 })
	}
}

/// The date of the last dated run in `runs`.
fn pivot_date(runs: &[ApiRun]) -> Option<Date>
{
	runs.iter().rev().find_map(|run| run.date)
}

/// Turns the raw output of both sweeps into a clean, sorted run list.
fn merge_sweeps(collected: Vec<ApiRun>, selections: &VariableSelections) -> Vec<Run>
{
	let mut seen = HashSet::with_capacity(collected.len());
	let mut runs = collected
		.into_iter()
		.filter(|run| seen.insert(run.id.clone()))
		.filter(|run| run.matches(selections))
		.filter_map(|run| {
			if run.date.is_none() {
				debug!(id = %run.id, "ignoring run without a date");
				return None;
			}

			let id = run.id.clone();

			run.into_run()
				.inspect_err(|error| warn!(%id, %error, "ignoring malformed run"))
				.ok()
		})
		.collect::<Vec<_>>();

	runs.sort_by_key(|run| run.date);
	runs
}

#[cfg(test)]
mod tests
{
	use speedrun::{ValueId, VariableId};

	use super::*;

	fn api_run(id: &str, date: Option<&str>, player: &str, values: &str) -> anyhow::Result<ApiRun>
	{
		let date = date.map_or_else(|| String::from("null"), |date| format!("\"{date}\""));
		let json = format!(
			r#"{{
				"id": "{id}",
				"date": {date},
				"times": {{ "primary_t": 42.0 }},
				"players": {{ "data": [{{ "rel": "guest", "name": "{player}" }}] }},
				"values": {values}
			}}"#,
		);

		serde_json::from_str(&json).map_err(Into::into)
	}

	#[test]
	fn duplicates_are_merged() -> anyhow::Result<()>
	{
		let collected = vec![
			api_run("a", Some("2020-01-02"), "x", "{}")?,
			api_run("b", Some("2020-01-01"), "y", "{}")?,
			api_run("a", Some("2020-01-02"), "x", "{}")?,
			api_run("c", Some("2020-01-03"), "z", "{}")?,
			api_run("b", Some("2020-01-01"), "y", "{}")?,
		];

		let ids = merge_sweeps(collected, &VariableSelections::new())
			.into_iter()
			.map(|run| run.id.to_string())
			.collect::<Vec<_>>();

		assert_eq!(ids, ["b", "a", "c"]);

		Ok(())
	}

	#[test]
	fn undated_and_mismatched_runs_are_dropped() -> anyhow::Result<()>
	{
		let collected = vec![
			api_run("a", None, "x", r#"{ "v": "1" }"#)?,
			api_run("b", Some("2020-01-01"), "y", r#"{ "v": "2" }"#)?,
			api_run("c", Some("2020-01-01"), "z", r#"{ "v": "1", "w": "3" }"#)?,
		];

		let selections = [(VariableId::from("v"), ValueId::from("1"))]
			.into_iter()
			.collect::<VariableSelections>();

		let ids = merge_sweeps(collected, &selections)
			.into_iter()
			.map(|run| run.id.to_string())
			.collect::<Vec<_>>();

		assert_eq!(ids, ["c"]);

		Ok(())
	}

	#[test]
	fn sorting_is_stable() -> anyhow::Result<()>
	{
		let collected = vec![
			api_run("late", Some("2021-01-01"), "x", "{}")?,
			api_run("first", Some("2020-01-01"), "y", "{}")?,
			api_run("second", Some("2020-01-01"), "z", "{}")?,
		];

		let ids = merge_sweeps(collected, &VariableSelections::new())
			.into_iter()
			.map(|run| run.id.to_string())
			.collect::<Vec<_>>();

		assert_eq!(ids, ["first", "second", "late"]);

		Ok(())
	}

	#[test]
	fn pivot_skips_undated_runs() -> anyhow::Result<()>
	{
		let runs = [
			api_run("a", Some("2019-06-14"), "x", "{}")?,
			api_run("b", Some("2019-06-15"), "x", "{}")?,
			api_run("c", None, "x", "{}")?,
		];

		assert_eq!(pivot_date(&runs), Some(time::macros::date!(2019 - 06 - 15)));
		assert_eq!(pivot_date(&runs[2..]), None);

		Ok(())
	}
}
