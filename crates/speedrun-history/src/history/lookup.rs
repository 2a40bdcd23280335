use speedrun::{Run, Time};
use time::Date;

use super::TopTen;

/// Computes the top 10 as it stood at the end of `date`.
///
/// Every dated run on or before `date` is replayed in the order given.
pub fn top_ten_as_of(runs: &[Run], date: Date) -> TopTen
{
	let mut top_ten = TopTen::new();

	for run in runs.iter().filter(|run| run.date.is_some_and(|run_date| run_date <= date)) {
		top_ten.insert(run);
	}

	top_ten
}

/// Returns the fastest time in `runs`.
pub fn world_record(runs: &[Run]) -> Option<Time>
{
	runs.iter().map(|run| run.time).min()
}
