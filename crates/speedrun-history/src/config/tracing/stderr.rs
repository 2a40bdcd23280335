//! Tracing configuration for emitting logs to stderr.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::Filter;

/// Tracing configuration for emitting logs to stderr.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config
{
	/// Emit traces to stderr.
	#[serde(default = "default_true")]
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	#[serde(default = "default_true")]
	pub ansi: bool,

	/// Filters that apply just to this layer.
	#[serde(default)]
	pub filters: Vec<Filter>,
}

impl Default for Config
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true, filters: Vec::new() }
	}
}

impl Config
{
	/// Constructs an [`EnvFilter`] from the filter directives specified in the config.
	pub fn env_filter(&self) -> Option<EnvFilter>
	{
		super::env_filter(&self.filters)
	}
}

fn default_true() -> bool
{
	true
}
