//! Tracing related configuration.
//!
//! Logs can be emitted to stderr and to files. Both outputs can individually
//! be enabled and configured, and are located in submodules of this module.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, ParseError};

pub mod files;
pub mod stderr;

/// Tracing configuration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config
{
	/// Initialize a tracing subscriber.
	#[serde(default = "default_enable")]
	pub enable: bool,

	/// Global filters that apply to all layers.
	#[serde(default)]
	pub filters: Vec<Filter>,

	/// Configuration for the layer emitting to stderr.
	#[serde(default = "default_stderr")]
	pub stderr: Option<stderr::Config>,

	/// Configuration for the layer emitting to files.
	#[serde(default)]
	pub files: Option<files::Config>,
}

impl Default for Config
{
	fn default() -> Self
	{
		Self { enable: true, filters: Vec::new(), stderr: default_stderr(), files: None }
	}
}

impl Config
{
	/// Checks if any enabled layer actually writes events somewhere.
	pub fn has_output(&self) -> bool
	{
		self.enable
			&& (self.stderr.as_ref().is_some_and(|stderr| stderr.enable)
				|| self.files.as_ref().is_some_and(|files| files.enable))
	}

	/// Constructs an [`EnvFilter`] from the filter directives specified in the config.
	pub fn env_filter(&self) -> Option<EnvFilter>
	{
		env_filter(&self.filters)
	}
}

fn default_enable() -> bool
{
	true
}

fn default_stderr() -> Option<stderr::Config>
{
	Some(stderr::Config::default())
}

/// Combines `RUST_LOG` with additional directives.
fn env_filter(filters: &[Filter]) -> Option<EnvFilter>
{
	(!filters.is_empty()).then(|| {
		filters
			.iter()
			.map(|Filter(filter)| filter.clone())
			.fold(EnvFilter::from_default_env(), EnvFilter::add_directive)
	})
}

/// A filter directive.
#[derive(Debug, Clone)]
pub struct Filter(pub Directive);

impl FromStr for Filter
{
	type Err = ParseError;

	fn from_str(directive: &str) -> Result<Self, Self::Err>
	{
		directive.parse().map(Self)
	}
}

impl<'de> Deserialize<'de> for Filter
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer)?
			.parse()
			.map_err(de::Error::custom)
	}
}
