use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod files;
mod stderr;

/// Handle to the installed subscriber.
///
/// Must be kept alive until the program exits, or events buffered for the log
/// files will be lost.
#[derive(Debug)]
#[must_use = "dropping the handle discards buffered log events"]
pub struct Tracing
{
	installed: bool,
	_files: Option<WorkerGuard>,
}

impl Tracing
{
	/// Checks if events end up anywhere a user could read them.
	///
	/// This is `false` if tracing is disabled, or if every output layer is.
	pub fn has_output(&self) -> bool
	{
		self.installed
	}
}

/// Installs a global tracing subscriber according to `config`.
///
/// Nothing is installed unless at least one output layer is enabled.
pub fn init(config: &crate::config::tracing::Config) -> io::Result<Tracing>
{
	if !config.has_output() {
		return Ok(Tracing { installed: false, _files: None });
	}

	let stderr = config.stderr.as_ref().and_then(stderr::layer);
	let (files, guard) = config
		.files
		.as_ref()
		.map(files::layer)
		.transpose()?
		.flatten()
		.unzip();

	tracing_subscriber::registry()
		.with(Layer::and_then(stderr, files).with_filter(config.env_filter()))
		.try_init()
		.map_err(io::Error::other)?;

	debug!(files = guard.is_some(), "initialized tracing");

	Ok(Tracing { installed: true, _files: guard })
}
