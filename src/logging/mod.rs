//! Tracing initialization.

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TracingConfig;

mod files;
mod stderr;

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer on drop, so it must be kept alive
/// for as long as the process is running.
pub(crate) fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let stderr = config.stderr.enable.then(|| stderr::layer(&config.stderr));
	let (files, guard) = config
		.files
		.as_ref()
		.map(files::layer)
		.transpose()?
		.flatten()
		.unzip();

	let layer = Layer::and_then(stderr, files);

	tracing_subscriber::registry()
		.with(layer.with_filter(config.env_filter()))
		.try_init()
		.map_err(io::Error::other)?;

	info!(debug = config.debug, "initialized tracing");

	Ok(guard)
}
