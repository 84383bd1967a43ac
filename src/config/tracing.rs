//! [`tracing`] related configuration.
//!
//! Logs can be emitted to stderr and/or to rotating files, each of which can be
//! enabled and filtered individually.
//!
//! [`tracing`]: ::tracing

use std::path::Path;

use serde::{Deserialize, Deserializer, de};
use tracing_subscriber::EnvFilter;

/// The filter used if neither `RUST_LOG` nor `tracing.filters` say anything.
const DEFAULT_FILTER: &str = "cafe_api=info,tower_http=info,warn";

/// The filter used in `--debug` mode.
const DEBUG_FILTER: &str = "cafe_api=debug,tower_http=debug,sqlx=debug,info";

/// Tracing configuration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TracingConfig
{
	/// Initialize a tracing subscriber.
	#[serde(default = "TracingConfig::default_enable")]
	pub enable: bool,

	/// Whether to include HTTP headers in request spans.
	#[serde(default)]
	pub include_http_headers: bool,

	/// Verbose mode, set by `--debug`.
	#[serde(skip)]
	pub debug: bool,

	/// Global filters that apply to all layers.
	#[serde(default)]
	pub filters: Vec<Filter>,

	/// Configuration for the layer emitting to stderr.
	#[serde(default)]
	pub stderr: StderrConfig,

	/// Configuration for the layer emitting to files.
	#[serde(default)]
	pub files: Option<FilesConfig>,
}

/// Tracing configuration for emitting logs to stderr.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StderrConfig
{
	/// Emit traces to stderr.
	#[serde(default = "TracingConfig::default_enable")]
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	#[serde(default = "TracingConfig::default_enable")]
	pub ansi: bool,

	/// Filters that apply just to this layer.
	#[serde(default)]
	pub filters: Vec<Filter>,
}

/// Tracing configuration for emitting logs to files.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilesConfig
{
	/// Emit traces to files.
	#[serde(default = "TracingConfig::default_enable")]
	pub enable: bool,

	/// Directory to store log files in.
	pub directory: Box<Path>,

	/// Filters that apply just to this layer.
	#[serde(default)]
	pub filters: Vec<Filter>,
}

/// A filter directive.
#[derive(Debug, Clone)]
pub struct Filter(pub tracing_subscriber::filter::Directive);

impl TracingConfig
{
	/// Constructs the global [`EnvFilter`].
	///
	/// `RUST_LOG` takes precedence over the built-in defaults, and the directives
	/// in [`TracingConfig::filters`] are added on top.
	pub fn env_filter(&self) -> EnvFilter
	{
		let default = if self.debug { DEBUG_FILTER } else { DEFAULT_FILTER };
		let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

		self.filters
			.iter()
			.map(|Filter(directive)| directive.clone())
			.fold(base, EnvFilter::add_directive)
	}

	fn default_enable() -> bool
	{
		true
	}
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			enable: Self::default_enable(),
			include_http_headers: false,
			debug: false,
			filters: Vec::new(),
			stderr: StderrConfig::default(),
			files: None,
		}
	}
}

impl StderrConfig
{
	/// Constructs an [`EnvFilter`] from the filter directives specified for this
	/// layer.
	pub fn env_filter(&self) -> Option<EnvFilter>
	{
		layer_filter(&self.filters)
	}
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self {
			enable: true,
			ansi: true,
			filters: Vec::new(),
		}
	}
}

impl FilesConfig
{
	/// Constructs an [`EnvFilter`] from the filter directives specified for this
	/// layer.
	pub fn env_filter(&self) -> Option<EnvFilter>
	{
		layer_filter(&self.filters)
	}
}

fn layer_filter(filters: &[Filter]) -> Option<EnvFilter>
{
	(!filters.is_empty()).then(|| {
		filters
			.iter()
			.map(|Filter(directive)| directive.clone())
			.fold(EnvFilter::default(), EnvFilter::add_directive)
	})
}

impl<'de> Deserialize<'de> for Filter
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer)?
			.parse()
			.map(Self)
			.map_err(de::Error::custom)
	}
}
