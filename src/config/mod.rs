//! API configuration.
//!
//! The configuration is loaded from a TOML file on startup. Every section has
//! sensible defaults, so the file itself is optional; the only value that must
//! be provided somehow is the shared secret required for deleting cafes (see
//! [`Credentials`]).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZero;
use std::path::Path;
use std::{env, fmt, fs, io, thread};

pub mod tracing;
pub use tracing::TracingConfig;

/// The name of the environment variable we fall back to if the configuration
/// file does not specify `credentials.api-key`.
pub const API_KEY_ENV_VAR: &str = "CAFE_API_KEY";

/// The global configuration for the API.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config
{
	#[serde(default)]
	pub runtime: RuntimeConfig,

	#[serde(default)]
	pub http: HttpConfig,

	#[serde(default)]
	pub database: DatabaseConfig,

	#[serde(default)]
	pub tracing: TracingConfig,

	#[serde(default)]
	pub credentials: Credentials,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuntimeConfig
{
	/// The amount of worker threads to spin up.
	#[serde(default)]
	pub worker_threads: Option<NonZero<usize>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpConfig
{
	/// The IP address the server should listen on.
	#[serde(default = "HttpConfig::default_ip")]
	pub ip: IpAddr,

	/// The port the server should listen on.
	#[serde(default = "HttpConfig::default_port")]
	pub port: u16,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DatabaseConfig
{
	/// Path to the SQLite database file.
	///
	/// The file (and the `cafe` table) will be created if it does not exist.
	#[serde(default = "DatabaseConfig::default_path")]
	pub path: Box<Path>,

	/// The amount of connections to open immediately.
	#[serde(default)]
	pub min_connections: u32,

	/// The maximum amount of connections to open at once.
	///
	/// If this value is omitted, 1 connection per OS thread will be used as the
	/// limit.
	#[serde(default = "DatabaseConfig::default_max_connections")]
	pub max_connections: NonZero<u32>,
}

/// Secrets.
#[derive(serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Credentials
{
	/// The shared secret required to report a cafe as closed.
	///
	/// Falls back to the `CAFE_API_KEY` environment variable.
	#[serde(default = "Credentials::default_api_key")]
	pub api_key: Box<str>,
}

/// Errors that can occur when loading the [`Config`].
#[derive(Debug, Error)]
pub enum LoadConfigError
{
	#[error("failed to read configuration file: {0}")]
	ReadFile(#[source] io::Error),

	#[error("failed to parse configuration file: {0}")]
	Deserialize(#[source] toml::de::Error),

	#[error(
		"no api key configured; set either `credentials.api-key` (config file) or `CAFE_API_KEY` \
		 (environment)"
	)]
	MissingApiKey,
}

impl Config
{
	/// Loads the configuration.
	///
	/// If `path` is [`None`], the default configuration is used.
	pub fn load(path: Option<&Path>) -> Result<Self, LoadConfigError>
	{
		let config = match path {
			Some(path) => Self::load_from_file(path)?,
			None => Self::default(),
		};

		if config.credentials.api_key.is_empty() {
			return Err(LoadConfigError::MissingApiKey);
		}

		Ok(config)
	}

	/// Loads a file into memory and parses it into a [`Config`] object.
	fn load_from_file(path: &Path) -> Result<Self, LoadConfigError>
	{
		fs::read_to_string(path)
			.map(|file_contents| toml::from_str(&file_contents))
			.map_err(LoadConfigError::ReadFile)?
			.map_err(LoadConfigError::Deserialize)
	}
}

impl HttpConfig
{
	/// Returns the [`SocketAddr`] that the HTTP server should listen on.
	pub fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip, self.port)
	}

	fn default_ip() -> IpAddr
	{
		IpAddr::V4(Ipv4Addr::LOCALHOST)
	}

	fn default_port() -> u16
	{
		5000_u16
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			ip: Self::default_ip(),
			port: Self::default_port(),
		}
	}
}

impl DatabaseConfig
{
	fn default_path() -> Box<Path>
	{
		Box::from(Path::new("cafes.db"))
	}

	/// Determines the default value of [`DatabaseConfig::max_connections`].
	///
	/// By default, we want to open 1 database connection per available CPU
	/// core, with a minimum of 1 if the core count cannot be detected for any
	/// reason.
	fn default_max_connections() -> NonZero<u32>
	{
		thread::available_parallelism()
			.ok()
			.and_then(|count| NonZero::<u32>::try_from(count).ok())
			.unwrap_or(NonZero::<u32>::MIN)
	}
}

impl Default for DatabaseConfig
{
	fn default() -> Self
	{
		Self {
			path: Self::default_path(),
			min_connections: 0,
			max_connections: Self::default_max_connections(),
		}
	}
}

impl Credentials
{
	/// Creates [`Credentials`] with the given shared secret.
	pub fn new(api_key: impl Into<Box<str>>) -> Self
	{
		Self { api_key: api_key.into() }
	}

	/// Reads the shared secret from the environment.
	///
	/// An empty string means "not configured"; [`Config::load()`] rejects it.
	fn default_api_key() -> Box<str>
	{
		env::var(API_KEY_ENV_VAR).map_or_else(|_| Box::default(), Box::from)
	}
}

impl Default for Credentials
{
	fn default() -> Self
	{
		Self {
			api_key: Self::default_api_key(),
		}
	}
}

impl fmt::Debug for Credentials
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_struct("Credentials").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests
{
	use std::net::Ipv4Addr;

	use super::Config;

	#[test]
	fn parses_full_config_file() -> color_eyre::Result<()>
	{
		let config = toml::from_str::<Config>(
			r#"
			[runtime]
			worker-threads = 2

			[http]
			ip = "0.0.0.0"
			port = 8000

			[database]
			path = "data/cafes.db"
			max-connections = 3

			[tracing]
			enable = true
			include-http-headers = true
			filters = ["cafe_api=trace"]

			[tracing.stderr]
			ansi = false

			[tracing.files]
			directory = "./logs"

			[credentials]
			api-key = "TopSecretAPIKey"
			"#,
		)?;

		assert_eq!(config.runtime.worker_threads.map(|count| count.get()), Some(2));
		assert_eq!(config.http.ip, Ipv4Addr::UNSPECIFIED);
		assert_eq!(config.http.port, 8000);
		assert_eq!(config.database.path.to_str(), Some("data/cafes.db"));
		assert_eq!(config.database.max_connections.get(), 3);
		assert!(config.tracing.include_http_headers);
		assert!(!config.tracing.stderr.ansi);
		assert!(config.tracing.files.is_some_and(|files| files.enable));
		assert_eq!(&*config.credentials.api_key, "TopSecretAPIKey");

		Ok(())
	}

	#[test]
	fn example_config_parses() -> color_eyre::Result<()>
	{
		let config = toml::from_str::<Config>(include_str!("../../cafe-api.example.toml"))?;

		assert_eq!(config.http.port, 5000);
		assert_eq!(&*config.credentials.api_key, "TopSecretAPIKey");

		Ok(())
	}

	#[test]
	fn rejects_unknown_fields()
	{
		assert!(toml::from_str::<Config>("[http]\nhost = \"localhost\"").is_err());
	}

	#[test]
	fn defaults() -> color_eyre::Result<()>
	{
		let config = toml::from_str::<Config>("[credentials]\napi-key = \"hunter2\"")?;

		assert_eq!(config.http.ip, Ipv4Addr::LOCALHOST);
		assert_eq!(config.http.port, 5000);
		assert_eq!(config.database.path.to_str(), Some("cafes.db"));
		assert!(config.tracing.enable);
		assert!(config.tracing.stderr.enable);
		assert!(config.tracing.files.is_none());

		Ok(())
	}
}
