//! CLI argument handling.

use std::net::IpAddr;
use std::path::Path;

use clap::Parser;

use crate::config::Config;

/// This is the HTTP server serving the cafe API.
///
/// Cafes are stored in a local SQLite database file, which will be created on
/// startup if it does not exist yet.
#[derive(Debug, Parser)]
pub struct Args
{
	/// Path to the configuration file.
	///
	/// If omitted, `./cafe-api.toml` is used if it exists, and built-in
	/// defaults otherwise.
	#[arg(long = "config")]
	pub config_path: Option<Box<Path>>,

	/// The IP address to listen on.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long)]
	pub ip: Option<IpAddr>,

	/// The port to listen on.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long, env = "CAFE_API_PORT")]
	pub port: Option<u16>,

	/// Path to the SQLite database file.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long = "database")]
	pub database_path: Option<Box<Path>>,

	/// Log verbosely, including HTTP headers.
	#[arg(long)]
	pub debug: bool,
}

impl Args
{
	/// Applies any relevant config overrides specified as CLI flags in the
	/// given `config` object.
	pub fn apply_to_config(&self, config: &mut Config)
	{
		if let Some(ip) = self.ip {
			config.http.ip = ip;
		}

		if let Some(port) = self.port {
			config.http.port = port;
		}

		if let Some(ref path) = self.database_path {
			config.database.path = path.clone();
		}

		if self.debug {
			config.tracing.enable = true;
			config.tracing.include_http_headers = true;
			config.tracing.debug = true;
		}
	}
}

#[cfg(test)]
mod tests
{
	use std::net::Ipv4Addr;

	use clap::Parser;

	use super::Args;
	use crate::config::{Config, Credentials};

	#[test]
	fn flags_override_config() -> color_eyre::Result<()>
	{
		let mut config = Config {
			credentials: Credentials::new("hunter2"),
			..Config::default()
		};
		let args = Args::try_parse_from([
			"cafe-api",
			"--ip",
			"0.0.0.0",
			"--port",
			"8080",
			"--database",
			"/tmp/cafes.db",
			"--debug",
		])?;

		args.apply_to_config(&mut config);

		assert_eq!(config.http.ip, Ipv4Addr::UNSPECIFIED);
		assert_eq!(config.http.port, 8080);
		assert_eq!(&*config.database.path, std::path::Path::new("/tmp/cafes.db"));
		assert!(config.tracing.include_http_headers);
		assert!(config.tracing.debug);

		Ok(())
	}
}
