use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::runtime::{self, Runtime};

use crate::auth::SharedSecret;
use crate::config::{Config, RuntimeConfig};
use crate::database::{ConnectionPool, DatabaseError};
use crate::services::CafeService;
use crate::{logging, signals};

/// Errors that can occur when running the server.
#[derive(Debug, Error)]
pub enum ServeError
{
	#[error("failed to initialize tokio: {0}")]
	InitializeRuntime(#[source] io::Error),

	#[error("failed to initialize tracing: {0}")]
	InitializeTracing(#[source] io::Error),

	#[error("failed to open database: {0}")]
	OpenDatabase(#[source] DatabaseError),

	#[error("failed to bind tcp socket: {0}")]
	BindTcpSocket(#[source] io::Error),

	#[error("failed to get tcp local addr: {0}")]
	GetTcpLocalAddr(#[source] io::Error),

	#[error("failed to run http server: {0}")]
	Serve(#[source] io::Error),
}

/// Serves the API with the given config.
///
/// This function will not return until the server shuts down, either because
/// of an error or because it received SIGINT / SIGTERM.
pub fn serve(config: Config) -> Result<(), ServeError>
{
	// Must stay alive until the very end so buffered logs get flushed.
	let _guard = logging::init(&config.tracing).map_err(ServeError::InitializeTracing)?;

	initialize_runtime(&config.runtime)?.block_on(run(config))
}

async fn run(config: Config) -> Result<(), ServeError>
{
	let pool = ConnectionPool::new(&config.database)
		.await
		.map_err(ServeError::OpenDatabase)?;

	info!(path = ?config.database.path, "opened database");

	let authorization = SharedSecret::new(config.credentials.api_key);
	let cafe_service = CafeService::new(pool.clone(), authorization);
	let tcp_listener = TcpListener::bind(config.http.socket_addr())
		.await
		.map_err(ServeError::BindTcpSocket)?;

	let local_addr = tcp_listener.local_addr().map_err(ServeError::GetTcpLocalAddr)?;

	info!("listening on 'http://{local_addr}'");

	let service = crate::http::router(cafe_service, &config.tracing)
		.into_make_service_with_connect_info::<SocketAddr>();

	let result = axum::serve(tcp_listener, service)
		.with_graceful_shutdown(signals::shutdown())
		.await
		.map_err(ServeError::Serve);

	info!("shutting down");

	pool.close().await;

	result
}

fn initialize_runtime(config: &RuntimeConfig) -> Result<Runtime, ServeError>
{
	let mut runtime = runtime::Builder::new_multi_thread();

	if let Some(count) = config.worker_threads {
		runtime.worker_threads(count.get());
	}

	runtime.enable_all().build().map_err(ServeError::InitializeRuntime)
}
