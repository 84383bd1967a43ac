use std::error::Error as StdError;

use tokio::signal::ctrl_c;

/// Resolves once the OS asks us to shut down (SIGINT or SIGTERM).
pub(crate) async fn shutdown()
{
	tokio::select! {
		ctrl_c_result = ctrl_c() => match ctrl_c_result {
			Ok(()) => warn!("received SIGINT"),
			Err(error) => {
				error!(error = &error as &dyn StdError, "failed listening for SIGINT");
			},
		},

		() = sigterm() => {},
	}
}

#[cfg(unix)]
async fn sigterm()
{
	use tokio::signal::unix::{SignalKind, signal};

	match signal(SignalKind::terminate()) {
		Ok(mut signal) => match signal.recv().await {
			Some(()) => warn!("received SIGTERM"),
			None => warn!("cannot receive more SIGTERM signals"),
		},
		Err(error) => {
			error!(error = &error as &dyn StdError, "failed listening for SIGTERM");
		},
	}
}

#[cfg(not(unix))]
async fn sigterm()
{
	std::future::pending().await
}
