use std::error::Error;

use tokio::signal::ctrl_c;
use tokio_util::sync::CancellationToken;

/// Waits for SIGINT (or SIGTERM on unix) and then cancels `token`.
///
/// If a listener cannot be installed, the failure is logged and that signal is ignored; the
/// bot keeps running until the other one arrives.
pub async fn cancel_on_shutdown(token: CancellationToken)
{
	let signal = tokio::select! {
		() = sigint() => "SIGINT",
		() = sigterm() => "SIGTERM",
		() = token.cancelled() => return,
	};

	info!(signal, "received shutdown signal");
	token.cancel();
}

async fn sigint()
{
	if let Err(err) = ctrl_c().await {
		error!(error = &err as &dyn Error, "failed listening for SIGINT");
		std::future::pending::<()>().await;
	}
}

#[cfg(unix)]
async fn sigterm()
{
	use tokio::signal::unix::{SignalKind, signal};

	match signal(SignalKind::terminate()) {
		Ok(mut signal) => {
			if signal.recv().await.is_none() {
				warn!("cannot receive more SIGTERM signals");
				std::future::pending::<()>().await;
			}
		},
		Err(err) => {
			error!(error = &err as &dyn Error, "failed listening for SIGTERM");
			std::future::pending::<()>().await;
		},
	}
}

#[cfg(not(unix))]
async fn sigterm()
{
	std::future::pending().await
}
