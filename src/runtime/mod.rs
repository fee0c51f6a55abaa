//! Process-level plumbing: the tokio runtime, the panic hook, and shutdown signals.

use {
	crate::config::RuntimeConfig,
	std::io,
	tokio::runtime::{Builder, Runtime},
};

pub mod panic_hook;
pub mod signal;

/// Builds the multi-threaded tokio runtime the bot runs on.
pub fn build(config: &RuntimeConfig) -> io::Result<Runtime>
{
	let mut builder = Builder::new_multi_thread();

	builder.enable_time();
	builder.enable_io();

	if let Some(worker_threads) = config.worker_threads {
		builder.worker_threads(worker_threads.get());
	}

	if let Some(max_blocking_threads) = config.max_blocking_threads {
		builder.max_blocking_threads(max_blocking_threads.get());
	}

	builder.build()
}
