//! A panic hook that routes panics through [`tracing`].
//!
//! Event handlers run on tokio worker threads, so a panicking handler would otherwise only show
//! up on stderr, not in the JSON log files.
//!
//! [`tracing`]: ::tracing

use std::{backtrace::Backtrace, panic, thread};

/// Installs the hook. The previously installed hook still runs afterwards.
pub fn install()
{
	let previous_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		let payload = info.payload();
		let message = payload
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| payload.downcast_ref::<String>().map(String::as_str))
			.unwrap_or("<non-string panic payload>");

		let current_thread = thread::current();

		error!(
			target: "dotastats::panic",
			thread = current_thread.name().unwrap_or("<unnamed>"),
			location = info.location().map(tracing::field::display),
			backtrace = %Backtrace::force_capture(),
			"{message}",
		);

		previous_hook(info);
	}));
}
