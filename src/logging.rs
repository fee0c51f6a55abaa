//! Tracing subscriber setup.
//!
//! Each output described in [`TracingConfig`] becomes its own layer with its own filter.

use std::{fs, io};

use dotastats::config::tracing::{FilesConfig, StderrConfig, TracingConfig};
use tracing_appender::{non_blocking::WorkerGuard, rolling::Rotation};
use tracing_subscriber::{
	Layer,
	fmt::format::FmtSpan,
	layer::SubscriberExt,
	registry::LookupSpan,
	util::SubscriberInitExt,
};

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer when dropped, so it must be kept alive until the
/// process exits.
pub(crate) fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let stderr = config.stderr.as_ref().and_then(stderr_layer);
	let (files, guard) = config
		.files
		.as_ref()
		.map(files_layer)
		.transpose()?
		.flatten()
		.unzip();

	tracing_subscriber::registry()
		.with(Layer::and_then(stderr, files).with_filter(config.env_filter()))
		.init();

	tracing::info!("initialized tracing");

	Ok(guard)
}

fn stderr_layer<S>(config: &StderrConfig) -> Option<impl Layer<S>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	if !config.enable {
		return None;
	}

	let layer = tracing_subscriber::fmt::layer()
		.pretty()
		.with_ansi(config.ansi)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_target(true)
		.with_thread_names(true)
		.with_writer(io::stderr)
		.with_filter(config.env_filter());

	Some(layer)
}

fn files_layer<S>(config: &FilesConfig) -> io::Result<Option<(impl Layer<S>, WorkerGuard)>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	if !config.enable {
		return Ok(None);
	}

	if !config.directory.exists() {
		fs::create_dir_all(&config.directory)?;
	}

	let log_dir = config.directory.canonicalize()?;
	let (writer, guard) = tracing_appender::rolling::Builder::new()
		.rotation(Rotation::DAILY)
		.filename_prefix("dotastats")
		.filename_suffix("log")
		.build(&log_dir)
		.map(tracing_appender::non_blocking)
		.map_err(io::Error::other)?;

	let layer = tracing_subscriber::fmt::layer()
		.json()
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::CLOSE)
		.with_target(true)
		.with_thread_names(true)
		.with_writer(writer)
		.with_filter(config.env_filter());

	Ok(Some((layer, guard)))
}
