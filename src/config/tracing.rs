//! [`tracing`] related configuration.
//!
//! Every output can be enabled and filtered on its own; the global [`TracingConfig::filters`]
//! apply on top of all of them.
//!
//! [`tracing`]: ::tracing

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, de};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Initialize a tracing subscriber.
	pub enable: bool,

	/// Global filters that apply to all layers.
	pub filters: Vec<Filter>,

	/// Configuration for the layer emitting to stderr.
	pub stderr: Option<StderrConfig>,

	/// Configuration for the layer emitting to files.
	pub files: Option<FilesConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig
{
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	pub ansi: bool,

	/// Filters that apply just to this layer.
	pub filters: Vec<Filter>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig
{
	pub enable: bool,

	/// Directory to store log files in.
	pub directory: Box<Path>,

	/// Filters that apply just to this layer.
	pub filters: Vec<Filter>,
}

/// A filter directive, e.g. `dotastats=debug`.
#[derive(Debug, Clone)]
pub struct Filter(tracing_subscriber::filter::Directive);

impl TracingConfig
{
	/// Constructs an [`EnvFilter`] from the filter directives specified in the config.
	pub fn env_filter(&self) -> EnvFilter
	{
		env_filter(&self.filters)
	}
}

impl StderrConfig
{
	pub fn env_filter(&self) -> EnvFilter
	{
		env_filter(&self.filters)
	}
}

impl FilesConfig
{
	pub fn env_filter(&self) -> EnvFilter
	{
		env_filter(&self.filters)
	}
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			enable: true,
			filters: Vec::new(),
			stderr: Some(StderrConfig::default()),
			files: None,
		}
	}
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true, filters: Vec::new() }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self {
			enable: false,
			directory: PathBuf::from("/var/log/dotastats").into_boxed_path(),
			filters: Vec::new(),
		}
	}
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

/// `RUST_LOG` plus `filters`, defaulting to `INFO` if neither say anything.
fn env_filter(filters: &[Filter]) -> EnvFilter
{
	let base = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();

	filters
		.iter()
		.map(|Filter(directive)| directive.clone())
		.fold(base, EnvFilter::add_directive)
}
