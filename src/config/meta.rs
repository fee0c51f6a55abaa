use serde::Deserialize;

/// Settings for the hero popularity report.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct MetaConfig
{
	/// Heroes with a pick rate at or below this percentage are left out of the report, unless
	/// that would leave the report empty.
	pub min_pick_rate: f64,
}

impl Default for MetaConfig
{
	fn default() -> Self
	{
		Self { min_pick_rate: 1.0 }
	}
}
