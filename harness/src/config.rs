//! Planner configuration.
//!
//! A JSON document where every field is optional:
//!
//! ```json
//! {
//!   "preset": "slow_corridors",
//!   "costs": {"pickup": 1, "drop": 1},
//!   "max_expansions": 20000
//! }
//! ```
//!
//! The preset (default `"default"`) supplies the base cost table, `costs`
//! overrides individual entries in units, and `max_expansions` overrides the
//! search budget. The resolved configuration is always validated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use roomplan_kernel::transition::cost::{Cost, CostTableV1};
use roomplan_search::policy::SearchPolicyV1;

use crate::error::ConfigError;

/// Names accepted by [`cost_preset`].
pub const COST_PRESETS: &[&str] = &["default", "unit_handling", "slow_corridors"];

/// Look up a named cost table.
#[must_use]
pub fn cost_preset(name: &str) -> Option<CostTableV1> {
    match name {
        "default" => Some(CostTableV1::default()),
        "unit_handling" => Some(CostTableV1::unit_handling()),
        "slow_corridors" => Some(CostTableV1::slow_corridors()),
        _ => None,
    }
}

/// Per-action cost overrides in units. `None` keeps the preset value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostOverrides {
    pub hallway: Option<f64>,
    pub forced_door: Option<f64>,
    pub keyed_door: Option<f64>,
    pub pickup: Option<f64>,
    pub drop: Option<f64>,
}

/// Raw planner configuration as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Base cost table. `None` uses `"default"`.
    pub preset: Option<String>,
    #[serde(default)]
    pub costs: CostOverrides,
    /// `None` uses the search default.
    pub max_expansions: Option<u64>,
}

/// Validated configuration ready for a planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub costs: CostTableV1,
    pub policy: SearchPolicyV1,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            costs: CostTableV1::default(),
            policy: SearchPolicyV1::default(),
        }
    }
}

impl PlannerConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for invalid JSON or unknown fields.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_bytes`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Apply overrides to the preset and validate the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown preset, an unusable cost, or
    /// a zero expansion budget.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let preset = self.preset.as_deref().unwrap_or("default");
        let mut costs = cost_preset(preset).ok_or_else(|| ConfigError::UnknownPreset {
            name: preset.to_string(),
        })?;

        let o = &self.costs;
        override_cost(&mut costs.hallway, "hallway", o.hallway)?;
        override_cost(&mut costs.forced_door, "forced_door", o.forced_door)?;
        override_cost(&mut costs.keyed_door, "keyed_door", o.keyed_door)?;
        override_cost(&mut costs.pickup, "pickup", o.pickup)?;
        override_cost(&mut costs.drop, "drop", o.drop)?;
        costs.validate()?;

        let mut policy = SearchPolicyV1::default();
        if let Some(max) = self.max_expansions {
            policy.max_expansions = max;
        }
        policy.validate()?;

        log::debug!("resolved config: preset {preset}, costs {costs:?}, policy {policy:?}");
        Ok(ResolvedConfig { costs, policy })
    }
}

fn override_cost(
    slot: &mut Cost,
    name: &'static str,
    value: Option<f64>,
) -> Result<(), ConfigError> {
    if let Some(units) = value {
        *slot = Cost::try_from_units(name, units)?;
    }
    Ok(())
}
