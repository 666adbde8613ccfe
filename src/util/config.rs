//! Optional startup overrides for the scenario constants.
//!
//! Instructors can drop a `scenarios.json` into the platform config
//! directory to teach with different figures. The file is read exactly once
//! at launch; a missing file means stock constants and a malformed one is
//! reported and ignored rather than stopping the app.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::{AppState, CopyShopConstants, LemonadeConstants, TheaterConstants};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "BreakevenLab";
const APP_NAME: &str = "BreakevenLab";

const OVERRIDES_FILE: &str = "scenarios.json";

/// Per-scenario constant overrides; any scenario may be omitted.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ScenarioOverrides {
    #[serde(default)]
    pub lemonade: Option<LemonadeConstants>,
    #[serde(default)]
    pub theater: Option<TheaterConstants>,
    #[serde(default)]
    pub copy_shop: Option<CopyShopConstants>,
}

impl ScenarioOverrides {
    /// Builds the app state, falling back to stock constants wherever a
    /// scenario is not overridden.
    pub fn into_app_state(self) -> AppState {
        AppState::with_constants(
            self.lemonade.unwrap_or_default(),
            self.theater.unwrap_or_default(),
            self.copy_shop.unwrap_or_default(),
        )
    }
}

fn overrides_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(OVERRIDES_FILE))
}

pub fn parse_overrides(json: &str) -> Result<ScenarioOverrides, serde_json::Error> {
    serde_json::from_str(json)
}

/// Loads the override file if present and well-formed.
pub fn load_overrides() -> Option<ScenarioOverrides> {
    let path = overrides_file()?;
    let data = fs::read_to_string(&path).ok()?;
    match parse_overrides(&data) {
        Ok(overrides) => {
            println!("Loaded scenario overrides from {}", path.display());
            Some(overrides)
        }
        Err(err) => {
            println!("Ignoring malformed {}: {err}", path.display());
            None
        }
    }
}

/// App state for this launch: overridden constants when configured,
/// defaults otherwise.
pub fn startup_state() -> AppState {
    load_overrides()
        .map(ScenarioOverrides::into_app_state)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_partial_file_only_touches_the_named_scenario() {
        let overrides =
            parse_overrides(r#"{ "lemonade": { "fixed_cost": 75.0, "price_per_cup": 0.6, "default_variable_cost": 0.25 } }"#)
                .unwrap();
        let state = overrides.into_app_state();
        assert_eq!(state.lemonade.constants().fixed_cost, 75.0);
        assert_eq!(state.theater.constants().capacity, 800);
        assert_eq!(state.copy_shop.constants().per_copy_revenue, 0.10);
    }

    #[test]
    fn an_empty_object_is_all_defaults() {
        let state = parse_overrides("{}").unwrap().into_app_state();
        assert_eq!(state.lemonade.constants().price_per_cup, 0.50);
    }

    #[test]
    fn junk_is_an_error_not_a_panic() {
        assert!(parse_overrides("not json").is_err());
        assert!(parse_overrides(r#"{ "lemonade": { "fixed_cost": "fifty" } }"#).is_err());
    }
}
