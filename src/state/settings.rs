//! Display settings and globe position.
//!
//! Both are persisted to localStorage so they survive page reloads. Native
//! builds have no storage and always start from defaults.

use crate::geo::{DistanceUnit, Rotation};
use crate::globe::{LabelField, DEFAULT_ROUTE_COLOR};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// User-facing display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Airport field drawn next to each marker.
    pub label: LabelField,
    /// Route arc and marker color.
    pub route_color: [u8; 3],
    /// Unit for sector and total distances.
    pub distance_unit: DistanceUnit,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            label: LabelField::default(),
            route_color: DEFAULT_ROUTE_COLOR,
            distance_unit: DistanceUnit::default(),
        }
    }
}

impl DisplaySettings {
    const STORAGE_KEY: &'static str = "flight_globe_display_settings";

    pub fn load() -> Self {
        load_json(Self::STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        save_json(Self::STORAGE_KEY, self);
    }
}

/// Last globe rotation, restored on the next visit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobePosition {
    pub rotation: Rotation,
}

impl GlobePosition {
    const STORAGE_KEY: &'static str = "flight_globe_position";

    pub fn new(rotation: Rotation) -> Self {
        Self {
            rotation: rotation.normalized(),
        }
    }

    pub fn load() -> Self {
        load_json::<Self>(Self::STORAGE_KEY)
            .map(|p| Self::new(p.rotation))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        save_json(Self::STORAGE_KEY, &Self::new(self.rotation));
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reads and deserializes a JSON value from localStorage.
#[cfg(target_arch = "wasm32")]
fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(value) => {
            log::info!("Loaded {} from localStorage", key);
            Some(value)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", key, e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_json<T: DeserializeOwned>(_key: &str) -> Option<T> {
    None
}

/// Serializes a value to JSON and writes it to localStorage.
#[cfg(target_arch = "wasm32")]
fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };

    let json = match serde_json::to_string(value) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Failed to serialize {}: {}", key, e);
            return;
        }
    };

    if let Err(e) = storage.set_item(key, &json) {
        log::warn!("Failed to save {}: {:?}", key, e);
    } else {
        log::debug!("Saved {} to localStorage", key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_json<T: Serialize>(_key: &str, _value: &T) {}
