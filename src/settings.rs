//! Game settings and tuning
//!
//! Every gameplay constant lives here so a page (or the native driver) can
//! override it with a JSON document. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::consts::*;

/// Reasons a settings document is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("`{name}` must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("`{name}` must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("`{name}` must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Tuning knobs for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Player and collectible size as a fraction of min(width, height)
    pub size_ratio: f32,
    /// Player speed (px per tick at full deflection) as a fraction of min(width, height)
    pub speed_ratio: f32,
    /// Radians per tick at full joystick deflection
    pub rotation_speed: f32,
    /// Joystick knob travel radius (px)
    pub joystick_max_distance: f32,
    /// Canvas area per collectible, in units of collectible area
    pub density_factor: f32,
    /// Collectible colors
    pub palette: Vec<Color>,
    /// Player color before the first pickup
    pub start_color: Color,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size_ratio: SIZE_RATIO,
            speed_ratio: SPEED_RATIO,
            rotation_speed: ROTATION_SPEED,
            joystick_max_distance: JOYSTICK_MAX_DISTANCE,
            density_factor: DENSITY_FACTOR,
            palette: PALETTE.to_vec(),
            start_color: START_COLOR,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse `json` if present, falling back to defaults on any error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded custom settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("size_ratio", self.size_ratio),
            ("speed_ratio", self.speed_ratio),
            ("joystick_max_distance", self.joystick_max_distance),
            ("density_factor", self.density_factor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::NotPositive { name, value });
            }
        }
        let bounded = [
            ("size_ratio", self.size_ratio, MIN_SIZE_RATIO, MAX_SIZE_RATIO),
            ("density_factor", self.density_factor, MIN_DENSITY_FACTOR, f32::MAX),
        ];
        for (name, value, min, max) in bounded {
            if !(min..=max).contains(&value) {
                return Err(SettingsError::OutOfRange {
                    name,
                    value,
                    min,
                    max,
                });
            }
        }
        if !(self.rotation_speed.is_finite() && self.rotation_speed >= 0.0) {
            return Err(SettingsError::Negative {
                name: "rotation_speed",
                value: self.rotation_speed,
            });
        }
        if self.palette.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        Ok(())
    }

    /// Element id of the optional inline JSON settings block
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "game-settings";

    /// Load settings from `<script id="game-settings" type="application/json">` (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_json_or_default(json.as_deref())
    }

    /// Load settings from the JSON file named by the first CLI argument (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::args().nth(1) else {
            return Self::from_json_or_default(None);
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
