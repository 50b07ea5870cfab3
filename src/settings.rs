//! Game settings and tunables
//!
//! Defaults reproduce the classic arcade feel; any field may be overridden
//! from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// JSON syntax or type error
    Json(serde_json::Error),
    /// A field parsed but is outside its playable range
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
    },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Json(e) => write!(f, "JSON error: {e}"),
            SettingsError::OutOfRange { field, requirement } => {
                write!(f, "{field} must be {requirement}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

/// Gameplay and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Pacing ===
    /// Milliseconds between obstacle spawns
    pub spawn_interval_ms: u32,
    /// Obstacle descent per tick
    pub descent_rate: f32,
    /// Projectile climb per tick
    pub projectile_speed: f32,
    /// Aircraft displacement per move command
    pub aircraft_speed: f32,

    // === Visual Effects ===
    /// Particle effects (exhaust, flame jets, explosions, muzzle flash)
    pub particles: bool,
    /// Graphics quality preset
    pub quality: QualityPreset,

    /// Fixed RNG seed (None = platform-provided)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            spawn_interval_ms: OBSTACLE_SPAWN_INTERVAL_MS,
            descent_rate: OBSTACLE_DESCENT_RATE,
            projectile_speed: PROJECTILE_SPEED,
            aircraft_speed: AIRCRAFT_SPEED,

            particles: true,
            quality: QualityPreset::Medium,

            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every tunable keeps the playfield invariants intact.
    ///
    /// Obstacles must fall and projectiles must climb so both eventually
    /// leave the canvas, and the canvas must fit the aircraft and an obstacle.
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::OutOfRange {
                    field,
                    requirement: "a finite number greater than 0",
                })
            }
        }

        positive("descent_rate", self.descent_rate)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("aircraft_speed", self.aircraft_speed)?;

        if self.spawn_interval_ms == 0 {
            return Err(SettingsError::OutOfRange {
                field: "spawn_interval_ms",
                requirement: "at least 1",
            });
        }
        if !(self.canvas_width.is_finite()
            && self.canvas_width >= AIRCRAFT_WIDTH.max(OBSTACLE_SIZE))
        {
            return Err(SettingsError::OutOfRange {
                field: "canvas_width",
                requirement: "at least as wide as the aircraft and an obstacle",
            });
        }
        if !(self.canvas_height.is_finite()
            && self.canvas_height >= AIRCRAFT_BOTTOM_OFFSET.max(OBSTACLE_SIZE))
        {
            return Err(SettingsError::OutOfRange {
                field: "canvas_height",
                requirement: "tall enough for the aircraft row and an obstacle",
            });
        }
        Ok(())
    }

    /// Settings from optional environment-style overrides: a JSON document
    /// and a quality preset name. The preset name wins over the JSON field.
    pub fn from_overrides(json: Option<&str>, quality: Option<&str>) -> Self {
        let preset = quality.and_then(|name| {
            let parsed = QualityPreset::parse(name);
            if parsed.is_none() {
                log::warn!("Unknown quality preset {:?}, ignoring", name);
            }
            parsed
        });

        match (json, preset) {
            (Some(json), Some(preset)) => Self {
                quality: preset,
                ..Self::from_json_or_default(json)
            },
            (Some(json), None) => Self::from_json_or_default(json),
            (None, Some(preset)) => Self::from_preset(preset),
            (None, None) => Self::default(),
        }
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings ({} quality)", settings.quality.as_str());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }
}
