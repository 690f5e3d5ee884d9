// Starfield configuration. Every field has a default, so a page can start
// with no config at all or override just the values it cares about in TOML.

use crate::error::StarfieldError;
use serde::Deserialize;

// Main starfield configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    // Particle creation
    pub stars: StarsConfig,
    // Keypress boost and slowdown timing
    pub boost: BoostConfig,
    // Console diagnostics
    pub debug: DebugConfig,
}

impl StarfieldConfig {
    // Parse a TOML document, filling missing values with defaults, and
    // validate the result
    pub fn from_toml(source: &str) -> Result<Self, StarfieldError> {
        let config: StarfieldConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StarfieldError> {
        let stars = &self.stars;
        let boost = &self.boost;

        if stars.count == 0 {
            return Err(invalid("stars.count must be at least 1"));
        }
        non_negative("stars.min_size", stars.min_size)?;
        non_negative("stars.max_size", stars.max_size)?;
        non_negative("stars.max_speed", stars.max_speed)?;
        if stars.min_size > stars.max_size {
            return Err(invalid("stars.min_size is larger than stars.max_size"));
        }
        non_negative("boost.speed_increment", boost.speed_increment)?;
        non_negative("boost.slowdown_duration_ms", boost.slowdown_duration_ms)?;
        if boost.inactivity_delay_ms > i32::MAX as u32 {
            return Err(invalid("boost.inactivity_delay_ms is too large for a browser timer"));
        }
        Ok(())
    }
}

// Particle creation configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    // Number of particles, fixed for the life of the page
    pub count: usize,
    // Smallest radius in pixels
    pub min_size: f64,
    // Largest radius in pixels
    pub max_size: f64,
    // Largest base speed per axis, in pixels per frame
    pub max_speed: f64,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: 100,
            min_size: 1.0,
            max_size: 3.0,
            max_speed: 0.5,
        }
    }
}

// Keypress boost configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    // Added to every multiplier on each keydown
    pub speed_increment: f64,
    // Quiet time after the last keydown before slowing down
    pub inactivity_delay_ms: u32,
    // Length of one slowdown run
    pub slowdown_duration_ms: f64,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            speed_increment: 0.5,
            inactivity_delay_ms: 5000,
            slowdown_duration_ms: 10_000.0,
        }
    }
}

// Debug configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    // Log keypresses and slowdown starts to the console
    pub log_events: bool,
    // Time every frame with `console.time`
    pub profile_frames: bool,
}

fn invalid(message: &str) -> StarfieldError {
    StarfieldError::InvalidConfig(message.to_string())
}

fn non_negative(name: &str, value: f64) -> Result<(), StarfieldError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StarfieldError::InvalidConfig(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}
