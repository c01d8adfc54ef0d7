//! Runtime configuration, loadable from the JSON blob hosts ship with.

use serde::{Deserialize, Serialize};

/// Canvas toy configuration. Every field has a default matching the
/// reference demo, so `{}` parses to a usable config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: f32,
    /// Thickness of the four arena boundary bodies.
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
    /// Downward gravity in pixels/s².
    #[serde(default = "default_gravity_y")]
    pub gravity_y: f32,
    /// Physics integration step, in seconds.
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: f32,
    /// Seconds between recolor pulses while the animation is on.
    #[serde(default = "default_recolor_interval")]
    pub recolor_interval: f32,
    /// Text block font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Substituted when submitted text is blank or whitespace.
    #[serde(default = "default_text")]
    pub default_text: String,
    /// Optional cap on live shapes. `None` accepts unbounded growth; when
    /// set, spawns past the cap are dropped.
    #[serde(default)]
    pub max_shapes: Option<usize>,
    /// Seed for spawn dimensions and colors.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_width() -> f32 {
    800.0
}
fn default_height() -> f32 {
    600.0
}
fn default_wall_thickness() -> f32 {
    10.0
}
fn default_gravity_y() -> f32 {
    981.0
}
fn default_fixed_dt() -> f32 {
    1.0 / 60.0
}
fn default_recolor_interval() -> f32 {
    1.0
}
fn default_font_size() -> f32 {
    100.0
}
fn default_text() -> String {
    "itsaverykane".to_string()
}
fn default_seed() -> u64 {
    42
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            wall_thickness: default_wall_thickness(),
            gravity_y: default_gravity_y(),
            fixed_dt: default_fixed_dt(),
            recolor_interval: default_recolor_interval(),
            font_size: default_font_size(),
            default_text: default_text(),
            max_shapes: None,
            seed: default_seed(),
        }
    }
}

impl CanvasConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
