//! Editor and project configuration.
//!
//! The editor constants (symbol capacity, rotate sensitivity, size
//! floors) are injected configuration rather than hardcoded law: the
//! defaults reproduce the product's current behavior, and callers that
//! need different limits pass their own [`EditorConfig`].

use serde::{Deserialize, Serialize};

/// Tunable interaction and placement parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Maximum number of symbols per frame.
    pub max_symbols_per_frame: usize,
    /// Rotation gained per horizontal pixel of drag, in degrees.
    pub rotate_sensitivity: f64,
    /// Per-axis minimum symbol size during resize, in canvas percent.
    pub min_symbol_size_pct: f64,
    /// Default edge length for symbols created by a drop, in percent.
    pub default_symbol_size_pct: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_symbols_per_frame: 4,
            rotate_sensitivity: 0.5,
            min_symbol_size_pct: 5.0,
            default_symbol_size_pct: 20.0,
        }
    }
}

/// Output frame aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9
    #[default]
    Widescreen,
    /// 9:16
    Portrait,
    /// 4:3
    Standard,
    /// 1:1
    Square,
}

impl AspectRatio {
    /// Conventional "W:H" notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Square => "1:1",
        }
    }
}

/// Read-only project snapshot consumed by the directive translator.
/// Owned by the surrounding application; never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Visual style name (e.g. "watercolor", "anime").
    pub style: String,
    pub aspect_ratio: AspectRatio,
    /// Target duration per shot, in seconds.
    pub duration_secs: u32,
    /// Reference image handle, if the project carries one.
    pub reference_image: Option<String>,
    /// Total number of frames in the storyboard.
    pub frame_count: u32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            style: String::new(),
            aspect_ratio: AspectRatio::default(),
            duration_secs: 5,
            reference_image: None,
            frame_count: 0,
        }
    }
}
