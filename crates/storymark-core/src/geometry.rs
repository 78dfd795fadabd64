//! Pure geometry helpers for the percent-based storyboard canvas.
//!
//! The canvas is treated as a 100×100 unit surface: symbol positions and
//! sizes are percentages of the rendered frame, rotations are degrees.
//! Everything here is deterministic and side-effect free; the directive
//! translator and the interaction machine both build on these functions.

use serde::{Deserialize, Serialize};

/// Clamp a percentage value to the canvas range `[0, 100]`.
pub fn clamp_percent(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// Normalize a rotation in degrees to `[0, 360)`.
pub fn normalize_rotation(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Fraction of the canvas covered by a `width` × `height` symbol,
/// expressed as a percentage in `[0, 100]` (a full-canvas symbol is 100).
pub fn area_percent(width: f64, height: f64) -> f64 {
    (width * height) / 100.0
}

/// Compass heading with eight buckets at the canonical angles
/// `0, 45, …, 315`, measured clockwise from North (an unrotated arrow
/// points up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// Bucket an angle in degrees. Each bucket spans 22.5° to either side
    /// of its canonical angle; the 0/360 seam folds back onto North.
    pub fn from_degrees(deg: f64) -> Self {
        let deg = normalize_rotation(deg);
        let idx = ((deg / 45.0).round() as usize) % 8;
        match idx {
            0 => CompassDirection::North,
            1 => CompassDirection::NorthEast,
            2 => CompassDirection::East,
            3 => CompassDirection::SouthEast,
            4 => CompassDirection::South,
            5 => CompassDirection::SouthWest,
            6 => CompassDirection::West,
            _ => CompassDirection::NorthWest,
        }
    }
}

/// Discrete speed/strength classification of a symbol, derived from how
/// much of the canvas it covers. Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntensityBucket {
    /// Area below 10% of the canvas.
    Slight,
    /// Area below 25%.
    Slow,
    /// Area below 50%.
    Moderate,
    /// Area below 75%.
    Fast,
    /// Area at 75% or above.
    Extreme,
}

/// Collapsed 3-level intensity, used to qualify emotion directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntensityLevel {
    Low,
    Mid,
    High,
}

impl IntensityBucket {
    /// Classify an area percentage (see [`area_percent`]).
    /// Monotonic non-decreasing in the input.
    pub fn from_area(area_pct: f64) -> Self {
        if area_pct < 10.0 {
            IntensityBucket::Slight
        } else if area_pct < 25.0 {
            IntensityBucket::Slow
        } else if area_pct < 50.0 {
            IntensityBucket::Moderate
        } else if area_pct < 75.0 {
            IntensityBucket::Fast
        } else {
            IntensityBucket::Extreme
        }
    }

    /// Collapse the five buckets to three levels.
    pub fn collapse3(self) -> IntensityLevel {
        match self {
            IntensityBucket::Slight | IntensityBucket::Slow => IntensityLevel::Low,
            IntensityBucket::Moderate => IntensityLevel::Mid,
            IntensityBucket::Fast | IntensityBucket::Extreme => IntensityLevel::High,
        }
    }
}

/// Vertical third of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalZone {
    /// y < 30.
    Top,
    Middle,
    /// y > 70.
    Bottom,
}

/// Horizontal third of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalZone {
    /// x < 30.
    Left,
    Center,
    /// x > 70.
    Right,
}

/// Coarse 3×3 classification of a point's location on the canvas.
/// The doubly-central cell collapses to a single "Center" token when
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionZone {
    pub vertical: VerticalZone,
    pub horizontal: HorizontalZone,
}

impl PositionZone {
    /// Classify a point given in canvas percent coordinates.
    pub fn from_point(x: f64, y: f64) -> Self {
        let vertical = if y < 30.0 {
            VerticalZone::Top
        } else if y > 70.0 {
            VerticalZone::Bottom
        } else {
            VerticalZone::Middle
        };
        let horizontal = if x < 30.0 {
            HorizontalZone::Left
        } else if x > 70.0 {
            HorizontalZone::Right
        } else {
            HorizontalZone::Center
        };
        Self { vertical, horizontal }
    }

    /// True for the doubly-central cell.
    pub fn is_center(&self) -> bool {
        self.vertical == VerticalZone::Middle && self.horizontal == HorizontalZone::Center
    }
}
