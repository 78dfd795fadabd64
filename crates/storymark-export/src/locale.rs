//! Bilingual label dictionaries for directive generation.
//!
//! Every label is drawn from a parallel English/Chinese table — the
//! translator never machine-translates. Each lookup is an exhaustive
//! match, so adding an icon variant without both labels fails to
//! compile.

use storymark_core::{
    ActionVerb, CameraMove, CompassDirection, EmotionIcon, HorizontalZone, IntensityBucket,
    IntensityLevel, PositionZone, Trajectory, VerticalZone,
};

/// Output language for generated directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

/// Dictionary lookup implemented by every labelled vocabulary type.
pub trait Localized {
    fn label(&self, lang: Language) -> &'static str;
}

impl Localized for CameraMove {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (CameraMove::ZoomIn, Language::En) => "Zoom In",
            (CameraMove::ZoomIn, Language::Zh) => "推镜头",
            (CameraMove::ZoomOut, Language::En) => "Zoom Out",
            (CameraMove::ZoomOut, Language::Zh) => "拉镜头",
            (CameraMove::PanLeft, Language::En) => "Pan Left",
            (CameraMove::PanLeft, Language::Zh) => "左摇",
            (CameraMove::PanRight, Language::En) => "Pan Right",
            (CameraMove::PanRight, Language::Zh) => "右摇",
            (CameraMove::TiltUp, Language::En) => "Tilt Up",
            (CameraMove::TiltUp, Language::Zh) => "上仰",
            (CameraMove::TiltDown, Language::En) => "Tilt Down",
            (CameraMove::TiltDown, Language::Zh) => "下俯",
            (CameraMove::Tracking, Language::En) => "Tracking Shot",
            (CameraMove::Tracking, Language::Zh) => "跟拍",
            (CameraMove::DollyZoom, Language::En) => "Dolly Zoom",
            (CameraMove::DollyZoom, Language::Zh) => "滑动变焦",
        }
    }
}

impl Localized for Trajectory {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Trajectory::Linear, Language::En) => "linear",
            (Trajectory::Linear, Language::Zh) => "直线",
            (Trajectory::Parabolic, Language::En) => "parabolic",
            (Trajectory::Parabolic, Language::Zh) => "抛物线",
            (Trajectory::Circular, Language::En) => "circular",
            (Trajectory::Circular, Language::Zh) => "环绕",
            (Trajectory::Wave, Language::En) => "wave",
            (Trajectory::Wave, Language::Zh) => "波浪",
        }
    }
}

impl Localized for ActionVerb {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (ActionVerb::Walk, Language::En) => "walk",
            (ActionVerb::Walk, Language::Zh) => "行走",
            (ActionVerb::Jump, Language::En) => "jump",
            (ActionVerb::Jump, Language::Zh) => "跳跃",
            (ActionVerb::Turn, Language::En) => "turn",
            (ActionVerb::Turn, Language::Zh) => "转身",
            (ActionVerb::Fight, Language::En) => "fight",
            (ActionVerb::Fight, Language::Zh) => "打斗",
            (ActionVerb::Fall, Language::En) => "fall",
            (ActionVerb::Fall, Language::Zh) => "跌倒",
        }
    }
}

impl Localized for EmotionIcon {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (EmotionIcon::Happy, Language::En) => "happy",
            (EmotionIcon::Happy, Language::Zh) => "开心",
            (EmotionIcon::Sad, Language::En) => "sad",
            (EmotionIcon::Sad, Language::Zh) => "悲伤",
            (EmotionIcon::Angry, Language::En) => "angry",
            (EmotionIcon::Angry, Language::Zh) => "愤怒",
            (EmotionIcon::Surprised, Language::En) => "surprised",
            (EmotionIcon::Surprised, Language::Zh) => "惊讶",
            (EmotionIcon::Scared, Language::En) => "scared",
            (EmotionIcon::Scared, Language::Zh) => "恐惧",
        }
    }
}

impl Localized for CompassDirection {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (CompassDirection::North, Language::En) => "North",
            (CompassDirection::North, Language::Zh) => "北",
            (CompassDirection::NorthEast, Language::En) => "NorthEast",
            (CompassDirection::NorthEast, Language::Zh) => "东北",
            (CompassDirection::East, Language::En) => "East",
            (CompassDirection::East, Language::Zh) => "东",
            (CompassDirection::SouthEast, Language::En) => "SouthEast",
            (CompassDirection::SouthEast, Language::Zh) => "东南",
            (CompassDirection::South, Language::En) => "South",
            (CompassDirection::South, Language::Zh) => "南",
            (CompassDirection::SouthWest, Language::En) => "SouthWest",
            (CompassDirection::SouthWest, Language::Zh) => "西南",
            (CompassDirection::West, Language::En) => "West",
            (CompassDirection::West, Language::Zh) => "西",
            (CompassDirection::NorthWest, Language::En) => "NorthWest",
            (CompassDirection::NorthWest, Language::Zh) => "西北",
        }
    }
}

impl Localized for IntensityBucket {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (IntensityBucket::Slight, Language::En) => "extremely slow",
            (IntensityBucket::Slight, Language::Zh) => "极慢",
            (IntensityBucket::Slow, Language::En) => "slow",
            (IntensityBucket::Slow, Language::Zh) => "缓慢",
            (IntensityBucket::Moderate, Language::En) => "moderate",
            (IntensityBucket::Moderate, Language::Zh) => "中速",
            (IntensityBucket::Fast, Language::En) => "fast",
            (IntensityBucket::Fast, Language::Zh) => "快速",
            (IntensityBucket::Extreme, Language::En) => "extremely fast",
            (IntensityBucket::Extreme, Language::Zh) => "极快",
        }
    }
}

impl Localized for IntensityLevel {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (IntensityLevel::Low, Language::En) => "slightly",
            (IntensityLevel::Low, Language::Zh) => "略显",
            (IntensityLevel::Mid, Language::En) => "clearly",
            (IntensityLevel::Mid, Language::Zh) => "明显",
            (IntensityLevel::High, Language::En) => "extremely",
            (IntensityLevel::High, Language::Zh) => "极度",
        }
    }
}

impl Localized for PositionZone {
    fn label(&self, lang: Language) -> &'static str {
        use HorizontalZone::*;
        use VerticalZone::*;
        match (self.vertical, self.horizontal, lang) {
            (Top, Left, Language::En) => "Top-Left",
            (Top, Left, Language::Zh) => "左上",
            (Top, Center, Language::En) => "Top-Center",
            (Top, Center, Language::Zh) => "上方",
            (Top, Right, Language::En) => "Top-Right",
            (Top, Right, Language::Zh) => "右上",
            (Middle, Left, Language::En) => "Middle-Left",
            (Middle, Left, Language::Zh) => "左侧",
            (Middle, Center, Language::En) => "Center",
            (Middle, Center, Language::Zh) => "中央",
            (Middle, Right, Language::En) => "Middle-Right",
            (Middle, Right, Language::Zh) => "右侧",
            (Bottom, Left, Language::En) => "Bottom-Left",
            (Bottom, Left, Language::Zh) => "左下",
            (Bottom, Center, Language::En) => "Bottom-Center",
            (Bottom, Center, Language::Zh) => "下方",
            (Bottom, Right, Language::En) => "Bottom-Right",
            (Bottom, Right, Language::Zh) => "右下",
        }
    }
}
