pub use kurbo::{BezPath, Point, Vec2};

use crate::error::{WhorlError, WhorlResult};

/// One spinner, fully described. Immutable input to [`crate::compile`];
/// the control surface that edits it lives outside this crate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpinnerConfig {
    pub shape: ShapeKind,
    pub count: u32,  // angular positions, >= 1
    pub size: f64,   // base shape size, > 0
    pub radius: f64, // base ring radius, >= 0
    pub colors: Vec<String>,
    pub gradient_stops: Vec<ColorStop>,
    pub animation_type: AnimationKind,
    pub duration: f64, // seconds, > 0
    pub stagger: f64,  // seconds per index, >= 0
    pub easing: Easing,
    pub copies: u32,      // duplicates per angular slot, >= 1
    pub copy_spread: f64, // radial spacing between duplicates, >= 0
    pub size_variation: SizeVariation,
    pub radius_variation: RadiusVariation,
    pub gradient_type: GradientType,
    pub playback_mode: PlaybackMode,
    pub repeat_count: u32,
    pub shadow: bool,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
    pub shadow_blur: f64,
    pub shadow_color: String,
    pub shadow_opacity: f64,
    pub background_blur: f64,
    pub stroke: bool,
    pub stroke_width: f64,
    pub stroke_color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Circle,
    Square,
    Line,
    Triangle,
    Star,
    Heart,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    None,
    Chase,
    Pulse,
    Wave,
    Orbit,
    Distort,
    Fade,
    Spiral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
    EaseInBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeVariation {
    None,
    SmallToLarge,
    LargeToSmall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadiusVariation {
    Even,
    Uneven,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackMode {
    Loop,
    Once,
    Repeat,
    Alternate,
}

/// Color-resolution mode. `None` means a single flat color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientType {
    PerDuplicate,
    Linear,
    Radial,
    Sweep,
    None,
}

/// One point along a continuous gradient. `position` is 0..=100.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    pub id: String, // unique within the stop list
    pub color: String,
    pub position: f64,
}

impl SpinnerConfig {
    pub fn validate(&self) -> WhorlResult<()> {
        if self.count == 0 {
            return Err(WhorlError::validation("count must be >= 1"));
        }
        if self.copies == 0 {
            return Err(WhorlError::validation("copies must be >= 1"));
        }
        if !(self.size > 0.0) {
            return Err(WhorlError::validation("size must be > 0"));
        }
        if !(self.radius >= 0.0) {
            return Err(WhorlError::validation("radius must be >= 0"));
        }
        if !(self.copy_spread >= 0.0) {
            return Err(WhorlError::validation("copy_spread must be >= 0"));
        }
        if !(self.duration > 0.0) {
            return Err(WhorlError::validation("duration must be > 0 seconds"));
        }
        if !(self.stagger >= 0.0) {
            return Err(WhorlError::validation("stagger must be >= 0 seconds"));
        }
        if self.colors.is_empty() {
            return Err(WhorlError::validation("colors must have at least one entry"));
        }
        if self.playback_mode == PlaybackMode::Repeat && self.repeat_count == 0 {
            return Err(WhorlError::validation(
                "repeat_count must be >= 1 when playback_mode is repeat",
            ));
        }
        if self.stroke && !(self.stroke_width >= 0.0) {
            return Err(WhorlError::validation("stroke_width must be >= 0"));
        }

        if matches!(self.gradient_type, GradientType::Linear | GradientType::Radial) {
            if self.gradient_stops.len() < 2 || self.gradient_stops.len() > 10 {
                return Err(WhorlError::validation(
                    "gradient_stops must have between 2 and 10 entries",
                ));
            }
            for stop in &self.gradient_stops {
                if !(0.0..=100.0).contains(&stop.position) {
                    return Err(WhorlError::validation(format!(
                        "gradient stop '{}' position must be in 0..=100",
                        stop.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Total number of elements one compile produces.
    pub fn element_count(&self) -> usize {
        self.count as usize * self.copies as usize
    }
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            count: 12,
            size: 15.0,
            radius: 80.0,
            colors: vec!["#6366f1".to_string(), "#a5b4fc".to_string()],
            gradient_stops: vec![
                ColorStop {
                    id: "stop-0".to_string(),
                    color: "#6366f1".to_string(),
                    position: 0.0,
                },
                ColorStop {
                    id: "stop-1".to_string(),
                    color: "#a5b4fc".to_string(),
                    position: 100.0,
                },
            ],
            animation_type: AnimationKind::None,
            duration: 1.5,
            stagger: 0.1,
            easing: Easing::EaseInOut,
            copies: 2,
            copy_spread: 10.0,
            size_variation: SizeVariation::None,
            radius_variation: RadiusVariation::Even,
            gradient_type: GradientType::PerDuplicate,
            playback_mode: PlaybackMode::Loop,
            repeat_count: 3,
            shadow: false,
            shadow_offset_x: 2.0,
            shadow_offset_y: 3.0,
            shadow_blur: 3.0,
            shadow_color: "#000000".to_string(),
            shadow_opacity: 0.3,
            background_blur: 0.0,
            stroke: false,
            stroke_width: 2.0,
            stroke_color: "#ffffff".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        SpinnerConfig::default().validate().unwrap();
    }

    #[test]
    fn json_roundtrip() {
        let config = SpinnerConfig::default();
        let s = serde_json::to_string_pretty(&config).unwrap();
        let de: SpinnerConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(de, config);
    }

    #[test]
    fn enums_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SizeVariation::SmallToLarge).unwrap(),
            "\"small-to-large\""
        );
        assert_eq!(
            serde_json::to_string(&GradientType::PerDuplicate).unwrap(),
            "\"per-duplicate\""
        );
        assert_eq!(
            serde_json::to_string(&Easing::EaseInBack).unwrap(),
            "\"ease-in-back\""
        );
    }

    #[test]
    fn validate_rejects_zero_count() {
        let config = SpinnerConfig {
            count: 0,
            ..SpinnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_colors() {
        let config = SpinnerConfig {
            colors: vec![],
            ..SpinnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_short_stop_list_for_gradient_fill() {
        let config = SpinnerConfig {
            gradient_type: GradientType::Linear,
            gradient_stops: vec![ColorStop {
                id: "only".to_string(),
                color: "#fff".to_string(),
                position: 0.0,
            }],
            ..SpinnerConfig::default()
        };
        assert!(config.validate().is_err());

        // The same short list is fine when no continuous gradient is active.
        let config = SpinnerConfig {
            gradient_type: GradientType::Sweep,
            ..config
        };
        config.validate().unwrap();
    }

    #[test]
    fn validate_rejects_zero_repeat_count_only_in_repeat_mode() {
        let config = SpinnerConfig {
            playback_mode: PlaybackMode::Repeat,
            repeat_count: 0,
            ..SpinnerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SpinnerConfig {
            playback_mode: PlaybackMode::Loop,
            ..config
        };
        config.validate().unwrap();
    }
}
