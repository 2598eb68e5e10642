use std::fmt;

use crate::model::{AnimationKind, Easing, PlaybackMode, ShapeKind, SpinnerConfig};

/// What an animation is applied to: each element on its own (with stagger)
/// or the whole element collection as one transformable unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationSubject {
    Element,
    Group,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IterationCount {
    Finite(u32),
    Infinite,
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Infinite => write!(f, "infinite"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Normal,
    Alternate,
}

impl Direction {
    pub fn css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Alternate => "alternate",
        }
    }
}

/// Fully-bound timing for one animation subject.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDescriptor {
    pub subject: AnimationSubject,
    pub name: String, // keyframes name, equal to the animation kind
    pub duration_secs: f64,
    pub easing: Easing,
    pub iteration: IterationCount,
    pub direction: Direction,
    pub delay_secs: f64,
}

impl AnimationKind {
    /// Stable name used for keyframes rules and `animation-name`.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Chase => "chase",
            Self::Pulse => "pulse",
            Self::Wave => "wave",
            Self::Orbit => "orbit",
            Self::Distort => "distort",
            Self::Fade => "fade",
            Self::Spiral => "spiral",
        }
    }

    /// Orbit and spiral animate the whole group; everything else animates
    /// each element with a per-index stagger.
    pub fn is_grouped(self) -> bool {
        matches!(self, Self::Orbit | Self::Spiral)
    }
}

impl Easing {
    /// CSS `animation-timing-function` text.
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Spring => "cubic-bezier(0.68, -0.55, 0.27, 1.55)",
            Self::EaseInBack => "cubic-bezier(0.36, 0, 0.66, -0.56)",
        }
    }

    /// Nearest built-in GSAP ease. The mapping is total over this enum; any
    /// future unmapped variant should fall back to `power1.inOut`.
    pub fn gsap_name(self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::EaseIn => "power1.in",
            Self::EaseOut => "power1.out",
            Self::EaseInOut => "power1.inOut",
            Self::Spring => "back.inOut(1.7)",
            Self::EaseInBack => "back.in(1.7)",
        }
    }
}

pub fn iteration_count(mode: PlaybackMode, repeat_count: u32) -> IterationCount {
    match mode {
        PlaybackMode::Loop | PlaybackMode::Alternate => IterationCount::Infinite,
        PlaybackMode::Once => IterationCount::Finite(1),
        PlaybackMode::Repeat => IterationCount::Finite(repeat_count),
    }
}

pub fn direction(mode: PlaybackMode) -> Direction {
    match mode {
        PlaybackMode::Alternate => Direction::Alternate,
        _ => Direction::Normal,
    }
}

/// Per-element animation for angular slot `index`. `None` when the config is
/// unanimated or the active kind animates the group instead.
pub fn bind_element(config: &SpinnerConfig, index: u32) -> Option<AnimationDescriptor> {
    if config.animation_type == AnimationKind::None || config.animation_type.is_grouped() {
        return None;
    }
    Some(AnimationDescriptor {
        subject: AnimationSubject::Element,
        name: config.animation_type.name().to_string(),
        duration_secs: config.duration,
        easing: config.easing,
        iteration: iteration_count(config.playback_mode, config.repeat_count),
        direction: direction(config.playback_mode),
        delay_secs: f64::from(index) * config.stagger,
    })
}

/// Whole-group animation. `Some` only for the grouped kinds; the group
/// never staggers, so its delay is always zero.
pub fn bind_group(config: &SpinnerConfig) -> Option<AnimationDescriptor> {
    if !config.animation_type.is_grouped() {
        return None;
    }
    Some(AnimationDescriptor {
        subject: AnimationSubject::Group,
        name: config.animation_type.name().to_string(),
        duration_secs: config.duration,
        easing: config.easing,
        iteration: iteration_count(config.playback_mode, config.repeat_count),
        direction: direction(config.playback_mode),
        delay_secs: 0.0,
    })
}

/// Where a keyframes rule will be applied. The square `distort` variant
/// rounds corners with `rx` on SVG rects and `border-radius` on CSS boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyframeTarget {
    Svg,
    CssBox,
}

/// The keyframes body for one animation kind, or `None` when unanimated.
pub fn keyframes(kind: AnimationKind, shape: ShapeKind, target: KeyframeTarget) -> Option<&'static str> {
    let body = match kind {
        AnimationKind::None => return None,
        AnimationKind::Chase => {
            "@keyframes chase { 0% { transform: scale(1); opacity: 1; } 50% { transform: scale(0.3); opacity: 0.3; } 100% { transform: scale(1); opacity: 1; } }"
        }
        AnimationKind::Pulse => {
            "@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.3); } }"
        }
        AnimationKind::Wave => {
            "@keyframes wave { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-20px); } }"
        }
        AnimationKind::Orbit => {
            "@keyframes orbit { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }"
        }
        AnimationKind::Spiral => {
            "@keyframes spiral { from { transform: rotate(0deg) scale(1); opacity: 1; } to { transform: rotate(360deg) scale(0); opacity: 0; } }"
        }
        AnimationKind::Fade => {
            "@keyframes fade { 0% { opacity: 1; } 50% { opacity: 0.2; } 100% { opacity: 1; } }"
        }
        AnimationKind::Distort => match (shape, target) {
            (ShapeKind::Square, KeyframeTarget::Svg) => {
                "@keyframes distort { 0%, 100% { rx: 0; transform: rotate(0deg) scale(1); } 50% { rx: 15; transform: rotate(180deg) scale(0.7); } }"
            }
            (ShapeKind::Square, KeyframeTarget::CssBox) => {
                "@keyframes distort { 0%, 100% { border-radius: 0; transform: rotate(0deg) scale(1); } 50% { border-radius: 50%; transform: rotate(180deg) scale(0.7); } }"
            }
            _ => {
                "@keyframes distort { 0%, 100% { transform: scale(1) skew(0); } 50% { transform: scale(0.7) skew(30deg); } }"
            }
        },
    };
    Some(body)
}
