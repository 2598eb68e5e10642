//! Builder for programmatic configuration construction.

use crate::{
    error::WhorlResult,
    model::{
        AnimationKind, ColorStop, Easing, GradientType, PlaybackMode, RadiusVariation, ShapeKind,
        SizeVariation, SpinnerConfig,
    },
};

/// Consuming builder over [`SpinnerConfig`]; starts from the default spinner
/// and validates at [`build`](Self::build).
pub struct SpinnerConfigBuilder {
    config: SpinnerConfig,
}

impl SpinnerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SpinnerConfig::default(),
        }
    }

    pub fn shape(mut self, shape: ShapeKind) -> Self {
        self.config.shape = shape;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.config.count = count;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.config.size = size;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    pub fn colors(mut self, colors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn gradient_stops(mut self, stops: Vec<ColorStop>) -> Self {
        self.config.gradient_stops = stops;
        self
    }

    pub fn gradient_type(mut self, gradient_type: GradientType) -> Self {
        self.config.gradient_type = gradient_type;
        self
    }

    pub fn animation(mut self, kind: AnimationKind) -> Self {
        self.config.animation_type = kind;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.config.duration = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.config.stagger = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.config.easing = easing;
        self
    }

    pub fn copies(mut self, copies: u32, spread: f64) -> Self {
        self.config.copies = copies;
        self.config.copy_spread = spread;
        self
    }

    pub fn size_variation(mut self, variation: SizeVariation) -> Self {
        self.config.size_variation = variation;
        self
    }

    pub fn radius_variation(mut self, variation: RadiusVariation) -> Self {
        self.config.radius_variation = variation;
        self
    }

    pub fn playback(mut self, mode: PlaybackMode) -> Self {
        self.config.playback_mode = mode;
        self
    }

    pub fn repeat_count(mut self, count: u32) -> Self {
        self.config.repeat_count = count;
        self
    }

    pub fn shadow(mut self, offset_x: f64, offset_y: f64, blur: f64) -> Self {
        self.config.shadow = true;
        self.config.shadow_offset_x = offset_x;
        self.config.shadow_offset_y = offset_y;
        self.config.shadow_blur = blur;
        self
    }

    pub fn shadow_paint(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.config.shadow_color = color.into();
        self.config.shadow_opacity = opacity;
        self
    }

    pub fn stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.config.stroke = true;
        self.config.stroke_color = color.into();
        self.config.stroke_width = width;
        self
    }

    pub fn background_blur(mut self, blur: f64) -> Self {
        self.config.background_blur = blur;
        self
    }

    pub fn build(self) -> WhorlResult<SpinnerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SpinnerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
