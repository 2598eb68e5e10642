//! HTML fragment + keyframe stylesheet emitter.
//!
//! This target models elements as plain positioned boxes, so only the
//! box-representable shapes survive. Unsupported combinations return an
//! explanatory placeholder, never a best-effort approximation.

use std::fmt::Write as _;

use crate::{
    animation::{self, KeyframeTarget},
    color::{FALLBACK_COLOR, Fill},
    compile::CompiledGeometry,
    markup::{self, DOC_SIZE_PX},
    model::{AnimationKind, ShapeKind, SpinnerConfig},
};

/// Result of the CSS emitter. Callers must check for the placeholder
/// variant before treating the output as renderable.
#[derive(Clone, Debug, PartialEq)]
pub enum CssExport {
    /// HTML fragment + stylesheet text pair.
    Stylesheet { html: String, css: String },
    /// The configuration cannot be expressed as CSS boxes; `placeholder` is
    /// a single explanatory comment to show in place of real output.
    Unsupported { placeholder: String },
}

impl CssExport {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Render one compiled spinner as an HTML fragment and keyframe stylesheet.
pub fn emit_css(geo: &CompiledGeometry, config: &SpinnerConfig) -> CssExport {
    if matches!(
        config.shape,
        ShapeKind::Random | ShapeKind::Star | ShapeKind::Heart | ShapeKind::Triangle
    ) {
        return CssExport::Unsupported {
            placeholder: format!(
                "<!-- CSS export for '{}' shape is not supported due to its complexity. Please use the Animated SVG export. -->",
                config.shape.name()
            ),
        };
    }
    if config.stroke {
        return CssExport::Unsupported {
            placeholder: "<!-- CSS export with 'stroke' is not supported. Please use the Animated SVG export for this effect. -->".to_string(),
        };
    }

    tracing::debug!(elements = geo.elements.len(), "emitting css export");

    let mut html = String::from("<div class=\"spinner-container\">");
    for flat in 0..geo.elements.len() {
        let _ = write!(
            html,
            "<div class=\"spinner-element spinner-element-{}\"></div>",
            flat + 1
        );
    }
    html.push_str("</div>");

    CssExport::Stylesheet {
        html,
        css: stylesheet(geo, config),
    }
}

fn stylesheet(geo: &CompiledGeometry, config: &SpinnerConfig) -> String {
    let animated = config.animation_type != AnimationKind::None;
    let base_color = config
        .colors
        .first()
        .map(String::as_str)
        .unwrap_or(FALLBACK_COLOR);

    let mut css = String::new();
    if let Some(body) =
        animation::keyframes(config.animation_type, config.shape, KeyframeTarget::CssBox)
    {
        css.push_str(body);
        css.push('\n');
    }

    let _ = write!(
        css,
        "\n.spinner-container {{\n  width: {DOC_SIZE_PX}px;\n  height: {DOC_SIZE_PX}px;\n  position: relative;\n  top: 50%;\n  left: 50%;\n  transform: translate(-50%, -50%);\n}}\n"
    );

    css.push_str("\n.spinner-element {\n  position: absolute;\n  top: 50%;\n  left: 50%;\n");
    let _ = writeln!(css, "  width: {}px;", markup::num(config.size));
    let _ = writeln!(css, "  height: {}px;", markup::num(config.size));
    let _ = writeln!(css, "  margin-left: {}px;", markup::num(-config.size / 2.0));
    let _ = writeln!(css, "  margin-top: {}px;", markup::num(-config.size / 2.0));
    if animated {
        let _ = writeln!(css, "  animation-name: {};", config.animation_type.name());
        let _ = writeln!(css, "  animation-duration: {};", markup::seconds(config.duration));
        let _ = writeln!(css, "  animation-timing-function: {};", config.easing.css());
        let _ = writeln!(
            css,
            "  animation-iteration-count: {};",
            animation::iteration_count(config.playback_mode, config.repeat_count)
        );
        let _ = writeln!(
            css,
            "  animation-direction: {};",
            animation::direction(config.playback_mode).css()
        );
    }
    let _ = writeln!(css, "  background-color: {base_color};");
    if config.shape == ShapeKind::Circle {
        css.push_str("  border-radius: 50%;\n");
    }
    css.push_str("}\n");

    for (flat, element) in geo.elements.iter().enumerate() {
        let degrees = element.angle_rad.to_degrees();
        let _ = write!(css, "\n.spinner-element-{} {{\n", flat + 1);
        let _ = writeln!(
            css,
            "  transform: rotate({}deg) translateY({}px) rotate({}deg);",
            markup::num(degrees),
            markup::num(-element.final_radius),
            markup::num(-degrees)
        );
        if element.size != config.size {
            let _ = writeln!(css, "  width: {}px;", markup::num(element.size));
            let _ = writeln!(css, "  height: {}px;", markup::num(element.size));
            let _ = writeln!(css, "  margin-left: {}px;", markup::num(-element.size / 2.0));
            let _ = writeln!(css, "  margin-top: {}px;", markup::num(-element.size / 2.0));
        }
        if let Some(desc) = &element.animation {
            let _ = writeln!(css, "  animation-delay: {};", markup::seconds(desc.delay_secs));
        }
        if let Fill::Solid(color) = &element.fill
            && color.as_str() != base_color
        {
            let _ = writeln!(css, "  background-color: {color};");
        }
        css.push_str("}\n");
    }

    css
}
