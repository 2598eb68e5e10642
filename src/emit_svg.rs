//! Self-contained animated SVG document emitter.

use std::fmt::Write as _;

use crate::{
    animation::{self, KeyframeTarget},
    color::{Fill, GradientDef, GradientKind},
    compile::CompiledGeometry,
    markup::{self, DOC_SIZE_PX},
    model::SpinnerConfig,
};

/// How per-element markup is decorated: inline animation styles for the
/// standalone document, or bare class names for script-driven exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FragmentMode {
    Inline,
    Classed,
}

/// Render one compiled spinner as a standalone animated SVG document.
pub fn emit_svg(geo: &CompiledGeometry, config: &SpinnerConfig) -> String {
    svg_document(geo, config, FragmentMode::Inline)
}

pub(crate) fn svg_document(
    geo: &CompiledGeometry,
    config: &SpinnerConfig,
    mode: FragmentMode,
) -> String {
    tracing::debug!(elements = geo.elements.len(), ?mode, "emitting svg document");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg width=\"{DOC_SIZE_PX}\" height=\"{DOC_SIZE_PX}\" viewBox=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" style=\"overflow: visible;\">",
        markup::view_box(geo.viewport)
    );

    if mode == FragmentMode::Inline
        && let Some(body) =
            animation::keyframes(config.animation_type, config.shape, KeyframeTarget::Svg)
    {
        let _ = writeln!(out, "  <style>\n    {body}\n  </style>");
    }

    out.push_str("  <defs>\n");
    if let Some(gradient) = &geo.gradient {
        let _ = writeln!(out, "    {}", gradient_markup(gradient));
    }
    if config.shadow {
        let _ = writeln!(out, "    {}", shadow_filter_markup(config));
    }
    out.push_str("  </defs>\n");

    let _ = writeln!(out, "  {}", group_open_tag(geo, mode));
    for element in &geo.elements {
        let mut attrs = String::new();
        match mode {
            FragmentMode::Inline => {
                if let Some(desc) = &element.animation {
                    let _ = write!(attrs, " style=\"{}\"", markup::animation_style(desc));
                }
            }
            FragmentMode::Classed => attrs.push_str(" class=\"spinner-element\""),
        }
        let _ = write!(attrs, " fill=\"{}\"", fill_attr(&element.fill));
        if config.shadow {
            attrs.push_str(" filter=\"url(#spinner-shadow)\"");
        }
        match &element.stroke {
            Some(stroke) => {
                let _ = write!(
                    attrs,
                    " stroke=\"{}\" stroke-width=\"{}\"",
                    stroke.color,
                    markup::num(stroke.width)
                );
            }
            None => attrs.push_str(" stroke=\"none\" stroke-width=\"0\""),
        }
        attrs.push_str(" transform-origin=\"center center\"");

        let _ = writeln!(
            out,
            "    {}",
            markup::primitive_element(&element.primitive, &attrs)
        );
    }
    out.push_str("  </g>\n</svg>");
    out
}

fn group_open_tag(geo: &CompiledGeometry, mode: FragmentMode) -> String {
    match mode {
        FragmentMode::Classed => "<g class=\"spinner-group\">".to_string(),
        FragmentMode::Inline => match &geo.group_animation {
            Some(desc) => format!(
                "<g style=\"{} transform-origin: center center;\">",
                markup::animation_style(desc)
            ),
            None => "<g>".to_string(),
        },
    }
}

fn fill_attr(fill: &Fill) -> String {
    match fill {
        Fill::Solid(color) => color.clone(),
        Fill::Gradient => "url(#spinner-gradient)".to_string(),
    }
}

fn gradient_markup(gradient: &GradientDef) -> String {
    let mut stops = String::new();
    for stop in &gradient.stops {
        let _ = write!(
            stops,
            "<stop offset=\"{}%\" stop-color=\"{}\" />",
            markup::num(stop.position),
            stop.color
        );
    }
    match gradient.kind {
        GradientKind::Linear => format!(
            "<linearGradient id=\"spinner-gradient\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">{stops}</linearGradient>"
        ),
        GradientKind::Radial => {
            format!("<radialGradient id=\"spinner-gradient\">{stops}</radialGradient>")
        }
    }
}

fn shadow_filter_markup(config: &SpinnerConfig) -> String {
    format!(
        "<filter id=\"spinner-shadow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feDropShadow dx=\"{}\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/></filter>",
        markup::num(config.shadow_offset_x),
        markup::num(config.shadow_offset_y),
        markup::num(config.shadow_blur),
        config.shadow_color,
        markup::num(config.shadow_opacity)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_seeded;
    use crate::model::{AnimationKind, GradientType, ShapeKind, SpinnerConfig};

    fn emit(config: &SpinnerConfig) -> String {
        emit_svg(&compile_seeded(config, 0).unwrap(), config)
    }

    #[test]
    fn document_has_fixed_pixel_size_and_engine_view_box() {
        let svg = emit(&SpinnerConfig::default());
        assert!(svg.starts_with("<svg width=\"250\" height=\"250\""));
        // radius 80, copies 2 spread 10 -> offset 5, size 15 -> extent 200.
        assert!(svg.contains("viewBox=\"-100 -100 200 200\""));
    }

    #[test]
    fn unanimated_document_has_no_style_block() {
        let svg = emit(&SpinnerConfig::default());
        assert!(!svg.contains("<style>"));
        assert!(!svg.contains("animation-name"));
    }

    #[test]
    fn per_element_animation_is_inlined_with_stagger() {
        let config = SpinnerConfig {
            animation_type: AnimationKind::Chase,
            count: 4,
            copies: 1,
            stagger: 0.25,
            ..SpinnerConfig::default()
        };
        let svg = emit(&config);
        assert!(svg.contains("@keyframes chase"));
        assert!(svg.contains("animation-delay: 0s"));
        assert!(svg.contains("animation-delay: 0.75s"));
        // Per-element kinds leave the group untouched.
        assert!(svg.contains("  <g>\n"));
    }

    #[test]
    fn grouped_animation_sits_on_the_group_only() {
        let config = SpinnerConfig {
            animation_type: AnimationKind::Orbit,
            ..SpinnerConfig::default()
        };
        let svg = emit(&config);
        assert!(svg.contains("<g style=\"animation-name: orbit;"));
        // The group carries the only animation style in the document.
        assert_eq!(svg.matches("animation-name").count(), 1);
    }

    #[test]
    fn gradient_defs_present_only_for_continuous_gradients() {
        let flat = emit(&SpinnerConfig::default());
        assert!(!flat.contains("linearGradient"));

        let config = SpinnerConfig {
            gradient_type: GradientType::Linear,
            ..SpinnerConfig::default()
        };
        let svg = emit(&config);
        assert_eq!(svg.matches("<linearGradient").count(), 1);
        assert!(svg.contains("fill=\"url(#spinner-gradient)\""));
        assert!(
            svg.contains("<stop offset=\"0%\" stop-color=\"#6366f1\" /><stop offset=\"100%\" stop-color=\"#a5b4fc\" />")
        );
    }

    #[test]
    fn shadow_filter_present_iff_enabled() {
        let plain = emit(&SpinnerConfig::default());
        assert!(!plain.contains("feDropShadow"));

        let config = SpinnerConfig {
            shadow: true,
            ..SpinnerConfig::default()
        };
        let svg = emit(&config);
        assert_eq!(svg.matches("<filter id=\"spinner-shadow\"").count(), 1);
        assert!(svg.contains("filter=\"url(#spinner-shadow)\""));
        assert!(svg.contains("feDropShadow dx=\"2\" dy=\"3\" stdDeviation=\"3\""));
    }

    #[test]
    fn stroke_attributes_follow_config() {
        let config = SpinnerConfig {
            stroke: true,
            stroke_width: 2.0,
            stroke_color: "#ffffff".to_string(),
            ..SpinnerConfig::default()
        };
        let svg = emit(&config);
        assert!(svg.contains("stroke=\"#ffffff\" stroke-width=\"2\""));

        let plain = emit(&SpinnerConfig::default());
        assert!(plain.contains("stroke=\"none\" stroke-width=\"0\""));
    }

    #[test]
    fn classed_fragment_strips_styles_and_marks_group() {
        let config = SpinnerConfig {
            animation_type: AnimationKind::Pulse,
            ..SpinnerConfig::default()
        };
        let geo = compile_seeded(&config, 0).unwrap();
        let fragment = svg_document(&geo, &config, FragmentMode::Classed);
        assert!(fragment.contains("<g class=\"spinner-group\">"));
        assert!(fragment.contains("class=\"spinner-element\""));
        assert!(!fragment.contains("<style>"));
        assert!(!fragment.contains("animation-name"));
    }

    #[test]
    fn heart_elements_emit_bezier_paths() {
        let config = SpinnerConfig {
            shape: ShapeKind::Heart,
            count: 1,
            copies: 1,
            ..SpinnerConfig::default()
        };
        let svg = emit(&config);
        assert!(svg.contains("<path d=\"M "));
        assert!(svg.contains(" Z\""));
    }
}
