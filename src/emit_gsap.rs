//! HTML fragment + GSAP timeline script emitter.
//!
//! Reuses the SVG fragment with inline animation styling stripped and class
//! markers added, then drives the same keyframe semantics through explicit
//! `to` tweens on one shared timeline.

use std::fmt::Write as _;

use crate::{
    compile::CompiledGeometry,
    emit_svg::{FragmentMode, svg_document},
    markup,
    model::{AnimationKind, PlaybackMode, SpinnerConfig},
};

/// Markup + script pair for the GSAP export.
#[derive(Clone, Debug, PartialEq)]
pub struct GsapExport {
    pub html: String,
    pub js: String,
}

/// Render one compiled spinner as a classed SVG fragment plus the GSAP
/// script reproducing its animation.
pub fn emit_gsap(geo: &CompiledGeometry, config: &SpinnerConfig) -> GsapExport {
    let html = svg_document(geo, config, FragmentMode::Classed);

    if config.animation_type == AnimationKind::None {
        return GsapExport {
            html,
            js: "// Animation type is set to 'none'. No JavaScript is needed for a static image."
                .to_string(),
        };
    }

    tracing::debug!(kind = config.animation_type.name(), "emitting gsap export");

    GsapExport {
        html,
        js: script(config),
    }
}

fn script(config: &SpinnerConfig) -> String {
    // GSAP counts `repeat` on top of the first play, so a fixed repeat of N
    // plays N times with repeat = N - 1.
    let repeat = match config.playback_mode {
        PlaybackMode::Loop | PlaybackMode::Alternate => -1,
        PlaybackMode::Once => 0,
        PlaybackMode::Repeat => i64::from(config.repeat_count) - 1,
    };
    let yoyo = config.playback_mode == PlaybackMode::Alternate;
    let ease = config.easing.gsap_name();
    let duration = config.duration;
    let stagger = markup::num(config.stagger);

    let mut js = String::from(
        "// Make sure to include the GSAP library, e.g., from a CDN:\n\
         // <script src=\"https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/gsap.min.js\"></script>\n\
         \n\
         gsap.registerPlugin();\n\
         \n\
         const elements = \".spinner-element\";\n",
    );
    let _ = writeln!(js, "const tl = gsap.timeline({{ repeat: {repeat}, yoyo: {yoyo} }});");
    js.push('\n');

    match config.animation_type {
        AnimationKind::Chase | AnimationKind::Fade => {
            push_out_and_back(&mut js, "scale: 0.3, opacity: 0.3", "scale: 1, opacity: 1", duration, &stagger, ease);
        }
        AnimationKind::Pulse => {
            push_out_and_back(&mut js, "scale: 1.3", "scale: 1", duration, &stagger, ease);
        }
        AnimationKind::Wave => {
            push_out_and_back(&mut js, "y: -20", "y: 0", duration, &stagger, ease);
        }
        AnimationKind::Orbit | AnimationKind::Spiral => {
            let _ = writeln!(
                js,
                "gsap.to('.spinner-group', {{\n  rotation: 360,\n  duration: {},\n  ease: 'none',\n  repeat: -1,\n}});",
                markup::num(duration)
            );
            if config.animation_type == AnimationKind::Spiral {
                let _ = writeln!(
                    js,
                    "gsap.to(elements, {{\n  scale: 0,\n  opacity: 0,\n  duration: {},\n  ease: 'power1.in',\n  repeat: -1,\n}});",
                    markup::num(duration)
                );
            }
        }
        AnimationKind::Distort => {
            let _ = writeln!(
                js,
                "// Animation type 'distort' is not yet fully supported for GSAP export."
            );
        }
        AnimationKind::None => unreachable!("handled before script generation"),
    }

    js
}

// Two chained half-duration tweens: out to the peak state, back to rest.
fn push_out_and_back(
    js: &mut String,
    out_props: &str,
    back_props: &str,
    duration: f64,
    stagger: &str,
    ease: &str,
) {
    let half = markup::num(duration / 2.0);
    let _ = writeln!(
        js,
        "tl.to(elements, {{\n  {out_props},\n  duration: {half},\n  stagger: {{ each: {stagger}, from: 'start' }},\n  ease: '{ease}',\n}}).to(elements, {{\n  {back_props},\n  duration: {half},\n  stagger: {{ each: {stagger}, from: 'start' }},\n  ease: '{ease}',\n}});"
    );
}
