//! whorl compiles a declarative spinner configuration into geometry and
//! animation once, then formats that one result into interchangeable
//! export artifacts.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build or deserialize a [`SpinnerConfig`]
//! 2. **Compile**: `SpinnerConfig -> CompiledGeometry` (positioned, sized,
//!    colored primitives plus bound animation descriptors)
//! 3. **Emit**: format the compiled geometry as a live [`RenderModel`], a
//!    standalone animated SVG document, an HTML + keyframe stylesheet pair,
//!    or an HTML + GSAP timeline script pair
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One geometry source**: every emitter is a thin formatter over
//!   [`CompiledGeometry`]; none re-derives angles, offsets or colors.
//! - **Deterministic-by-default**: [`compile_seeded`] is pure; random shape
//!   and radius draws are sampled once per compile and travel inside the
//!   result, so re-emitting never resamples.
//! - **No IO in the core**: compilation and emission produce in-memory
//!   values and text only.
#![forbid(unsafe_code)]

pub mod animation;
pub mod color;
pub mod compile;
pub mod dsl;
pub mod emit_css;
pub mod emit_gsap;
pub mod emit_svg;
pub mod error;
pub mod markup;
pub mod model;
pub mod render_model;
pub mod shape;
pub mod variation;

pub use animation::{AnimationDescriptor, AnimationSubject, Direction, IterationCount};
pub use color::{Fill, GradientDef, GradientKind};
pub use compile::{CompiledGeometry, Element, RandomDraws, Stroke, Viewport, compile, compile_seeded};
pub use dsl::SpinnerConfigBuilder;
pub use emit_css::{CssExport, emit_css};
pub use emit_gsap::{GsapExport, emit_gsap};
pub use emit_svg::emit_svg;
pub use error::{WhorlError, WhorlResult};
pub use model::{
    AnimationKind, ColorStop, Easing, GradientType, PlaybackMode, RadiusVariation, ShapeKind,
    SizeVariation, SpinnerConfig,
};
pub use render_model::{DrawInstruction, RenderModel, ShadowFilter, render_model};
pub use shape::Primitive;
