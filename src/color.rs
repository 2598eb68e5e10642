use crate::model::{ColorStop, GradientType, SpinnerConfig};

/// Last resort when the color list is empty. Identical in every emitter.
pub const FALLBACK_COLOR: &str = "#000000";

/// Resolved paint for one element: either a literal color or a reference to
/// the single document-level gradient definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Fill {
    Solid(String),
    Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientKind {
    Linear,
    Radial,
}

/// The at-most-one gradient a document defines. Stops are sorted ascending
/// by position before any emitter sees them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientDef {
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
}

/// Resolve the fill for element `(index, duplicate_index)`.
///
/// Total over any color list: a missing indexed color falls back to the
/// first entry, and an empty list falls back to [`FALLBACK_COLOR`].
pub fn resolve_fill(
    gradient_type: GradientType,
    colors: &[String],
    index: u32,
    duplicate_index: u32,
) -> Fill {
    match gradient_type {
        GradientType::None => Fill::Solid(indexed_or_fallback(colors, 0)),
        GradientType::PerDuplicate => {
            Fill::Solid(indexed_or_fallback(colors, duplicate_index as usize))
        }
        GradientType::Sweep => Fill::Solid(indexed_or_fallback(colors, index as usize)),
        GradientType::Linear | GradientType::Radial => Fill::Gradient,
    }
}

/// The document-level gradient definition, present iff the config's color
/// mode is a continuous gradient.
pub fn gradient_def(config: &SpinnerConfig) -> Option<GradientDef> {
    let kind = match config.gradient_type {
        GradientType::Linear => GradientKind::Linear,
        GradientType::Radial => GradientKind::Radial,
        _ => return None,
    };

    let mut stops = config.gradient_stops.clone();
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    Some(GradientDef { kind, stops })
}

fn indexed_or_fallback(colors: &[String], idx: usize) -> String {
    if colors.is_empty() {
        return FALLBACK_COLOR.to_string();
    }
    colors[idx % colors.len()].clone()
}
