use std::hash::{BuildHasher, Hasher};

use kurbo::Point;

use crate::{
    animation::{self, AnimationDescriptor},
    color::{self, Fill, GradientDef},
    error::WhorlResult,
    model::{ShapeKind, SpinnerConfig},
    shape::{self, CONCRETE_SHAPES, Primitive},
    variation,
};

/// The compiled form of one spinner: every element fully resolved, plus the
/// layout metadata and call-scoped random draws all emitters share. Never
/// mutated after creation; re-emitting it never resamples.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompiledGeometry {
    pub elements: Vec<Element>,
    pub viewport: Viewport,
    pub gradient: Option<GradientDef>,
    pub group_animation: Option<AnimationDescriptor>,
    pub draws: RandomDraws,
}

/// One fully-resolved drawable primitive.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Element {
    pub index: u32,           // angular slot
    pub duplicate_index: u32, // which of `copies` at that slot
    pub shape: ShapeKind,     // resolved, never `random`
    pub center: Point,
    pub size: f64,
    pub angle_rad: f64,
    pub final_radius: f64, // ring radius + duplicate offset
    pub primitive: Primitive,
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    pub animation: Option<AnimationDescriptor>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// Square viewport centered at the origin. `extent` is the one sizing
/// formula every emitter must agree on to avoid clipping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub extent: f64,
    pub effective_radius: f64,
    pub max_copy_offset: f64,
}

impl Viewport {
    fn for_config(config: &SpinnerConfig) -> Self {
        let max_copy_offset = if config.copies > 1 {
            f64::from(config.copies - 1) / 2.0 * config.copy_spread
        } else {
            0.0
        };
        let effective_radius = config.radius + max_copy_offset;
        Self {
            extent: effective_radius * 2.0 + config.size * 2.0,
            effective_radius,
            max_copy_offset,
        }
    }

    pub fn min_xy(self) -> f64 {
        -self.extent / 2.0
    }
}

/// Random values sampled once per compile and held fixed for the lifetime
/// of the result. Empty when the corresponding variation is inactive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RandomDraws {
    pub radius_factors: Vec<f64>, // per angular slot, in [0.8, 1.2)
    pub shapes: Vec<ShapeKind>,   // per element, from the six concrete kinds
}

impl RandomDraws {
    fn sample(config: &SpinnerConfig, seed: u64) -> Self {
        let mut rng = SplitMix64::new(seed);

        let radius_factors = if config.radius_variation == crate::model::RadiusVariation::Random {
            (0..config.count).map(|_| 0.8 + rng.next_f64() * 0.4).collect()
        } else {
            Vec::new()
        };

        let shapes = if config.shape == ShapeKind::Random {
            (0..config.element_count())
                .map(|_| CONCRETE_SHAPES[(rng.next_u64() % 6) as usize])
                .collect()
        } else {
            Vec::new()
        };

        Self {
            radius_factors,
            shapes,
        }
    }
}

/// Compile with a caller-supplied seed. Fully deterministic: the same
/// config and seed always produce an identical [`CompiledGeometry`].
#[tracing::instrument(skip(config), fields(count = config.count, copies = config.copies))]
pub fn compile_seeded(config: &SpinnerConfig, seed: u64) -> WhorlResult<CompiledGeometry> {
    config.validate()?;

    let draws = RandomDraws::sample(config, seed);
    let stroke = config.stroke.then(|| Stroke {
        color: config.stroke_color.clone(),
        width: config.stroke_width,
    });

    let mut elements = Vec::with_capacity(config.element_count());
    for i in 0..config.count {
        let ring_radius = variation::radius_at(
            config.radius_variation,
            config.radius,
            i,
            config.count,
            &draws.radius_factors,
        );
        let size = variation::size_at(config.size_variation, config.size, i, config.count);

        for j in 0..config.copies {
            let angle = f64::from(i) / f64::from(config.count) * std::f64::consts::TAU;
            let copy_offset = if config.copies > 1 {
                (f64::from(j) - f64::from(config.copies - 1) / 2.0) * config.copy_spread
            } else {
                0.0
            };
            let final_radius = ring_radius + copy_offset;
            let center = Point::new(final_radius * angle.cos(), final_radius * angle.sin());

            let flat = (i * config.copies + j) as usize;
            let shape = match config.shape {
                ShapeKind::Random => draws
                    .shapes
                    .get(flat)
                    .copied()
                    .unwrap_or(ShapeKind::Circle),
                concrete => concrete,
            };

            elements.push(Element {
                index: i,
                duplicate_index: j,
                shape,
                center,
                size,
                angle_rad: angle,
                final_radius,
                primitive: shape::primitive_at(shape, center, size, angle),
                fill: color::resolve_fill(config.gradient_type, &config.colors, i, j),
                stroke: stroke.clone(),
                animation: animation::bind_element(config, i),
            });
        }
    }

    Ok(CompiledGeometry {
        elements,
        viewport: Viewport::for_config(config),
        gradient: color::gradient_def(config),
        group_animation: animation::bind_group(config),
        draws,
    })
}

/// Compile with a seed drawn once from process entropy. The draws travel
/// inside the result, so rendering the same compiled geometry repeatedly is
/// stable; only a fresh compile resamples.
pub fn compile(config: &SpinnerConfig) -> WhorlResult<CompiledGeometry> {
    compile_seeded(config, entropy_seed())
}

fn entropy_seed() -> u64 {
    std::collections::hash_map::RandomState::new()
        .build_hasher()
        .finish()
}

// SplitMix64, seeded. Small and deterministic; good enough for visual
// jitter, not for anything cryptographic.
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        // 53 high bits -> [0, 1).
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
