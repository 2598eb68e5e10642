//! Structured draw model for interactive display.
//!
//! The live renderer consumes this instead of markup text: one instruction
//! per element, in engine order, plus the document-level definitions. Every
//! shape/animation/gradient/shadow/stroke combination is representable.

use crate::{
    animation::{self, AnimationDescriptor, KeyframeTarget},
    color::{Fill, GradientDef},
    compile::{CompiledGeometry, Stroke, Viewport},
    markup::DOC_SIZE_PX,
    model::SpinnerConfig,
    shape::Primitive,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderModel {
    pub width: u32,  // logical pixels
    pub height: u32, // logical pixels
    pub viewport: Viewport,
    pub keyframes: Option<String>, // CSS text for the active animation kind
    pub gradient: Option<GradientDef>,
    pub shadow: Option<ShadowFilter>,
    pub group_animation: Option<AnimationDescriptor>,
    pub instructions: Vec<DrawInstruction>,
}

/// Drop-shadow filter parameters, present iff the config enables shadow.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShadowFilter {
    pub dx: f64,
    pub dy: f64,
    pub std_deviation: f64,
    pub color: String,
    pub opacity: f64,
}

/// One element, ready to draw.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DrawInstruction {
    pub primitive: Primitive,
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    pub shadowed: bool,
    pub animation: Option<AnimationDescriptor>,
}

/// Build the live-render model for one compiled spinner.
pub fn render_model(geo: &CompiledGeometry, config: &SpinnerConfig) -> RenderModel {
    let instructions = geo
        .elements
        .iter()
        .map(|element| DrawInstruction {
            primitive: element.primitive.clone(),
            fill: element.fill.clone(),
            stroke: element.stroke.clone(),
            shadowed: config.shadow,
            animation: element.animation.clone(),
        })
        .collect();

    RenderModel {
        width: DOC_SIZE_PX,
        height: DOC_SIZE_PX,
        viewport: geo.viewport,
        keyframes: animation::keyframes(config.animation_type, config.shape, KeyframeTarget::Svg)
            .map(str::to_string),
        gradient: geo.gradient.clone(),
        shadow: config.shadow.then(|| ShadowFilter {
            dx: config.shadow_offset_x,
            dy: config.shadow_offset_y,
            std_deviation: config.shadow_blur,
            color: config.shadow_color.clone(),
            opacity: config.shadow_opacity,
        }),
        group_animation: geo.group_animation.clone(),
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_seeded;
    use crate::model::{AnimationKind, GradientType, SpinnerConfig};

    fn model_for(config: &SpinnerConfig) -> RenderModel {
        render_model(&compile_seeded(config, 0).unwrap(), config)
    }

    #[test]
    fn one_instruction_per_element_in_engine_order() {
        let config = SpinnerConfig {
            count: 6,
            copies: 2,
            ..SpinnerConfig::default()
        };
        let geo = compile_seeded(&config, 0).unwrap();
        let model = render_model(&geo, &config);
        assert_eq!(model.instructions.len(), 12);
        for (instr, element) in model.instructions.iter().zip(&geo.elements) {
            assert_eq!(
                serde_json::to_string(&instr.primitive).unwrap(),
                serde_json::to_string(&element.primitive).unwrap()
            );
            assert_eq!(instr.fill, element.fill);
        }
    }

    #[test]
    fn document_level_defs_mirror_the_config() {
        let config = SpinnerConfig {
            gradient_type: GradientType::Radial,
            shadow: true,
            animation_type: AnimationKind::Pulse,
            ..SpinnerConfig::default()
        };
        let model = model_for(&config);
        assert_eq!(model.width, 250);
        assert!(model.gradient.is_some());
        let shadow = model.shadow.unwrap();
        assert_eq!(shadow.std_deviation, 3.0);
        assert!(model.keyframes.unwrap().contains("@keyframes pulse"));
        assert!(model.group_animation.is_none());
    }

    #[test]
    fn grouped_animation_lands_on_the_model_group() {
        let config = SpinnerConfig {
            animation_type: AnimationKind::Spiral,
            ..SpinnerConfig::default()
        };
        let model = model_for(&config);
        assert!(model.group_animation.is_some());
        assert!(model.instructions.iter().all(|i| i.animation.is_none()));
    }

    #[test]
    fn model_serializes_to_json() {
        let model = model_for(&SpinnerConfig::default());
        let s = serde_json::to_string(&model).unwrap();
        let de: RenderModel = serde_json::from_str(&s).unwrap();
        assert_eq!(serde_json::to_string(&de).unwrap(), s);
    }
}
