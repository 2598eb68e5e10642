use whorl::{AnimationKind, Easing, ShapeKind, SpinnerConfig, compile_seeded, emit_svg};

#[test]
fn json_fixture_validates() {
    let s = include_str!("data/spinner.json");
    let config: SpinnerConfig = serde_json::from_str(s).unwrap();
    config.validate().unwrap();

    assert_eq!(config.shape, ShapeKind::Star);
    assert_eq!(config.animation_type, AnimationKind::Pulse);
    assert_eq!(config.easing, Easing::Spring);
}

#[test]
fn json_fixture_compiles_and_emits() {
    let s = include_str!("data/spinner.json");
    let config: SpinnerConfig = serde_json::from_str(s).unwrap();
    let geo = compile_seeded(&config, 0).unwrap();
    assert_eq!(geo.elements.len(), 24);

    let svg = emit_svg(&geo, &config);
    assert!(svg.contains("@keyframes pulse"));
    assert!(svg.contains("animation-timing-function: cubic-bezier(0.68, -0.55, 0.27, 1.55)"));
    assert!(svg.contains("feDropShadow"));
    assert!(svg.contains("<polygon"));
}

#[test]
fn config_roundtrips_through_json() {
    let s = include_str!("data/spinner.json");
    let config: SpinnerConfig = serde_json::from_str(s).unwrap();
    let re = serde_json::to_string(&config).unwrap();
    let back: SpinnerConfig = serde_json::from_str(&re).unwrap();
    assert_eq!(back, config);
}
