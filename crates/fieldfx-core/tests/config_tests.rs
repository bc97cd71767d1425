use fieldfx_core::config::EffectConfig;
use fieldfx_core::error::ConfigError;
use fieldfx_core::variants::Variant;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Field name of an `Invalid` error, panicking on any other outcome.
fn invalid_field(result: Result<EffectConfig, ConfigError>) -> &'static str {
    match result {
        Err(ConfigError::Invalid { field, .. }) => field,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 1. Defaults and partial documents
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    EffectConfig::default().validate().expect("defaults must validate");
}

#[test]
fn test_empty_object_is_default() {
    let config = EffectConfig::from_json("{}").expect("empty object parses");
    assert_eq!(config, EffectConfig::default());
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let config = EffectConfig::from_json(r#"{ "liquid_burst": { "clear_radius": 240.0 }, "max_dt": 0.033 }"#)
        .expect("partial config parses");
    let defaults = EffectConfig::default();

    assert_eq!(config.liquid_burst.clear_radius, 240.0);
    assert_eq!(config.max_dt, 0.033);
    assert_eq!(config.liquid_burst.particle_count, defaults.liquid_burst.particle_count);
    assert_eq!(config.gravity_field, defaults.gravity_field);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = EffectConfig::default();
    let json = serde_json::to_string(&config).expect("serialises");
    assert_eq!(EffectConfig::from_json(&json).expect("parses back"), config);
}

// ---------------------------------------------------------------------------
// 2. Rejections
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_json_is_parse_error() {
    let err = EffectConfig::from_json("{ max_dt: ").expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn test_zero_max_speed_rejected() {
    let field = invalid_field(EffectConfig::from_json(r#"{ "gravity_field": { "max_speed": 0.0 } }"#));
    assert_eq!(field, "gravity_field.max_speed");
}

#[test]
fn test_zero_trail_capacity_rejected() {
    let field = invalid_field(EffectConfig::from_json(r#"{ "gravity_field": { "trail_min": 0 } }"#));
    assert_eq!(field, "gravity_field.trail_min");
}

#[test]
fn test_damping_outside_unit_interval_rejected() {
    let field = invalid_field(EffectConfig::from_json(r#"{ "liquid_burst": { "damping": 1.5 } }"#));
    assert_eq!(field, "liquid_burst.damping");
}

#[test]
fn test_delay_longer_than_burst_rejected() {
    let field = invalid_field(EffectConfig::from_json(
        r#"{ "liquid_burst": { "burst_duration": 0.5, "max_delay": 0.6 } }"#,
    ));
    assert_eq!(field, "liquid_burst.max_delay");
}

#[test]
fn test_huge_clear_radius_is_accepted() {
    let config = EffectConfig::from_json(r#"{ "liquid_burst": { "clear_radius": 5000.0 } }"#)
        .expect("an oversized clear radius is handled by bounded sampling");
    assert_eq!(config.liquid_burst.clear_radius, 5000.0);
}

#[test]
fn test_error_messages_name_the_field() {
    let err = EffectConfig::from_json(r#"{ "max_dt": -1.0 }"#).expect_err("negative dt");
    let message = err.to_string();
    assert!(message.contains("max_dt"), "message: {message}");
}

// ---------------------------------------------------------------------------
// 3. Variant names
// ---------------------------------------------------------------------------

#[test]
fn test_variant_names_parse() {
    for variant in Variant::ALL {
        assert_eq!(variant.name().parse::<Variant>().expect("known name"), variant);
    }
    assert_eq!("Liquid_Burst".parse::<Variant>().expect("normalised"), Variant::LiquidBurst);
}

#[test]
fn test_unknown_variant_rejected() {
    match "sparkles".parse::<Variant>() {
        Err(ConfigError::UnknownVariant(name)) => assert_eq!(name, "sparkles"),
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn test_variant_serde_uses_kebab_case() {
    let json = serde_json::to_string(&Variant::CircleBurst).expect("serialises");
    assert_eq!(json, "\"circle-burst\"");
}
