use periodic_helix::analysis::spinor::spinor_correction;
use periodic_helix::chemistry::tables::E0;
use periodic_helix::{
    combine, embed, predict, ElementRecord, AngularEnergyModel, BondType, CompoundModel, EmbeddingModel,
    EnergyModel, ExplorerState, HelicalRibbon, HelixError, Jitter, ModelConfig, Registry,
    SelectionSet, SpinorPosition, StabilityClass, SymmetryEnergyModel,
};

const EPS: f64 = 1e-9;

#[test]
fn test_period_one_arc() {
    let ribbon = HelicalRibbon::default();
    for e in Registry::period(1) {
        let p = ribbon.embed_element(e);
        let expected_r = 0.8 * (1.0 + ribbon.breathing(Some(e.z)));
        assert!((p.radius() - expected_r).abs() < EPS, "{}", e.symbol);

        let angle = p.y.atan2(p.x).to_degrees();
        let expected = if e.symbol == "He" { 120.0 } else { -120.0 };
        assert!((angle - expected).abs() < 1e-6, "{} at {}", e.symbol, angle);
    }
}

#[test]
fn test_axis_elements_on_layering_axis() {
    for e in Registry::all().iter().filter(|e| e.axis) {
        let p = embed(e.period, e.group, e.block, Some(e.z));
        assert!(p.radius() < EPS, "{} off axis", e.symbol);
    }
}

#[test]
fn test_noble_gases_follow_inverse_law() {
    let model = AngularEnergyModel { spinor_correction: false, ..Default::default() };
    for e in Registry::all().iter().filter(|e| e.group.is(18) && e.period >= 2) {
        let expected = 11.0 * E0 / (e.period as f64).powf(2.0 / 3.0);
        assert!((model.predict_element(e) - expected).abs() < EPS, "{}", e.symbol);
    }
}

#[test]
fn test_spinor_correction_applied_on_top() {
    let with = AngularEnergyModel::default();
    let without = AngularEnergyModel { spinor_correction: false, ..Default::default() };
    let n = Registry::lookup("N").unwrap();
    let delta = with.predict_element(n) - without.predict_element(n);
    assert!((delta - spinor_correction(7)).abs() < EPS);
}

#[test]
fn test_spinor_nodes() {
    assert_eq!(periodic_helix::spinor_phase(18).position, SpinorPosition::Node);
    assert_eq!(periodic_helix::spinor_phase(36).position, SpinorPosition::Node);
    assert_eq!(periodic_helix::spinor_phase(9).position, SpinorPosition::Node);
}

#[test]
fn test_every_element_predicts_finite_energy() {
    let angular = AngularEnergyModel::default();
    let symmetry = SymmetryEnergyModel::default();
    for e in Registry::all() {
        assert!(angular.predict_element(e).is_finite(), "{}", e.symbol);
        assert!(symmetry.predict_element(e).is_finite(), "{}", e.symbol);
    }
}

#[test]
fn test_carbon_scenario() {
    let selection = Registry::resolve(&["C"]).unwrap();
    let p = predict(&selection).unwrap();
    assert!(p.net_torque.abs() < EPS);
    assert!((p.stability - 1.0).abs() < EPS);
    assert_eq!(p.bond_type, BondType::CovalentNetwork);
    assert_eq!(p.stability_class, StabilityClass::GeometricResonance);
}

#[test]
fn test_tungsten_carbide_uses_hybrid_penalty() {
    let selection = Registry::resolve(&["W", "C"]).unwrap();
    let p = predict(&selection).unwrap();
    assert!((p.hardness_terms.period_exponent - 1.5).abs() < EPS);
    assert!((p.hardness_terms.period_base - 12f64.sqrt()).abs() < EPS);
}

#[test]
fn test_empty_selection_is_none() {
    assert!(predict(&[]).is_none());
    let suite = ModelConfig::default().build();
    assert!(suite.compound.predict(&[]).is_none());
}

#[test]
fn test_predict_is_idempotent() {
    let selection = Registry::resolve(&["Fe", "Cr", "Ni", "C"]).unwrap();
    assert_eq!(predict(&selection), predict(&selection));
}

#[test]
fn test_seeded_jitter_is_reproducible() {
    let config = ModelConfig { jitter: Jitter::Seeded(7), ..Default::default() };
    let selection = Registry::resolve(&["Fe", "Co"]).unwrap();
    let a = config.build().compound.predict(&selection);
    let b = config.build().compound.predict(&selection);
    assert_eq!(a, b);
}

#[test]
fn test_axis_bonus_monotone() {
    let base = Registry::resolve(&["Fe"]).unwrap();
    let plus_one = Registry::resolve(&["Fe", "C"]).unwrap();
    let plus_two = Registry::resolve(&["Fe", "C", "Si"]).unwrap();
    let bonus = |s: &[&ElementRecord]| predict(s).unwrap().hardness_terms.axis_bonus;
    assert!(bonus(&plus_one) >= bonus(&base));
    assert!(bonus(&plus_two) >= bonus(&plus_one));
}

#[test]
fn test_combine_report() {
    let symbols = vec!["W".to_string(), "C".to_string()];
    let (prediction, text) = combine(&symbols, &ModelConfig::default()).unwrap();
    assert_eq!(prediction.symbols(), vec!["W", "C"]);
    assert!(text.contains("--- Compound: W-C ---"));
    assert!(text.contains("Lines:   1"));
}

#[test]
fn test_combine_rejects_duplicates() {
    let symbols = vec!["Fe".to_string(), "Fe".to_string()];
    assert!(combine(&symbols, &ModelConfig::default()).is_err());
}

#[test]
fn test_selection_errors() {
    let err = SelectionSet::from_symbols(&["H", "He", "Li", "Be", "B"]).unwrap_err();
    assert!(matches!(err, HelixError::SelectionFull { capacity: 4 }));
    assert!(matches!(Registry::lookup("Qq"), Err(HelixError::UnknownElement(_))));
}

#[test]
fn test_config_roundtrip_through_explorer() {
    let json = r#"{ "energy": { "variant": "symmetry" }, "compound": "basic" }"#;
    let config = ModelConfig::from_json(json).unwrap();
    let mut state = ExplorerState::from_config(&config);

    state.hover(Some("Cu")).unwrap();
    assert!(state.tooltip().unwrap().contains("symmetry"));

    state.toggle("Cu").unwrap();
    state.toggle("Zn").unwrap();
    let p = state.evaluate().unwrap();
    assert!(p.properties.is_none());
    assert_eq!(state.bond_network().unwrap().line_count(), 1);
}
