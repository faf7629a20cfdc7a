use crate::chemistry::tables::{
    covalent_character, fatigue, reference_a, theta_norm, A_AXIS, E0, GAMMA,
};
use crate::core::element::{Block, ElementRecord};
use crate::synthesis::properties::{derive_properties, Jitter, MaterialProperties};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// Scale from the raw hardness composite to a Vickers-like GPa range.
pub const HARDNESS_SCALE: f64 = 8.9;
/// Penalty factor when torques of both signs are present.
pub const BINARY_STRETCH: f64 = 0.85;
/// Torque magnitude that counts towards the binary stretch.
pub const STRETCH_THRESHOLD: f64 = 0.1;
/// Hardness gain per unit of axis weight.
pub const AXIS_BONUS_PER_WEIGHT: f64 = 1.5;
/// Axis weight of a period ≥ 3 axis element (carbon weighs 1).
pub const HEAVY_AXIS_WEIGHT: f64 = 0.29;
pub const NITROGEN_BONUS: f64 = 1.25;

// ============================================================================
// LABELS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StabilityClass {
    #[serde(rename = "Geometric Resonance")]
    GeometricResonance,
    #[serde(rename = "Bulk Tension")]
    BulkTension,
    #[serde(rename = "Metric Relaxation")]
    MetricRelaxation,
}

impl StabilityClass {
    pub fn from_net_torque(net_torque: f64) -> Self {
        if net_torque.abs() < 0.3 {
            StabilityClass::GeometricResonance
        } else if net_torque > 0.0 {
            StabilityClass::BulkTension
        } else {
            StabilityClass::MetricRelaxation
        }
    }
}

impl fmt::Display for StabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StabilityClass::GeometricResonance => "Geometric Resonance",
            StabilityClass::BulkTension => "Bulk Tension",
            StabilityClass::MetricRelaxation => "Metric Relaxation",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BondType {
    #[serde(rename = "Covalent Network")]
    CovalentNetwork,
    Mixed,
    Metallic,
}

impl BondType {
    pub fn from_covalent(covalent_avg: f64) -> Self {
        if covalent_avg > 0.7 {
            BondType::CovalentNetwork
        } else if covalent_avg > 0.3 {
            BondType::Mixed
        } else {
            BondType::Metallic
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BondType::CovalentNetwork => "Covalent Network",
            BondType::Mixed => "Mixed",
            BondType::Metallic => "Metallic",
        })
    }
}

/// Colour band for the connecting lines between selected markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilityBand {
    Green,
    Yellow,
    Red,
}

impl StabilityBand {
    pub fn from_stability(stability: f64) -> Self {
        if stability > 0.8 {
            StabilityBand::Green
        } else if stability > 0.5 {
            StabilityBand::Yellow
        } else {
            StabilityBand::Red
        }
    }

    pub fn rgb(self) -> (f64, f64, f64) {
        match self {
            StabilityBand::Green => (0.20, 0.85, 0.35),
            StabilityBand::Yellow => (0.95, 0.85, 0.20),
            StabilityBand::Red => (0.90, 0.25, 0.20),
        }
    }
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Per-element intermediates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementDetail {
    pub symbol: &'static str,
    /// Metric torque τ = A_actual − A_predicted.
    pub torque: f64,
    /// Derived electronegativity ω.
    pub electronegativity: f64,
    pub covalent_character: f64,
    pub fatigue: f64,
}

/// The five adjustments that make up the hardness composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HardnessTerms {
    pub binary_stretch: bool,
    pub axis_weight: f64,
    pub axis_bonus: f64,
    pub nitrogen_bonus: bool,
    /// Geometric mean (hybrid d + covalent p) or maximum period.
    pub period_base: f64,
    pub period_exponent: f64,
    pub fatigue_boost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundPrediction {
    pub elements: Vec<ElementDetail>,
    pub net_torque: f64,
    pub avg_electronegativity: f64,
    pub avg_a: f64,
    pub avg_covalent: f64,
    pub max_period: u8,
    pub max_fatigue: f64,
    pub stability: f64,
    pub hardness: f64,
    pub hardness_terms: HardnessTerms,
    pub stability_class: StabilityClass,
    pub bond_type: BondType,
    pub band: StabilityBand,
    /// Present only for the extended engine.
    pub properties: Option<MaterialProperties>,
}

impl CompoundPrediction {
    pub fn symbols(&self) -> Vec<&'static str> {
        self.elements.iter().map(|e| e.symbol).collect()
    }
}

// ============================================================================
// PER-ELEMENT QUANTITIES
// ============================================================================

/// τ against the tabulated reference energies, `None` without a table entry.
pub fn tabulated_torque(element: &ElementRecord) -> Option<f64> {
    reference_a(element.symbol).map(|reference| element.a - reference)
}

/// τ as the compound engine uses it. A missing reference falls back to the
/// element's own value, so its torque is zero.
pub fn metric_torque(element: &ElementRecord) -> f64 {
    tabulated_torque(element).unwrap_or_else(|| {
        warn!("no reference energy for {}; torque taken as 0", element.symbol);
        0.0
    })
}

/// ω = 1.625 + 2.916·θ_norm − 0.753·ln(Z)/P^γ + 0.160·τ, floored at 0.5.
pub fn derived_electronegativity(element: &ElementRecord, torque: f64) -> f64 {
    let omega = 1.625 + 2.916 * theta_norm(element.group)
        - 0.753 * (element.z as f64).ln() / (element.period as f64).powf(GAMMA)
        + 0.160 * torque;
    omega.max(0.5)
}

pub fn element_detail(element: &ElementRecord) -> ElementDetail {
    let torque = metric_torque(element);
    ElementDetail {
        symbol: element.symbol,
        torque,
        electronegativity: derived_electronegativity(element, torque),
        covalent_character: covalent_character(element.group, element.period, element.block),
        fatigue: fatigue(element.period),
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Aggregate quantities over a non-empty selection.
#[derive(Debug, Clone)]
pub struct Aggregates {
    pub details: Vec<ElementDetail>,
    pub net_torque: f64,
    pub avg_electronegativity: f64,
    pub avg_a: f64,
    pub avg_covalent: f64,
    pub max_period: u8,
    pub max_fatigue: f64,
    pub stability: f64,
}

impl Aggregates {
    pub fn from_selection(selection: &[&ElementRecord]) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }
        let n = selection.len() as f64;
        let details: Vec<ElementDetail> = selection.iter().map(|e| element_detail(e)).collect();

        let net_torque: f64 = details.iter().map(|d| d.torque).sum();
        let avg_electronegativity = details.iter().map(|d| d.electronegativity).sum::<f64>() / n;
        let avg_covalent = details.iter().map(|d| d.covalent_character).sum::<f64>() / n;
        let avg_a = selection.iter().map(|e| e.a).sum::<f64>() / n;
        let max_period = selection.iter().map(|e| e.period).max().unwrap_or(1);
        let max_fatigue = details.iter().map(|d| d.fatigue).fold(0.0, f64::max);

        Some(Self {
            details,
            net_torque,
            avg_electronegativity,
            avg_a,
            avg_covalent,
            max_period,
            max_fatigue,
            stability: (-net_torque.abs() / E0).exp(),
        })
    }

    pub fn bond_type(&self) -> BondType {
        BondType::from_covalent(self.avg_covalent)
    }
}

/// Axis weight: carbon counts fully, heavier axis elements at 0.29.
pub fn axis_weight(selection: &[&ElementRecord]) -> f64 {
    selection
        .iter()
        .filter(|e| e.axis)
        .map(|e| if e.period == 2 { 1.0 } else { HEAVY_AXIS_WEIGHT })
        .sum()
}

pub fn hardness_terms(selection: &[&ElementRecord], agg: &Aggregates) -> HardnessTerms {
    let n = agg.details.len();

    let binary_stretch = agg.details.iter().any(|d| d.torque > STRETCH_THRESHOLD)
        && agg.details.iter().any(|d| d.torque < -STRETCH_THRESHOLD);

    let weight = axis_weight(selection);
    let nitrogen_bonus = selection.iter().any(|e| e.symbol == "N");

    let has_d = selection.iter().any(|e| e.block == Block::D);
    let has_covalent_p = selection
        .iter()
        .zip(&agg.details)
        .any(|(e, d)| e.block == Block::P && d.covalent_character >= 0.8);

    let (period_base, period_exponent) = if n >= 2 && has_d && has_covalent_p {
        let log_mean = selection.iter().map(|e| (e.period as f64).ln()).sum::<f64>() / n as f64;
        debug!("hardness: hybrid d+p period penalty");
        (log_mean.exp(), 1.5)
    } else {
        (agg.max_period as f64, 2.0)
    };

    let fatigue_boost = if n == 1 && agg.avg_covalent < 0.2 && agg.max_fatigue > 1.2 {
        agg.max_fatigue.powf(1.5)
    } else {
        1.0
    };

    HardnessTerms {
        binary_stretch,
        axis_weight: weight,
        axis_bonus: AXIS_BONUS_PER_WEIGHT * weight,
        nitrogen_bonus,
        period_base,
        period_exponent,
        fatigue_boost,
    }
}

/// Hardness in GPa-like units from the composite terms.
pub fn hardness(agg: &Aggregates, terms: &HardnessTerms) -> f64 {
    let core = agg.stability * (1.0 + 2.0 * agg.avg_covalent) * (agg.avg_a / A_AXIS);
    let stretch = if terms.binary_stretch { BINARY_STRETCH } else { 1.0 };
    let nitrogen = if terms.nitrogen_bonus { NITROGEN_BONUS } else { 1.0 };
    // Period one has no heavier penalty than period two.
    let penalty = (terms.period_base.max(2.0) / 2.0).powf(terms.period_exponent);

    let raw = core * stretch * (1.0 + terms.axis_bonus) * nitrogen / penalty * terms.fatigue_boost;
    HARDNESS_SCALE * raw.max(0.0)
}

// ============================================================================
// ENGINES
// ============================================================================

/// Maps a selection of elements to predicted material properties.
/// Returns `None` for an empty selection.
pub trait CompoundModel: Send + Sync {
    fn predict(&self, selection: &[&ElementRecord]) -> Option<CompoundPrediction>;

    fn name(&self) -> &'static str;
}

fn base_prediction(selection: &[&ElementRecord]) -> Option<(Aggregates, CompoundPrediction)> {
    let agg = Aggregates::from_selection(selection)?;
    let terms = hardness_terms(selection, &agg);
    let prediction = CompoundPrediction {
        elements: agg.details.clone(),
        net_torque: agg.net_torque,
        avg_electronegativity: agg.avg_electronegativity,
        avg_a: agg.avg_a,
        avg_covalent: agg.avg_covalent,
        max_period: agg.max_period,
        max_fatigue: agg.max_fatigue,
        stability: agg.stability,
        hardness: hardness(&agg, &terms),
        hardness_terms: terms,
        stability_class: StabilityClass::from_net_torque(agg.net_torque),
        bond_type: agg.bond_type(),
        band: StabilityBand::from_stability(agg.stability),
        properties: None,
    };
    Some((agg, prediction))
}

/// Three-output engine: stability, hardness and net torque with labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCompoundModel;

impl CompoundModel for BasicCompoundModel {
    fn predict(&self, selection: &[&ElementRecord]) -> Option<CompoundPrediction> {
        base_prediction(selection).map(|(_, p)| p)
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}

/// Full material engine adding transport, thermal, mechanical, magnetic and
/// electronic properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedCompoundModel {
    pub jitter: Jitter,
}

impl ExtendedCompoundModel {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }
}

impl CompoundModel for ExtendedCompoundModel {
    fn predict(&self, selection: &[&ElementRecord]) -> Option<CompoundPrediction> {
        let (agg, mut prediction) = base_prediction(selection)?;
        let mut source = self.jitter.source();
        prediction.properties = Some(derive_properties(selection, &agg, &mut source));
        Some(prediction)
    }

    fn name(&self) -> &'static str {
        "extended"
    }
}

/// Prediction with the extended engine and midpoint jitter.
pub fn predict(selection: &[&ElementRecord]) -> Option<CompoundPrediction> {
    ExtendedCompoundModel::default().predict(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Registry;

    fn select(symbols: &[&str]) -> Vec<&'static ElementRecord> {
        Registry::resolve(symbols).unwrap()
    }

    #[test]
    fn test_empty_selection_is_none() {
        assert!(predict(&[]).is_none());
        assert!(BasicCompoundModel.predict(&[]).is_none());
    }

    #[test]
    fn test_carbon_alone() {
        let p = predict(&select(&["C"])).unwrap();
        assert!(p.net_torque.abs() < 1e-12);
        assert!((p.stability - 1.0).abs() < 1e-12);
        assert_eq!(p.bond_type, BondType::CovalentNetwork);
        assert_eq!(p.stability_class, StabilityClass::GeometricResonance);
        assert_eq!(p.band, StabilityBand::Green);
        assert_eq!(p.elements[0].covalent_character, 1.0);
        assert_eq!(p.hardness_terms.axis_weight, 1.0);
        // (1 + 2)·1·(1 + 1.5)·8.9
        assert!((p.hardness - 3.0 * 2.5 * HARDNESS_SCALE).abs() < 1e-9);
    }

    #[test]
    fn test_tungsten_carbide_uses_hybrid_penalty() {
        let p = predict(&select(&["W", "C"])).unwrap();
        let terms = p.hardness_terms;
        assert_eq!(terms.period_exponent, 1.5);
        assert!((terms.period_base - 12f64.sqrt()).abs() < 1e-9);
        assert_eq!(p.bond_type, BondType::Mixed);
    }

    #[test]
    fn test_pure_metal_uses_max_period() {
        let p = predict(&select(&["W"])).unwrap();
        assert_eq!(p.hardness_terms.period_exponent, 2.0);
        assert_eq!(p.hardness_terms.period_base, 6.0);
        assert!((p.hardness_terms.fatigue_boost - 1.52f64.powf(1.5)).abs() < 1e-12);
    }

    #[test]
    fn test_fatigue_boost_needs_heavy_row() {
        let p = predict(&select(&["Na"])).unwrap();
        assert_eq!(p.hardness_terms.fatigue_boost, 1.0);
    }

    #[test]
    fn test_missing_reference_gives_zero_torque() {
        let fr = Registry::lookup("Fr").unwrap();
        assert_eq!(metric_torque(fr), 0.0);
    }

    #[test]
    fn test_electronegativity_floor() {
        let cs = Registry::lookup("Cs").unwrap();
        assert!(derived_electronegativity(cs, -50.0) == 0.5);
        let f = Registry::lookup("F").unwrap();
        assert!(derived_electronegativity(f, metric_torque(f)) > 3.0);
    }

    #[test]
    fn test_binary_stretch_requires_both_signs() {
        // Fe τ > 0.1, Ag τ < −0.1
        let p = predict(&select(&["Fe", "Ag"])).unwrap();
        assert!(p.hardness_terms.binary_stretch);
        let q = predict(&select(&["Fe", "Ir"])).unwrap();
        assert!(!q.hardness_terms.binary_stretch);
    }

    #[test]
    fn test_axis_bonus_monotone_in_axis_count() {
        let base = ["Fe", "N"];
        let mut previous = None;
        for extra in [&[][..], &["Si"][..], &["Si", "C"][..]] {
            let symbols: Vec<&str> = base.iter().chain(extra.iter()).copied().collect();
            let p = predict(&select(&symbols)).unwrap();
            if let Some(prev) = previous {
                assert!(p.hardness_terms.axis_bonus >= prev);
            }
            previous = Some(p.hardness_terms.axis_bonus);
        }
    }

    #[test]
    fn test_nitrogen_bonus() {
        let p = predict(&select(&["B", "N"])).unwrap();
        assert!(p.hardness_terms.nitrogen_bonus);
    }

    #[test]
    fn test_idempotent() {
        let selection = select(&["Fe", "Co", "Si"]);
        let a = predict(&selection).unwrap();
        let b = predict(&selection).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_basic_engine_has_no_extended_properties() {
        let p = BasicCompoundModel.predict(&select(&["Cu"])).unwrap();
        assert!(p.properties.is_none());
        assert!(p.hardness > 0.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StabilityClass::from_net_torque(0.29), StabilityClass::GeometricResonance);
        assert_eq!(StabilityClass::from_net_torque(0.5), StabilityClass::BulkTension);
        assert_eq!(StabilityClass::from_net_torque(-0.5), StabilityClass::MetricRelaxation);
        assert_eq!(BondType::from_covalent(0.71), BondType::CovalentNetwork);
        assert_eq!(BondType::from_covalent(0.5), BondType::Mixed);
        assert_eq!(BondType::from_covalent(0.3), BondType::Metallic);
        assert_eq!(StabilityBand::from_stability(0.81), StabilityBand::Green);
        assert_eq!(StabilityBand::from_stability(0.8), StabilityBand::Yellow);
        assert_eq!(StabilityBand::from_stability(0.5), StabilityBand::Red);
    }
}
