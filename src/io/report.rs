use crate::analysis::ionization::EnergyModel;
use crate::analysis::spinor::spinor_phase;
use crate::core::element::ElementRecord;
use crate::error::HelixResult;
use crate::math::helix::EmbeddingModel;
use crate::synthesis::compound::{metric_torque, tabulated_torque, CompoundPrediction};
use serde::Serialize;
use std::fmt::Write;

/// Hover text for a single element.
pub fn tooltip(element: &ElementRecord, energy: &dyn EnergyModel) -> String {
    let predicted = energy.predict_element(element);
    let phase = spinor_phase(element.z);
    format!(
        "--- {} ---\n\
         • Position:     period {}, group {}, {}-block\n\
         • Observed A:   {:.3} eV\n\
         • Predicted A:  {:.3} eV ({})\n\
         • Residual:     {:+.3} eV\n\
         • Torque:       {:+.3} eV\n\
         • Spinor Phase: {:.1}° ({}, {:+.4} eV)",
        element,
        element.period,
        element.group,
        element.block,
        element.a,
        predicted,
        energy.name(),
        element.a - predicted,
        metric_torque(element),
        phase.phase_degrees,
        phase.position,
        phase.correction,
    )
}

/// Results panel for a compound prediction.
pub fn compound_panel(prediction: &CompoundPrediction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Compound: {} ---", prediction.symbols().join("-"));

    for e in &prediction.elements {
        let _ = writeln!(
            out,
            "  {:<3} τ = {:+.3}  ω = {:.3}  covalent = {:.2}  fatigue = {:.2}",
            e.symbol, e.torque, e.electronegativity, e.covalent_character, e.fatigue
        );
    }

    let t = &prediction.hardness_terms;
    let _ = write!(
        out,
        "• Net Torque:     {:+.3} eV ({})\n\
         • Stability:      {:.3} [{:?}]\n\
         • Bond Type:      {}\n\
         • Hardness:       {:.2}\n\
         • Period Penalty: base {:.3}, exponent {:.1}\n\
         • Axis Bonus:     {:.3} (weight {:.2}){}{}",
        prediction.net_torque,
        prediction.stability_class,
        prediction.stability,
        prediction.band,
        prediction.bond_type,
        prediction.hardness,
        t.period_base,
        t.period_exponent,
        t.axis_bonus,
        t.axis_weight,
        if t.binary_stretch { "\n• Binary Stretch: applied" } else { "" },
        if t.nitrogen_bonus { "\n• Nitrogen Bonus: applied" } else { "" },
    );

    if let Some(p) = &prediction.properties {
        let _ = write!(
            out,
            "\n--- Material Properties ---\n\
             • Electrical:   {:.1} ({})\n\
             • Thermal:      {:.1}\n\
             • Melting:      {:.0} K\n\
             • Resistivity:  {:.1}\n\
             • Ductility:    {:.1}\n\
             • Corrosion:    {:.1}\n\
             • Density:      {:.3}\n\
             • Magnetism:    {:.1} ({})\n\
             • Bandgap:      {:.2} eV",
            p.electrical_conductivity,
            p.conductor_class,
            p.thermal_conductivity,
            p.melting_point,
            p.resistivity,
            p.ductility,
            p.corrosion_resistance,
            p.density,
            p.magnetism,
            p.magnetic_order,
            p.bandgap,
        );
        if p.superconducting_candidate {
            out.push_str("\n• Superconducting candidate");
        }
    }
    out
}

/// One row per element with its embedded coordinates.
pub fn embedding_table(elements: &[&ElementRecord], embedding: &dyn EmbeddingModel) -> String {
    let mut out = format!(
        "{:<4}{:>4}{:>4}{:>5}{:>9}{:>9}{:>9}{:>8}{:>9}\n",
        "Sym", "Z", "P", "G", "x", "y", "z", "t", "twist°"
    );
    for e in elements {
        let p = embedding.embed_element(e);
        let _ = writeln!(
            out,
            "{:<4}{:>4}{:>4}{:>5}{:>9.4}{:>9.4}{:>9.4}{:>8.3}{:>9.1}",
            e.symbol,
            e.z,
            e.period,
            e.group.to_string(),
            p.x,
            p.y,
            p.z,
            p.local_coord,
            p.twist_angle.to_degrees()
        );
    }
    out
}

/// Predicted against observed first-ionization energy for each element.
pub fn energy_table(elements: &[&ElementRecord], energy: &dyn EnergyModel) -> String {
    let mut out = format!(
        "{:<4}{:>4}{:>10}{:>10}{:>10}{:>10}  {}\n",
        "Sym", "Z", "observed", "predicted", "residual", "torque", "spinor"
    );
    for e in elements {
        let predicted = energy.predict_element(e);
        let torque = tabulated_torque(e).map_or_else(|| "-".to_string(), |t| format!("{:+.3}", t));
        let _ = writeln!(
            out,
            "{:<4}{:>4}{:>10.3}{:>10.3}{:>+10.3}{:>10}  {}",
            e.symbol,
            e.z,
            e.a,
            predicted,
            e.a - predicted,
            torque,
            spinor_phase(e.z).position
        );
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> HelixResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
