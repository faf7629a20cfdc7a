// ============================================================================
// MODULE DECLARATIONS
// ============================================================================
pub mod core;
pub mod io;
pub mod math;
pub mod analysis;
pub mod synthesis;
pub mod chemistry;
pub mod error;
pub mod explorer;

// ============================================================================
// RE-EXPORTS (Public API)
// ============================================================================
pub use crate::core::element::{Block, ElementRecord, Group};
pub use crate::core::registry::Registry;
pub use crate::core::selection::{SelectionSet, MAX_SELECTION};
pub use crate::error::{HelixError, HelixResult};
pub use crate::explorer::ExplorerState;
pub use crate::io::config::{ModelConfig, ModelSuite};
pub use crate::io::report;

pub use crate::math::helix::{embed, EmbeddingModel, HelicalRibbon, Position3D};
pub use crate::analysis::ionization::{predict_a, AngularEnergyModel, EnergyModel, SymmetryEnergyModel};
pub use crate::analysis::spinor::{spinor_phase, PhaseInfo, SpinorPosition};
pub use crate::analysis::bonds::BondNetwork;
pub use crate::synthesis::compound::{
    predict, BasicCompoundModel, BondType, CompoundModel, CompoundPrediction, ExtendedCompoundModel,
    StabilityBand, StabilityClass,
};
pub use crate::synthesis::properties::{Jitter, MaterialProperties};

use anyhow::{Context, Result};

// ============================================================================
// HIGH-LEVEL INTERFACE
// ============================================================================

/// Runs the compound engine for a list of symbols and renders the results
/// panel. Symbols must be distinct and at most four.
pub fn combine(symbols: &[String], config: &ModelConfig) -> Result<(CompoundPrediction, String)> {
    let selection = SelectionSet::from_symbols(symbols)
        .with_context(|| format!("invalid selection [{}]", symbols.join(", ")))?;

    let models = config.build();
    let prediction = models
        .compound
        .predict(selection.as_slice())
        .context("empty selection")?;

    let mut report_buffer = String::new();
    for e in selection.as_slice() {
        report_buffer.push_str(&report::tooltip(e, models.energy.as_ref()));
        report_buffer.push('\n');
    }

    let network = BondNetwork::build(selection.as_slice(), models.embedding.as_ref(), prediction.band);
    let mut lines = String::new();
    for (from, to, line) in network.lines() {
        lines.push_str(&format!("\n  {}-{}: {:.3} ({:?})", from, to, line.length, line.band));
    }

    let verbose_output = format!(
        "{}\n{}\n--- Bond Network ---\n\
         • Markers: {}\n\
         • Lines:   {}{}",
        report_buffer,
        report::compound_panel(&prediction),
        network.marker_count(),
        network.line_count(),
        lines
    );

    Ok((prediction, verbose_output))
}
