//! Application state for an interactive explorer front-end.
//!
//! Event handlers receive `&mut ExplorerState`; the model modules know
//! nothing about it.

use crate::analysis::bonds::BondNetwork;
use crate::core::element::ElementRecord;
use crate::core::registry::Registry;
use crate::core::selection::SelectionSet;
use crate::error::HelixResult;
use crate::io::config::{ModelConfig, ModelSuite};
use crate::io::report;
use crate::synthesis::compound::CompoundPrediction;
use log::info;

pub struct ExplorerState {
    pub selection: SelectionSet,
    pub hovered: Option<&'static ElementRecord>,
    pub models: ModelSuite,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(ModelSuite::default())
    }
}

impl ExplorerState {
    pub fn new(models: ModelSuite) -> Self {
        Self {
            selection: SelectionSet::new(),
            hovered: None,
            models,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.build())
    }

    /// `None` clears the hover highlight.
    pub fn hover(&mut self, symbol: Option<&str>) -> HelixResult<()> {
        self.hovered = match symbol {
            Some(s) => Some(Registry::lookup(s)?),
            None => None,
        };
        Ok(())
    }

    pub fn toggle(&mut self, symbol: &str) -> HelixResult<bool> {
        let selected = self.selection.toggle(symbol)?;
        info!(
            "{} {}; selection = [{}]",
            if selected { "selected" } else { "deselected" },
            symbol,
            self.selection.symbols().join(", ")
        );
        Ok(selected)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn tooltip(&self) -> Option<String> {
        self.hovered
            .map(|e| report::tooltip(e, self.models.energy.as_ref()))
    }

    /// Prediction for the current selection; `None` means nothing to display.
    pub fn evaluate(&self) -> Option<CompoundPrediction> {
        self.models.compound.predict(self.selection.as_slice())
    }

    /// Connecting lines between the selected markers, coloured by the
    /// current prediction's stability band.
    pub fn bond_network(&self) -> Option<BondNetwork> {
        let prediction = self.evaluate()?;
        Some(BondNetwork::build(
            self.selection.as_slice(),
            self.models.embedding.as_ref(),
            prediction.band,
        ))
    }
}
