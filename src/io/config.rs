use crate::analysis::ionization::{AngularEnergyModel, EnergyModel, Period1Constants, SymmetryEnergyModel};
use crate::error::{HelixError, HelixResult};
use crate::math::helix::{EmbeddingModel, HelicalRibbon};
use crate::synthesis::compound::{BasicCompoundModel, CompoundModel, ExtendedCompoundModel};
use crate::synthesis::properties::Jitter;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Amplitude of the period-18 radial breathing.
    pub breathing_scale: f64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self { breathing_scale: 0.15 }
    }
}

/// Ionization-energy revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum EnergyVariant {
    Angular {
        #[serde(default)]
        period1: Period1Constants,
        #[serde(default)]
        noble_fatigue: bool,
    },
    Symmetry,
}

impl Default for EnergyVariant {
    fn default() -> Self {
        EnergyVariant::Angular {
            period1: Period1Constants::HardCoded,
            noble_fatigue: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundVariant {
    Basic,
    #[default]
    Extended,
}

fn default_true() -> bool {
    true
}

/// Model selection, fixed at configuration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub energy: EnergyVariant,
    #[serde(default = "default_true")]
    pub spinor_correction: bool,
    #[serde(default)]
    pub compound: CompoundVariant,
    #[serde(default)]
    pub jitter: Jitter,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            embedding: EmbeddingConfig::default(),
            energy: EnergyVariant::default(),
            spinor_correction: true,
            compound: CompoundVariant::default(),
            jitter: Jitter::default(),
        }
    }
}

/// The three configured models behind their shared interfaces.
pub struct ModelSuite {
    pub embedding: Box<dyn EmbeddingModel>,
    pub energy: Box<dyn EnergyModel>,
    pub compound: Box<dyn CompoundModel>,
}

impl Default for ModelSuite {
    fn default() -> Self {
        ModelConfig::default().build()
    }
}

impl ModelConfig {
    pub fn validate(&self) -> HelixResult<()> {
        let b = self.embedding.breathing_scale;
        if !(0.0..0.5).contains(&b) {
            return Err(HelixError::Config(format!(
                "breathing_scale must be in [0, 0.5), got {}",
                b
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> HelixResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HelixError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> HelixResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn build(&self) -> ModelSuite {
        let ribbon = HelicalRibbon::new(self.embedding.breathing_scale);

        let energy: Box<dyn EnergyModel> = match self.energy {
            EnergyVariant::Angular { period1, noble_fatigue } => Box::new(AngularEnergyModel {
                period1,
                noble_fatigue,
                spinor_correction: self.spinor_correction,
            }),
            EnergyVariant::Symmetry => Box::new(SymmetryEnergyModel {
                spinor_correction: self.spinor_correction,
                ribbon,
                ..Default::default()
            }),
        };

        let compound: Box<dyn CompoundModel> = match self.compound {
            CompoundVariant::Basic => Box::new(BasicCompoundModel),
            CompoundVariant::Extended => Box::new(ExtendedCompoundModel::new(self.jitter)),
        };

        debug!("models: energy={}, compound={}", energy.name(), compound.name());

        ModelSuite {
            embedding: Box::new(ribbon),
            energy,
            compound,
        }
    }
}
