//! Ionization-energy models.
//!
//! Two revisions coexist and are numerically incompatible:
//!
//! - [`AngularEnergyModel`]: piecewise by row and column. Period 1 and noble
//!   gases have closed forms, f-block and d-block follow linear laws, and the
//!   main groups use an angular model around the carbon axis followed by a
//!   table of per-group corrections.
//! - [`SymmetryEnergyModel`]: the later geometric revision that replaces the
//!   d-block and main-group branches with a single inversion law over the
//!   block symmetry order.
//!
//! Either may add the period-18 spinor correction on top.

use crate::analysis::spinor::spinor_correction;
use crate::chemistry::tables::{fatigue, main_group_theta, A_AXIS, E0, GAMMA, K_A};
use crate::core::element::{Block, ElementRecord, Group};
use crate::math::helix::{semi_major_axis, HelicalRibbon};
use serde::{Deserialize, Serialize};

/// Group-1 period-one constant (hydrogen), eV.
pub const PERIOD1_ALKALI: f64 = 13.6;
/// Noble period-one constant when hard-coded, eV.
pub const PERIOD1_NOBLE: f64 = 24.6;
/// Filled-subshell bonus for group 12, in units of E₀.
pub const FILLED_SUBSHELL: f64 = 0.279;

pub trait EnergyModel: Send + Sync {
    /// Base estimate before the spinor correction.
    fn base_a(&self, period: u8, group: Group, block: Block, z: u32) -> f64;

    fn spinor_correction_enabled(&self) -> bool;

    fn name(&self) -> &'static str;

    fn predict_a(&self, period: u8, group: Group, block: Block, z: u32) -> f64 {
        let base = self.base_a(period, group, block, z);
        if self.spinor_correction_enabled() {
            base + spinor_correction(z)
        } else {
            base
        }
    }

    fn predict_element(&self, element: &ElementRecord) -> f64 {
        self.predict_a(element.period, element.group, element.block, element.z)
    }
}

/// How the noble period-one constant is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Period1Constants {
    /// 13.6 and 24.6 eV.
    #[default]
    HardCoded,
    /// 13.6 and 8·E₀.
    Derived,
}

impl Period1Constants {
    pub fn noble(self) -> f64 {
        match self {
            Period1Constants::HardCoded => PERIOD1_NOBLE,
            Period1Constants::Derived => 8.0 * E0,
        }
    }
}

// ============================================================================
// SHARED BRANCHES
// ============================================================================

/// `11·E₀ / P^γ`.
pub fn noble_base(period: u8) -> f64 {
    11.0 * E0 / (period as f64).powf(GAMMA)
}

/// Linear law in (Z − reference), one slope/intercept pair per f row.
pub fn f_block(period: u8, z: u32) -> f64 {
    let (intercept, slope, reference) = if period >= 7 {
        (5.65, 0.070, 89.0)
    } else {
        (5.55, 0.050, 57.0)
    };
    intercept + slope * (z as f64 - reference)
}

fn period1(group: Group, constants: Period1Constants) -> f64 {
    if group.is(18) {
        constants.noble()
    } else {
        PERIOD1_ALKALI
    }
}

// ============================================================================
// ANGULAR REVISION
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct AngularEnergyModel {
    pub period1: Period1Constants,
    /// Multiply the noble-gas branch by the period fatigue factor.
    pub noble_fatigue: bool,
    pub spinor_correction: bool,
}

impl Default for AngularEnergyModel {
    fn default() -> Self {
        Self {
            period1: Period1Constants::HardCoded,
            noble_fatigue: false,
            spinor_correction: true,
        }
    }
}

impl AngularEnergyModel {
    /// `E₀·(base + k_eff·(g − 3))`, plus the filled-subshell bonus at group 12.
    pub fn d_block(period: u8, column: u8) -> f64 {
        const BASE: f64 = 2.10;
        let k_eff = 0.060 + 0.015 * (period as f64 - 4.0);
        let mut a = E0 * (BASE + k_eff * (column as f64 - 3.0));
        if column == 12 {
            a += FILLED_SUBSHELL * E0;
        }
        a
    }

    /// Period-decaying amplitude `w` for the angular term.
    pub fn amplitude(period: u8, column: u8) -> f64 {
        let (w0, rate) = if column <= 2 { (10.0, 0.12) } else { (11.0, 0.35) };
        w0 * (-rate * (period as f64 - 2.0)).exp()
    }

    /// Additive per-group correction applied after the angular model.
    pub fn group_correction(period: u8, column: u8) -> f64 {
        match column {
            1 => -0.45,
            2 => 1.20,
            13 if period == 2 => -1.10,
            13 => -2.90,
            14 if period == 2 => 0.0,
            14 => -1.90,
            15 => 0.55,
            16 => -2.48,
            17 => 0.18,
            _ => 0.0,
        }
    }

    /// `A_C + K_A·w·sin θ − 0.8·(P − 2)` plus the group correction.
    pub fn main_group(period: u8, group: Group) -> f64 {
        let column = group.column().unwrap_or(14);
        let theta = main_group_theta(group).to_radians();
        let w = Self::amplitude(period, column);
        let decay = 0.8 * (period as f64 - 2.0);
        A_AXIS + K_A * w * theta.sin() - decay + Self::group_correction(period, column)
    }
}

impl EnergyModel for AngularEnergyModel {
    fn base_a(&self, period: u8, group: Group, block: Block, z: u32) -> f64 {
        if period <= 1 {
            return period1(group, self.period1);
        }
        if group.is(18) {
            let a = noble_base(period);
            return if self.noble_fatigue { a * fatigue(period) } else { a };
        }
        if group.is_f_sentinel() || block == Block::F {
            return f_block(period, z);
        }
        if let Some(column @ 3..=12) = group.column() {
            return Self::d_block(period, column);
        }
        Self::main_group(period, group)
    }

    fn spinor_correction_enabled(&self) -> bool {
        self.spinor_correction
    }

    fn name(&self) -> &'static str {
        "angular"
    }
}

// ============================================================================
// SYMMETRY-ORDER REVISION
// ============================================================================

/// Unified law over the block symmetry order `n`:
/// `A_axis = A_C / (1 + |n − 3|·k)` decays with period, gains an angular
/// term whose amplitude shrinks with ribbon width, and is modulated by the
/// period fatigue and the spinor breathing.
#[derive(Debug, Clone, Copy)]
pub struct SymmetryEnergyModel {
    pub period1: Period1Constants,
    pub spinor_correction: bool,
    pub ribbon: HelicalRibbon,
}

impl Default for SymmetryEnergyModel {
    fn default() -> Self {
        Self {
            period1: Period1Constants::Derived,
            spinor_correction: true,
            ribbon: HelicalRibbon::default(),
        }
    }
}

impl SymmetryEnergyModel {
    /// Ribbon-width constant of the angular amplitude `W / a(P)`.
    pub const RIBBON_WIDTH: f64 = 6.0;

    pub fn axis_intensity(n: u8) -> f64 {
        let k = match n {
            0..=2 => 0.25,
            3 => 0.0,
            _ => 0.30,
        };
        A_AXIS / (1.0 + (n as f64 - 3.0).abs() * k)
    }

    pub fn decay_rate(n: u8) -> f64 {
        match n {
            0 => 0.12,
            1 => 0.08,
            3 => 0.10,
            5 => 0.0,
            _ => 0.02,
        }
    }
}

impl EnergyModel for SymmetryEnergyModel {
    fn base_a(&self, period: u8, group: Group, block: Block, z: u32) -> f64 {
        if period <= 1 {
            return period1(group, self.period1);
        }
        if group.is(18) {
            return noble_base(period) * fatigue(period);
        }
        if group.is_f_sentinel() || block == Block::F {
            return f_block(period, z);
        }

        let n = block.symmetry_order();
        let center = Self::axis_intensity(n) * (-Self::decay_rate(n) * (period as f64 - 2.0)).exp();
        let w = Self::RIBBON_WIDTH / semi_major_axis(period);
        let angular = K_A * w * main_group_theta(group).to_radians().sin();

        (center + angular) * fatigue(period) * (1.0 + self.ribbon.breathing(Some(z)))
    }

    fn spinor_correction_enabled(&self) -> bool {
        self.spinor_correction
    }

    fn name(&self) -> &'static str {
        "symmetry"
    }
}

/// Prediction with the default angular revision and spinor correction.
pub fn predict_a(period: u8, group: Group, block: Block, z: u32) -> f64 {
    AngularEnergyModel::default().predict_a(period, group, block, z)
}
