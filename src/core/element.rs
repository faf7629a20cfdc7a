use serde::Serialize;
use std::fmt;

// ============================================================================
// ENUMS
// ============================================================================

/// Orbital block of an element. Noble gases get their own block so that the
/// symmetry-order revision can assign them order 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
    Noble,
}

impl Block {
    /// Symmetry order `n` used by the symmetry-order energy revision.
    pub fn symmetry_order(self) -> u8 {
        match self {
            Block::Noble => 0,
            Block::S => 1,
            Block::P => 3,
            Block::D => 5,
            Block::F => 7,
        }
    }

    /// Display palette. Colors carry no meaning for the models.
    pub const fn display_color(self) -> (f64, f64, f64) {
        match self {
            Block::S => (0.95, 0.45, 0.35),
            Block::P => (0.35, 0.75, 0.95),
            Block::D => (0.95, 0.80, 0.30),
            Block::F => (0.60, 0.90, 0.50),
            Block::Noble => (0.75, 0.55, 0.95),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Block::S => "s",
            Block::P => "p",
            Block::D => "d",
            Block::F => "f",
            Block::Noble => "noble",
        };
        f.write_str(s)
    }
}

/// Periodic-table column. Lanthanides and actinides are held outside the
/// 18 columns under their own sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Column(u8),
    Lanthanide,
    Actinide,
}

impl Group {
    pub fn column(self) -> Option<u8> {
        match self {
            Group::Column(g) => Some(g),
            _ => None,
        }
    }

    pub fn is(self, column: u8) -> bool {
        self.column() == Some(column)
    }

    pub fn is_f_sentinel(self) -> bool {
        matches!(self, Group::Lanthanide | Group::Actinide)
    }

    /// Transition-metal columns 3..=12.
    pub fn is_transition(self) -> bool {
        matches!(self.column(), Some(3..=12))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Column(g) => write!(f, "{}", g),
            Group::Lanthanide => f.write_str("Ln"),
            Group::Actinide => f.write_str("An"),
        }
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One immutable registry entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    pub symbol: &'static str,
    pub z: u32,
    pub period: u8,
    pub group: Group,
    pub block: Block,
    pub name: &'static str,
    /// Observed first-ionization energy, eV.
    pub a: f64,
    pub color: (f64, f64, f64),
    /// Group-14 symmetry axis of the helix.
    pub axis: bool,
    /// Treated as superconducting-class for display and property hints.
    pub sc: bool,
}

impl ElementRecord {
    pub const fn new(
        symbol: &'static str,
        z: u32,
        period: u8,
        group: Group,
        block: Block,
        name: &'static str,
        a: f64,
        sc: bool,
    ) -> Self {
        let axis = matches!(group, Group::Column(14));
        Self {
            symbol,
            z,
            period,
            group,
            block,
            name,
            a,
            color: block.display_color(),
            axis,
            sc,
        }
    }
}

impl fmt::Display for ElementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, Z={})", self.name, self.symbol, self.z)
    }
}
