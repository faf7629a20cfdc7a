//! Immutable lookup tables shared by the energy models and the compound engine.

use crate::core::element::{Block, Group};

// ============================================================================
// MODEL CONSTANTS
// ============================================================================

/// Base energy quantum E₀, eV.
pub const E0: f64 = 3.0709;
/// Axis reference value A_C (carbon), eV.
pub const A_AXIS: f64 = 11.260;
/// Angular coupling constant K_A.
pub const K_A: f64 = 0.544;
/// Period scaling exponent γ.
pub const GAMMA: f64 = 2.0 / 3.0;
/// Period of the spinor modulation in atomic number.
pub const SPINOR_PERIOD: f64 = 18.0;

/// One entry per period 1..=7.
pub const FATIGUE: [f64; 7] = [0.82, 1.00, 1.08, 1.24, 1.35, 1.52, 2.10];

/// Period fatigue factor. Out-of-range periods clamp to the nearest row.
pub fn fatigue(period: u8) -> f64 {
    let idx = (period.clamp(1, 7) - 1) as usize;
    FATIGUE[idx]
}

// ============================================================================
// ANGLE TABLES
// ============================================================================

/// Main-group angle θ in degrees used by the ionization models.
pub fn main_group_theta(group: Group) -> f64 {
    match group.column() {
        Some(1) => -90.0,
        Some(2) => -54.0,
        Some(13) => -18.0,
        Some(14) => 0.0,
        Some(15) => 27.0,
        Some(16) => 54.0,
        Some(17) => 90.0,
        _ => 0.0,
    }
}

/// Angle table used by the compound engine. Finer than the main-group table:
/// every transition column and the noble gases get their own angle.
pub fn compound_theta(group: Group) -> f64 {
    match group {
        Group::Lanthanide | Group::Actinide => -52.0,
        Group::Column(g) => match g {
            1 => -90.0,
            2 => -54.0,
            3 => -50.0,
            4 => -46.0,
            5 => -43.0,
            6 => -40.0,
            7 => -37.0,
            8 => -33.0,
            9 => -30.0,
            10 => -27.0,
            11 => -24.0,
            12 => -21.0,
            13 => -18.0,
            14 => 0.0,
            15 => 27.0,
            16 => 54.0,
            17 => 90.0,
            18 => 90.0,
            _ => 0.0,
        },
    }
}

/// θ mapped onto [0, 1].
pub fn theta_norm(group: Group) -> f64 {
    (compound_theta(group) + 90.0) / 180.0
}

// ============================================================================
// BONDING TABLES
// ============================================================================

/// Covalent character bucket of a single element.
pub fn covalent_character(group: Group, period: u8, block: Block) -> f64 {
    match group.column() {
        Some(14) => 1.0,
        Some(15..=17) => 0.9,
        Some(13) if period == 2 => 0.8,
        Some(13) => 0.15,
        _ if block == Block::D => 0.15,
        _ => 0.05,
    }
}

/// Tabulated model energies (eV) used as the torque reference.
/// Period-two entries sit on the resonance; heavier rows carry the model strain.
#[rustfmt::skip]
pub fn reference_a(symbol: &str) -> Option<f64> {
    let value = match symbol {
        // --- Period 1 ---
        "H" => 13.600, "He" => 24.600,
        // --- Period 2 ---
        "Li" => 5.370, "Be" => 9.260, "B" => 8.310, "C" => 11.260,
        "N" => 14.530, "O" => 13.620, "F" => 17.420, "Ne" => 21.280,
        // --- Period 3 ---
        "Na" => 5.190, "Mg" => 7.760, "Al" => 6.260, "Si" => 8.560,
        "P" => 12.920, "S" => 11.390, "Cl" => 14.860, "Ar" => 16.240,
        // --- Period 4 ---
        "K" => 4.930, "Ca" => 7.400, "Sc" => 6.449, "Ti" => 6.633, "V" => 6.817,
        "Cr" => 7.002, "Mn" => 7.186, "Fe" => 7.370, "Co" => 7.554, "Ni" => 7.739,
        "Cu" => 7.923, "Zn" => 8.964, "Ga" => 5.840, "Ge" => 7.760, "As" => 11.560,
        "Se" => 9.580, "Br" => 12.810, "Kr" => 13.410,
        // --- Period 5 ---
        "Y" => 6.449, "Zr" => 6.679, "Nb" => 6.910, "Mo" => 7.140, "Ru" => 7.600,
        "Rh" => 7.831, "Pd" => 8.061, "Ag" => 8.291, "Cd" => 9.379, "Sn" => 6.960,
        "Sb" => 10.360, "Te" => 8.070, "I" => 11.130, "Xe" => 11.550,
        // --- Period 6 ---
        "Hf" => 6.725, "Ta" => 7.002, "W" => 7.278, "Re" => 7.554, "Os" => 7.831,
        "Ir" => 8.107, "Pt" => 8.384, "Au" => 8.660, "Hg" => 9.793, "Pb" => 6.160,
        _ => return None,
    };
    Some(value)
}

// ============================================================================
// MAGNETISM
// ============================================================================

pub const FERROMAGNETIC: &[&str] = &["Fe", "Co", "Ni", "Gd", "Dy", "Tb"];

pub const PARAMAGNETIC: &[&str] = &[
    "Li", "Na", "K", "Rb", "Cs", "Mg", "Ca", "Sr", "Ba", "Al", "O", "Sc", "Ti", "V", "Cr",
    "Mn", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Hf", "Ta", "W", "Re", "Os",
    "Ir", "Pt", "Ce", "Pr", "Nd", "Sm", "Eu", "Ho", "Er", "Tm", "U", "Pu",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatigue_table() {
        assert_eq!(fatigue(1), 0.82);
        assert_eq!(fatigue(2), 1.00);
        assert_eq!(fatigue(7), 2.10);
        assert_eq!(fatigue(9), 2.10);
        assert!(FATIGUE.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_main_group_theta_unlisted_is_zero() {
        assert_eq!(main_group_theta(Group::Column(1)), -90.0);
        assert_eq!(main_group_theta(Group::Column(17)), 90.0);
        assert_eq!(main_group_theta(Group::Column(8)), 0.0);
        assert_eq!(main_group_theta(Group::Lanthanide), 0.0);
    }

    #[test]
    fn test_compound_theta_spans_transition_columns() {
        let d: Vec<f64> = (3..=12).map(|g| compound_theta(Group::Column(g))).collect();
        assert!(d.windows(2).all(|w| w[0] < w[1]));
        assert!(d[0] > compound_theta(Group::Column(2)));
        assert!(d[9] < compound_theta(Group::Column(13)));
        assert!((theta_norm(Group::Column(14)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_covalent_buckets() {
        assert_eq!(covalent_character(Group::Column(14), 5, Block::P), 1.0);
        assert_eq!(covalent_character(Group::Column(16), 3, Block::P), 0.9);
        assert_eq!(covalent_character(Group::Column(13), 2, Block::P), 0.8);
        assert_eq!(covalent_character(Group::Column(13), 3, Block::P), 0.15);
        assert_eq!(covalent_character(Group::Column(6), 6, Block::D), 0.15);
        assert_eq!(covalent_character(Group::Column(1), 3, Block::S), 0.05);
        assert_eq!(covalent_character(Group::Column(18), 2, Block::Noble), 0.05);
    }

    #[test]
    fn test_reference_carbon_sits_on_axis() {
        assert_eq!(reference_a("C"), Some(A_AXIS));
        assert_eq!(reference_a("Og"), None);
    }
}
