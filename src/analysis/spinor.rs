use crate::chemistry::tables::{E0, SPINOR_PERIOD};
use serde::Serialize;
use std::f64::consts::{PI, TAU};
use std::fmt;

/// |correction| below this is a node.
pub const NODE_THRESHOLD: f64 = 0.05;
/// |correction| above this is a peak or trough.
pub const EXTREMUM_THRESHOLD: f64 = 0.2;

/// Where an element sits on the spinor wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpinorPosition {
    #[serde(rename = "NODE")]
    Node,
    #[serde(rename = "PEAK")]
    Peak,
    #[serde(rename = "TROUGH")]
    Trough,
    #[serde(rename = "rising")]
    Rising,
    #[serde(rename = "falling")]
    Falling,
}

impl fmt::Display for SpinorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpinorPosition::Node => "NODE",
            SpinorPosition::Peak => "PEAK",
            SpinorPosition::Trough => "TROUGH",
            SpinorPosition::Rising => "rising",
            SpinorPosition::Falling => "falling",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseInfo {
    /// Phase angle in [0, 360).
    pub phase_degrees: f64,
    /// Spinor correction, eV.
    pub correction: f64,
    pub position: SpinorPosition,
}

/// Phase angle 2πZ/18 in radians, not reduced.
fn phase(z: u32) -> f64 {
    2.0 * PI * z as f64 / SPINOR_PERIOD
}

/// Spinor correction (E₀/11)·sin(2πZ/18), eV.
pub fn spinor_correction(z: u32) -> f64 {
    (E0 / 11.0) * phase(z).sin()
}

/// Thresholds apply to the correction value, not to the angle.
pub fn classify(correction: f64) -> SpinorPosition {
    if correction.abs() < NODE_THRESHOLD {
        SpinorPosition::Node
    } else if correction > EXTREMUM_THRESHOLD {
        SpinorPosition::Peak
    } else if correction < -EXTREMUM_THRESHOLD {
        SpinorPosition::Trough
    } else if correction > 0.0 {
        SpinorPosition::Rising
    } else {
        SpinorPosition::Falling
    }
}

pub fn spinor_phase(z: u32) -> PhaseInfo {
    let correction = spinor_correction(z);
    PhaseInfo {
        phase_degrees: phase(z).rem_euclid(TAU).to_degrees(),
        correction,
        position: classify(correction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_period_is_node() {
        let info = spinor_phase(18);
        assert_eq!(info.position, SpinorPosition::Node);
        assert!(info.correction.abs() < 1e-12);
        assert!(info.phase_degrees < 1e-9 || (360.0 - info.phase_degrees) < 1e-9);
    }

    #[test]
    fn test_half_period_is_node() {
        // sin(π) = 0, so fluorine lands on a node too.
        let info = spinor_phase(9);
        assert_eq!(info.position, SpinorPosition::Node);
        assert!((info.phase_degrees - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_peak_and_trough() {
        // Z = 4: 80°, correction ≈ 0.2749
        let be = spinor_phase(4);
        assert_eq!(be.position, SpinorPosition::Peak);
        assert!((be.correction - (E0 / 11.0) * 80f64.to_radians().sin()).abs() < 1e-12);

        // Z = 13: 260°
        let al = spinor_phase(13);
        assert_eq!(al.position, SpinorPosition::Trough);
        assert!((al.phase_degrees - 260.0).abs() < 1e-9);
    }

    #[test]
    fn test_rising_and_falling() {
        // Z = 1: 20°, correction ≈ 0.0955
        assert_eq!(spinor_phase(1).position, SpinorPosition::Rising);
        // Z = 10: 200°, correction ≈ -0.0955
        assert_eq!(spinor_phase(10).position, SpinorPosition::Falling);
        // Z = 2: 40°, correction ≈ 0.1794
        assert_eq!(spinor_phase(2).position, SpinorPosition::Rising);
    }

    #[test]
    fn test_phase_wraps() {
        let a = spinor_phase(5);
        let b = spinor_phase(23);
        assert!((a.phase_degrees - b.phase_degrees).abs() < 1e-9);
        assert!(b.phase_degrees >= 0.0 && b.phase_degrees < 360.0);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0499), SpinorPosition::Node);
        assert_eq!(classify(-0.0499), SpinorPosition::Node);
        assert_eq!(classify(0.2), SpinorPosition::Rising);
        assert_eq!(classify(-0.2), SpinorPosition::Falling);
        assert_eq!(classify(0.2001), SpinorPosition::Peak);
        assert_eq!(classify(-0.2001), SpinorPosition::Trough);
    }
}
