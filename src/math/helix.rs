use crate::chemistry::tables::SPINOR_PERIOD;
use crate::core::element::{Block, ElementRecord, Group};
use nalgebra::{Rotation3, Vector3};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_6, PI};

type Cartesian3 = Vector3<f64>;

/// Radius of the period-one arc.
pub const ARC_RADIUS: f64 = 0.8;
/// Angular position of the two period-one elements, degrees.
pub const ARC_ANGLE_DEG: f64 = 120.0;
/// Spacing between period layers along the layering axis.
pub const LAYER_SPACING: f64 = 0.8;
/// Twist accumulated per period.
pub const TWIST_PER_PERIOD: f64 = FRAC_PI_6;

/// Embedded position of one element plus the auxiliary scalars used to build
/// ribbon geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Ribbon coordinate t in [-1, 1].
    pub local_coord: f64,
    /// Accumulated twist of the period ribbon, radians.
    pub twist_angle: f64,
    /// Radial breathing factor applied multiplicatively to the radius.
    pub breathing: f64,
}

impl Position3D {
    pub fn to_vector(&self) -> Cartesian3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Distance from the layering axis.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Maps discrete element attributes onto a continuous 3D embedding.
pub trait EmbeddingModel: Send + Sync {
    fn embed(&self, period: u8, group: Group, block: Block, z: Option<u32>) -> Position3D;

    fn embed_element(&self, element: &ElementRecord) -> Position3D {
        self.embed(element.period, element.group, element.block, Some(element.z))
    }
}

/// Twisted-ribbon helix: period one on a fixed arc, periods two to seven on
/// ribbons whose semi-major axis grows and whose orientation twists by 30°
/// per period.
#[derive(Debug, Clone, Copy)]
pub struct HelicalRibbon {
    pub breathing_scale: f64,
}

impl Default for HelicalRibbon {
    fn default() -> Self {
        Self { breathing_scale: 0.15 }
    }
}

impl HelicalRibbon {
    pub fn new(breathing_scale: f64) -> Self {
        Self { breathing_scale }
    }

    /// Periodic radial modulation with period 18 in Z. Zero when Z is unknown.
    pub fn breathing(&self, z: Option<u32>) -> f64 {
        z.map_or(0.0, |z| {
            self.breathing_scale * (2.0 * PI * z as f64 / SPINOR_PERIOD).sin()
        })
    }
}

/// Semi-major axis of a period ribbon.
pub fn semi_major_axis(period: u8) -> f64 {
    1.2 + 0.25 * (period as f64 - 2.0)
}

/// Layering coordinate. Period 4 sits at zero.
pub fn layer_height(period: u8) -> f64 {
    (period as f64 - 4.0) * LAYER_SPACING
}

/// Ribbon coordinate keyed on group. Axis = 0, alkali = -1, noble = +1.
pub fn local_coordinate(group: Group) -> f64 {
    match group {
        Group::Lanthanide | Group::Actinide => -0.5,
        Group::Column(g) => match g {
            14 => 0.0,
            1 => -1.0,
            2 => -0.85,
            13 => -0.15,
            3..=12 => -0.7 + (g as f64 - 3.0) * (0.5 / 9.0),
            15 => 0.25,
            16 => 0.50,
            17 => 0.75,
            18 => 1.0,
            _ => 0.5,
        },
    }
}

impl EmbeddingModel for HelicalRibbon {
    fn embed(&self, period: u8, group: Group, _block: Block, z: Option<u32>) -> Position3D {
        let breathing = self.breathing(z);
        let height = layer_height(period);

        if period <= 1 {
            // Period 1 has no axis element: H and He sit on an arc that skips 0°.
            let sign = if group.is(18) { 1.0 } else { -1.0 };
            let angle = sign * ARC_ANGLE_DEG.to_radians();
            let r = ARC_RADIUS * (1.0 + breathing);
            return Position3D {
                x: r * angle.cos(),
                y: r * angle.sin(),
                z: height,
                local_coord: sign,
                twist_angle: 0.0,
                breathing,
            };
        }

        let a = semi_major_axis(period);
        let twist = (period as f64 - 2.0) * TWIST_PER_PERIOD;
        let t = local_coordinate(group);

        let local: Cartesian3 = Vector3::new(t * a * (1.0 + breathing), 0.0, 0.0);
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), twist);
        let p = rotation * local;

        Position3D {
            x: p.x,
            y: p.y,
            z: height,
            local_coord: t,
            twist_angle: twist,
            breathing,
        }
    }
}

/// Embedding with the default ribbon parameters.
pub fn embed(period: u8, group: Group, block: Block, z: Option<u32>) -> Position3D {
    HelicalRibbon::default().embed(period, group, block, z)
}
