//! Output unit of the layout engine.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::Serialize;

use crate::params::Parameters;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned box with full extents along x/y/z before rotation.
    Box { size: Vec3 },
    /// Cylinder whose axis is local +Y.
    Cylinder { radius: f32, length: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Platform,
    Support,
    Post,
    Handrail,
    BottomRail,
    Bar,
    Panel,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Self::Platform,
        Self::Support,
        Self::Post,
        Self::Handrail,
        Self::BottomRail,
        Self::Bar,
        Self::Panel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Support => "support",
            Self::Post => "post",
            Self::Handrail => "handrail",
            Self::BottomRail => "bottom-rail",
            Self::Bar => "bar",
            Self::Panel => "panel",
        }
    }

    /// Stable numeric id, used as the per-instance role tag on the GPU side.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Platform => 0,
            Self::Support => 1,
            Self::Post => 2,
            Self::Handrail => 3,
            Self::BottomRail => 4,
            Self::Bar => 5,
            Self::Panel => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub role: Role,
    pub shape: Shape,
    pub position: Vec3,
    // XYZ Euler, radians
    pub rotation: Vec3,
}

impl Placement {
    pub fn cuboid(role: Role, position: Vec3, size: Vec3) -> Self {
        Self {
            role,
            shape: Shape::Box { size },
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn column(role: Role, position: Vec3, radius: f32, length: f32) -> Self {
        Self {
            role,
            shape: Shape::Cylinder { radius, length },
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Horizontal cylinder running the full length of `edge` at height `y`.
    pub fn rail(role: Role, edge: Edge, params: &Parameters, y: f32, radius: f32) -> Self {
        let mid = edge.midpoint(params);
        Self {
            role,
            shape: Shape::Cylinder {
                radius,
                length: edge.length(params),
            },
            position: Vec3::new(mid.x, y, mid.z),
            rotation: edge.rail_rotation(),
        }
    }
}

/// Platform edges exposed to fall risk. The back edge sits against the
/// building and carries no railing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Front,
    Left,
    Right,
}

impl Edge {
    pub const OPEN: [Edge; 3] = [Self::Front, Self::Left, Self::Right];

    #[inline]
    pub fn length(self, params: &Parameters) -> f32 {
        match self {
            Self::Front => params.width,
            Self::Left | Self::Right => params.depth,
        }
    }

    /// Ground-level point `offset` meters along the edge line.
    ///
    /// The front edge runs left to right; the side edges run back to front.
    pub fn station(self, params: &Parameters, offset: f32) -> Vec3 {
        let half_w = params.width / 2.0;
        let half_d = params.depth / 2.0;
        match self {
            Self::Front => Vec3::new(-half_w + offset, 0.0, half_d),
            Self::Left => Vec3::new(-half_w, 0.0, -half_d + offset),
            Self::Right => Vec3::new(half_w, 0.0, -half_d + offset),
        }
    }

    #[inline]
    pub fn midpoint(self, params: &Parameters) -> Vec3 {
        self.station(params, self.length(params) / 2.0)
    }

    #[inline]
    pub fn inward(self) -> Vec3 {
        match self {
            Self::Front => Vec3::NEG_Z,
            Self::Left => Vec3::X,
            Self::Right => Vec3::NEG_X,
        }
    }

    #[inline]
    pub fn rail_rotation(self) -> Vec3 {
        match self {
            Self::Front => Vec3::new(0.0, 0.0, FRAC_PI_2),
            Self::Left | Self::Right => Vec3::new(FRAC_PI_2, 0.0, 0.0),
        }
    }
}
