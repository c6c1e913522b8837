//! GPU-ready per-instance records.
//!
//! A renderer keeps two unit meshes, a cube spanning [-0.5, 0.5] on every axis
//! and a cylinder of radius 0.5 and height 1 along +Y, and draws each
//! placement as one instance of either.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::layout::Layout;
use crate::placement::{Placement, Shape};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub role: u32,
    pub _pad: [u32; 3],
}

impl Placement {
    /// Scale applied to the unit mesh of this placement's shape.
    pub fn unit_scale(&self) -> Vec3 {
        match self.shape {
            Shape::Box { size } => size,
            Shape::Cylinder { radius, length } => Vec3::new(radius * 2.0, length, radius * 2.0),
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Translation * rotation * scale, mapping the unit mesh into place.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.unit_scale(), self.orientation(), self.position)
    }
}

impl From<&Placement> for InstanceRaw {
    fn from(p: &Placement) -> Self {
        Self {
            model: p.model_matrix().to_cols_array_2d(),
            role: p.role.index() as u32,
            _pad: [0; 3],
        }
    }
}

impl Layout {
    /// One instance per placement, in emission order.
    pub fn instances(&self) -> Vec<InstanceRaw> {
        self.iter().map(InstanceRaw::from).collect()
    }
}

/// Byte view for uploading into a vertex or storage buffer.
#[inline]
pub fn instance_bytes(instances: &[InstanceRaw]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
