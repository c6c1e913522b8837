use glam::Vec3;
use smallvec::SmallVec;

use crate::constants::SUPPORT_BEAM_SIZE;
use crate::params::{Parameters, SupportCount};
use crate::placement::{Placement, Role};

/// Ground-contact centers of the support beams.
///
/// Front row left to right, then back row left to right. Beams are inset by
/// half their cross-section so the outer faces are flush with the platform.
pub fn support_footprint(params: &Parameters) -> SmallVec<[Vec3; 6]> {
    let inset = SUPPORT_BEAM_SIZE / 2.0;
    let left = -params.width / 2.0 + inset;
    let right = params.width / 2.0 - inset;
    let front = params.depth / 2.0 - inset;
    let back = -params.depth / 2.0 + inset;

    let row: SmallVec<[f32; 3]> = match params.support_count {
        SupportCount::Two | SupportCount::Four => SmallVec::from_slice(&[left, right]),
        SupportCount::Three | SupportCount::Six => SmallVec::from_slice(&[left, 0.0, right]),
    };

    let mut footprint: SmallVec<[Vec3; 6]> =
        row.iter().map(|&x| Vec3::new(x, 0.0, front)).collect();
    if params.support_count.has_back_row() {
        footprint.extend(row.iter().map(|&x| Vec3::new(x, 0.0, back)));
    }
    footprint
}

pub fn layout_supports(params: &Parameters, out: &mut Vec<Placement>) {
    let height = params.platform_height;
    let size = Vec3::new(SUPPORT_BEAM_SIZE, height, SUPPORT_BEAM_SIZE);
    for base in support_footprint(params) {
        out.push(Placement::cuboid(
            Role::Support,
            base + Vec3::Y * (height / 2.0),
            size,
        ));
    }
}
