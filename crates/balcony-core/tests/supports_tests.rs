// Tests for support beam placement.

use balcony_core::constants::SUPPORT_BEAM_SIZE;
use balcony_core::layout::{layout_supports, support_footprint};
use balcony_core::{Parameters, Role, Shape, SupportCount};
use glam::Vec3;

const EPS: f32 = 1e-4;

fn params(width: f32, depth: f32, support_count: SupportCount) -> Parameters {
    Parameters {
        width,
        depth,
        support_count,
        ..Parameters::default()
    }
}

fn assert_near(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn two_supports_sit_flush_at_the_front_corners() {
    let footprint = support_footprint(&params(3.0, 1.5, SupportCount::Two));
    assert_eq!(footprint.len(), 2);
    assert_near(footprint[0], Vec3::new(-1.45, 0.0, 0.7));
    assert_near(footprint[1], Vec3::new(1.45, 0.0, 0.7));
}

#[test]
fn three_supports_add_a_center_beam_on_the_front_row() {
    let footprint = support_footprint(&params(3.0, 1.5, SupportCount::Three));
    let xs: Vec<f32> = footprint.iter().map(|p| p.x).collect();
    assert_eq!(footprint.len(), 3);
    assert!((xs[0] + 1.45).abs() < EPS);
    assert_eq!(xs[1], 0.0);
    assert!((xs[2] - 1.45).abs() < EPS);
    assert!(footprint.iter().all(|p| (p.z - 0.7).abs() < EPS));
}

#[test]
fn four_supports_split_into_front_and_back_rows() {
    let footprint = support_footprint(&params(4.0, 2.0, SupportCount::Four));
    let expected = [
        Vec3::new(-1.95, 0.0, 0.95),
        Vec3::new(1.95, 0.0, 0.95),
        Vec3::new(-1.95, 0.0, -0.95),
        Vec3::new(1.95, 0.0, -0.95),
    ];
    assert_eq!(footprint.len(), expected.len());
    for (actual, expected) in footprint.iter().zip(expected) {
        assert_near(*actual, expected);
    }
}

#[test]
fn six_supports_mirror_three_across_the_depth() {
    let footprint = support_footprint(&params(5.0, 2.5, SupportCount::Six));
    assert_eq!(footprint.len(), 6);
    let (front, back) = footprint.split_at(3);
    for (f, b) in front.iter().zip(back) {
        assert_eq!(f.x, b.x);
        assert!((f.z + b.z).abs() < EPS, "rows not mirrored: {f:?} / {b:?}");
    }
    assert!((front[0].x + 2.45).abs() < EPS);
    assert_eq!(front[1].x, 0.0);
    assert!((front[2].x - 2.45).abs() < EPS);
    assert!((front[0].z - 1.2).abs() < EPS);
}

#[test]
fn rows_are_ordered_left_to_right() {
    for count in SupportCount::ALL {
        let footprint = support_footprint(&params(4.0, 2.0, count));
        let row_len = if count.has_back_row() {
            footprint.len() / 2
        } else {
            footprint.len()
        };
        for row in footprint.chunks(row_len) {
            assert!(row.windows(2).all(|w| w[0].x < w[1].x));
        }
    }
}

#[test]
fn beams_are_full_height_columns() {
    let p = Parameters {
        platform_height: 2.8,
        ..params(4.0, 2.0, SupportCount::Six)
    };
    let mut out = Vec::new();
    layout_supports(&p, &mut out);
    assert_eq!(out.len(), 6);
    for beam in &out {
        assert_eq!(beam.role, Role::Support);
        assert_eq!(beam.rotation, Vec3::ZERO);
        assert!((beam.position.y - 1.4).abs() < EPS);
        match beam.shape {
            Shape::Box { size } => {
                assert_eq!(size, Vec3::new(SUPPORT_BEAM_SIZE, 2.8, SUPPORT_BEAM_SIZE));
            }
            other => panic!("support should be a box, got {other:?}"),
        }
    }
}

#[test]
fn outer_faces_are_flush_with_the_platform_edges() {
    for count in SupportCount::ALL {
        let p = params(3.3, 1.7, count);
        let footprint = support_footprint(&p);
        let max_x = footprint.iter().map(|b| b.x.abs()).fold(0.0, f32::max);
        let max_z = footprint.iter().map(|b| b.z.abs()).fold(0.0, f32::max);
        assert!((max_x + SUPPORT_BEAM_SIZE / 2.0 - p.width / 2.0).abs() < EPS);
        assert!((max_z + SUPPORT_BEAM_SIZE / 2.0 - p.depth / 2.0).abs() < EPS);
    }
}
