// Tests for the style-specific railing infill.

use std::f32::consts::FRAC_PI_2;

use balcony_core::constants::*;
use balcony_core::layout::{bar_count, layout_infill};
use balcony_core::{InfillPlan, Parameters, Placement, RailingStyle, Role, Shape};
use glam::Vec3;

const EPS: f32 = 1e-4;

fn params(width: f32, depth: f32, railing_style: RailingStyle) -> Parameters {
    Parameters {
        width,
        depth,
        platform_height: 2.5,
        railing_height: 1.1,
        railing_style,
        ..Parameters::default()
    }
}

fn infill(p: &Parameters) -> Vec<Placement> {
    let mut out = Vec::new();
    layout_infill(p, &mut out);
    out
}

fn count(out: &[Placement], role: Role) -> usize {
    out.iter().filter(|e| e.role == role).count()
}

fn near(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn plan_dispatches_on_style() {
    let glass = InfillPlan::for_params(&params(3.0, 1.5, RailingStyle::Glass));
    assert_eq!(glass, InfillPlan::Glass { mid_rail_y: None });

    match InfillPlan::for_params(&params(3.0, 1.5, RailingStyle::GlassDouble)) {
        InfillPlan::Glass { mid_rail_y: Some(y) } => assert!(near(y, 2.5 + 0.7 * 1.1)),
        other => panic!("unexpected plan {other:?}"),
    }

    match InfillPlan::for_params(&params(3.0, 1.5, RailingStyle::Bars)) {
        InfillPlan::Bars { pitch, bottom_rail_y } => {
            assert_eq!(pitch, BAR_PITCH);
            assert!(near(bottom_rail_y, 2.55));
        }
        other => panic!("unexpected plan {other:?}"),
    }
}

#[test]
fn every_style_starts_with_one_top_handrail_per_edge() {
    for style in RailingStyle::ALL {
        let p = params(3.0, 1.5, style);
        let out = infill(&p);
        let top = &out[..3];
        for rail in top {
            assert_eq!(rail.role, Role::Handrail);
            assert!(near(rail.position.y, 3.6));
            assert_eq!(
                rail.shape,
                Shape::Cylinder {
                    radius: TOP_RAIL_RADIUS,
                    length: if rail.rotation.z != 0.0 { 3.0 } else { 1.5 }
                }
            );
        }
        // front, left, right
        assert_eq!(top[0].position, Vec3::new(0.0, top[0].position.y, 0.75));
        assert_eq!(top[0].rotation, Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert_eq!(top[1].position, Vec3::new(-1.5, top[1].position.y, 0.0));
        assert_eq!(top[1].rotation, Vec3::new(FRAC_PI_2, 0.0, 0.0));
        assert_eq!(top[2].position, Vec3::new(1.5, top[2].position.y, 0.0));
    }
}

#[test]
fn glass_has_one_inset_panel_per_edge() {
    let out = infill(&params(3.0, 1.5, RailingStyle::Glass));
    assert_eq!(out.len(), 6);
    assert_eq!(count(&out, Role::Handrail), 3);
    assert_eq!(count(&out, Role::Panel), 3);
    assert_eq!(count(&out, Role::Bar), 0);

    let panels = &out[3..];
    let height = 0.85 * 1.1;
    let center_y = 2.5 + 0.45 * 1.1;

    let front = panels[0];
    assert!(near(front.position.x, 0.0));
    assert!(near(front.position.y, center_y));
    assert!(near(front.position.z, 0.75 - PANEL_INSET));
    match front.shape {
        Shape::Box { size } => {
            assert!(size.abs_diff_eq(Vec3::new(2.9, height, PANEL_THICKNESS), EPS));
        }
        other => panic!("panel should be a box, got {other:?}"),
    }

    let left = panels[1];
    let right = panels[2];
    assert!(near(left.position.x, -1.5 + PANEL_INSET));
    assert!(near(right.position.x, 1.5 - PANEL_INSET));
    for side in [left, right] {
        assert!(near(side.position.z, 0.0));
        match side.shape {
            Shape::Box { size } => {
                assert!(size.abs_diff_eq(Vec3::new(PANEL_THICKNESS, height, 1.4), EPS));
            }
            other => panic!("panel should be a box, got {other:?}"),
        }
    }
}

#[test]
fn glass_double_adds_exactly_one_mid_rail_per_edge() {
    let glass = infill(&params(3.0, 1.5, RailingStyle::Glass));
    let double = infill(&params(3.0, 1.5, RailingStyle::GlassDouble));
    assert_eq!(
        count(&double, Role::Handrail),
        count(&glass, Role::Handrail) + 3
    );
    assert_eq!(count(&double, Role::Panel), 3);

    let mid_y = 2.5 + MID_RAIL_FRACTION * 1.1;
    let mids: Vec<&Placement> = double
        .iter()
        .filter(|e| e.role == Role::Handrail && near(e.position.y, mid_y))
        .collect();
    assert_eq!(mids.len(), 3);
    // one per edge: front, left, right
    assert!(near(mids[0].position.z, 0.75));
    assert!(near(mids[1].position.x, -1.5));
    assert!(near(mids[2].position.x, 1.5));
    for mid in mids {
        assert!(matches!(mid.shape, Shape::Cylinder { radius, .. } if radius == RAIL_RADIUS));
    }

    // the panels are unchanged by the extra rail
    assert_eq!(&glass[3..], &double[6..]);
}

#[test]
fn bar_count_floors_edge_length_over_pitch() {
    assert_eq!(bar_count(1.5, BAR_PITCH), 12);
    assert_eq!(bar_count(3.1, BAR_PITCH), 25);
    assert_eq!(bar_count(0.25, BAR_PITCH), 2);
    assert_eq!(bar_count(0.2, BAR_PITCH), 1);
}

#[test]
fn bars_replace_panels_and_add_bottom_rails() {
    let p = params(3.1, 1.5, RailingStyle::Bars);
    let out = infill(&p);
    assert_eq!(count(&out, Role::Panel), 0);
    assert_eq!(count(&out, Role::Handrail), 3);
    assert_eq!(count(&out, Role::Bar), 24 + 11 + 11);
    assert_eq!(count(&out, Role::BottomRail), 3);

    // bottom rails close the list
    let bottom = &out[out.len() - 3..];
    for rail in bottom {
        assert_eq!(rail.role, Role::BottomRail);
        assert!(near(rail.position.y, 2.5 + BOTTOM_RAIL_OFFSET));
    }
}

#[test]
fn bars_sit_strictly_between_the_corners_and_symmetrically() {
    let p = params(3.1, 1.5, RailingStyle::Bars);
    let out = infill(&p);
    let bars: Vec<&Placement> = out.iter().filter(|e| e.role == Role::Bar).collect();
    let (front, sides) = bars.split_at(24);
    let (left, right) = sides.split_at(11);

    for bar in front {
        assert!(bar.position.x > -1.55 && bar.position.x < 1.55);
        assert!(near(bar.position.z, 0.75));
    }
    for (a, b) in front.iter().zip(front.iter().rev()) {
        assert!(near(a.position.x, -b.position.x));
    }
    for bar in left {
        assert!(near(bar.position.x, -1.55));
        assert!(bar.position.z > -0.75 && bar.position.z < 0.75);
    }
    for bar in right {
        assert!(near(bar.position.x, 1.55));
    }
    for bar in &bars {
        assert!(near(bar.position.y, 2.5 + 0.45 * 1.1));
        assert_eq!(
            bar.shape,
            Shape::Cylinder {
                radius: BAR_RADIUS,
                length: INFILL_HEIGHT_FRACTION * 1.1
            }
        );
    }
    assert!(front.windows(2).all(|w| w[0].position.x < w[1].position.x));
}

#[test]
fn glass_styles_never_emit_bars() {
    for style in [RailingStyle::Glass, RailingStyle::GlassDouble] {
        for (w, d) in [(1.0, 0.8), (3.0, 1.5), (6.0, 3.0)] {
            assert_eq!(count(&infill(&params(w, d, style)), Role::Bar), 0);
        }
    }
}
