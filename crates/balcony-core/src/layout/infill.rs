use glam::Vec3;

use crate::constants::*;
use crate::params::{Parameters, RailingStyle};
use crate::placement::{Edge, Placement, Role};

/// Style-specific part of the railing, resolved once per computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InfillPlan {
    /// One glass panel per open edge, optionally with a second handrail at
    /// `mid_rail_y`.
    Glass { mid_rail_y: Option<f32> },
    /// Vertical bars at a fixed pitch plus a bottom rail per edge.
    Bars { pitch: f32, bottom_rail_y: f32 },
}

impl InfillPlan {
    pub fn for_params(params: &Parameters) -> Self {
        match params.railing_style {
            RailingStyle::Glass => Self::Glass { mid_rail_y: None },
            RailingStyle::GlassDouble => {
                let y = params.platform_height + MID_RAIL_FRACTION * params.railing_height;
                Self::Glass { mid_rail_y: Some(y) }
            }
            RailingStyle::Bars => Self::Bars {
                pitch: BAR_PITCH,
                bottom_rail_y: params.platform_height + BOTTOM_RAIL_OFFSET,
            },
        }
    }
}

/// Bars that fit along an edge at the given pitch. Bars stand at stations
/// `1..count`, so both edge ends stay free for the corner posts.
#[inline]
pub fn bar_count(length: f32, pitch: f32) -> usize {
    (length / pitch).floor() as usize
}

/// Top handrails for every style, then the style-specific elements.
pub fn layout_infill(params: &Parameters, out: &mut Vec<Placement>) {
    let top_y = params.platform_height + params.railing_height;
    for edge in Edge::OPEN {
        out.push(Placement::rail(
            Role::Handrail,
            edge,
            params,
            top_y,
            TOP_RAIL_RADIUS,
        ));
    }

    match InfillPlan::for_params(params) {
        InfillPlan::Glass { mid_rail_y } => {
            if let Some(y) = mid_rail_y {
                for edge in Edge::OPEN {
                    out.push(Placement::rail(Role::Handrail, edge, params, y, RAIL_RADIUS));
                }
            }
            for edge in Edge::OPEN {
                if let Some(panel) = glass_panel(params, edge) {
                    out.push(panel);
                }
            }
        }
        InfillPlan::Bars { pitch, bottom_rail_y } => {
            for edge in Edge::OPEN {
                layout_bars(params, edge, pitch, out);
            }
            for edge in Edge::OPEN {
                out.push(Placement::rail(
                    Role::BottomRail,
                    edge,
                    params,
                    bottom_rail_y,
                    RAIL_RADIUS,
                ));
            }
        }
    }
}

fn infill_center_y(params: &Parameters) -> f32 {
    params.platform_height + INFILL_CENTER_FRACTION * params.railing_height
}

fn glass_panel(params: &Parameters, edge: Edge) -> Option<Placement> {
    let span = edge.length(params) - PANEL_MARGIN;
    if span <= 0.0 {
        log::debug!("[layout] {edge:?} edge too short for a panel");
        return None;
    }
    let height = INFILL_HEIGHT_FRACTION * params.railing_height;
    let size = match edge {
        Edge::Front => Vec3::new(span, height, PANEL_THICKNESS),
        Edge::Left | Edge::Right => Vec3::new(PANEL_THICKNESS, height, span),
    };
    let mut center = edge.midpoint(params) + edge.inward() * PANEL_INSET;
    center.y = infill_center_y(params);
    Some(Placement::cuboid(Role::Panel, center, size))
}

fn layout_bars(params: &Parameters, edge: Edge, pitch: f32, out: &mut Vec<Placement>) {
    let length = edge.length(params);
    let count = bar_count(length, pitch);
    if count < 2 {
        return;
    }
    // Spread over the whole edge so both end gaps match.
    let step = length / count as f32;
    let center_y = infill_center_y(params);
    let bar_length = INFILL_HEIGHT_FRACTION * params.railing_height;
    for i in 1..count {
        let station = edge.station(params, i as f32 * step);
        out.push(Placement::column(
            Role::Bar,
            Vec3::new(station.x, center_y, station.z),
            BAR_RADIUS,
            bar_length,
        ));
    }
}
