use glam::Vec3;
use smallvec::SmallVec;

use crate::constants::{POST_RADIUS, POST_SPACING};
use crate::params::Parameters;
use crate::placement::{Edge, Placement, Role};

/// Posts needed along an edge so that neighbours are at most `spacing` apart,
/// corners included. Never fewer than the two corner posts.
#[inline]
pub fn post_count(length: f32, spacing: f32) -> usize {
    ((length / spacing).ceil() as usize).saturating_add(1).max(2)
}

/// Ground-level post positions: the whole front edge, then the interior
/// stations of the left edge, then those of the right edge.
///
/// The side edges skip both end stations: the front ones coincide with the
/// front corner posts and the back edge meets the building wall.
pub fn post_stations(params: &Parameters) -> SmallVec<[Vec3; 16]> {
    let mut stations = SmallVec::new();

    let front = post_count(params.width, POST_SPACING);
    let step = params.width / (front - 1) as f32;
    for i in 0..front {
        stations.push(Edge::Front.station(params, i as f32 * step));
    }

    let side = post_count(params.depth, POST_SPACING);
    let step = params.depth / (side - 1) as f32;
    for edge in [Edge::Left, Edge::Right] {
        for i in 1..side - 1 {
            stations.push(edge.station(params, i as f32 * step));
        }
    }
    stations
}

pub fn layout_posts(params: &Parameters, out: &mut Vec<Placement>) {
    let center_y = params.platform_height + params.railing_height / 2.0;
    for station in post_stations(params) {
        out.push(Placement::column(
            Role::Post,
            Vec3::new(station.x, center_y, station.z),
            POST_RADIUS,
            params.railing_height,
        ));
    }
}
