//! Parametric structural layout.
//!
//! Turns one `Parameters` record into the ordered list of placements a
//! renderer draws: platform slab, supports, railing posts, then the style
//! infill. Every function here is pure, so identical parameters always give an
//! identical list, order included; the order doubles as a rendering key.

mod infill;
mod posts;
mod supports;

use std::fmt;

use glam::Vec3;

use crate::constants::PLATFORM_THICKNESS;
use crate::error::Result;
use crate::params::Parameters;
use crate::placement::{Placement, Role};

pub use infill::{bar_count, layout_infill, InfillPlan};
pub use posts::{layout_posts, post_count, post_stations};
pub use supports::{layout_supports, support_footprint};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    pub fn compute(params: &Parameters) -> Result<Self> {
        params.validate()?;
        let layout = assemble(params);
        log::debug!(
            "[layout] {}x{} m, supports={} style={} -> {}",
            params.width,
            params.depth,
            params.support_count,
            params.railing_style,
            layout.counts()
        );
        Ok(layout)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.role == role)
    }

    pub fn counts(&self) -> RoleCounts {
        let mut counts = RoleCounts::default();
        for p in &self.placements {
            counts.0[p.role.index()] += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Concatenate slab, supports, posts and infill. Does not validate; callers
/// go through [`Layout::compute`] unless the parameters are known good.
pub fn assemble(params: &Parameters) -> Layout {
    let mut placements = Vec::with_capacity(64);
    placements.push(platform_slab(params));
    layout_supports(params, &mut placements);
    layout_posts(params, &mut placements);
    layout_infill(params, &mut placements);
    Layout { placements }
}

pub fn platform_slab(params: &Parameters) -> Placement {
    Placement::cuboid(
        Role::Platform,
        Vec3::new(0.0, params.platform_height - PLATFORM_THICKNESS / 2.0, 0.0),
        Vec3::new(params.width, PLATFORM_THICKNESS, params.depth),
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts([usize; 7]);

impl RoleCounts {
    #[inline]
    pub fn get(&self, role: Role) -> usize {
        self.0[role.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl fmt::Display for RoleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for role in Role::ALL {
            let n = self.get(role);
            if n == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", role.as_str(), n)?;
            first = false;
        }
        Ok(())
    }
}

/// Single-slot cache keyed by the full parameter record.
///
/// Returns the previous layout when called again with equal parameters and
/// recomputes from scratch otherwise. Nothing is patched in place.
#[derive(Debug, Default)]
pub struct LayoutMemo {
    last: Option<(Parameters, Layout)>,
    hits: u64,
    misses: u64,
}

impl LayoutMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, params: &Parameters) -> Result<&Layout> {
        if matches!(self.last, Some((cached, _)) if cached == *params) {
            self.hits += 1;
            return Ok(&self.last.as_ref().unwrap().1);
        }
        let layout = Layout::compute(params)?;
        self.misses += 1;
        Ok(&self.last.insert((*params, layout)).1)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
