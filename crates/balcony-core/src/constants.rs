// Fixed structural sizes and layout tuning constants (meters).

// Element cross-sections
pub const PLATFORM_THICKNESS: f32 = 0.15; // slab, top face sits at platform height
pub const SUPPORT_BEAM_SIZE: f32 = 0.1; // square column cross-section
pub const POST_RADIUS: f32 = 0.03;
pub const RAIL_RADIUS: f32 = 0.015; // mid and bottom rails
pub const TOP_RAIL_RADIUS: f32 = RAIL_RADIUS * 1.5;
pub const BAR_RADIUS: f32 = 0.01;
pub const PANEL_THICKNESS: f32 = 0.01;

// Spacing targets
pub const POST_SPACING: f32 = 0.8; // nominal max distance between posts
pub const BAR_PITCH: f32 = 0.12; // fixed distance between bars

// Infill proportions, as fractions of the railing height
pub const INFILL_CENTER_FRACTION: f32 = 0.45;
pub const INFILL_HEIGHT_FRACTION: f32 = 0.85;
pub const MID_RAIL_FRACTION: f32 = 0.7; // second handrail of the glass-double style

pub const PANEL_INSET: f32 = 0.01; // offset from the post line toward the platform
pub const PANEL_MARGIN: f32 = 0.1; // trimmed off each panel's length
pub const BOTTOM_RAIL_OFFSET: f32 = 0.05; // above the platform top

pub const MAX_LENGTH: f32 = 100.0; // hard cap on any input length, far above every preset

// Default (unconstrained) slider ranges: [min, max, default]
pub const WIDTH_LIMITS: [f32; 3] = [1.0, 6.0, 3.0];
pub const DEPTH_LIMITS: [f32; 3] = [0.8, 3.0, 1.5];
pub const PLATFORM_HEIGHT_LIMITS: [f32; 3] = [0.5, 4.0, 2.5];
pub const RAILING_HEIGHT_LIMITS: [f32; 3] = [0.8, 1.5, 1.1];
