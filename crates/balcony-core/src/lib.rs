pub mod constants;
pub mod error;
pub mod instance;
pub mod layout;
pub mod params;
pub mod placement;
pub mod preset;

pub use error::{CatalogError, LayoutError, Result};
pub use instance::{instance_bytes, InstanceRaw};
pub use layout::{assemble, InfillPlan, Layout, LayoutMemo, RoleCounts};
pub use params::{
    FrameMaterial, Parameters, PlatformMaterial, RailingStyle, RawParameters, SupportCount,
};
pub use placement::{Edge, Placement, Role, Shape};
pub use preset::{
    AxisLimits, Catalog, ConstraintViolation, Manufacturer, Preset, PresetDefaults, PresetLimits,
};
