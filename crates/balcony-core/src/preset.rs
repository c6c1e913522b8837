//! Manufacturer presets: per-axis limits and allow-lists.
//!
//! This is the validation stage in front of the engine. The engine itself
//! never looks at a preset; callers sanitize parameters here first and hand
//! the result to [`Layout::compute`](crate::layout::Layout::compute).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEPTH_LIMITS, MAX_LENGTH, PLATFORM_HEIGHT_LIMITS, RAILING_HEIGHT_LIMITS, WIDTH_LIMITS,
};
use crate::error::CatalogError;
use crate::params::{
    FrameMaterial, Parameters, PlatformMaterial, RailingStyle, RawParameters, SupportCount,
};

pub static BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl AxisLimits {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    const fn from_array(limits: [f32; 3]) -> Self {
        Self::new(limits[0], limits[1], limits[2])
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into [min, max]. NaN lands on `min`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    fn is_consistent(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.max <= MAX_LENGTH
            && self.min <= self.default
            && self.default <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetLimits {
    pub width: AxisLimits,
    pub depth: AxisLimits,
    pub platform_height: AxisLimits,
    pub railing_height: AxisLimits,
}

impl Default for PresetLimits {
    fn default() -> Self {
        Self {
            width: AxisLimits::from_array(WIDTH_LIMITS),
            depth: AxisLimits::from_array(DEPTH_LIMITS),
            platform_height: AxisLimits::from_array(PLATFORM_HEIGHT_LIMITS),
            railing_height: AxisLimits::from_array(RAILING_HEIGHT_LIMITS),
        }
    }
}

impl PresetLimits {
    fn axes(&self) -> [(&'static str, AxisLimits); 4] {
        [
            ("width", self.width),
            ("depth", self.depth),
            ("platform height", self.platform_height),
            ("railing height", self.railing_height),
        ]
    }

    /// Copy of `params` with every length clamped into range.
    pub fn clamp(&self, params: &Parameters) -> Parameters {
        Parameters {
            width: self.width.clamp(params.width),
            depth: self.depth.clamp(params.depth),
            platform_height: self.platform_height.clamp(params.platform_height),
            railing_height: self.railing_height.clamp(params.railing_height),
            ..*params
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDefaults {
    pub support_count: SupportCount,
    pub platform_material: PlatformMaterial,
    pub railing_style: RailingStyle,
    pub frame_material: FrameMaterial,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub manufacturer_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub allowed_support_counts: Vec<SupportCount>,
    pub allowed_platform_materials: Vec<PlatformMaterial>,
    pub allowed_railing_styles: Vec<RailingStyle>,
    pub allowed_frame_materials: Vec<FrameMaterial>,
    pub defaults: PresetDefaults,
    pub limits: PresetLimits,
}

/// One way a parameter record falls outside a preset.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConstraintViolation {
    #[error("{axis} {value} outside [{min}, {max}]")]
    OutOfRange {
        axis: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{option} `{value}` is not offered")]
    NotAllowed { option: &'static str, value: String },
}

impl Preset {
    pub fn default_parameters(&self) -> Parameters {
        Parameters {
            width: self.limits.width.default,
            depth: self.limits.depth.default,
            platform_height: self.limits.platform_height.default,
            railing_height: self.limits.railing_height.default,
            support_count: self.defaults.support_count,
            platform_material: self.defaults.platform_material,
            railing_style: self.defaults.railing_style,
            frame_material: self.defaults.frame_material,
        }
    }

    /// Clamp lengths into the preset limits and swap any option the preset
    /// does not offer for its default.
    pub fn sanitize(&self, params: &Parameters) -> Parameters {
        let mut out = self.limits.clamp(params);
        if !self.allowed_support_counts.contains(&out.support_count) {
            out.support_count = self.defaults.support_count;
        }
        if !self.allowed_platform_materials.contains(&out.platform_material) {
            out.platform_material = self.defaults.platform_material;
        }
        if !self.allowed_railing_styles.contains(&out.railing_style) {
            out.railing_style = self.defaults.railing_style;
        }
        if !self.allowed_frame_materials.contains(&out.frame_material) {
            out.frame_material = self.defaults.frame_material;
        }
        if out != *params {
            log::debug!("[preset] {} adjusted {:?} -> {:?}", self.id, params, out);
        }
        out
    }

    /// Every constraint `params` breaks, without changing anything.
    pub fn violations(&self, params: &Parameters) -> Vec<ConstraintViolation> {
        let values = [
            params.width,
            params.depth,
            params.platform_height,
            params.railing_height,
        ];
        let mut out: Vec<ConstraintViolation> = self
            .limits
            .axes()
            .into_iter()
            .zip(values)
            .filter(|((_, limits), value)| !limits.contains(*value))
            .map(|((axis, limits), value)| ConstraintViolation::OutOfRange {
                axis,
                value,
                min: limits.min,
                max: limits.max,
            })
            .collect();

        if !self.allowed_support_counts.contains(&params.support_count) {
            out.push(not_allowed("support count", params.support_count.to_string()));
        }
        if !self.allowed_platform_materials.contains(&params.platform_material) {
            out.push(not_allowed("platform material", params.platform_material.as_str()));
        }
        if !self.allowed_railing_styles.contains(&params.railing_style) {
            out.push(not_allowed("railing style", params.railing_style.as_str()));
        }
        if !self.allowed_frame_materials.contains(&params.frame_material) {
            out.push(not_allowed("frame material", params.frame_material.as_str()));
        }
        out
    }

    /// Decode a raw request, report what the preset would change, then
    /// sanitize it.
    pub fn admit(&self, raw: &RawParameters) -> crate::error::Result<Parameters> {
        let params = Parameters::try_from(raw)?;
        for violation in self.violations(&params) {
            log::warn!("[preset] {}: {}", self.id, violation);
        }
        Ok(self.sanitize(&params))
    }

    fn check(&self) -> Result<(), CatalogError> {
        let inconsistent =
            |what: String| CatalogError::Inconsistent(format!("{}: {what}", self.id));
        for (axis, limits) in self.limits.axes() {
            if !limits.is_consistent() {
                return Err(inconsistent(format!("{axis} limits {limits:?}")));
            }
        }
        if self.allowed_support_counts.is_empty()
            || self.allowed_platform_materials.is_empty()
            || self.allowed_railing_styles.is_empty()
            || self.allowed_frame_materials.is_empty()
        {
            return Err(inconsistent("empty allow-list".to_string()));
        }
        let d = &self.defaults;
        if !self.allowed_support_counts.contains(&d.support_count)
            || !self.allowed_platform_materials.contains(&d.platform_material)
            || !self.allowed_railing_styles.contains(&d.railing_style)
            || !self.allowed_frame_materials.contains(&d.frame_material)
        {
            return Err(inconsistent("default option not in its allow-list".to_string()));
        }
        Ok(())
    }
}

fn not_allowed(option: &'static str, value: impl Into<String>) -> ConstraintViolation {
    ConstraintViolation::NotAllowed {
        option,
        value: value.into(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Preset ids, in display order.
    pub presets: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub manufacturers: BTreeMap<String, Manufacturer>,
    pub presets: BTreeMap<String, Preset>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            "[preset] loaded {} manufacturers, {} presets",
            catalog.manufacturers.len(),
            catalog.presets.len()
        );
        Ok(catalog)
    }

        pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn manufacturer(&self, slug: &str) -> Option<&Manufacturer> {
        self.manufacturers
            .get(slug)
            .or_else(|| self.manufacturers.values().find(|m| m.slug == slug))
    }

    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.get(id)
    }

    /// Presets offered by a manufacturer, in its display order. Empty when the
    /// manufacturer is unknown.
    pub fn presets_for(&self, slug: &str) -> Vec<&Preset> {
        self.manufacturer(slug)
            .map(|m| m.presets.iter().filter_map(|id| self.preset(id)).collect())
            .unwrap_or_default()
    }

    pub fn resolve(
        &self,
        slug: &str,
        preset_id: &str,
    ) -> Result<(&Manufacturer, &Preset), CatalogError> {
        let manufacturer = self
            .manufacturer(slug)
            .ok_or_else(|| CatalogError::UnknownManufacturer(slug.to_string()))?;
        let preset = self
            .preset(preset_id)
            .ok_or_else(|| CatalogError::UnknownPreset(preset_id.to_string()))?;
        if preset.manufacturer_id != manufacturer.id {
            return Err(CatalogError::PresetNotOffered {
                manufacturer: manufacturer.name.clone(),
                preset: preset_id.to_string(),
            });
        }
        Ok((manufacturer, preset))
    }

    /// Cross-check keys, references, limits and allow-lists.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (key, preset) in &self.presets {
            if *key != preset.id {
                return Err(CatalogError::Inconsistent(format!(
                    "preset key `{key}` does not match id `{}`",
                    preset.id
                )));
            }
            if !self.manufacturers.contains_key(&preset.manufacturer_id) {
                return Err(CatalogError::Inconsistent(format!(
                    "preset `{key}` names unknown manufacturer `{}`",
                    preset.manufacturer_id
                )));
            }
            preset.check()?;
        }
        for (key, manufacturer) in &self.manufacturers {
            if *key != manufacturer.id {
                return Err(CatalogError::Inconsistent(format!(
                    "manufacturer key `{key}` does not match id `{}`",
                    manufacturer.id
                )));
            }
            for id in &manufacturer.presets {
                match self.presets.get(id) {
                    Some(p) if p.manufacturer_id == manufacturer.id => {}
                    Some(_) => {
                        return Err(CatalogError::Inconsistent(format!(
                            "manufacturer `{key}` lists preset `{id}` owned by someone else"
                        )))
                    }
                    None => {
                        return Err(CatalogError::Inconsistent(format!(
                            "manufacturer `{key}` lists unknown preset `{id}`"
                        )))
                    }
                }
            }
        }
        Ok(())
    }
}
