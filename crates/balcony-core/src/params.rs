//! Input record for one layout computation.
//!
//! `Parameters` is the typed form the engine consumes. `RawParameters` is the
//! loosely-typed form a UI or a JSON document delivers; decoding it is where
//! unknown support counts, styles and materials are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEPTH_LIMITS, MAX_LENGTH, PLATFORM_HEIGHT_LIMITS, RAILING_HEIGHT_LIMITS, WIDTH_LIMITS,
};
use crate::error::{LayoutError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SupportCount {
    Two,
    Three,
    Four,
    Six,
}

impl SupportCount {
    pub const ALL: [SupportCount; 4] = [Self::Two, Self::Three, Self::Four, Self::Six];

    #[inline]
    pub fn get(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Six => 6,
        }
    }

    /// Counts 4 and 6 add a back row of beams.
    #[inline]
    pub fn has_back_row(self) -> bool {
        matches!(self, Self::Four | Self::Six)
    }
}

impl TryFrom<u32> for SupportCount {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            other => Err(LayoutError::InvalidSupportCount(other)),
        }
    }
}

impl From<SupportCount> for u32 {
    fn from(count: SupportCount) -> u32 {
        count.get()
    }
}

impl fmt::Display for SupportCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RailingStyle {
    Glass,
    GlassDouble,
    Bars,
}

impl RailingStyle {
    pub const ALL: [RailingStyle; 3] = [Self::Glass, Self::GlassDouble, Self::Bars];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::GlassDouble => "glass-double",
            Self::Bars => "bars",
        }
    }
}

impl FromStr for RailingStyle {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| LayoutError::InvalidRailingStyle(s.to_string()))
    }
}

impl fmt::Display for RailingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Materials are visual only and never change geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformMaterial {
    Douglasie,
    Wpc,
    Alu,
}

impl PlatformMaterial {
    pub const ALL: [PlatformMaterial; 3] = [Self::Douglasie, Self::Wpc, Self::Alu];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Douglasie => "douglasie",
            Self::Wpc => "wpc",
            Self::Alu => "alu",
        }
    }
}

impl FromStr for PlatformMaterial {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| LayoutError::InvalidMaterial {
                kind: "platform",
                tag: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameMaterial {
    PuLackiert,
    Feuerverzinkt,
}

impl FrameMaterial {
    pub const ALL: [FrameMaterial; 2] = [Self::PuLackiert, Self::Feuerverzinkt];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PuLackiert => "pu-lackiert",
            Self::Feuerverzinkt => "feuerverzinkt",
        }
    }
}

impl FromStr for FrameMaterial {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| LayoutError::InvalidMaterial {
                kind: "frame",
                tag: s.to_string(),
            })
    }
}

/// Dimensions and variant selection for one balcony.
///
/// Lengths are meters. The frame is centered on the platform footprint with
/// +z towards the open front and y = 0 on the ground.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub width: f32,
    pub depth: f32,
    pub platform_height: f32,
    pub railing_height: f32,
    pub support_count: SupportCount,
    pub platform_material: PlatformMaterial,
    pub railing_style: RailingStyle,
    pub frame_material: FrameMaterial,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width: WIDTH_LIMITS[2],
            depth: DEPTH_LIMITS[2],
            platform_height: PLATFORM_HEIGHT_LIMITS[2],
            railing_height: RAILING_HEIGHT_LIMITS[2],
            support_count: SupportCount::Two,
            platform_material: PlatformMaterial::Douglasie,
            railing_style: RailingStyle::Glass,
            frame_material: FrameMaterial::PuLackiert,
        }
    }
}

impl Parameters {
    /// Reject zero, negative, non-finite or oversized lengths before any geometry
    /// is built.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("width", self.width),
            ("depth", self.depth),
            ("platform height", self.platform_height),
            ("railing height", self.railing_height),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                log::warn!("[params] rejected {name}={value}");
                return Err(LayoutError::DegenerateDimension { name, value });
            }
            if value > MAX_LENGTH {
                log::warn!("[params] rejected {name}={value}, above {MAX_LENGTH}");
                return Err(LayoutError::DimensionTooLarge {
                    name,
                    value,
                    max: MAX_LENGTH,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameters {
    pub width: f32,
    pub depth: f32,
    pub platform_height: f32,
    pub railing_height: f32,
    pub support_count: u32,
    pub platform_material: String,
    pub railing_style: String,
    pub frame_material: String,
}

impl From<&Parameters> for RawParameters {
    fn from(p: &Parameters) -> Self {
        Self {
            width: p.width,
            depth: p.depth,
            platform_height: p.platform_height,
            railing_height: p.railing_height,
            support_count: p.support_count.get(),
            platform_material: p.platform_material.as_str().to_string(),
            railing_style: p.railing_style.as_str().to_string(),
            frame_material: p.frame_material.as_str().to_string(),
        }
    }
}

impl TryFrom<&RawParameters> for Parameters {
    type Error = LayoutError;

    fn try_from(raw: &RawParameters) -> Result<Self> {
        let params = Parameters {
            width: raw.width,
            depth: raw.depth,
            platform_height: raw.platform_height,
            railing_height: raw.railing_height,
            support_count: SupportCount::try_from(raw.support_count)?,
            platform_material: raw.platform_material.parse()?,
            railing_style: raw.railing_style.parse()?,
            frame_material: raw.frame_material.parse()?,
        };
        params.validate()?;
        Ok(params)
    }
}
