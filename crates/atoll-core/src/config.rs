//! Engine configuration supplied by the collaborator layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Per-category scoring configuration.
///
/// `range_km` doubles as the decay function's characteristic distance.
/// A category with `range_km == 0` is excluded regardless of `included`,
/// which keeps the zero range away from the decay formulas entirely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Whether the category contributes to the score at all.
    pub included: bool,
    /// Characteristic range in kilometres, `>= 0`.
    pub range_km: f64,
}

impl CategoryConfig {
    /// Whether this category takes part in a computation.
    pub fn is_active(&self) -> bool {
        self.included && self.range_km > 0.0
    }

    /// The range in metres.
    pub fn range_m(&self) -> f64 {
        self.range_km * 1000.0
    }
}

/// The decay function family, a closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecayKind {
    /// Full contribution inside the range, zero outside.
    Constant,
    /// Linear falloff from 1 at the source to 0 at the range.
    Linear,
    /// `exp(-d / range)`, no hard cutoff.
    Exponential,
}

impl DecayKind {
    /// Scan-distance multiplier for the propagation's early termination.
    ///
    /// Exponential decay has a long tail worth chasing; the bounded-support
    /// kinds only need a modest margin over the configured range.
    pub fn scan_multiplier(&self) -> f64 {
        match self {
            Self::Exponential => 5.0,
            Self::Constant | Self::Linear => 1.5,
        }
    }
}

/// Decay selection shared by all categories in one computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecaySettings {
    /// Which decay function to evaluate.
    pub kind: DecayKind,
    /// Legacy exponential reference distance. Accepted for wire
    /// compatibility with old profiles but unused: the exponential time
    /// constant is the category's own range.
    #[serde(default)]
    pub reference_distance_km: Option<f64>,
}

impl DecaySettings {
    /// Settings for a given kind with no legacy fields.
    pub fn new(kind: DecayKind) -> Self {
        Self {
            kind,
            reference_distance_km: None,
        }
    }
}

/// Which raster drives the friction field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrictionSource {
    /// Derive friction from population density (dense areas are treated
    /// as well-roaded).
    Population,
    /// Use the pre-computed road-class raster directly (values 1.0–5.0).
    RoadRaster,
}

/// Road classes that can be toggled off to model their removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadClass {
    /// Motorways / dual carriageways.
    Motorway,
    /// Primary roads.
    Primary,
    /// Secondary roads.
    Secondary,
    /// Local and residential streets.
    Local,
}

impl RoadClass {
    /// All classes, in penalty order.
    pub const ALL: [RoadClass; 4] = [
        RoadClass::Motorway,
        RoadClass::Primary,
        RoadClass::Secondary,
        RoadClass::Local,
    ];

    /// Road-factor penalty applied when this class is disabled and the
    /// friction source is population-derived. The road raster already
    /// reflects per-class data, so it takes no penalty.
    pub fn disabled_penalty(&self) -> f64 {
        match self {
            Self::Motorway => 0.4,
            Self::Primary => 0.2,
            Self::Secondary => 0.1,
            Self::Local => 0.1,
        }
    }
}

/// Travel-friction configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrictionSettings {
    /// Where the per-cell friction values come from.
    pub source: FrictionSource,
    /// Off-road travel cost multiplier, `>= 1.0`.
    pub road_factor: f64,
    /// Road classes considered usable.
    pub allowed_road_classes: Vec<RoadClass>,
}

impl FrictionSettings {
    /// Uniform frictionless travel; the beeline baseline.
    pub fn frictionless() -> Self {
        Self {
            source: FrictionSource::Population,
            road_factor: 1.0,
            allowed_road_classes: RoadClass::ALL.to_vec(),
        }
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.road_factor.is_finite() || self.road_factor < 1.0 {
            return Err(ConfigError::InvalidRoadFactor {
                road_factor: self.road_factor,
            });
        }
        Ok(())
    }

    /// The road factor after disabled-class penalties.
    ///
    /// Penalties only apply to the population source: removing fast road
    /// classes from consideration there is modelled as making everything
    /// a little slower, whereas the road raster encodes classes directly.
    pub fn effective_road_factor(&self) -> f64 {
        match self.source {
            FrictionSource::RoadRaster => self.road_factor,
            FrictionSource::Population => {
                let penalty: f64 = RoadClass::ALL
                    .iter()
                    .filter(|c| !self.allowed_road_classes.contains(c))
                    .map(|c| c.disabled_penalty())
                    .sum();
                self.road_factor + penalty
            }
        }
    }
}
