//! Health bands - capability degradation derived from the raw health value
//!
//! Bands are ordered from most severe to least severe. Health fills the most
//! severe band first, so losing health empties the safest band first. The
//! breakdown is recomputed on every access from `{value, max}` and is never
//! stored on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Race;
use crate::error::DomainError;

/// Named severity tier, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Underdeath,
    Seriously,
    Injured,
    Safe,
}

impl HealthBand {
    pub fn code(&self) -> &'static str {
        match self {
            HealthBand::Underdeath => "underdeath",
            HealthBand::Seriously => "seriously",
            HealthBand::Injured => "injured",
            HealthBand::Safe => "safe",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HealthBand::Underdeath => "Au seuil de la mort",
            HealthBand::Seriously => "Gravement blessé",
            HealthBand::Injured => "Blessé",
            HealthBand::Safe => "Indemne",
        }
    }
}

/// Current health status shown on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "band")]
pub enum HealthIndicator {
    Band(HealthBand),
    Deceased,
}

impl HealthIndicator {
    pub fn display_name(&self) -> &'static str {
        match self {
            HealthIndicator::Band(band) => band.display_name(),
            HealthIndicator::Deceased => "Décédé",
        }
    }
}

impl fmt::Display for HealthIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How a band's capacity is derived from the maximum health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum BandCapacity {
    /// Constant capacity (possibly race- or attribute-conditioned upstream)
    Fixed(i32),
    /// Percentage of the maximum; the first such band rounds, later ones floor
    Percent(u32),
    /// Whatever the other bands leave over
    Remainder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSpec {
    pub band: HealthBand,
    pub capacity: BandCapacity,
}

impl BandSpec {
    pub fn new(band: HealthBand, capacity: BandCapacity) -> Self {
        Self { band, capacity }
    }
}

/// Which layout an actor's health follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthModel {
    /// Fixed bands from race and vigor; the maximum is their sum
    #[default]
    Standard,
    /// Three bands carved out of the stored maximum
    Proportional,
}

impl HealthModel {
    pub fn is_standard(&self) -> bool {
        *self == HealthModel::Standard
    }
}

/// Ordered band definitions, most severe first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthLayout {
    bands: Vec<BandSpec>,
}

/// Default capacity of every band in the standard layout.
const STANDARD_BAND_CAPACITY: i32 = 2;

impl HealthLayout {
    /// Build a layout. Bands must be non-empty and strictly ordered from
    /// most to least severe.
    pub fn new(bands: Vec<BandSpec>) -> Result<Self, DomainError> {
        if bands.is_empty() {
            return Err(DomainError::validation("Health layout needs at least one band"));
        }
        if bands.windows(2).any(|pair| pair[0].band >= pair[1].band) {
            return Err(DomainError::validation(
                "Health bands must be ordered from most to least severe without duplicates",
            ));
        }
        Ok(Self { bands })
    }

    /// Four fixed bands of 2. The race may override the "seriously" band
    /// and a vigor of 1 or 5 shrinks or widens the safe band.
    pub fn standard(race: Option<&Race>, vigor: i32) -> Self {
        let seriously = race
            .and_then(|r| r.seriously_capacity)
            .unwrap_or(STANDARD_BAND_CAPACITY);
        let safe = match vigor {
            1 => 1,
            5 => 3,
            _ => STANDARD_BAND_CAPACITY,
        };
        Self {
            bands: vec![
                BandSpec::new(HealthBand::Underdeath, BandCapacity::Fixed(STANDARD_BAND_CAPACITY)),
                BandSpec::new(HealthBand::Seriously, BandCapacity::Fixed(seriously)),
                BandSpec::new(HealthBand::Injured, BandCapacity::Fixed(STANDARD_BAND_CAPACITY)),
                BandSpec::new(HealthBand::Safe, BandCapacity::Fixed(safe)),
            ],
        }
    }

    /// Three bands split from an explicit maximum.
    pub fn proportional() -> Self {
        Self {
            bands: vec![
                BandSpec::new(HealthBand::Underdeath, BandCapacity::Remainder),
                BandSpec::new(HealthBand::Injured, BandCapacity::Percent(60)),
                BandSpec::new(HealthBand::Safe, BandCapacity::Percent(20)),
            ],
        }
    }

    pub fn bands(&self) -> &[BandSpec] {
        &self.bands
    }

    /// Sum of capacities when every band is fixed; this is then the
    /// actor's maximum health.
    pub fn fixed_total(&self) -> Option<i32> {
        self.bands
            .iter()
            .map(|spec| match spec.capacity {
                BandCapacity::Fixed(n) => Some(n.max(0)),
                _ => None,
            })
            .sum()
    }

    /// Capacity of every band for a given maximum. The capacities always
    /// sum exactly to `max(max_value, 0)`.
    pub fn capacities(&self, max_value: i32) -> Vec<i32> {
        let max_value = max_value.max(0);
        let mut caps = vec![0; self.bands.len()];
        let mut first_percent = true;

        for (cap, spec) in caps.iter_mut().zip(&self.bands) {
            *cap = match spec.capacity {
                BandCapacity::Fixed(n) => n.max(0),
                BandCapacity::Percent(p) => {
                    let scaled = i64::from(max_value) * i64::from(p);
                    let value = if first_percent {
                        (scaled + 50) / 100
                    } else {
                        scaled / 100
                    };
                    first_percent = false;
                    i32::try_from(value).unwrap_or(i32::MAX)
                }
                BandCapacity::Remainder => 0,
            };
        }

        // Never hand out more than the maximum, most severe bands first.
        let mut used = 0;
        for cap in caps.iter_mut() {
            *cap = (*cap).min(max_value - used);
            used += *cap;
        }

        let leftover = max_value - used;
        let absorber = self
            .bands
            .iter()
            .position(|spec| spec.capacity == BandCapacity::Remainder)
            .unwrap_or(self.bands.len() - 1);
        caps[absorber] += leftover;
        caps
    }
}

impl<'de> Deserialize<'de> for HealthLayout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            bands: Vec<BandSpec>,
        }
        let raw = Raw::deserialize(deserializer)?;
        HealthLayout::new(raw.bands).map_err(serde::de::Error::custom)
    }
}

/// Raw health as stored on the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Health {
    pub value: i32,
    pub max: i32,
}

impl Health {
    pub fn new(value: i32, max: i32) -> Self {
        Self { value, max }
    }
}

/// Occupancy of one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandLevel {
    pub band: HealthBand,
    pub value: i32,
    pub max: i32,
}

impl BandLevel {
    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }
}

/// Result of [`compute_health_bands`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBands {
    pub indicator: HealthIndicator,
    /// Most severe first
    pub levels: Vec<BandLevel>,
}

impl HealthBands {
    /// Health currently held across all bands.
    pub fn total(&self) -> i32 {
        self.levels.iter().map(|l| l.value).sum()
    }

    pub fn max(&self) -> i32 {
        self.levels.iter().map(|l| l.max).sum()
    }

    pub fn level(&self, band: HealthBand) -> Option<&BandLevel> {
        self.levels.iter().find(|l| l.band == band)
    }

    /// Dice penalty: minus the number of bands between the indicator and
    /// the safest band. Deceased counts as the most severe band.
    pub fn penalty(&self) -> i32 {
        let safest = self.levels.len().saturating_sub(1);
        let current = match self.indicator {
            HealthIndicator::Deceased => 0,
            HealthIndicator::Band(band) => self
                .levels
                .iter()
                .position(|l| l.band == band)
                .unwrap_or(safest),
        };
        -i32::try_from(safest - current).unwrap_or(0)
    }
}

/// Split `current_value` across the layout's bands for a given maximum.
///
/// The value is clamped to `[0, max]`. The indicator is the most severe band
/// that still has room, or the safest band when all are full, or
/// [`HealthIndicator::Deceased`] when the clamped value is zero.
pub fn compute_health_bands(
    current_value: i32,
    max_value: i32,
    layout: &HealthLayout,
) -> HealthBands {
    let caps = layout.capacities(max_value);
    let clamped = current_value.clamp(0, max_value.max(0));
    let mut remaining = clamped;

    let levels: Vec<BandLevel> = layout
        .bands()
        .iter()
        .zip(caps)
        .map(|(spec, max)| {
            let value = remaining.min(max);
            remaining -= value;
            BandLevel {
                band: spec.band,
                value,
                max,
            }
        })
        .collect();

    let indicator = if clamped == 0 {
        HealthIndicator::Deceased
    } else {
        let band = levels
            .iter()
            .find(|level| !level.is_full())
            .or_else(|| levels.last())
            .map(|level| level.band)
            .unwrap_or(HealthBand::Safe);
        HealthIndicator::Band(band)
    };

    HealthBands { indicator, levels }
}
