//! Sun-protection recommendation engine.
//!
//! Maps a UV index and a skin type to an ordered advisory list and an
//! estimate of how long unprotected skin can stay in direct sun. Advisories
//! are always emitted in the same order: baseline, UV band, skin type, and
//! finally the exposure limit.

use serde::{Deserialize, Serialize};

use crate::{band::UvBand, error::InputError, skin::SkinType};

/// Lower clamp of the exposure estimate.
pub const MIN_SAFE_EXPOSURE_MINUTES: u32 = 5;

/// Upper clamp, and the value reported for a UV index of exactly zero.
pub const MAX_SAFE_EXPOSURE_MINUTES: u32 = 24 * 60;

const BASELINE: [&str; 2] = [
    "Wear sunglasses to protect your eyes",
    "Seek shade during peak hours (10am-4pm)",
];

/// What to do for readings in the Low band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LowUvPolicy {
    /// Run the full advisory flow; the Low band contributes one item.
    #[default]
    Baseline,
    /// Emit no advisories at all below the Moderate threshold.
    Empty,
}

impl LowUvPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LowUvPolicy::Baseline => "baseline",
            LowUvPolicy::Empty => "empty",
        }
    }
}

impl std::fmt::Display for LowUvPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LowUvPolicy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "baseline" => Ok(LowUvPolicy::Baseline),
            "empty" => Ok(LowUvPolicy::Empty),
            _ => Err(anyhow::anyhow!(
                "Unknown low UV policy '{value}'. Supported policies: baseline, empty."
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub uv_index: f64,
    pub band: UvBand,
    pub skin_type: u8,
    pub advisories: Vec<String>,
    pub safe_exposure_minutes: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    low_uv_policy: LowUvPolicy,
}

impl RecommendationEngine {
    pub fn new(low_uv_policy: LowUvPolicy) -> Self {
        Self { low_uv_policy }
    }

    pub fn low_uv_policy(&self) -> LowUvPolicy {
        self.low_uv_policy
    }

    pub fn compute(&self, uv_index: f64, skin: SkinType) -> Result<Recommendation, InputError> {
        validate_uv_index(uv_index)?;

        let band = UvBand::from_index(uv_index);
        let safe_exposure_minutes = safe_exposure_minutes(uv_index, skin);

        if band == UvBand::Low && self.low_uv_policy == LowUvPolicy::Empty {
            tracing::debug!(uv_index, "low UV reading, no advisories under empty policy");
            return Ok(Recommendation {
                uv_index,
                band,
                skin_type: skin.id(),
                advisories: Vec::new(),
                safe_exposure_minutes,
            });
        }

        let mut advisories: Vec<String> = BASELINE.iter().map(|s| s.to_string()).collect();
        advisories.extend(band_advisories(band).iter().map(|s| s.to_string()));
        advisories.extend(skin_advisories(uv_index, skin).iter().map(|s| s.to_string()));
        advisories.push(format!(
            "Without protection, limit direct sun exposure to {safe_exposure_minutes} minutes"
        ));

        tracing::debug!(
            uv_index,
            band = band.label(),
            skin_type = skin.id(),
            count = advisories.len(),
            "computed recommendations"
        );

        Ok(Recommendation {
            uv_index,
            band,
            skin_type: skin.id(),
            advisories,
            safe_exposure_minutes,
        })
    }
}

/// Compute recommendations with the default low-UV policy.
pub fn compute(uv_index: f64, skin: SkinType) -> Result<Recommendation, InputError> {
    RecommendationEngine::default().compute(uv_index, skin)
}

pub fn validate_uv_index(uv_index: f64) -> Result<(), InputError> {
    if !uv_index.is_finite() {
        return Err(InputError::NonFiniteUvIndex(uv_index));
    }
    if uv_index < 0.0 {
        return Err(InputError::NegativeUvIndex(uv_index));
    }
    Ok(())
}

/// `max(floor(60 / (uv * (1 + (6 - s) / 6))), 5)`, capped at one day.
///
/// The formula is undefined at zero UV; the cap is returned instead.
pub fn safe_exposure_minutes(uv_index: f64, skin: SkinType) -> u32 {
    if uv_index <= 0.0 {
        return MAX_SAFE_EXPOSURE_MINUTES;
    }

    let sensitivity = 1.0 + (6.0 - skin.formula_value()) / 6.0;
    let minutes = (60.0 / (uv_index * sensitivity)).floor();

    // float -> int casts saturate, so huge values land on the cap below
    (minutes as u32).clamp(MIN_SAFE_EXPOSURE_MINUTES, MAX_SAFE_EXPOSURE_MINUTES)
}

fn band_advisories(band: UvBand) -> &'static [&'static str] {
    match band {
        UvBand::Low => &["Use sunscreen if you burn easily"],
        UvBand::Moderate => &[
            "Apply SPF 30+ sunscreen",
            "Wear protective clothing when outdoors for extended periods",
        ],
        UvBand::High => &[
            "Reduce sun exposure between 10am and 4pm",
            "Apply SPF 30+ sunscreen every 2 hours",
        ],
        UvBand::VeryHigh => &[
            "Minimize sun exposure between 10am and 4pm",
            "Apply SPF 50+ sunscreen every 2 hours",
        ],
        UvBand::Extreme => &[
            "Avoid being outside during midday hours",
            "Ensure you seek shade at all times",
            "Shirt, sunscreen, hat, and sunglasses are a must",
        ],
    }
}

fn skin_advisories(uv_index: f64, skin: SkinType) -> Vec<&'static str> {
    let mut out = Vec::new();

    if skin.is_fair() {
        out.push("Your skin burns very easily, take extra precautions");
        if uv_index >= 3.0 {
            out.push("Wear long-sleeved shirts and pants");
            out.push("Use SPF 50+ sunscreen even on cloudy days");
        }
    } else if skin.is_medium() {
        if uv_index >= 5.0 {
            out.push("Wear protective clothing");
            out.push("Use SPF 30+ sunscreen");
        }
    } else if uv_index >= 8.0 {
        out.push("Use SPF 15+ sunscreen for extended outdoor activities");
    }

    out
}
