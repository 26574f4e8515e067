use serde::{Deserialize, Serialize};

/// Severity band of a UV index reading.
///
/// Bands are half-open intervals with an inclusive lower bound:
/// `[0,3)` Low, `[3,6)` Moderate, `[6,8)` High, `[8,11)` Very High, `[11,∞)` Extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvBand {
    pub const MODERATE_FROM: f64 = 3.0;
    pub const HIGH_FROM: f64 = 6.0;
    pub const VERY_HIGH_FROM: f64 = 8.0;
    pub const EXTREME_FROM: f64 = 11.0;

    /// Classify a UV index. Callers validate the value first; anything below
    /// the Moderate threshold (including NaN) lands in `Low`.
    pub fn from_index(uv_index: f64) -> Self {
        if uv_index >= Self::EXTREME_FROM {
            UvBand::Extreme
        } else if uv_index >= Self::VERY_HIGH_FROM {
            UvBand::VeryHigh
        } else if uv_index >= Self::HIGH_FROM {
            UvBand::High
        } else if uv_index >= Self::MODERATE_FROM {
            UvBand::Moderate
        } else {
            UvBand::Low
        }
    }

    pub const fn all() -> &'static [UvBand] {
        &[
            UvBand::Low,
            UvBand::Moderate,
            UvBand::High,
            UvBand::VeryHigh,
            UvBand::Extreme,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UvBand::Low => "Low",
            UvBand::Moderate => "Moderate",
            UvBand::High => "High",
            UvBand::VeryHigh => "Very High",
            UvBand::Extreme => "Extreme",
        }
    }

    /// Hex colour used when rendering the band.
    pub fn color_token(&self) -> &'static str {
        match self {
            UvBand::Low => "#3498db",
            UvBand::Moderate => "#2ecc71",
            UvBand::High => "#f1c40f",
            UvBand::VeryHigh => "#e67e22",
            UvBand::Extreme => "#e74c3c",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            UvBand::Low => "uv-low",
            UvBand::Moderate => "uv-moderate",
            UvBand::High => "uv-high",
            UvBand::VeryHigh => "uv-very-high",
            UvBand::Extreme => "uv-extreme",
        }
    }

    /// Band-level protection list shown alongside a reading when no skin type
    /// has been chosen yet.
    pub fn general_guidance(&self) -> &'static [&'static str] {
        match self {
            UvBand::Low => &[
                "Most people can safely stay outdoors",
                "Consider wearing sunglasses if you are sensitive to sunlight",
                "Use SPF30+ sunscreen if outdoors for more than 2 hours",
            ],
            UvBand::Moderate => &[
                "Wear sunglasses during daylight hours",
                "Apply SPF30+ sunscreen",
                "Seek shade during midday hours",
                "Wear protective clothing, including a hat",
            ],
            UvBand::High => &[
                "Minimize outdoor activities between 10AM and 4PM",
                "Seek shade when outdoors",
                "Wear protective clothing, including long sleeves, pants and a hat",
                "Use SPF30+ sunscreen and reapply every two hours",
                "Wear sunglasses",
            ],
            UvBand::VeryHigh => &[
                "Avoid outdoor activities between 10AM and 4PM",
                "Seek shade when outdoors",
                "Wear protective clothing, including long sleeves, pants and a wide-brimmed hat",
                "Use SPF30+ sunscreen and reapply every two hours",
                "Wear UV-protective sunglasses",
            ],
            UvBand::Extreme => &[
                "Avoid outdoor activities if possible",
                "If you must go outside, do so in early morning or late evening",
                "Wear full protective clothing, including long sleeves, pants and a wide-brimmed hat",
                "Use SPF50+ sunscreen and reapply every hour",
                "Wear UV-protective sunglasses",
                "Stay indoors or in shaded areas as much as possible",
            ],
        }
    }
}

impl std::fmt::Display for UvBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(UvBand::from_index(0.0), UvBand::Low);
        assert_eq!(UvBand::from_index(3.0), UvBand::Moderate);
        assert_eq!(UvBand::from_index(6.0), UvBand::High);
        assert_eq!(UvBand::from_index(8.0), UvBand::VeryHigh);
        assert_eq!(UvBand::from_index(11.0), UvBand::Extreme);
    }

    #[test]
    fn values_just_below_a_boundary_stay_in_lower_band() {
        assert_eq!(UvBand::from_index(2.999), UvBand::Low);
        assert_eq!(UvBand::from_index(5.99), UvBand::Moderate);
        assert_eq!(UvBand::from_index(7.9), UvBand::High);
        assert_eq!(UvBand::from_index(10.999), UvBand::VeryHigh);
    }

    #[test]
    fn whole_low_range_is_low() {
        for tenth in 0..30 {
            let uv = f64::from(tenth) / 10.0;
            assert_eq!(UvBand::from_index(uv), UvBand::Low, "uv = {uv}");
        }
    }

    #[test]
    fn very_large_values_are_extreme() {
        assert_eq!(UvBand::from_index(16.5), UvBand::Extreme);
        assert_eq!(UvBand::from_index(100.0), UvBand::Extreme);
    }

    #[test]
    fn display_tokens_match_band() {
        assert_eq!(UvBand::VeryHigh.label(), "Very High");
        assert_eq!(UvBand::VeryHigh.css_class(), "uv-very-high");
        assert_eq!(UvBand::Low.color_token(), "#3498db");
        assert_eq!(UvBand::Extreme.to_string(), "Extreme");
    }

    #[test]
    fn general_guidance_grows_with_severity() {
        let counts: Vec<usize> = UvBand::all()
            .iter()
            .map(|b| b.general_guidance().len())
            .collect();
        assert_eq!(counts, vec![3, 4, 5, 5, 6]);
    }
}
