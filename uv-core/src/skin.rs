use serde::Serialize;

use crate::error::InputError;

/// Descriptor row for one skin type on the Fitzpatrick-like scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkinTypeInfo {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Skin types ordered from most (1) to least (6) sun-sensitive.
pub static SKIN_TYPES: [SkinTypeInfo; 6] = [
    SkinTypeInfo {
        id: 1,
        name: "Type I",
        description: "Very fair skin, always burns, never tans",
        color: "#f8d5c2",
    },
    SkinTypeInfo {
        id: 2,
        name: "Type II",
        description: "Fair skin, burns easily, tans minimally",
        color: "#f3bd9c",
    },
    SkinTypeInfo {
        id: 3,
        name: "Type III",
        description: "Medium skin, sometimes burns, gradually tans",
        color: "#e5a887",
    },
    SkinTypeInfo {
        id: 4,
        name: "Type IV",
        description: "Olive skin, rarely burns, tans easily",
        color: "#c68863",
    },
    SkinTypeInfo {
        id: 5,
        name: "Type V",
        description: "Brown skin, very rarely burns, tans darkly",
        color: "#a67358",
    },
    SkinTypeInfo {
        id: 6,
        name: "Type VI",
        description: "Dark brown or black skin, never burns",
        color: "#70483c",
    },
];

/// A selected skin type.
///
/// `id` drives the category branching of the engine. `continuous` is only set
/// when the selection came from a slider, and then feeds the exposure formula
/// unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkinType {
    id: u8,
    continuous: Option<f64>,
}

impl SkinType {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Discrete selection. Rejects anything outside `1..=6`.
    pub fn new(id: i64) -> Result<Self, InputError> {
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&id) {
            return Err(InputError::SkinTypeOutOfRange(id));
        }

        Ok(Self {
            id: id as u8,
            continuous: None,
        })
    }

    /// Continuous selection in `[1, 6]`, rounded to the nearest id for branching.
    pub fn from_continuous(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() || !(f64::from(Self::MIN)..=f64::from(Self::MAX)).contains(&value) {
            return Err(InputError::SkinValueOutOfRange(value));
        }

        let id = (value.round() as u8).clamp(Self::MIN, Self::MAX);
        Ok(Self {
            id,
            continuous: Some(value),
        })
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn continuous(&self) -> Option<f64> {
        self.continuous
    }

    /// Value used by the safe-exposure formula.
    pub fn formula_value(&self) -> f64 {
        self.continuous.unwrap_or_else(|| f64::from(self.id))
    }

    pub fn info(&self) -> &'static SkinTypeInfo {
        &SKIN_TYPES[usize::from(self.id - Self::MIN)]
    }

    pub fn is_fair(&self) -> bool {
        self.id <= 2
    }

    pub fn is_medium(&self) -> bool {
        (3..=4).contains(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_discrete_id() {
        for id in 1..=6 {
            let skin = SkinType::new(id).expect("id in range");
            assert_eq!(i64::from(skin.id()), id);
            assert_eq!(skin.continuous(), None);
            assert_eq!(skin.formula_value(), id as f64);
        }
    }

    #[test]
    fn rejects_out_of_range_ids() {
        assert_eq!(SkinType::new(0).unwrap_err(), InputError::SkinTypeOutOfRange(0));
        assert_eq!(SkinType::new(7).unwrap_err(), InputError::SkinTypeOutOfRange(7));
        assert!(SkinType::new(-3).is_err());
    }

    #[test]
    fn continuous_value_rounds_for_branching_but_not_for_formula() {
        let skin = SkinType::from_continuous(2.4).expect("in range");
        assert_eq!(skin.id(), 2);
        assert_eq!(skin.formula_value(), 2.4);

        let skin = SkinType::from_continuous(4.6).expect("in range");
        assert_eq!(skin.id(), 5);
        assert_eq!(skin.continuous(), Some(4.6));
    }

    #[test]
    fn continuous_bounds_are_inclusive() {
        assert_eq!(SkinType::from_continuous(1.0).map(|s| s.id()), Ok(1));
        assert_eq!(SkinType::from_continuous(6.0).map(|s| s.id()), Ok(6));
    }

    #[test]
    fn rejects_out_of_range_or_non_finite_values() {
        assert!(SkinType::from_continuous(0.99).is_err());
        assert!(SkinType::from_continuous(6.01).is_err());
        assert!(SkinType::from_continuous(f64::NAN).is_err());
        assert!(SkinType::from_continuous(f64::INFINITY).is_err());
    }

    #[test]
    fn info_matches_id() {
        let skin = SkinType::new(4).expect("id in range");
        assert_eq!(skin.info().name, "Type IV");
        assert!(skin.is_medium());
        assert!(!skin.is_fair());

        for (idx, info) in SKIN_TYPES.iter().enumerate() {
            assert_eq!(usize::from(info.id), idx + 1);
        }
    }
}
