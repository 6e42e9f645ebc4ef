use serde::{Deserialize, Serialize};

use crate::error::{RecommenderError, Result};
use crate::models::menu_item::MAX_SWEETNESS;

/// Largest party the order form accepts.
pub const MAX_PARTY_SIZE: usize = 10;

/// Maximum number of tags a customer may pick.
pub const MAX_SELECTED_TAGS: usize = 3;

/// Inclusive sweetness window, both ends on the 0..=4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetnessRange {
    pub min: u8,
    pub max: u8,
}

impl SweetnessRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, sweetness: u8) -> bool {
        self.min <= sweetness && sweetness <= self.max
    }
}

impl Default for SweetnessRange {
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

/// One customer's request: tags, sweetness window, budget and party size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub selected_tags: Vec<String>,
    pub sweetness_range: SweetnessRange,
    pub budget: u64,
    pub party_size: usize,
}

impl Default for Preference {
    fn default() -> Self {
        Self {
            selected_tags: Vec::new(),
            sweetness_range: SweetnessRange::default(),
            budget: 20_000,
            party_size: 2,
        }
    }
}

impl Preference {
    /// Request-layer checks. The recommender itself assumes these hold.
    pub fn validate(&self) -> Result<()> {
        let range = self.sweetness_range;
        if range.min > range.max {
            return Err(RecommenderError::InvalidInput(format!(
                "sweetness min {} is greater than max {}",
                range.min, range.max
            )));
        }
        if range.max > MAX_SWEETNESS {
            return Err(RecommenderError::InvalidInput(format!(
                "sweetness must be between 0 and {}",
                MAX_SWEETNESS
            )));
        }
        if self.budget == 0 {
            return Err(RecommenderError::InvalidInput(
                "budget must be positive".to_string(),
            ));
        }
        if self.party_size == 0 || self.party_size > MAX_PARTY_SIZE {
            return Err(RecommenderError::InvalidInput(format!(
                "party size must be between 1 and {}",
                MAX_PARTY_SIZE
            )));
        }
        if self.selected_tags.len() > MAX_SELECTED_TAGS {
            return Err(RecommenderError::InvalidInput(format!(
                "at most {} tags may be selected",
                MAX_SELECTED_TAGS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweetness_range_inclusive() {
        let range = SweetnessRange::new(1, 3);
        assert!(!range.contains(0));
        assert!(range.contains(1));
        assert!(range.contains(3));
        assert!(!range.contains(4));
    }

    #[test]
    fn test_default_preference_is_valid() {
        assert!(Preference::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let pref = Preference {
            sweetness_range: SweetnessRange::new(3, 1),
            ..Preference::default()
        };
        assert!(matches!(
            pref.validate(),
            Err(RecommenderError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_scale_sweetness() {
        let pref = Preference {
            sweetness_range: SweetnessRange::new(0, 5),
            ..Preference::default()
        };
        assert!(pref.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_budget_and_bad_party() {
        let zero_budget = Preference {
            budget: 0,
            ..Preference::default()
        };
        assert!(zero_budget.validate().is_err());

        let nobody = Preference {
            party_size: 0,
            ..Preference::default()
        };
        assert!(nobody.validate().is_err());

        let crowd = Preference {
            party_size: MAX_PARTY_SIZE + 1,
            ..Preference::default()
        };
        assert!(crowd.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_tags() {
        let pref = Preference {
            selected_tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Preference::default()
        };
        assert!(pref.validate().is_err());
    }
}
