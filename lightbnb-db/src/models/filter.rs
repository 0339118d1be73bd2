//! Search options for property listings

use serde::{Deserialize, Serialize};

/// Options bag for property search. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilter {
    /// Case-insensitive substring of the city name.
    pub city: Option<String>,
    /// Listings of this owner only. `0` is never a user id and counts as
    /// no filter.
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    /// Lower bound on the averaged review rating.
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn price_range(mut self, minimum: Option<i32>, maximum: Option<i32>) -> Self {
        self.minimum_price_per_night = minimum;
        self.maximum_price_per_night = maximum;
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// `%city%` for an ILIKE match; blank input counts as no filter.
    pub fn city_pattern(&self) -> Option<String> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(|city| format!("%{}%", city))
    }

    /// Owner to restrict on, with `0` treated as unset.
    pub fn owner_filter(&self) -> Option<i32> {
        self.owner_id.filter(|owner_id| *owner_id != 0)
    }

    pub fn has_price_range(&self) -> bool {
        self.minimum_price_per_night.is_some() || self.maximum_price_per_night.is_some()
    }

    /// True when no option would restrict the result set.
    pub fn is_empty(&self) -> bool {
        self.city_pattern().is_none()
            && self.owner_filter().is_none()
            && !self.has_price_range()
            && self.minimum_rating.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_city_is_ignored() {
        assert_eq!(PropertyFilter::default().city("   ").city_pattern(), None);
        assert!(PropertyFilter::default().city("").is_empty());
    }

    #[test]
    fn city_pattern_wraps_trimmed_value() {
        let filter = PropertyFilter::default().city(" Vancouver ");
        assert_eq!(filter.city_pattern().as_deref(), Some("%Vancouver%"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn zero_owner_is_ignored() {
        let filter = PropertyFilter::default().owner_id(0);
        assert_eq!(filter.owner_filter(), None);
        assert!(filter.is_empty());
        assert_eq!(PropertyFilter::default().owner_id(7).owner_filter(), Some(7));
    }

    #[test]
    fn one_price_bound_is_a_range() {
        assert!(PropertyFilter::default()
            .price_range(None, Some(20000))
            .has_price_range());
        assert!(!PropertyFilter::default().has_price_range());
    }

    #[test]
    fn deserializes_partial_options() {
        let filter: PropertyFilter =
            serde_json::from_str(r#"{ "city": "Calgary", "minimum_rating": 4 }"#).unwrap();
        assert_eq!(filter.city.as_deref(), Some("Calgary"));
        assert_eq!(filter.minimum_rating, Some(4.0));
        assert_eq!(filter.owner_id, None);
    }
}
