use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// Name-to-weight table for pitch types or strike zones.
///
/// Weights are finite and non-negative but need not sum to one. Entries are
/// kept in lexicographic key order, which is also the order ties are broken in
/// by [`Self::max_entry`].
///
/// # Example
///
/// ```
/// use backyard_engine::WeightMap;
///
/// let pitches = WeightMap::try_from_entries([("fastball", 0.6), ("curve", 0.4)]).unwrap();
/// assert_eq!(pitches.get("curve"), Some(0.4));
/// assert_eq!(pitches.max_entry(), Some(("fastball", 0.6)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct WeightMap(BTreeMap<String, f64>);

impl WeightMap {
    /// Builds a table from `(name, weight)` pairs.
    ///
    /// A later entry with the same name overwrites an earlier one. An empty
    /// input yields an empty table; callers that need at least one entry check
    /// [`Self::is_empty`] themselves.
    pub fn try_from_entries<I, K>(entries: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, weight) in entries {
            let key = key.into();
            if !weight.is_finite() || weight < 0.0 {
                return Err(InvalidInputError::InvalidWeight { key, weight });
            }
            map.insert(key, weight);
        }
        Ok(Self(map))
    }

    /// Builds a table from entries known to be valid, such as built-in defaults.
    pub(crate) fn from_valid_entries(entries: &[(&str, f64)]) -> Self {
        debug_assert!(entries.iter().all(|(_, w)| w.is_finite() && *w >= 0.0));
        Self(
            entries
                .iter()
                .map(|(k, w)| ((*k).to_owned(), *w))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the entry with the largest weight.
    ///
    /// When several entries share the largest weight, the lexicographically
    /// smallest name wins. Returns `None` for an empty table.
    #[must_use]
    pub fn max_entry(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (key, weight) in self.iter() {
            match best {
                Some((_, best_weight)) if weight <= best_weight => {}
                _ => best = Some((key, weight)),
            }
        }
        best
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightMap {
    type Error = InvalidInputError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::try_from_entries(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_weight() {
        let err = WeightMap::try_from_entries([("fastball", 0.5), ("curve", -0.1)]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::InvalidWeight {
                key: "curve".to_owned(),
                weight: -0.1
            }
        );
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        assert!(WeightMap::try_from_entries([("fastball", f64::NAN)]).is_err());
        assert!(WeightMap::try_from_entries([("fastball", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_weights_need_not_sum_to_one() {
        let map = WeightMap::try_from_entries([("fastball", 3.0), ("curve", 2.0)]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.max_entry(), Some(("fastball", 3.0)));
    }

    #[test]
    fn test_max_entry_empty() {
        let map = WeightMap::default();
        assert!(map.is_empty());
        assert_eq!(map.max_entry(), None);
    }

    #[test]
    fn test_max_entry_tie_breaks_lexicographically() {
        let entries = [("slider", 0.4), ("change", 0.4), ("curve", 0.2)];
        let map = WeightMap::try_from_entries(entries).unwrap();
        assert_eq!(map.max_entry(), Some(("change", 0.4)));
    }

    #[test]
    fn test_max_entry_is_at_least_every_weight() {
        let map = WeightMap::try_from_entries([
            ("fastball", 0.35),
            ("curve", 0.1),
            ("change", 0.35),
            ("slider", 0.2),
        ])
        .unwrap();
        let (key, weight) = map.max_entry().unwrap();
        assert!(map.get(key).is_some());
        assert!(map.iter().all(|(_, w)| weight >= w));
    }

    #[test]
    fn test_deserialize_validates_weights() {
        let map: WeightMap = serde_json::from_str(r#"{"high": 0.5, "low": 0.5}"#).unwrap();
        assert_eq!(map.get("high"), Some(0.5));

        let result: Result<WeightMap, _> = serde_json::from_str(r#"{"high": -1.0}"#);
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("finite and non-negative"));
    }
}
