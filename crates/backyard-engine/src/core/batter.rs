use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A batter on the roster.
///
/// Skills are plain integers on a nominal 0-100 scale and are not clamped, so
/// repeated improvement can push them past 100. Experience only grows: it is
/// increased by the sum of the deltas applied in [`Self::improve`].
///
/// # Example
///
/// ```
/// use backyard_engine::Batter;
///
/// let mut batter = Batter::new("Casey", 80, 60);
/// batter.improve(1, 0);
///
/// assert_eq!(batter.contact(), 81);
/// assert_eq!(batter.power(), 60);
/// assert_eq!(batter.experience(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batter {
    name: String,
    contact: u32,
    power: u32,
    experience: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    tendencies: BTreeMap<String, f64>,
}

impl Batter {
    /// Creates a rookie batter with zero experience and no tendencies.
    #[must_use]
    pub fn new(name: impl Into<String>, contact: u32, power: u32) -> Self {
        Self {
            name: name.into(),
            contact,
            power,
            experience: 0,
            tendencies: BTreeMap::new(),
        }
    }

    /// Attaches a named tendency (e.g. `"pull"`) to the batter.
    #[must_use]
    pub fn with_tendency(mut self, name: impl Into<String>, value: f64) -> Self {
        self.tendencies.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn contact(&self) -> u32 {
        self.contact
    }

    #[must_use]
    pub const fn power(&self) -> u32 {
        self.power
    }

    #[must_use]
    pub const fn experience(&self) -> u32 {
        self.experience
    }

    #[must_use]
    pub fn tendencies(&self) -> &BTreeMap<String, f64> {
        &self.tendencies
    }

    /// Raises the batter's skills and credits the total as experience.
    ///
    /// # Arguments
    ///
    /// * `contact_delta` - Points added to contact
    /// * `power_delta` - Points added to power
    pub fn improve(&mut self, contact_delta: u32, power_delta: u32) {
        self.contact = self.contact.saturating_add(contact_delta);
        self.power = self.power.saturating_add(power_delta);
        self.experience = self
            .experience
            .saturating_add(contact_delta.saturating_add(power_delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_contact_only() {
        let mut batter = Batter::new("Test", 50, 70);
        batter.improve(1, 0);
        assert_eq!(batter.contact(), 51);
        assert_eq!(batter.power(), 70);
        assert_eq!(batter.experience(), 1);
    }

    #[test]
    fn test_improve_both_skills_accumulates_experience() {
        let mut batter = Batter::new("Test", 50, 50);
        batter.improve(2, 3);
        batter.improve(0, 1);
        assert_eq!(batter.contact(), 52);
        assert_eq!(batter.power(), 54);
        assert_eq!(batter.experience(), 6);
    }

    #[test]
    fn test_skills_are_not_clamped_at_100() {
        let mut batter = Batter::new("Test", 100, 100);
        batter.improve(1, 1);
        assert_eq!(batter.contact(), 101);
        assert_eq!(batter.power(), 101);
    }

    #[test]
    fn test_tendencies_are_carried() {
        let batter = Batter::new("Test", 50, 50).with_tendency("pull", 0.7);
        assert_eq!(batter.tendencies().get("pull"), Some(&0.7));
    }
}
