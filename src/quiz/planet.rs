//! Planet entities and the reference catalog.
//!
//! The catalog lists the eight planets in the order their tiles appear in the
//! tray. The `order` field is the correct slot position counted from the sun.

use rand::seq::SliceRandom;

/// Name of the decorative slot in front of slot 1. It never accepts a drop.
pub const SUN: &str = "sun";

/// `(name, order, colour)` in tray order.
pub const CATALOG: &[(&str, u32, &str)] = &[
    ("venus", 2, "#e3bb76"),
    ("earth", 3, "#4f8fdb"),
    ("saturn", 6, "#d8c48a"),
    ("neptune", 8, "#3f54ba"),
    ("mercury", 1, "#9e9e9e"),
    ("mars", 4, "#c1440e"),
    ("jupiter", 5, "#d39c7e"),
    ("uranus", 7, "#7ad7dc"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    pub order: u32,
    pub color: String,
    pub solved: bool,
}

impl Planet {
    pub fn new(name: impl Into<String>, order: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order,
            color: color.into(),
            solved: false,
        }
    }

    /// `"mercury"` -> `"Mercury"`
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// The eight planets of the reference quiz, unsolved, in tray order.
pub fn default_catalog() -> Vec<Planet> {
    CATALOG
        .iter()
        .map(|&(name, order, color)| Planet::new(name, order, color))
        .collect()
}

/// Shuffle tray order in place. Slot positions are unaffected because they
/// come from `order`.
pub fn shuffle_tray(planets: &mut [Planet]) {
    planets.shuffle(&mut rand::rng());
}
