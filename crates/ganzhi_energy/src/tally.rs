//! Per-element numeric values (counts or percentages).

use ganzhi_calendar::{ALL_ELEMENTS, Element};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One `f64` per element, indexed in canonical element order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementMap([f64; 5]);

/// Accumulated elemental weight for a chart.
pub type ElementCounts = ElementMap;

/// Element weights normalised to sum to 100 (or all zero).
pub type ElementPercentages = ElementMap;

impl ElementMap {
    pub const fn from_array(values: [f64; 5]) -> Self {
        Self(values)
    }

    pub fn get(&self, element: Element) -> f64 {
        self.0[element.index() as usize]
    }

    pub fn set(&mut self, element: Element, value: f64) {
        self.0[element.index() as usize] = value;
    }

    pub fn add(&mut self, element: Element, weight: f64) {
        self.0[element.index() as usize] += weight;
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> [f64; 5] {
        self.0
    }

    /// `(element, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.iter().map(move |&e| (e, self.get(e)))
    }

    /// Elements by descending value; ties keep canonical order.
    pub fn ranked(&self) -> [Element; 5] {
        let mut order = ALL_ELEMENTS;
        order.sort_by(|a, b| self.get(*b).total_cmp(&self.get(*a)));
        order
    }
}

impl Serialize for ElementMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (e, v) in self.iter() {
            map.serialize_entry(e.name(), &v)?;
        }
        map.end()
    }
}
