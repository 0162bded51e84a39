//! Functional role classification of the five elements.
//!
//! Four roles are handed out over five elements, so one element is always
//! left without a role.

use ganzhi_calendar::{ALL_ELEMENTS, Element};
use serde::{Deserialize, Serialize};

use crate::tally::ElementPercentages;

/// Day-element percentage at or above which the day master counts as strong.
pub const STRONG_DAY_THRESHOLD: f64 = 40.0;

/// Role classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePolicy {
    /// Roles by descending percentage.
    Simple,
    /// Roles from the day master's strength and the generate/control cycles.
    #[default]
    DayMasterAware,
}

/// Strength of the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    Strong,
    Weak,
}

impl DayStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
        }
    }
}

/// Strong when the day element holds at least [`STRONG_DAY_THRESHOLD`] percent.
pub fn day_status(percentages: &ElementPercentages, day_element: Element) -> DayStatus {
    if percentages.get(day_element) >= STRONG_DAY_THRESHOLD {
        DayStatus::Strong
    } else {
        DayStatus::Weak
    }
}

/// Four distinct elements, one per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub useful: Element,
    pub supporting: Element,
    pub critical: Element,
    pub threat: Element,
}

impl RoleAssignment {
    /// Roles in useful, supporting, critical, threat order.
    pub fn as_array(&self) -> [Element; 4] {
        [self.useful, self.supporting, self.critical, self.threat]
    }

    /// The element holding no role.
    pub fn unassigned(&self) -> Element {
        let taken = self.as_array();
        ALL_ELEMENTS
            .into_iter()
            .find(|e| !taken.contains(e))
            .unwrap_or(Element::Water)
    }
}

/// Assign roles to elements.
///
/// With [`RolePolicy::DayMasterAware`] and a known day element:
/// - Strong: Useful is whichever of the day element's controller and the
///   element it generates holds more (ties go to the controller);
///   Supporting is the element Useful generates.
/// - Weak: Useful is the day element's generator; Supporting is the day
///   element itself.
///
/// Critical and Threat take the remaining elements by descending
/// percentage. Without a day element the ranking of [`RolePolicy::Simple`]
/// is used, which keeps all four roles distinct.
pub fn classify_roles(
    percentages: &ElementPercentages,
    day_element: Option<Element>,
    policy: RolePolicy,
) -> RoleAssignment {
    let ranked = percentages.ranked();
    let (useful, supporting) = match (policy, day_element) {
        (RolePolicy::DayMasterAware, Some(day)) => match day_status(percentages, day) {
            DayStatus::Strong => {
                let controller = day.controlled_by();
                let drain = day.generates();
                let useful = if percentages.get(drain) > percentages.get(controller) {
                    drain
                } else {
                    controller
                };
                (useful, useful.generates())
            }
            DayStatus::Weak => (day.generated_by(), day),
        },
        _ => (ranked[0], ranked[1]),
    };
    let (critical, threat) = fill_remaining(&ranked, &[useful, supporting]);
    RoleAssignment {
        useful,
        supporting,
        critical,
        threat,
    }
}

/// Next two unassigned elements by rank, then by canonical order.
fn fill_remaining(ranked: &[Element; 5], assigned: &[Element]) -> (Element, Element) {
    let mut rest = ranked
        .iter()
        .chain(ALL_ELEMENTS.iter())
        .copied()
        .filter(|e| !assigned.contains(e));
    let critical = rest.next().unwrap_or(ranked[2]);
    let threat = rest.find(|e| *e != critical).unwrap_or(ranked[3]);
    (critical, threat)
}
