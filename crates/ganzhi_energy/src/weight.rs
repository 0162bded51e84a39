//! Five-element weighting of a chart's stems, branches and hidden stems.
//!
//! Every pillar stem adds 1.0 to its element. Branch weighting depends on
//! the policy:
//! - Uniform: 0.6 to the branch's own element plus 0.3 per hidden stem.
//! - Positional: a per-pillar weight (year 0.10, month 0.375, day 0.375,
//!   hour 0.15) shared equally among the branch's hidden stems.

use ganzhi_calendar::{Chart, HiddenStemTable, PillarPosition};
use serde::{Deserialize, Serialize};

use crate::tally::ElementCounts;

/// Weight of each pillar stem.
pub const STEM_WEIGHT: f64 = 1.0;
/// Uniform policy: weight of a branch's own element.
pub const UNIFORM_BRANCH_WEIGHT: f64 = 0.6;
/// Uniform policy: weight of each hidden stem.
pub const UNIFORM_HIDDEN_WEIGHT: f64 = 0.3;

/// Branch weighting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Flat weighting for every branch.
    Uniform,
    /// Per-pillar weighting.
    #[default]
    Positional,
}

impl WeightPolicy {
    /// Branch weight for a pillar position under the positional policy.
    pub const fn positional_weight(position: PillarPosition) -> f64 {
        match position {
            PillarPosition::Year => 0.10,
            PillarPosition::Month => 0.375,
            PillarPosition::Day => 0.375,
            PillarPosition::Hour => 0.15,
        }
    }
}

/// Accumulate elemental weight over a chart's four pillars.
pub fn count_elements(
    chart: &Chart,
    hidden: &HiddenStemTable,
    policy: WeightPolicy,
) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for (_, pillar) in chart.pillars() {
        counts.add(pillar.stem.element(), STEM_WEIGHT);
    }
    for (position, pillar) in chart.pillars() {
        let stems = hidden.get(pillar.branch);
        match policy {
            WeightPolicy::Uniform => {
                counts.add(pillar.branch.element(), UNIFORM_BRANCH_WEIGHT);
                for s in stems {
                    counts.add(s.element(), UNIFORM_HIDDEN_WEIGHT);
                }
            }
            WeightPolicy::Positional => {
                if stems.is_empty() {
                    counts.add(pillar.branch.element(), WeightPolicy::positional_weight(position));
                    continue;
                }
                let share = WeightPolicy::positional_weight(position) / stems.len() as f64;
                for s in stems {
                    counts.add(s.element(), share);
                }
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_calendar::{BirthMoment, Branch, Element, HourPillar, Pillar, Stem, compute_chart};

    fn chart_1976() -> Chart {
        // 丙辰 乙未 丁巳 辛丑
        compute_chart(1976, 9, 4, 1, 0).unwrap()
    }

    #[test]
    fn uniform_counts() {
        let c = count_elements(&chart_1976(), &HiddenStemTable::builtin(), WeightPolicy::Uniform);
        // Stems: Fire 2 (丙 丁), Tree 1 (乙), Metal 1 (辛)
        // Branches: 辰 Earth, 未 Earth, 巳 Fire, 丑 Earth → Earth 1.8, Fire 0.6
        // Hidden: 辰 戊乙癸, 未 己丁乙, 巳 丙戊庚, 丑 己癸辛
        //   Earth 戊 己 戊 己 = 1.2; Tree 乙 乙 = 0.6; Water 癸 癸 = 0.6;
        //   Fire 丁 丙 = 0.6; Metal 庚 辛 = 0.6
        let expect = [
            (Element::Tree, 1.6),
            (Element::Fire, 3.2),
            (Element::Earth, 3.0),
            (Element::Metal, 1.6),
            (Element::Water, 0.6),
        ];
        for (e, v) in expect {
            assert!((c.get(e) - v).abs() < 1e-9, "{e}: {} vs {v}", c.get(e));
        }
    }

    #[test]
    fn positional_branch_weight_sums_to_one() {
        let hidden = HiddenStemTable::builtin();
        let c = count_elements(&chart_1976(), &hidden, WeightPolicy::Positional);
        assert!((c.total() - (4.0 + 1.0)).abs() < 1e-9, "total {}", c.total());
    }

    /// 丙辰 乙未 甲子 乙丑: 子 appears only in the day pillar.
    fn chart_with_zi_day() -> Chart {
        let moment = BirthMoment::new(1976, 9, 4, 1, 0).unwrap();
        Chart::from_pillars(
            moment,
            Pillar::new(Stem::Bing, Branch::Chen),
            Pillar::new(Stem::Yi, Branch::Wei),
            Pillar::new(Stem::Jia, Branch::Zi),
            HourPillar {
                pillar: Pillar::new(Stem::Yi, Branch::Chou),
                block: 1,
                degraded: false,
            },
        )
    }

    #[test]
    fn positional_day_branch_split_across_elements() {
        let chart = chart_with_zi_day();
        let mut mixed = HiddenStemTable::builtin();
        mixed.set(Branch::Zi, vec![Stem::Jia, Stem::Gui]);
        let mut single = HiddenStemTable::builtin();
        single.set(Branch::Zi, vec![Stem::Gui]);

        let m = count_elements(&chart, &mixed, WeightPolicy::Positional);
        let s = count_elements(&chart, &single, WeightPolicy::Positional);
        let half = WeightPolicy::positional_weight(PillarPosition::Day) / 2.0;
        // 子 → [甲, 癸]: Tree and Water each take 0.1875 from the day branch.
        assert!((m.get(Element::Tree) - s.get(Element::Tree) - half).abs() < 1e-9);
        assert!((s.get(Element::Water) - m.get(Element::Water) - half).abs() < 1e-9);
        assert!((m.total() - s.total()).abs() < 1e-9);
    }

    #[test]
    fn positional_empty_override_weights_branch_element() {
        let chart = chart_with_zi_day();
        let mut empty = HiddenStemTable::builtin();
        empty.set(Branch::Zi, Vec::new());
        let mut wood = HiddenStemTable::builtin();
        wood.set(Branch::Zi, vec![Stem::Jia]);

        let e = count_elements(&chart, &empty, WeightPolicy::Positional);
        let w = count_elements(&chart, &wood, WeightPolicy::Positional);
        let day = WeightPolicy::positional_weight(PillarPosition::Day);
        // 子 is Water: with no hidden stems the full 0.375 goes there.
        assert!((e.get(Element::Water) - w.get(Element::Water) - day).abs() < 1e-9);
        assert!((w.get(Element::Tree) - e.get(Element::Tree) - day).abs() < 1e-9);
        assert!((e.total() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn hidden_override_changes_uniform_counts() {
        let chart = chart_1976();
        let mut hidden = HiddenStemTable::builtin();
        hidden.set(Branch::Chen, vec![Stem::Wu]);
        let base = count_elements(&chart, &HiddenStemTable::builtin(), WeightPolicy::Uniform);
        let over = count_elements(&chart, &hidden, WeightPolicy::Uniform);
        assert!((base.get(Element::Water) - over.get(Element::Water) - 0.3).abs() < 1e-9);
        assert!((base.get(Element::Tree) - over.get(Element::Tree) - 0.3).abs() < 1e-9);
    }
}
