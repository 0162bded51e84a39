//! Normalisation of element counts to percentages.

use ganzhi_calendar::{ALL_ELEMENTS, Element};

use crate::tally::{ElementCounts, ElementPercentages};

/// Round to one decimal place.
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Total of a non-zero distribution, in tenths of a percent.
const TOTAL_TENTHS: i64 = 1000;

/// `100 * count / total` per element, on a 0.1 grid summing to exactly 100.
///
/// Each value is first rounded to one decimal. If the rounded values do not
/// add up to 100, whole 0.1 steps are moved onto the entries whose rounding
/// error points furthest the other way (largest remainder), at most one
/// step per entry. Ties go to the earlier element in canonical order.
///
/// A zero total yields all-zero percentages.
pub fn compute_percentages(counts: &ElementCounts) -> ElementPercentages {
    let total = counts.total();
    let mut pct = ElementPercentages::default();
    if total <= 0.0 {
        return pct;
    }
    let exact = ALL_ELEMENTS.map(|e| 100.0 * counts.get(e) / total * 10.0);
    let mut tenths = exact.map(|x| x.round() as i64);
    let mut adjusted = [false; 5];
    let mut diff = TOTAL_TENTHS - tenths.iter().sum::<i64>();
    while diff != 0 {
        let step = diff.signum();
        let remainder = |i: usize| (exact[i] - tenths[i] as f64) * step as f64;
        let pick = (0..ALL_ELEMENTS.len())
            .filter(|&i| !adjusted[i])
            .max_by(|&a, &b| remainder(a).total_cmp(&remainder(b)).then(b.cmp(&a)));
        let Some(i) = pick else {
            break;
        };
        tenths[i] += step;
        adjusted[i] = true;
        diff -= step;
    }
    for (e, t) in ALL_ELEMENTS.into_iter().zip(tenths) {
        pct.set(e, t as f64 / 10.0);
    }
    pct
}

/// Element with the highest percentage, ties resolved in canonical order.
///
/// `None` when every percentage is zero.
pub fn dominant_element(percentages: &ElementPercentages) -> Option<Element> {
    if percentages.total() <= 0.0 {
        return None;
    }
    Some(percentages.ranked()[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_give_zero_percentages() {
        let pct = compute_percentages(&ElementCounts::default());
        for (_, v) in pct.iter() {
            assert_eq!(v, 0.0);
        }
        assert_eq!(dominant_element(&pct), None);
    }

    #[test]
    fn percentages_sum_to_100() {
        let counts = ElementCounts::from_array([1.6, 3.2, 3.0, 1.6, 0.6]);
        let pct = compute_percentages(&counts);
        assert_eq!(pct.as_array(), [16.0, 32.0, 30.0, 16.0, 6.0]);
        assert!((pct.total() - 100.0).abs() < 0.1 + 1e-9);
    }

    fn sum_is_100(pct: &ElementPercentages) -> bool {
        (pct.total() - 100.0).abs() <= 0.1 + 1e-9
    }

    #[test]
    fn thirds_take_remainder_in_canonical_order() {
        let counts = ElementCounts::from_array([1.0, 1.0, 1.0, 0.0, 0.0]);
        let pct = compute_percentages(&counts);
        assert_eq!(pct.as_array(), [33.4, 33.3, 33.3, 0.0, 0.0]);
        assert!(sum_is_100(&pct));
    }

    #[test]
    fn rounding_shortfall_goes_to_largest_remainders() {
        // 己酉 乙丑 丙子 己丑, uniform weighting: plain rounding gives
        // 10.6 + 10.6 + 40.4 + 19.1 + 19.1 = 99.8
        let counts = ElementCounts::from_array([1.0, 1.0, 3.8, 1.8, 1.8]);
        let pct = compute_percentages(&counts);
        assert_eq!(pct.as_array(), [10.6, 10.6, 40.4, 19.2, 19.2]);
        assert!(sum_is_100(&pct));
    }

    #[test]
    fn rounding_excess_is_taken_back() {
        // Plain rounding gives 16.7 * 4 + 33.3 = 100.1
        let counts = ElementCounts::from_array([1.0, 1.0, 1.0, 1.0, 2.0]);
        let pct = compute_percentages(&counts);
        assert!(sum_is_100(&pct));
        for (e, v) in pct.iter() {
            let plain = round1(100.0 * counts.get(e) / counts.total());
            assert!((v - plain).abs() <= 0.1 + 1e-9, "{e}: {v} vs {plain}");
        }
        assert_eq!(pct.as_array(), [16.6, 16.7, 16.7, 16.7, 33.3]);
    }

    #[test]
    fn adjustment_stays_within_one_step() {
        let cases = [
            [0.7, 1.3, 2.9, 0.1, 0.0],
            [1.0; 5],
            [3.0, 3.0, 3.0, 0.0, 1.0],
            [0.3, 0.3, 0.3, 0.3, 0.3],
            [1.6, 3.2, 3.0, 1.6, 0.6],
        ];
        for values in cases {
            let counts = ElementCounts::from_array(values);
            let pct = compute_percentages(&counts);
            assert!(sum_is_100(&pct), "{values:?} → {:?}", pct.as_array());
            for (e, v) in pct.iter() {
                let plain = round1(100.0 * counts.get(e) / counts.total());
                assert!((v - plain).abs() <= 0.1 + 1e-9, "{values:?} {e}");
            }
        }
    }

    #[test]
    fn dominant_tie_prefers_canonical_order() {
        let pct = ElementPercentages::from_array([20.0, 20.0, 20.0, 20.0, 20.0]);
        assert_eq!(dominant_element(&pct), Some(Element::Tree));
    }
}
