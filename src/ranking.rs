use std::cmp::Ordering;

use crate::stats::OriginData;

/// Monetized milliseconds per visit. Smaller means the origin needs more love.
///
/// Origins without visits rank as infinite so they never outrank visited ones.
pub fn need_ratio(data: &OriginData) -> f64 {
    if data.number_of_visits() == 0 {
        return f64::INFINITY;
    }
    data.monetized_time_spent() as f64 / data.number_of_visits() as f64
}

/// Two ratios are close when the smaller is within `margin` below parity of the larger.
pub fn ratios_are_close(a: f64, b: f64, margin: f64) -> bool {
    if a == b {
        return true;
    }

    let (smaller, larger) = if a < b { (a, b) } else { (b, a) };
    let comparison = smaller / larger;
    comparison >= 1.0 - margin && comparison <= 1.0
}

/// Orders `a` before `b` when `a` needs more love.
///
/// Close ratios prefer the origin with fewer visits; otherwise the smaller ratio wins.
pub fn compare_need_for_love(a: &OriginData, b: &OriginData, margin: f64) -> Ordering {
    let ratio_a = need_ratio(a);
    let ratio_b = need_ratio(b);

    if ratios_are_close(ratio_a, ratio_b, margin) {
        match a.number_of_visits().cmp(&b.number_of_visits()) {
            Ordering::Equal => ratio_a.total_cmp(&ratio_b),
            visits => visits,
        }
    } else {
        ratio_a.total_cmp(&ratio_b)
    }
}

/// Stable insertion sort. The closeness window is not transitive, so this avoids
/// `slice::sort_by`, which may panic on comparators that are not a total order.
pub fn sort_by_need_for_love(origins: &mut [OriginData], margin: f64) {
    for i in 1..origins.len() {
        let mut j = i;
        while j > 0 && compare_need_for_love(&origins[j - 1], &origins[j], margin) == Ordering::Greater
        {
            origins.swap(j - 1, j);
            j -= 1;
        }
    }
}

pub fn sort_by_time_spent(origins: &mut [OriginData]) {
    origins.sort_by(|a, b| b.monetized_time_spent().cmp(&a.monetized_time_spent()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOVE_RATIO_MARGIN;

    fn origins(list: &[(&str, u64, u64)]) -> Vec<OriginData> {
        list.iter()
            .map(|(origin, time, visits)| OriginData::new(*origin, *time, *visits))
            .collect()
    }

    fn names(list: &[OriginData]) -> Vec<&str> {
        list.iter().map(|o| o.origin.as_str()).collect()
    }

    #[test]
    fn distant_ratios_sort_ascending() {
        let a = OriginData::new("a", 100, 10);
        let b = OriginData::new("b", 90, 5);
        assert_eq!(compare_need_for_love(&a, &b, LOVE_RATIO_MARGIN), Ordering::Less);
        assert_eq!(compare_need_for_love(&b, &a, LOVE_RATIO_MARGIN), Ordering::Greater);
    }

    #[test]
    fn close_ratios_prefer_fewer_visits() {
        let a = OriginData::new("a", 100, 10);
        let b = OriginData::new("b", 95, 8);
        assert!(ratios_are_close(need_ratio(&a), need_ratio(&b), LOVE_RATIO_MARGIN));
        assert_eq!(compare_need_for_love(&a, &b, LOVE_RATIO_MARGIN), Ordering::Greater);
        assert_eq!(compare_need_for_love(&b, &a, LOVE_RATIO_MARGIN), Ordering::Less);
    }

    #[test]
    fn window_lower_bound_is_inclusive() {
        assert!(ratios_are_close(75.0, 100.0, 0.25));
        assert!(ratios_are_close(100.0, 75.0, 0.25));
        assert!(!ratios_are_close(74.9, 100.0, 0.25));
    }

    #[test]
    fn equal_ratios_fall_back_to_visits() {
        let a = OriginData::new("a", 200, 20);
        let b = OriginData::new("b", 100, 10);
        assert_eq!(compare_need_for_love(&a, &b, LOVE_RATIO_MARGIN), Ordering::Greater);
    }

    #[test]
    fn zero_visit_origins_sink() {
        let mut list = origins(&[("never", 500, 0), ("a", 100, 10), ("idle", 0, 0)]);
        sort_by_need_for_love(&mut list, LOVE_RATIO_MARGIN);
        assert_eq!(names(&list)[0], "a");
    }

    #[test]
    fn need_for_love_sort_matches_worked_examples() {
        let mut list = origins(&[("a", 100, 10), ("b", 90, 5)]);
        sort_by_need_for_love(&mut list, LOVE_RATIO_MARGIN);
        assert_eq!(names(&list), vec!["a", "b"]);

        let mut list = origins(&[("a", 100, 10), ("b", 95, 8)]);
        sort_by_need_for_love(&mut list, LOVE_RATIO_MARGIN);
        assert_eq!(names(&list), vec!["b", "a"]);
    }

    #[test]
    fn time_spent_sort_is_descending() {
        let mut list = origins(&[("low", 10, 1), ("high", 1_000, 1), ("mid", 100, 1)]);
        sort_by_time_spent(&mut list);
        assert_eq!(names(&list), vec!["high", "mid", "low"]);
    }
}
