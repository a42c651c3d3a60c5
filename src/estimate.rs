use crate::stats::{OriginData, OriginStats};

/// Replaces a not-a-number result with 0 so it can be displayed.
pub fn un_nan(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part` as a percentage of `total`, rounded to two decimals. A zero total yields 0.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_hundredths(un_nan(100.0 * part as f64 / total as f64))
}

pub fn estimate_payment_usd(time_spent_ms: u64, rate_per_millisecond: f64) -> f64 {
    time_spent_ms as f64 * rate_per_millisecond
}

/// Two-decimal dollar string, with not-a-number shown as `0.00`.
pub fn format_usd(amount: f64) -> String {
    format!("{:.2}", un_nan(amount))
}

pub fn has_used_web_monetization_provider(stats: Option<&OriginStats>) -> bool {
    stats
        .and_then(|s| s.total_sent_assets_map.as_ref())
        .is_some_and(|assets| !assets.is_empty())
}

pub fn percent_time_spent_at_origin_out_of_total(
    data: Option<&OriginData>,
    stats: Option<&OriginStats>,
) -> f64 {
    match (data, stats) {
        (Some(data), Some(stats)) => percent_of(data.monetized_time_spent(), stats.total_time_spent),
        _ => 0.0,
    }
}

pub fn percent_visits_to_origin_out_of_total(
    data: Option<&OriginData>,
    stats: Option<&OriginStats>,
) -> f64 {
    match (data, stats) {
        (Some(data), Some(stats)) => percent_of(data.number_of_visits(), stats.total_visits),
        _ => 0.0,
    }
}

pub fn monetized_time_spent_percent(stats: Option<&OriginStats>) -> f64 {
    stats
        .map(|s| percent_of(s.total_monetized_time_spent, s.total_time_spent))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STREAM_RATE_PER_MILLISECOND;
    use std::collections::HashMap;

    fn stats(total_time: u64, total_monetized: u64, total_visits: u64) -> OriginStats {
        OriginStats {
            total_time_spent: total_time,
            total_monetized_time_spent: total_monetized,
            total_visits,
            total_sent_assets_map: None,
        }
    }

    #[test]
    fn ten_hours_of_streaming_is_three_sixty() {
        let amount = estimate_payment_usd(36_000_000, STREAM_RATE_PER_MILLISECOND);
        assert_eq!(format_usd(amount), "3.60");
    }

    #[test]
    fn nan_formats_as_zero() {
        assert_eq!(format_usd(f64::NAN), "0.00");
        assert_eq!(un_nan(f64::NAN), 0.0);
        assert_eq!(un_nan(1.5), 1.5);
    }

    #[test]
    fn provider_usage_requires_sent_assets() {
        assert!(!has_used_web_monetization_provider(None));
        assert!(!has_used_web_monetization_provider(Some(&stats(0, 0, 0))));

        let mut used = stats(0, 0, 0);
        used.total_sent_assets_map = Some(HashMap::new());
        assert!(!has_used_web_monetization_provider(Some(&used)));

        used.total_sent_assets_map = Some(HashMap::from([("a".to_string(), 1.0)]));
        assert!(has_used_web_monetization_provider(Some(&used)));
    }

    #[test]
    fn time_percent_is_rounded() {
        let data = OriginData::new("https://example.com", 1, 1);
        let percent = percent_time_spent_at_origin_out_of_total(Some(&data), Some(&stats(3, 0, 0)));
        assert_eq!(percent, 33.33);
    }

    #[test]
    fn missing_inputs_yield_zero() {
        let data = OriginData::new("https://example.com", 10, 2);
        assert_eq!(percent_time_spent_at_origin_out_of_total(Some(&data), None), 0.0);
        assert_eq!(percent_time_spent_at_origin_out_of_total(None, Some(&stats(10, 0, 0))), 0.0);
        assert_eq!(percent_visits_to_origin_out_of_total(None, None), 0.0);
        assert_eq!(monetized_time_spent_percent(None), 0.0);
    }

    #[test]
    fn zero_totals_yield_zero() {
        let data = OriginData::new("https://example.com", 10, 2);
        assert_eq!(percent_visits_to_origin_out_of_total(Some(&data), Some(&stats(10, 0, 0))), 0.0);
        assert_eq!(percent_time_spent_at_origin_out_of_total(Some(&data), Some(&stats(0, 0, 4))), 0.0);
        assert_eq!(monetized_time_spent_percent(Some(&stats(0, 5, 0))), 0.0);
    }

    #[test]
    fn visit_and_monetized_percents() {
        let data = OriginData::new("https://example.com", 10, 2);
        let totals = stats(400, 100, 8);
        assert_eq!(percent_visits_to_origin_out_of_total(Some(&data), Some(&totals)), 25.0);
        assert_eq!(monetized_time_spent_percent(Some(&totals)), 25.0);
    }
}
