/// Reference streaming rate a monetized site receives.
pub const STREAM_RATE_PER_HOUR_USD: f64 = 0.36;

pub const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;

/// `STREAM_RATE_PER_HOUR_USD / MILLISECONDS_PER_HOUR`
pub const STREAM_RATE_PER_MILLISECOND: f64 = 0.000_000_1;

/// How far below parity two need ratios may fall and still count as close.
pub const LOVE_RATIO_MARGIN: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    pub stream_rate_per_millisecond: f64,
    pub love_ratio_margin: f64,
}

impl CalculatorConfig {
    pub fn from_hourly_rate(rate_per_hour_usd: f64) -> Self {
        Self {
            stream_rate_per_millisecond: rate_per_hour_usd / MILLISECONDS_PER_HOUR,
            ..Self::default()
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            stream_rate_per_millisecond: STREAM_RATE_PER_MILLISECOND,
            love_ratio_margin: LOVE_RATIO_MARGIN,
        }
    }
}
