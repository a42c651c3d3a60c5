use tracing::{info, warn};

use crate::config::CalculatorConfig;
use crate::estimate::{estimate_payment_usd, format_usd};
use crate::provider::DataProvider;
use crate::ranking::{sort_by_need_for_love, sort_by_time_spent};
use crate::stats::{OriginData, OriginStats};

/// Derives rankings and estimates from whatever the provider currently holds.
///
/// Every call fetches a fresh snapshot. Provider failures are logged and degrade to
/// empty results instead of propagating.
pub struct StatsCalculator<P> {
    provider: P,
    config: CalculatorConfig,
}

impl<P: DataProvider> StatsCalculator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, CalculatorConfig::default())
    }

    pub fn with_config(provider: P, config: CalculatorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn fetch_origins(&self) -> Option<Vec<OriginData>> {
        match self.provider.origin_data_list() {
            Ok(Some(origins)) if !origins.is_empty() => Some(origins),
            Ok(_) => None,
            Err(e) => {
                warn!(action = "fetch", component = "origin_list", error = %e, "Failed to load origin list");
                None
            }
        }
    }

    pub fn origin_data(&self, origin: &str) -> Option<OriginData> {
        self.provider.load_origin_data(origin).unwrap_or_else(|e| {
            warn!(action = "fetch", component = "origin_data", origin, error = %e, "Failed to load origin data");
            None
        })
    }

    pub fn origin_stats(&self) -> Option<OriginStats> {
        self.provider.load_origin_stats().unwrap_or_else(|e| {
            warn!(action = "fetch", component = "origin_stats", error = %e, "Failed to load origin stats");
            None
        })
    }

    /// Origins with the most monetized time, at most `n` of them.
    ///
    /// A single-origin list is returned untouched.
    pub fn top_origins_by_time_spent(&self, n: usize) -> Option<Vec<OriginData>> {
        let mut origins = self.fetch_origins()?;

        if origins.len() > 1 {
            sort_by_time_spent(&mut origins);
            origins.truncate(n);
        }

        info!(action = "rank", component = "time_spent", requested = n, returned = origins.len(), "Ranked origins by time spent");
        Some(origins)
    }

    /// Origins receiving the least monetized time per visit, at most `n` of them.
    pub fn top_origins_that_need_some_love(&self, n: usize) -> Option<Vec<OriginData>> {
        let mut origins = self.fetch_origins()?;

        sort_by_need_for_love(&mut origins, self.config.love_ratio_margin);
        origins.truncate(n);

        info!(action = "rank", component = "need_some_love", requested = n, returned = origins.len(), "Ranked origins by need for love");
        Some(origins)
    }

    pub fn estimated_payment_for_origin_usd(&self, origin: &str) -> String {
        let time_spent = self
            .origin_data(origin)
            .map(|data| data.monetized_time_spent())
            .unwrap_or(0);
        self.estimated_payment_for_time_in_usd(time_spent)
    }

    pub fn estimated_payment_for_time_in_usd(&self, time_spent_ms: u64) -> String {
        format_usd(estimate_payment_usd(
            time_spent_ms,
            self.config.stream_rate_per_millisecond,
        ))
    }
}
