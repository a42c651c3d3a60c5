use serde::Serialize;
use std::time::Instant;
use tracing::info;

use crate::calculator::StatsCalculator;
use crate::estimate::{
    has_used_web_monetization_provider, monetized_time_spent_percent,
    percent_time_spent_at_origin_out_of_total, percent_visits_to_origin_out_of_total,
};
use crate::provider::DataProvider;
use crate::stats::{OriginData, OriginStats};
use crate::utils::{format_duration, format_number, redact_origin};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginSummary {
    pub origin: String,
    pub monetized_time_spent: u64,
    pub number_of_visits: u64,
    pub percent_time_spent: f64,
    pub percent_visits: f64,
    pub estimated_payment_usd: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub has_used_web_monetization_provider: bool,
    pub monetized_time_spent_percent: f64,
    pub total_monetized_time_spent: u64,
    pub total_estimated_payment_usd: String,
    pub top_by_time_spent: Vec<OriginSummary>,
    pub need_some_love: Vec<OriginSummary>,
}

impl Report {
    pub fn redacted(mut self) -> Self {
        for summary in self
            .top_by_time_spent
            .iter_mut()
            .chain(self.need_some_love.iter_mut())
        {
            summary.origin = redact_origin(&summary.origin);
        }
        self
    }
}

fn summarize<P: DataProvider>(
    calculator: &StatsCalculator<P>,
    data: &OriginData,
    stats: Option<&OriginStats>,
) -> OriginSummary {
    OriginSummary {
        origin: data.origin.clone(),
        monetized_time_spent: data.monetized_time_spent(),
        number_of_visits: data.number_of_visits(),
        percent_time_spent: percent_time_spent_at_origin_out_of_total(Some(data), stats),
        percent_visits: percent_visits_to_origin_out_of_total(Some(data), stats),
        estimated_payment_usd: calculator
            .estimated_payment_for_time_in_usd(data.monetized_time_spent()),
    }
}

pub fn build_report<P: DataProvider>(
    calculator: &StatsCalculator<P>,
    top: usize,
    love: usize,
) -> Report {
    let start_time = Instant::now();
    info!(action = "start", component = "report", "Building monetization report");

    let stats = calculator.origin_stats();
    let stats = stats.as_ref();

    let summarize_all = |origins: Option<Vec<OriginData>>| -> Vec<OriginSummary> {
        origins
            .unwrap_or_default()
            .iter()
            .map(|data| summarize(calculator, data, stats))
            .collect()
    };

    let total_monetized_time_spent = stats.map(|s| s.total_monetized_time_spent).unwrap_or(0);

    let report = Report {
        has_used_web_monetization_provider: has_used_web_monetization_provider(stats),
        monetized_time_spent_percent: monetized_time_spent_percent(stats),
        total_monetized_time_spent,
        total_estimated_payment_usd: calculator
            .estimated_payment_for_time_in_usd(total_monetized_time_spent),
        top_by_time_spent: summarize_all(calculator.top_origins_by_time_spent(top)),
        need_some_love: summarize_all(calculator.top_origins_that_need_some_love(love)),
    };

    info!(
        action = "complete",
        component = "report",
        top_count = report.top_by_time_spent.len(),
        love_count = report.need_some_love.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Report built"
    );
    report
}

fn print_origin_lines(summaries: &[OriginSummary]) {
    for summary in summaries {
        println!(
            "- {}: {} monetized over {} visits ({}% of time, {}% of visits) ~ ${}",
            summary.origin,
            format_duration(summary.monetized_time_spent),
            format_number(summary.number_of_visits),
            summary.percent_time_spent,
            summary.percent_visits,
            summary.estimated_payment_usd
        );
    }
}

pub fn print_report(report: &Report) {
    println!("\n--- Web Monetization Summary ---");

    if !report.has_used_web_monetization_provider {
        println!("No payments have been sent through a Web Monetization provider yet.");
    }

    println!(
        "Monetized time: {} ({}% of time browsing)",
        format_duration(report.total_monetized_time_spent),
        report.monetized_time_spent_percent
    );
    println!(
        "Estimated total payment: ${}",
        report.total_estimated_payment_usd
    );

    if report.top_by_time_spent.is_empty() {
        println!("\nNo origin data available.");
        return;
    }

    println!(
        "\nTop {} origins by monetized time:",
        report.top_by_time_spent.len()
    );
    print_origin_lines(&report.top_by_time_spent);

    println!(
        "\nTop {} origins that need some love:",
        report.need_some_love.len()
    );
    print_origin_lines(&report.need_some_love);
}
