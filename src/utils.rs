use chrono::Duration;
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;
use url::Url;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders milliseconds as `1h 02m 03s`, dropping leading zero units.
pub fn format_duration(ms: u64) -> String {
    let duration = Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX));
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let seconds = duration.num_seconds() % 60;

    if hours > 0 {
        format!("{}h {:02}m {:02}s", format_number(hours as u64), minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Masks an origin's host, keeping the scheme and top-level domain.
pub fn redact_origin(origin: &str) -> String {
    let (scheme, host) = match Url::parse(origin) {
        Ok(url) => match url.host_str() {
            Some(host) => (Some(url.scheme().to_string()), host.to_string()),
            None => (None, origin.to_string()),
        },
        Err(_) => (None, origin.to_string()),
    };

    let redacted = redact_host(&host);
    match scheme {
        Some(scheme) => format!("{}://{}", scheme, redacted),
        None => redacted,
    }
}

fn redact_host(host: &str) -> String {
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() <= 1 {
        return host.to_string();
    }

    if parts[parts.len() - 2].len() <= 3 {
        return format!("???.{}", parts[parts.len() - 1]);
    }

    let redacted_parts: Vec<String> = parts[..parts.len() - 1]
        .iter()
        .map(|part| "*".repeat(part.len()))
        .collect();

    let mut result = redacted_parts.join(".");
    result.push('.');
    result.push_str(parts[parts.len() - 1]);
    result
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.top == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    if args.love == 0 {
        anyhow::bail!("--love must be greater than 0");
    }

    if !args.rate_per_hour.is_finite() || args.rate_per_hour <= 0.0 {
        anyhow::bail!("--rate-per-hour must be a positive number");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn numbers_get_thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59_999), "59s");
        assert_eq!(format_duration(61_000), "1m 01s");
        assert_eq!(format_duration(36_000_000 + 2 * 60_000 + 3_000), "10h 02m 03s");
    }

    #[test]
    fn redaction_keeps_scheme_and_tld() {
        assert_eq!(redact_origin("https://example.com"), "https://*******.com");
        assert_eq!(redact_origin("https://bbc.co.uk"), "https://???.uk");
        assert_eq!(redact_origin("localhost"), "localhost");
    }

    #[test]
    fn zero_limits_are_rejected() {
        let args = crate::args::Args::parse_from(["monetree", "--top", "0"]);
        assert!(validate_args(&args).is_err());

        let args = crate::args::Args::parse_from(["monetree", "--rate-per-hour=0"]);
        assert!(validate_args(&args).is_err());

        let args = crate::args::Args::parse_from(["monetree"]);
        assert!(validate_args(&args).is_ok());
    }
}
