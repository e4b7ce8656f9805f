use std::time::Duration;

use log::LevelFilter;

use crate::sections::DEFAULT_VISIBILITY_THRESHOLD;
use crate::theme::Theme;
use crate::typewriter::{
    TypewriterTimings, DEFAULT_DELETE_DELAY_MS, DEFAULT_HOLD_DELAY_MS, DEFAULT_TYPE_DELAY_MS,
};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const TYPE_DELAY_MS_BOUNDS: (u64, u64) = (10, 2_000);
const DELETE_DELAY_MS_BOUNDS: (u64, u64) = (10, 2_000);
const HOLD_DELAY_MS_BOUNDS: (u64, u64) = (0, 10_000);
const SECTION_THRESHOLD_BOUNDS: (f64, f64) = (0.05, 1.0);

/// Page settings read from the `data-*` attributes of the mount element.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub default_theme: Theme,
    pub log_level: LevelFilter,
    pub typewriter: TypewriterTimings,
    pub section_threshold: f64,
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_theme = parse_non_empty_string(&lookup, "default-theme")
            .and_then(|value| Theme::from_str(&value.to_ascii_lowercase()))
            .unwrap_or_default();
        let log_level = parse_log_level(&lookup, "log-level", DEFAULT_LOG_LEVEL);
        let type_delay_ms = parse_u64_with_bounds(
            &lookup,
            "type-delay-ms",
            DEFAULT_TYPE_DELAY_MS,
            TYPE_DELAY_MS_BOUNDS,
        );
        let delete_delay_ms = parse_u64_with_bounds(
            &lookup,
            "delete-delay-ms",
            DEFAULT_DELETE_DELAY_MS,
            DELETE_DELAY_MS_BOUNDS,
        );
        let hold_delay_ms = parse_u64_with_bounds(
            &lookup,
            "hold-delay-ms",
            DEFAULT_HOLD_DELAY_MS,
            HOLD_DELAY_MS_BOUNDS,
        );
        let section_threshold = parse_f64_with_bounds(
            &lookup,
            "section-threshold",
            DEFAULT_VISIBILITY_THRESHOLD,
            SECTION_THRESHOLD_BOUNDS,
        );

        Self {
            default_theme,
            log_level,
            typewriter: TypewriterTimings {
                type_delay: Duration::from_millis(type_delay_ms),
                delete_delay: Duration::from_millis(delete_delay_ms),
                hold_delay: Duration::from_millis(hold_delay_ms),
            },
            section_threshold,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds<F>(lookup: &F, name: &str, default: u64, bounds: (u64, u64)) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level<F>(lookup: &F, name: &str, default: LevelFilter) -> LevelFilter
where
    F: Fn(&str) -> Option<String>,
{
    match parse_non_empty_string(lookup, name)
        .unwrap_or_default()
        .to_ascii_lowercase()
        .as_str()
    {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.default_theme, Theme::BlueDark);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.typewriter, TypewriterTimings::default());
        assert_eq!(config.section_threshold, 0.5);
    }

    #[test]
    fn valid_attributes_override_defaults() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("default-theme", " Black "),
            ("log-level", "DEBUG"),
            ("type-delay-ms", "80"),
            ("hold-delay-ms", "0"),
            ("section-threshold", "0.75"),
        ]));

        assert_eq!(config.default_theme, Theme::Black);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.typewriter.type_delay, Duration::from_millis(80));
        assert_eq!(config.typewriter.hold_delay, Duration::ZERO);
        assert_eq!(config.section_threshold, 0.75);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("default-theme", "sepia"),
            ("log-level", "loud"),
            ("type-delay-ms", "5"),
            ("delete-delay-ms", "not-a-number"),
            ("section-threshold", "1.5"),
        ]));

        assert_eq!(config, SiteConfig::default());
    }
}
