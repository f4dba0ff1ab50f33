use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

use crate::constants::LOG_TARGET;

/// Passes events of the listed levels emitted from this crate.
#[derive(Debug, Clone, Copy)]
pub struct CrateLevelFilter {
    levels: &'static [Level],
}

impl CrateLevelFilter {
    pub const DEBUG_ONLY: Self = Self { levels: &[Level::DEBUG] };
    pub const ERROR_ONLY: Self = Self { levels: &[Level::ERROR] };
    pub const ERROR_WARN: Self = Self {
        levels: &[Level::ERROR, Level::WARN],
    };
    pub const INFO_AND_ABOVE: Self = Self {
        levels: &[Level::ERROR, Level::WARN, Level::INFO],
    };

    pub fn accepts(
        &self,
        level: &Level,
        target: &str,
    ) -> bool {
        self.levels.contains(level) && target.starts_with(LOG_TARGET)
    }
}

impl<S> Filter<S> for CrateLevelFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        self.accepts(meta.level(), meta.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_crate_events_of_listed_levels_pass() {
        assert!(CrateLevelFilter::DEBUG_ONLY.accepts(&Level::DEBUG, "amlcheck::layout"));
        assert!(!CrateLevelFilter::DEBUG_ONLY.accepts(&Level::INFO, "amlcheck::layout"));
        assert!(!CrateLevelFilter::DEBUG_ONLY.accepts(&Level::DEBUG, "tokio::runtime"));

        assert!(CrateLevelFilter::ERROR_WARN.accepts(&Level::WARN, "amlcheck::service::explorer"));
        assert!(!CrateLevelFilter::ERROR_ONLY.accepts(&Level::WARN, "amlcheck"));
        assert!(CrateLevelFilter::INFO_AND_ABOVE.accepts(&Level::INFO, "amlcheck"));
    }
}
