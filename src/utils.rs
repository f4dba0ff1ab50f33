use std::time::Duration;

use rand::Rng;

use crate::constants::SHORT_ADDRESS_PREFIX;
use crate::constants::SHORT_ADDRESS_SUFFIX;

/// `0x742d35...95f0beb1` -> `0x742d...beb1`; short inputs are returned unchanged.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= SHORT_ADDRESS_PREFIX + SHORT_ADDRESS_SUFFIX {
        return address.to_string();
    }

    let head: String = chars[..SHORT_ADDRESS_PREFIX].iter().collect();
    let tail: String = chars[chars.len() - SHORT_ADDRESS_SUFFIX..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Calculate exponential backoff with jitter
pub fn calculate_backoff_with_jitter(
    attempt: usize,
    base_delay_ms: u64,
    max_delay_ms: u64,
) -> Duration {
    // Exponential backoff: delay = base * 2^attempt
    let exponential_delay = base_delay_ms.saturating_mul(2u64.saturating_pow(attempt as u32));

    let capped_delay = exponential_delay.min(max_delay_ms);

    // Add jitter (±25% of the delay)
    let mut rng = rand::rng();
    let jitter_range = (capped_delay as f64 * 0.25) as u64;
    let jitter = rng.random_range(0..=jitter_range * 2);
    let final_delay = capped_delay.saturating_add(jitter).saturating_sub(jitter_range);

    Duration::from_millis(final_delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_address_keeps_prefix_and_suffix() {
        assert_eq!(short_address("0x742d35cc6634c0532925a3b844bc9e7595f0beb1"), "0x742d...beb1");
        assert_eq!(short_address("0x1234"), "0x1234");
        assert_eq!(short_address(""), "");
    }

    #[test]
    fn backoff_is_capped_with_bounded_jitter() {
        for attempt in 0..10 {
            let delay = calculate_backoff_with_jitter(attempt, 100, 1_000).as_millis() as u64;
            assert!(delay <= 1_250, "attempt {} gave {}ms", attempt, delay);
        }
        assert_eq!(calculate_backoff_with_jitter(3, 0, 1_000), Duration::ZERO);
    }
}
