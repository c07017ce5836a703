use rand::Rng;
use std::time::Duration;

/// Timing knobs for the companion
#[derive(Debug, Clone)]
pub struct CompanionConfig {
    /// Minimum "thinking" time before a reply is appended
    pub reply_delay: Duration,
    /// Upper bound of the random extra time added to `reply_delay`
    pub reply_jitter: Duration,
    /// Simulated network latency of sign-in and sign-up
    pub auth_latency: Duration,
    /// Capacity of the per-message event channel
    pub event_buffer: usize,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1500),
            reply_jitter: Duration::from_millis(1000),
            auth_latency: Duration::from_millis(1000),
            event_buffer: 16,
        }
    }
}

impl CompanionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// No artificial delays at all
    pub fn immediate() -> Self {
        Self::default()
            .with_reply_delay(Duration::ZERO, Duration::ZERO)
            .with_auth_latency(Duration::ZERO)
    }

    pub fn with_reply_delay(mut self, min: Duration, jitter: Duration) -> Self {
        self.reply_delay = min;
        self.reply_jitter = jitter;
        self
    }

    pub fn with_auth_latency(mut self, latency: Duration) -> Self {
        self.auth_latency = latency;
        self
    }

    pub fn with_event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = capacity.max(1);
        self
    }

    /// Draw a delay uniformly from `[reply_delay, reply_delay + reply_jitter)`
    pub fn sample_reply_delay(&self) -> Duration {
        if self.reply_jitter.is_zero() {
            return self.reply_delay;
        }
        let extra = rand::thread_rng().gen_range(Duration::ZERO..self.reply_jitter);
        self.reply_delay + extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_window() {
        let config = CompanionConfig::default();
        for _ in 0..100 {
            let delay = config.sample_reply_delay();
            assert!(delay >= Duration::from_millis(1500));
            assert!(delay < Duration::from_millis(2500));
        }
    }

    #[test]
    fn test_immediate() {
        let config = CompanionConfig::immediate();
        assert_eq!(config.sample_reply_delay(), Duration::ZERO);
        assert_eq!(config.auth_latency, Duration::ZERO);
    }

    #[test]
    fn test_event_buffer_never_zero() {
        let config = CompanionConfig::new().with_event_buffer(0);
        assert_eq!(config.event_buffer, 1);
    }
}
