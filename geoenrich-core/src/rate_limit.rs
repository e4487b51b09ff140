use std::{thread, time::Duration};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("invalid request rate: {0} requests per second")]
pub struct InvalidRate(pub f64);

/// A fixed-delay throttle for outbound requests.
///
/// Every request except the first one is preceded by a pause
/// of `1000 / rate` milliseconds. There is no bursting and the
/// latency of the requests themselves is not taken into account.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
    requests: usize,
}

impl RateLimiter {
    pub fn from_interval(interval: Duration) -> Self {
        Self {
            interval,
            requests: 0,
        }
    }

    pub fn try_from_requests_per_second(rate: f64) -> Result<Self, InvalidRate> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(InvalidRate(rate));
        }
        let interval = Duration::try_from_secs_f64(1.0 / rate).map_err(|_| InvalidRate(rate))?;
        Ok(Self::from_interval(interval))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of requests that have been admitted so far.
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Blocks until the next request may be sent.
    pub fn wait(&mut self) {
        if self.requests > 0 && !self.interval.is_zero() {
            log::debug!("Waiting {:?} before the next request", self.interval);
            thread::sleep(self.interval);
        }
        self.requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn interval_from_rate() {
        let limiter = RateLimiter::try_from_requests_per_second(1.0).unwrap();
        assert_eq!(Duration::from_millis(1000), limiter.interval());
        let limiter = RateLimiter::try_from_requests_per_second(4.0).unwrap();
        assert_eq!(Duration::from_millis(250), limiter.interval());
    }

    #[test]
    fn reject_invalid_rates() {
        assert_eq!(
            Err(InvalidRate(0.0)),
            RateLimiter::try_from_requests_per_second(0.0).map(|_| ())
        );
        assert!(RateLimiter::try_from_requests_per_second(-1.0).is_err());
        assert!(RateLimiter::try_from_requests_per_second(f64::NAN).is_err());
        assert!(RateLimiter::try_from_requests_per_second(f64::INFINITY).is_err());
    }

    #[test]
    fn first_request_does_not_wait() {
        let mut limiter = RateLimiter::from_interval(Duration::from_secs(60));
        let start = Instant::now();
        limiter.wait();
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(1, limiter.requests());
    }

    #[test]
    fn consecutive_requests_are_spaced() {
        let interval = Duration::from_millis(30);
        let mut limiter = RateLimiter::from_interval(interval);
        let mut starts = Vec::new();
        for _ in 0..4 {
            limiter.wait();
            starts.push(Instant::now());
        }
        for pair in starts.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= interval);
        }
        assert_eq!(4, limiter.requests());
    }
}
