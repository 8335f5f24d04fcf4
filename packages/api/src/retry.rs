//! Bounded retry for 401-driven re-authentication.
//!
//! When an authenticated request comes back 401, the caller re-runs the auth
//! check and may retry the original request — but only a bounded number of
//! times, so a permanently invalid token cannot cause an infinite loop. The
//! counter is an explicit state machine with a terminal `Expired` state rather
//! than recursive re-invocation.

/// Whether the caller may retry the original request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    Retry,
    /// Terminal: surface a session-expired error and stop.
    Expired,
}

/// Counts 401 responses for one logical operation. Default budget: 3 retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthRetry {
    attempts: u32,
    max_attempts: u32,
    expired: bool,
}

impl Default for AuthRetry {
    fn default() -> Self {
        Self::new(3)
    }
}

impl AuthRetry {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts: 0,
            max_attempts,
            expired: false,
        }
    }

    /// Record a 401 and decide whether another attempt is allowed. Once the
    /// budget is spent the machine stays in `Expired` forever.
    pub fn on_unauthorized(&mut self) -> RetryDecision {
        if !self.expired {
            self.attempts += 1;
            if self.attempts > self.max_attempts {
                self.expired = true;
            }
        }
        if self.expired {
            RetryDecision::Expired
        } else {
            RetryDecision::Retry
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_exactly_the_budgeted_retries() {
        let mut retry = AuthRetry::default();
        assert_eq!(retry.on_unauthorized(), RetryDecision::Retry);
        assert_eq!(retry.on_unauthorized(), RetryDecision::Retry);
        assert_eq!(retry.on_unauthorized(), RetryDecision::Retry);
        assert_eq!(retry.on_unauthorized(), RetryDecision::Expired);
    }

    #[test]
    fn expired_is_terminal() {
        let mut retry = AuthRetry::new(1);
        retry.on_unauthorized();
        retry.on_unauthorized();
        assert!(retry.is_expired());
        for _ in 0..10 {
            assert_eq!(retry.on_unauthorized(), RetryDecision::Expired);
        }
        // Attempt counting stops once expired.
        assert_eq!(retry.attempts(), 2);
    }

    #[test]
    fn zero_budget_expires_immediately() {
        let mut retry = AuthRetry::new(0);
        assert_eq!(retry.on_unauthorized(), RetryDecision::Expired);
    }
}
