use std::collections::VecDeque;

pub const HOUR_MS: u64 = 3_600_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDenied {
    /// Too soon after the previous manual refresh.
    Cooldown { remaining_secs: u64 },
    /// Hourly budget used up; the oldest refresh frees a slot after `remaining_secs`.
    HourlyLimit { remaining_secs: u64 },
}

impl RefreshDenied {
    pub fn message(&self) -> String {
        match self {
            RefreshDenied::Cooldown { remaining_secs } => {
                format!("Please wait {remaining_secs}s before refreshing again.")
            }
            RefreshDenied::HourlyLimit { remaining_secs } => format!(
                "Refresh limit reached. Try again in {} min.",
                remaining_secs.div_ceil(60)
            ),
        }
    }
}

/// Sliding-window throttle for manual refreshes. Timestamps are milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshLimiter {
    cooldown_ms: u64,
    max_per_hour: usize,
    last_refresh_at: Option<u64>,
    recent: VecDeque<u64>,
}

impl RefreshLimiter {
    pub fn new(cooldown_ms: u64, max_per_hour: usize) -> Self {
        Self {
            cooldown_ms,
            max_per_hour,
            last_refresh_at: None,
            recent: VecDeque::with_capacity(max_per_hour),
        }
    }

    /// Refreshes still counted against the hourly budget at `now`.
    pub fn refresh_count(&self, now: u64) -> usize {
        self.recent
            .iter()
            .filter(|&&at| now.saturating_sub(at) < HOUR_MS)
            .count()
    }

    pub fn can_refresh(&self, now: u64) -> bool {
        self.check(now).is_ok()
    }

    pub fn check(&self, now: u64) -> Result<(), RefreshDenied> {
        if let Some(last) = self.last_refresh_at {
            let age = now.saturating_sub(last);
            if age < self.cooldown_ms {
                return Err(RefreshDenied::Cooldown {
                    remaining_secs: ms_to_secs_ceil(self.cooldown_ms - age),
                });
            }
        }
        if self.refresh_count(now) >= self.max_per_hour {
            return Err(RefreshDenied::HourlyLimit {
                remaining_secs: ms_to_secs_ceil(self.hourly_wait_ms(now)),
            });
        }
        Ok(())
    }

    /// Checks and, when allowed, counts a manual refresh at `now`.
    pub fn try_acquire(&mut self, now: u64) -> Result<(), RefreshDenied> {
        self.check(now)?;
        self.prune(now);
        self.last_refresh_at = Some(now);
        self.recent.push_back(now);
        Ok(())
    }

    /// Seconds until [`can_refresh`](Self::can_refresh) holds again.
    pub fn remaining_cooldown_seconds(&self, now: u64) -> u64 {
        let cooldown_ms = self
            .last_refresh_at
            .map_or(0, |last| self.cooldown_ms.saturating_sub(now.saturating_sub(last)));
        let hourly_ms = if self.refresh_count(now) >= self.max_per_hour {
            self.hourly_wait_ms(now)
        } else {
            0
        };
        ms_to_secs_ceil(cooldown_ms.max(hourly_ms))
    }

    fn hourly_wait_ms(&self, now: u64) -> u64 {
        self.recent
            .iter()
            .filter(|&&at| now.saturating_sub(at) < HOUR_MS)
            .map(|&at| (at + HOUR_MS).saturating_sub(now))
            .min()
            .unwrap_or(0)
    }

    fn prune(&mut self, now: u64) {
        while let Some(&oldest) = self.recent.front() {
            if now.saturating_sub(oldest) >= HOUR_MS {
                self.recent.pop_front();
            } else {
                break;
            }
        }
    }
}

fn ms_to_secs_ceil(ms: u64) -> u64 {
    ms.div_ceil(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const START: u64 = 1_700_000_000_000;

    fn limiter() -> RefreshLimiter {
        RefreshLimiter::new(30_000, 10)
    }

    #[test]
    fn first_refresh_is_allowed() {
        let limiter = limiter();
        assert!(limiter.can_refresh(0));
        assert!(limiter.can_refresh(START));
        assert_eq!(limiter.remaining_cooldown_seconds(START), 0);
    }

    #[test]
    fn cooldown_boundary_is_inclusive() {
        let mut limiter = limiter();
        limiter.try_acquire(START).unwrap();

        assert!(!limiter.can_refresh(START + 29_999));
        assert!(limiter.can_refresh(START + 30_000));
        assert_eq!(limiter.remaining_cooldown_seconds(START + 1), 30);
        assert_eq!(limiter.remaining_cooldown_seconds(START + 29_001), 1);
        assert_eq!(
            limiter.check(START + 10_000),
            Err(RefreshDenied::Cooldown { remaining_secs: 20 })
        );
    }

    #[test]
    fn hourly_budget_binds_after_ten_refreshes() {
        let mut limiter = limiter();
        let mut now = START;
        for _ in 0..10 {
            limiter.try_acquire(now).unwrap();
            now += 30_000;
        }
        assert_eq!(limiter.refresh_count(now), 10);

        // Spacing is satisfied but the budget is not.
        let denied = limiter.try_acquire(now).unwrap_err();
        assert!(matches!(denied, RefreshDenied::HourlyLimit { .. }));
        assert_eq!(limiter.refresh_count(now), 10);
    }

    #[test]
    fn each_refresh_expires_one_hour_after_it_was_counted() {
        let mut limiter = limiter();
        let mut now = START;
        for _ in 0..10 {
            limiter.try_acquire(now).unwrap();
            now += 30_000;
        }

        let first_expiry = START + HOUR_MS;
        assert_eq!(limiter.refresh_count(first_expiry - 1), 10);
        assert!(!limiter.can_refresh(first_expiry - 1));
        assert_eq!(limiter.remaining_cooldown_seconds(first_expiry - 1_500), 2);

        assert_eq!(limiter.refresh_count(first_expiry), 9);
        assert!(limiter.can_refresh(first_expiry));
        limiter.try_acquire(first_expiry).unwrap();
        assert_eq!(limiter.refresh_count(first_expiry), 10);
    }

    #[test]
    fn denied_refresh_does_not_move_the_cooldown() {
        let mut limiter = limiter();
        limiter.try_acquire(START).unwrap();
        assert!(limiter.try_acquire(START + 5_000).is_err());
        assert!(limiter.try_acquire(START + 30_000).is_ok());
    }

    #[test]
    fn messages_name_the_wait() {
        assert_eq!(
            RefreshDenied::Cooldown { remaining_secs: 12 }.message(),
            "Please wait 12s before refreshing again."
        );
        assert_eq!(
            RefreshDenied::HourlyLimit { remaining_secs: 61 }.message(),
            "Refresh limit reached. Try again in 2 min."
        );
    }
}
