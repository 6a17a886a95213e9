use std::time::{Duration, SystemTime};

use serde_with::serde_as;
use serde_with::TimestampSeconds;

/// Wall-clock span of one session. Set once at start, closed at completion.
#[serde_as]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimerState {
    #[serde_as(as = "TimestampSeconds")]
    pub started_timestamp: SystemTime,
    #[serde_as(as = "Option<TimestampSeconds>")]
    pub ended_timestamp: Option<SystemTime>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::started_at(SystemTime::now())
    }
}

impl TimerState {
    pub fn started_at(now: SystemTime) -> Self {
        Self {
            started_timestamp: now,
            ended_timestamp: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ended_timestamp.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        let until_time = self.ended_timestamp.unwrap_or(SystemTime::now());

        until_time
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    /// Whole seconds, truncated.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    pub fn ended(&self, now: SystemTime) -> TimerState {
        let mut new_state = self.clone();
        if new_state.ended_timestamp.is_none() {
            new_state.ended_timestamp = Some(now);
        }
        new_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_with_end() {
        let now = SystemTime::now();
        let timer = TimerState {
            started_timestamp: now,
            ended_timestamp: Some(now + Duration::from_millis(10_900)),
        };

        assert_eq!(timer.elapsed_seconds(), 10);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_ended_is_sticky() {
        let now = SystemTime::now();
        let timer = TimerState::started_at(now)
            .ended(now + Duration::from_secs(4))
            .ended(now + Duration::from_secs(90));

        assert_eq!(timer.elapsed(), Duration::from_secs(4));
    }

    #[test]
    fn test_elapsed_running() {
        let timer = TimerState::started_at(SystemTime::now() - Duration::from_secs(5));

        assert!(timer.is_running());
        assert!(timer.elapsed() >= Duration::from_secs(5));
    }

    #[test]
    fn test_clock_skew_is_zero() {
        let now = SystemTime::now();
        let timer = TimerState {
            started_timestamp: now + Duration::from_secs(60),
            ended_timestamp: Some(now),
        };

        assert_eq!(timer.elapsed(), Duration::ZERO);
    }
}
