use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Repeating simulation timer that can be switched off.
///
/// While disarmed, [`TickTimer::tick`] never completes, so a `select!` branch
/// on it simply stays quiet. Dropping the timer releases the interval.
pub struct TickTimer {
    interval: Option<Interval>,
}

impl TickTimer {
    pub fn disarmed() -> Self {
        Self { interval: None }
    }

    /// Start ticking every `period`, first tick one period from now
    pub fn arm(&mut self, period: Duration) {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn disarm(&mut self) {
        self.interval = None;
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_armed_timer_ticks_each_period() {
        let mut timer = TickTimer::disarmed();
        timer.arm(Duration::from_millis(200));
        assert!(timer.is_armed());

        let start = Instant::now();
        timer.tick().await;
        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_timer_never_fires() {
        let mut timer = TickTimer::disarmed();
        timer.arm(Duration::from_millis(200));
        timer.disarm();
        assert!(!timer.is_armed());

        let result = timeout(Duration::from_secs(5), timer.tick()).await;
        assert!(result.is_err());
    }
}
