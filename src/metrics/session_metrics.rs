use std::time::{Duration, Instant};

use crate::session::{ActivityKind, SessionResult};

/// Per-process play statistics shown in the HUD
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_snake_score: u32,
    pub sessions_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_snake_score: 0,
            sessions_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_session_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_session_complete(&mut self, result: &SessionResult) {
        self.sessions_played += 1;
        if result.kind == ActivityKind::Snake && result.score > self.best_snake_score {
            self.best_snake_score = result.score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = SessionMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = SessionMetrics::new();

        metrics.on_session_complete(&SessionResult::new(ActivityKind::Snake, 10, 1));
        assert_eq!(metrics.best_snake_score, 10);
        assert_eq!(metrics.sessions_played, 1);

        metrics.on_session_complete(&SessionResult::new(ActivityKind::Snake, 5, 1));
        assert_eq!(metrics.best_snake_score, 10);

        // Round games do not touch the snake record
        metrics.on_session_complete(&SessionResult::new(ActivityKind::Letters, 15, 15));
        assert_eq!(metrics.best_snake_score, 10);
        assert_eq!(metrics.sessions_played, 3);
    }

    #[test]
    fn test_session_start_resets_time() {
        let mut metrics = SessionMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_session_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
