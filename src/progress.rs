//! Player progress: XP, badges and a short activity log.
//!
//! This is the host side of [`SessionSink`]. The progress is stored as a
//! JSON document between runs.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::session::{SessionResult, SessionSink};

/// Entries kept in the recent activity log
pub const MAX_RECENT_ACTIVITIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub name: String,
    pub xp: u32,
    /// Unique, in the order they were earned
    pub badges: Vec<String>,
    /// Newest first
    pub recent_activities: Vec<String>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            name: "Young Learner".to_string(),
            xp: 0,
            badges: Vec::new(),
            recent_activities: Vec::new(),
        }
    }
}

impl Progress {
    pub fn add_xp(&mut self, amount: u32, activity: &str) {
        self.xp = self.xp.saturating_add(amount);
        self.push_activity(format!("Earned {} XP from {}", amount, activity));
    }

    /// Add a badge unless it was already earned.
    ///
    /// A repeat neither duplicates the badge nor adds a "new badge" entry to
    /// the activity log. Returns false in that case.
    pub fn add_badge(&mut self, badge: &str) -> bool {
        if self.badges.iter().any(|b| b == badge) {
            return false;
        }
        self.badges.push(badge.to_string());
        self.push_activity(format!("Earned new badge: {}", badge));
        true
    }

    /// Apply the reward rules for one finished session; returns the XP earned
    pub fn record(&mut self, result: &SessionResult) -> u32 {
        let earned = result.score.saturating_mul(result.kind.xp_per_point());
        self.add_xp(earned, result.kind.title());
        if result.is_perfect() {
            self.add_badge(result.kind.badge());
        }
        info!(
            "{} completed: {}/{} for {} XP (total {})",
            result.kind, result.score, result.total, earned, self.xp
        );
        earned
    }

    fn push_activity(&mut self, entry: String) {
        self.recent_activities.insert(0, entry);
        self.recent_activities.truncate(MAX_RECENT_ACTIVITIES);
    }

    /// Load progress from `path`.
    ///
    /// A missing file is a first run and yields the defaults. An unreadable
    /// document is logged and replaced by the defaults as well.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read progress from {:?}", path));
            }
        };

        match serde_json::from_str(&json) {
            Ok(progress) => Ok(progress),
            Err(e) => {
                warn!("Ignoring corrupt progress file {:?}: {}", path, e);
                Ok(Self::default())
            }
        }
    }

    /// Save progress to `path`, creating parent directories if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize progress")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write progress to {:?}", path))?;
        info!("progress saved to {:?}", path);
        Ok(())
    }
}

/// Session sink that applies every result to a [`Progress`] as it arrives.
///
/// Results are recorded even if the game later fails, so the host can always
/// save what was played. The XP earned per session is kept for the summary
/// printed after the terminal is restored.
pub struct ProgressSink<'a> {
    progress: &'a mut Progress,
    recorded: Vec<(SessionResult, u32)>,
}

impl<'a> ProgressSink<'a> {
    pub fn new(progress: &'a mut Progress) -> Self {
        Self {
            progress,
            recorded: Vec::new(),
        }
    }

    /// Sessions recorded so far with the XP each one earned
    pub fn into_recorded(self) -> Vec<(SessionResult, u32)> {
        self.recorded
    }
}

impl SessionSink for ProgressSink<'_> {
    fn on_session_complete(&mut self, result: SessionResult) {
        let earned = self.progress.record(&result);
        self.recorded.push((result, earned));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ActivityKind;
    use tempfile::TempDir;

    #[test]
    fn test_round_game_rewards() {
        let mut progress = Progress::default();
        let earned = progress.record(&SessionResult::new(ActivityKind::Letters, 4, 5));

        assert_eq!(earned, 20);
        assert_eq!(progress.xp, 20);
        assert!(progress.badges.is_empty());
        assert_eq!(
            progress.recent_activities,
            vec!["Earned 20 XP from ABC Fun Game".to_string()]
        );
    }

    #[test]
    fn test_perfect_session_awards_badge_once() {
        let mut progress = Progress::default();
        let perfect = SessionResult::new(ActivityKind::Colors, 5, 5);

        progress.record(&perfect);
        progress.record(&perfect);

        assert_eq!(progress.xp, 50);
        assert_eq!(progress.badges, vec!["Color Champion".to_string()]);
        assert_eq!(progress.recent_activities[0], "Earned 25 XP from Color Match Game");
        assert_eq!(progress.recent_activities[1], "Earned new badge: Color Champion");
    }

    #[test]
    fn test_snake_rewards() {
        let mut progress = Progress::default();
        assert_eq!(progress.record(&SessionResult::new(ActivityKind::Snake, 7, 1)), 14);
        assert!(progress.badges.is_empty());

        progress.record(&SessionResult::new(ActivityKind::Snake, 1, 1));
        assert_eq!(progress.badges, vec!["Snake Master".to_string()]);
    }

    #[test]
    fn test_recent_activities_capped() {
        let mut progress = Progress::default();
        for score in 0..8 {
            progress.record(&SessionResult::new(ActivityKind::Numbers, score, 10));
        }

        assert_eq!(progress.recent_activities.len(), MAX_RECENT_ACTIVITIES);
        assert_eq!(progress.recent_activities[0], "Earned 35 XP from 123 Adventure Game");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("progress.json");

        let mut progress = Progress::default();
        progress.name = "Mia".to_string();
        progress.record(&SessionResult::new(ActivityKind::Letters, 5, 5));
        progress.save(&path).unwrap();

        let loaded = Progress::load(&path).unwrap();
        assert_eq!(loaded, progress);
    }

    #[test]
    fn test_missing_and_corrupt_files_give_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert_eq!(Progress::load(&missing).unwrap(), Progress::default());

        let corrupt = temp_dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(Progress::load(&corrupt).unwrap(), Progress::default());
    }

    #[test]
    fn test_sink_records_immediately() {
        let mut progress = Progress::default();
        let mut sink = ProgressSink::new(&mut progress);

        sink.on_session_complete(SessionResult::new(ActivityKind::Snake, 1, 1));
        sink.on_session_complete(SessionResult::new(ActivityKind::Letters, 3, 5));
        let recorded = sink.into_recorded();

        assert_eq!(
            recorded,
            vec![
                (SessionResult::new(ActivityKind::Snake, 1, 1), 2),
                (SessionResult::new(ActivityKind::Letters, 3, 5), 15),
            ]
        );
        assert_eq!(progress.xp, 17);
        assert_eq!(progress.badges, vec!["Snake Master".to_string()]);
    }

    #[test]
    fn test_partial_session_is_saved() {
        // A session handed over before the game loop failed still reaches disk
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        let mut progress = Progress::default();

        let mut sink = ProgressSink::new(&mut progress);
        sink.on_session_complete(SessionResult::new(ActivityKind::Colors, 2, 3));
        drop(sink);
        progress.save(&path).unwrap();

        let loaded = Progress::load(&path).unwrap();
        assert_eq!(loaded.xp, 10);
        assert_eq!(loaded.recent_activities[0], "Earned 10 XP from Color Match Game");
    }
}
