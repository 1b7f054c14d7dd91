//! Recent activity log shown on the dashboard

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Entries kept in the log
pub const MAX_RECENT_ACTIVITIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Added,
    Updated,
    Deleted,
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Added => "added",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub action: ActivityAction,
    pub member_name: String,
    /// Local time, formatted when the entry was recorded
    pub timestamp: String,
}

impl RecentActivity {
    pub fn new(action: ActivityAction, member_name: impl Into<String>) -> Self {
        Self {
            action,
            member_name: member_name.into(),
            timestamp: chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }
    }
}

impl fmt::Display for RecentActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member {} was {}", self.member_name, self.action)
    }
}

/// Bounded log, newest first
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<RecentActivity>,
}

impl ActivityLog {
    pub fn record(&mut self, action: ActivityAction, member_name: impl Into<String>) {
        self.push(RecentActivity::new(action, member_name));
    }

    pub fn push(&mut self, activity: RecentActivity) {
        self.entries.push_front(activity);
        self.entries.truncate(MAX_RECENT_ACTIVITIES);
    }

    pub fn entries(&self) -> Vec<RecentActivity> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_five_newest_first() {
        let mut log = ActivityLog::default();
        assert!(log.is_empty());
        for i in 0..7 {
            log.record(ActivityAction::Added, format!("Member {i}"));
        }
        assert_eq!(log.len(), MAX_RECENT_ACTIVITIES);
        let names: Vec<_> = log.entries().into_iter().map(|a| a.member_name).collect();
        assert_eq!(
            names,
            vec!["Member 6", "Member 5", "Member 4", "Member 3", "Member 2"]
        );
    }

    #[test]
    fn test_activity_display() {
        let activity = RecentActivity::new(ActivityAction::Deleted, "Ana Lima");
        assert_eq!(activity.to_string(), "Member Ana Lima was deleted");
        assert!(!activity.timestamp.is_empty());
    }
}
