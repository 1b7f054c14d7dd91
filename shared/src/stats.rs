//! Dashboard statistics
//!
//! Pure counts over a member list relative to a given day. Records whose
//! dates are missing or malformed simply drop out of the date-based buckets.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Member, MembershipStatus};
use crate::util::parse_date;

/// Window (in days, starting today) in which an active membership counts as expiring
pub const EXPIRING_WINDOW_DAYS: u64 = 7;

/// Summary counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_members: usize,
    pub new_this_month: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl DashboardStats {
    pub fn compute(members: &[Member], today: NaiveDate) -> Self {
        Self {
            active_members: active_members(members),
            new_this_month: new_this_month(members, today),
            expiring_soon: expiring_soon(members, today),
            expired: expired(members, today),
        }
    }
}

pub fn active_members(members: &[Member]) -> usize {
    members
        .iter()
        .filter(|m| m.status == MembershipStatus::Active)
        .count()
}

/// Members whose creation date (or start date when creation is unknown)
/// falls in the calendar month of `today`.
pub fn new_this_month(members: &[Member], today: NaiveDate) -> usize {
    members
        .iter()
        .filter(|m| {
            let joined = parse_date(m.created_at.as_deref())
                .or_else(|| parse_date(m.start_date.as_deref()));
            joined.is_some_and(|d| d.month() == today.month() && d.year() == today.year())
        })
        .count()
}

/// Active members with `today <= end_date < today + 7 days`.
pub fn expiring_soon(members: &[Member], today: NaiveDate) -> usize {
    let Some(horizon) = today.checked_add_days(Days::new(EXPIRING_WINDOW_DAYS)) else {
        return 0;
    };
    members
        .iter()
        .filter(|m| m.status == MembershipStatus::Active)
        .filter_map(|m| parse_date(m.end_date.as_deref()))
        .filter(|end| *end < horizon && *end >= today)
        .count()
}

/// Members marked expired, plus any whose end date has already passed
/// while the status still says otherwise.
pub fn expired(members: &[Member], today: NaiveDate) -> usize {
    members
        .iter()
        .filter(|m| {
            m.status == MembershipStatus::Expired
                || parse_date(m.end_date.as_deref()).is_some_and(|end| end < today)
        })
        .count()
}
