//! Member list export
//!
//! Plain serializers for download buttons; rendering (PDF etc.) happens
//! elsewhere and consumes [`export_table`].

use chrono::NaiveDate;
use shared::models::Member;

use crate::ClientResult;

pub const TABLE_HEADER: [&str; 8] = [
    "ID",
    "Full Name",
    "Email",
    "Phone",
    "Membership",
    "Status",
    "Start Date",
    "End Date",
];

const MISSING: &str = "N/A";

/// `gym-members-YYYY-MM-DD.<ext>`
pub fn export_file_name(date: NaiveDate, extension: &str) -> String {
    format!("gym-members-{}.{}", date.format("%Y-%m-%d"), extension)
}

/// Pretty-printed JSON array of the members
pub fn export_json(members: &[Member]) -> ClientResult<String> {
    Ok(serde_json::to_string_pretty(members)?)
}

/// One row per member in [`TABLE_HEADER`] order, `N/A` for missing values
pub fn export_table(members: &[Member]) -> Vec<[String; 8]> {
    fn or_missing(value: Option<&str>) -> String {
        value
            .filter(|v| !v.is_empty())
            .unwrap_or(MISSING)
            .to_string()
    }

    members
        .iter()
        .map(|m| {
            [
                or_missing(m.member_id.as_deref()),
                or_missing(Some(&m.full_name)),
                or_missing(Some(&m.email)),
                or_missing(Some(&m.phone)),
                m.membership_type.as_str().to_string(),
                m.status.as_str().to_string(),
                or_missing(m.start_date.as_deref()),
                or_missing(m.end_date.as_deref()),
            ]
        })
        .collect()
}

/// [`export_table`] as CSV, header included
pub fn export_csv(members: &[Member]) -> String {
    fn field(value: &str) -> String {
        if value.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    let mut out = TABLE_HEADER.join(",");
    out.push('\n');
    for row in export_table(members) {
        let line: Vec<String> = row.iter().map(|v| field(v)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}
