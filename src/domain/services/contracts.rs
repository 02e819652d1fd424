use chrono::{Duration, NaiveDate};

use crate::domain::models::announcement::{ContractAnnouncement, ContractRecord, ContractUrgency};

/// Contracts ending further out than this are not announced.
pub const ANNOUNCEMENT_WINDOW_DAYS: i64 = 30;
pub const URGENT_DAYS: i64 = 7;
pub const WARNING_DAYS: i64 = 14;

pub fn classify(days_remaining: i64) -> Option<ContractUrgency> {
    match days_remaining {
        d if d < 0 => Some(ContractUrgency::Expired),
        d if d <= URGENT_DAYS => Some(ContractUrgency::Urgent),
        d if d <= WARNING_DAYS => Some(ContractUrgency::Warning),
        d if d <= ANNOUNCEMENT_WINDOW_DAYS => Some(ContractUrgency::Normal),
        _ => None,
    }
}

pub fn window_end(today: NaiveDate) -> NaiveDate {
    today + Duration::days(ANNOUNCEMENT_WINDOW_DAYS)
}

fn describe(days_remaining: i64) -> String {
    match days_remaining {
        d if d < -1 => format!("Contract expired {} days ago", -d),
        -1 => "Contract expired yesterday".to_string(),
        0 => "Contract ends today".to_string(),
        1 => "Contract ends tomorrow".to_string(),
        d => format!("Contract ends in {} days", d),
    }
}

/// Buckets contract records relative to `today`, dropping anything outside
/// the announcement window, soonest first.
pub fn build_announcements(records: Vec<ContractRecord>, today: NaiveDate) -> Vec<ContractAnnouncement> {
    let mut announcements: Vec<ContractAnnouncement> = records
        .into_iter()
        .filter_map(|r| {
            let days_remaining = (r.contract_end_date - today).num_days();
            let urgency = classify(days_remaining)?;
            Some(ContractAnnouncement {
                id: r.id,
                name: r.name,
                position: r.position,
                division_name: r.division_name,
                contract_end_date: r.contract_end_date,
                days_remaining,
                urgency,
                message: describe(days_remaining),
            })
        })
        .collect();

    announcements.sort_by(|a, b| {
        a.days_remaining
            .cmp(&b.days_remaining)
            .then_with(|| a.name.cmp(&b.name))
    });
    announcements
}
