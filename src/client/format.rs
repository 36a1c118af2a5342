//! Display labels for roles, statuses and timestamps.

use chrono::{DateTime, Utc};

use crate::model::{
    club::{ClubStatus, RequestStatus},
    event::{EventStatus, EventType},
    membership::{MembershipRole, MembershipStatus},
    user::Role,
};

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Member => "Member",
        Role::Coordinator => "Coordinator",
        Role::StudentLifeOfficer => "Student Life Officer",
    }
}

pub fn club_status_label(status: ClubStatus) -> &'static str {
    match status {
        ClubStatus::Pending => "Pending",
        ClubStatus::Active => "Active",
        ClubStatus::Archived => "Archived",
    }
}

pub fn request_status_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "Pending",
        RequestStatus::Approved => "Approved",
        RequestStatus::Rejected => "Rejected",
    }
}

/// daisyUI badge variant for a request status.
pub fn request_status_badge(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge-warning",
        RequestStatus::Approved => "badge-success",
        RequestStatus::Rejected => "badge-error",
    }
}

pub fn event_status_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Upcoming => "Upcoming",
        EventStatus::Completed => "Completed",
        EventStatus::Cancelled => "Cancelled",
    }
}

pub fn event_type_label(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Public => "Public",
        EventType::Private => "Members only",
    }
}

pub fn membership_role_label(role: MembershipRole) -> &'static str {
    match role {
        MembershipRole::Member => "Member",
        MembershipRole::Treasurer => "Treasurer",
        MembershipRole::Secretary => "Secretary",
    }
}

pub fn membership_status_label(status: MembershipStatus) -> &'static str {
    match status {
        MembershipStatus::Pending => "Pending approval",
        MembershipStatus::Active => "Active member",
        MembershipStatus::Rejected => "Rejected",
    }
}

/// e.g. `2025-03-11 18:30 UTC`
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

/// Value for a `datetime-local` input.
pub fn datetime_input_value(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

/// Cuts `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_text("Échecs et mats", 6), "Échecs...");
        assert_eq!(truncate_text("Chess", 5), "Chess");
        assert_eq!(truncate_text("", 3), "");
    }

    #[test]
    fn formats_timestamps() {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 8, 5, 0).unwrap();

        assert_eq!(format_datetime(&at), "2025-03-09 08:05 UTC");
        assert_eq!(format_date(&at), "March 9, 2025");
        assert_eq!(datetime_input_value(&at), "2025-03-09T08:05");
    }
}
