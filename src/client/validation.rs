//! Client-side form validation.
//!
//! Validators run before any request is sent. Each returns the error message for one field, and
//! the `validate_*` functions collect them into the field-keyed map the form state displays.
//! Account and club forms speak French, event forms English, as the backend's users expect.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::client::model::form::{FieldErrors, FormValues};

pub const REQUIRED: &str = "Ce champ est obligatoire";
pub const INVALID_EMAIL: &str = "Adresse email invalide";
pub const PASSWORD_MISMATCH: &str = "Les mots de passe ne correspondent pas";

const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

pub const CLUB_NAME_MIN: usize = 3;
pub const CLUB_NAME_MAX: usize = 50;
pub const CLUB_DESCRIPTION_MIN: usize = 50;
pub const CLUB_DESCRIPTION_MAX: usize = 1000;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

fn field<'a>(values: &'a FormValues, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or_default()
}

fn length(value: &str) -> usize {
    value.chars().count()
}

pub fn required(value: &str) -> Option<String> {
    value.trim().is_empty().then(|| REQUIRED.to_string())
}

/// Empty values pass; combine with `required` for mandatory fields.
pub fn email(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let valid = email_regex().is_some_and(|re| re.is_match(value));
    (!valid).then(|| INVALID_EMAIL.to_string())
}

/// At least 8 characters with a digit, a lowercase and an uppercase letter. Empty values pass.
pub fn password(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let message = if length(value) < 8 {
        "Le mot de passe doit contenir au moins 8 caractères"
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        "Le mot de passe doit contenir au moins un chiffre"
    } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
        "Le mot de passe doit contenir au moins une minuscule"
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        "Le mot de passe doit contenir au moins une majuscule"
    } else {
        return None;
    };
    Some(message.to_string())
}

pub fn match_password(value: &str, confirmation: &str) -> Option<String> {
    if value.is_empty() || confirmation.is_empty() {
        return None;
    }
    (value != confirmation).then(|| PASSWORD_MISMATCH.to_string())
}

pub fn club_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return required(value);
    }

    let len = length(value);
    if len < CLUB_NAME_MIN {
        Some(format!(
            "Le nom du club doit contenir au moins {} caractères",
            CLUB_NAME_MIN
        ))
    } else if len > CLUB_NAME_MAX {
        Some(format!(
            "Le nom du club ne doit pas dépasser {} caractères",
            CLUB_NAME_MAX
        ))
    } else {
        None
    }
}

pub fn club_description(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return required(value);
    }

    let len = length(value);
    if len < CLUB_DESCRIPTION_MIN {
        Some(format!(
            "Les objectifs doivent contenir au moins {} caractères",
            CLUB_DESCRIPTION_MIN
        ))
    } else if len > CLUB_DESCRIPTION_MAX {
        Some(format!(
            "Les objectifs ne doivent pas dépasser {} caractères",
            CLUB_DESCRIPTION_MAX
        ))
    } else {
        None
    }
}

fn collect<'a>(checks: impl IntoIterator<Item = (&'a str, Option<String>)>) -> FieldErrors {
    checks
        .into_iter()
        .filter_map(|(name, error)| error.map(|error| (name.to_string(), error)))
        .collect()
}

pub fn validate_login(values: &FormValues) -> FieldErrors {
    collect([
        ("username", required(field(values, "username"))),
        ("password", required(field(values, "password"))),
    ])
}

/// Registration fields: `username`, `email`, `first_name`, `last_name`, `password` and
/// `confirm_password`. A mismatch is reported on `confirm_password`.
pub fn validate_registration(values: &FormValues) -> FieldErrors {
    let password_value = field(values, "password");
    let confirmation = field(values, "confirm_password");

    collect([
        ("username", required(field(values, "username"))),
        (
            "email",
            required(field(values, "email")).or_else(|| email(field(values, "email"))),
        ),
        ("first_name", required(field(values, "first_name"))),
        ("last_name", required(field(values, "last_name"))),
        (
            "password",
            required(password_value).or_else(|| password(password_value)),
        ),
        (
            "confirm_password",
            required(confirmation).or_else(|| match_password(password_value, confirmation)),
        ),
    ])
}

pub fn validate_club_request(values: &FormValues) -> FieldErrors {
    collect([
        ("club_name", club_name(field(values, "club_name"))),
        ("description", club_description(field(values, "description"))),
    ])
}

/// Club create and edit forms apply the same bounds as a creation request.
pub fn validate_club(values: &FormValues) -> FieldErrors {
    collect([
        ("name", club_name(field(values, "name"))),
        ("description", club_description(field(values, "description"))),
    ])
}

/// Profile edits only check the email, when one is given.
pub fn validate_profile(values: &FormValues) -> FieldErrors {
    collect([("email", email(field(values, "email")))])
}

/// Parses the value of a `datetime-local` input, read as UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Validates an event form, reporting only the first problem found.
///
/// Fields: `title`, `description`, `start_time`, `end_time`, `location`, `club`. The start time
/// must be in the future relative to `now` only when `creating`; existing events may be edited
/// after they started.
pub fn validate_event(values: &FormValues, now: DateTime<Utc>, creating: bool) -> FieldErrors {
    let error = first_event_error(values, now, creating);
    collect(error.map(|(name, message)| (name, Some(message.to_string()))))
}

fn first_event_error(
    values: &FormValues,
    now: DateTime<Utc>,
    creating: bool,
) -> Option<(&'static str, &'static str)> {
    let title = field(values, "title");
    let description = field(values, "description");

    if title.trim().is_empty() {
        return Some(("title", "Event title is required"));
    }
    if length(title) < 3 {
        return Some(("title", "Event title must be at least 3 characters long"));
    }
    if description.trim().is_empty() {
        return Some(("description", "Event description is required"));
    }
    if length(description) < 10 {
        return Some((
            "description",
            "Event description must be at least 10 characters long",
        ));
    }

    let Some(start_time) = parse_datetime(field(values, "start_time")) else {
        return Some(("start_time", "Start time is required"));
    };
    let Some(end_time) = parse_datetime(field(values, "end_time")) else {
        return Some(("end_time", "End time is required"));
    };
    if start_time >= end_time {
        return Some(("end_time", "End time must be after start time"));
    }
    if creating && start_time <= now {
        return Some(("start_time", "Start time must be in the future"));
    }

    if field(values, "location").trim().is_empty() {
        return Some(("location", "Location is required"));
    }
    if field(values, "club").parse::<i32>().is_err() {
        return Some(("club", "Please select a club"));
    }

    None
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn event(start: &str, end: &str) -> FormValues {
        values(&[
            ("title", "Spring Tournament"),
            ("description", "Swiss format, five rounds"),
            ("start_time", start),
            ("end_time", end),
            ("location", "Library"),
            ("club", "1"),
        ])
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(email_regex().is_some());
        assert_eq!(email("ada@example.org"), None);
        assert_eq!(email("ada@example").as_deref(), Some(INVALID_EMAIL));
        assert_eq!(email(""), None);
    }

    #[test]
    fn password_rules_apply_in_order() {
        assert!(password("Ab1").unwrap().contains("8 caractères"));
        assert!(password("abcdefgh").unwrap().contains("chiffre"));
        assert!(password("ABCDEFG1").unwrap().contains("minuscule"));
        assert!(password("abcdefg1").unwrap().contains("majuscule"));
        assert_eq!(password("Abcdefg1"), None);
    }

    #[test]
    fn mismatched_confirmation_is_reported() {
        let errors = validate_registration(&values(&[
            ("username", "ada"),
            ("email", "ada@example.org"),
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("password", "Secret123"),
            ("confirm_password", "Secret124"),
        ]));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("confirm_password").map(String::as_str),
            Some(PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn empty_registration_requires_every_field() {
        let errors = validate_registration(&FormValues::new());

        assert_eq!(errors.len(), 6);
        assert!(errors.values().all(|e| e == REQUIRED));
    }

    #[test]
    fn club_request_bounds() {
        let short = validate_club_request(&values(&[
            ("club_name", "Go"),
            ("description", "Too short"),
        ]));
        assert!(short["club_name"].contains("au moins 3"));
        assert!(short["description"].contains("au moins 50"));

        let long_name = "x".repeat(CLUB_NAME_MAX + 1);
        let ok_description = "y".repeat(CLUB_DESCRIPTION_MIN);
        let errors = validate_club_request(&values(&[
            ("club_name", &long_name),
            ("description", &ok_description),
        ]));
        assert!(errors["club_name"].contains("dépasser 50"));
        assert!(!errors.contains_key("description"));
    }

    #[test]
    fn parses_datetime_local_values() {
        assert_eq!(
            parse_datetime("2025-03-11T18:30"),
            Some(Utc.with_ymd_and_hms(2025, 3, 11, 18, 30, 0).unwrap())
        );
        assert!(parse_datetime("2025-03-11 18:30").is_some());
        assert_eq!(parse_datetime("tomorrow"), None);
    }

    #[test]
    fn event_in_past_is_rejected_at_creation() {
        let errors = validate_event(&event("2025-03-01T10:00", "2025-03-01T12:00"), now(), true);

        assert_eq!(
            errors.get("start_time").map(String::as_str),
            Some("Start time must be in the future")
        );
    }

    #[test]
    fn started_event_may_still_be_edited() {
        let errors = validate_event(&event("2025-03-01T10:00", "2025-03-01T12:00"), now(), false);

        assert!(errors.is_empty());
    }

    #[test]
    fn end_must_follow_start() {
        let errors = validate_event(&event("2025-04-01T12:00", "2025-04-01T12:00"), now(), true);

        assert_eq!(
            errors.get("end_time").map(String::as_str),
            Some("End time must be after start time")
        );
    }

    #[test]
    fn reports_only_first_event_error() {
        let errors = validate_event(&FormValues::new(), now(), true);

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("title").map(String::as_str),
            Some("Event title is required")
        );
    }

    #[test]
    fn event_requires_club_selection() {
        let start = now() + Duration::days(1);
        let mut form = event(
            &start.format("%Y-%m-%dT%H:%M").to_string(),
            &(start + Duration::hours(1))
                .format("%Y-%m-%dT%H:%M")
                .to_string(),
        );
        form.insert("club".to_string(), String::new());

        let errors = validate_event(&form, now(), true);

        assert_eq!(
            errors.get("club").map(String::as_str),
            Some("Please select a club")
        );
    }
}
