//! Terminal rendering of the dashboard.

use service::domain::{user::Role, CheckIn, User, VacationRequest};

/// Number of check-ins shown on the dashboard.
pub const RECENT_CHECKINS: usize = 5;

/// Renders the dashboard for the provided [`User`] and resource lists.
///
/// The admin card is rendered only for [`Role::Admin`] users. Empty
/// lists render their empty-state line instead of an error, no matter
/// why they are empty.
#[must_use]
pub fn dashboard(
    user: &User,
    checkins: &[CheckIn],
    vacations: &[VacationRequest],
) -> String {
    let mut lines = vec![
        format!("Stadtwache - Willkommen, {}", user.username),
        String::new(),
        "Übersicht - Aktueller Schichtstatus".to_owned(),
        "Team - Check-Ins der Kollegen".to_owned(),
        "Schichtverwaltung - Urlaubsanträge".to_owned(),
    ];
    if user.role == Role::Admin {
        lines.push(
            "Admin-Dashboard - Benutzerverwaltung und Systemeinstellungen"
                .to_owned(),
        );
    }

    lines.push(String::new());
    lines.push("Letzte Check-Ins:".to_owned());
    lines.extend(checkins_section(checkins));

    lines.push(String::new());
    lines.push("Urlaubsanträge:".to_owned());
    lines.extend(vacations_section(vacations));

    lines.join("\n")
}

/// Renders the check-ins section, one line per entry.
fn checkins_section(checkins: &[CheckIn]) -> Vec<String> {
    if checkins.is_empty() {
        return vec!["Noch keine Check-Ins vorhanden".to_owned()];
    }
    checkins
        .iter()
        .map(|c| {
            format!(
                "[{}] {} - {}",
                c.timestamp.to_rfc3339(),
                c.status.text(),
                c.message,
            )
        })
        .collect()
}

/// Renders the vacation requests section, one line per entry.
fn vacations_section(vacations: &[VacationRequest]) -> Vec<String> {
    if vacations.is_empty() {
        return vec!["Keine Urlaubsanträge vorhanden".to_owned()];
    }
    vacations
        .iter()
        .map(|v| {
            format!(
                "{} - {}: {} ({})",
                v.start_date,
                v.end_date,
                v.reason,
                v.status.text(),
            )
        })
        .collect()
}
