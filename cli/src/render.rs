use std::fmt::Write;

use claimdesk::models::map::MapPoint;
use claimdesk::models::search::{ClaimSummary, OccupationSchemes};
use claimdesk::state::SearchSession;
use claimdesk::view::{button_label, list_row, render_json};

/// Status buttons, list title and one row per visible document.
pub fn listing(session: &SearchSession) -> String {
    let mut out = String::new();

    let buttons: Vec<String> = session
        .groups()
        .iter()
        .map(|group| format!("[{}]", button_label(group)))
        .collect();
    if !buttons.is_empty() {
        let _ = writeln!(out, "{}", buttons.join(" "));
    }

    let _ = writeln!(out, "{}", session.title());
    let visible = session.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "  (no documents)");
    }
    for doc in &visible {
        let _ = writeln!(out, "  {}", list_row(doc));
    }
    out
}

pub fn summary(summary: &ClaimSummary) -> String {
    format!(
        concat!(
            "Total claims: {}\n",
            "  approved:   {}\n",
            "  rejected:   {}\n",
            "  in process: {}\n",
            "  delayed:    {}\n",
        ),
        summary.total_claims,
        summary.total_approved,
        summary.total_rejected,
        summary.total_in_process,
        summary.total_delayed,
    )
}

pub fn occupations(occupations: &OccupationSchemes) -> String {
    if occupations.is_empty() {
        return "No occupations recorded for this community.\n".to_string();
    }
    let mut out = String::new();
    for (occupation, schemes) in occupations {
        let _ = writeln!(out, "{occupation} ({} schemes)", schemes.len());
        for scheme in schemes {
            let _ = writeln!(out, "  {}", scheme_line(scheme));
        }
    }
    out
}

/// One line per claim: coordinates, claimant, place and status.
pub fn map_points(points: &[MapPoint]) -> String {
    if points.is_empty() {
        return "No geolocated claims.\n".to_string();
    }
    let mut out = String::new();
    for point in points {
        let _ = writeln!(
            out,
            "{:>9.4} {:>9.4}  {}  [{}] {}",
            point.latitude,
            point.longitude,
            point.claim_person.as_deref().unwrap_or("(unnamed)"),
            point.status.as_deref().unwrap_or("unknown"),
            point.place(),
        );
    }
    out
}

/// Schemes are free-form; show the name when there is one.
fn scheme_line(scheme: &serde_json::Value) -> String {
    match scheme {
        serde_json::Value::String(name) => name.clone(),
        serde_json::Value::Object(map) => match map.get("name").and_then(|n| n.as_str()) {
            Some(name) => name.to_string(),
            None => render_json(scheme).replace('\n', " "),
        },
        other => other.to_string(),
    }
}
