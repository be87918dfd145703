use crate::domain::model::{Diagnostic, DiagnosticKind, RosterRow};
use crate::utils::error::{EtlError, Result};

/// Rows parsed out of one file plus the per-row problems found on the way.
#[derive(Debug, Clone)]
pub struct RowSet {
    pub rows: Vec<RosterRow>,
    pub dropped: Vec<Diagnostic>,
}

/// Parse one CSV export into ordered roster rows.
///
/// Both required columns are located through their accepted spellings; if
/// either has no match in the header the whole file is rejected. Rows whose
/// team number does not coerce to an integer are dropped individually and
/// reported. A blank member name is kept here; the aggregator filters it.
pub fn load_rows(
    data: &[u8],
    team_columns: &[String],
    member_columns: &[String],
    label: &str,
) -> Result<RowSet> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let headers = reader.headers()?.clone();

    let team_idx = resolve_column(&headers, team_columns).ok_or_else(|| {
        missing_column(label, "team number", team_columns)
    })?;
    let member_idx = resolve_column(&headers, member_columns).ok_or_else(|| {
        missing_column(label, "member name", member_columns)
    })?;

    let mut rows = Vec::new();
    let mut dropped = Vec::new();

    for (index, record) in reader.records().enumerate() {
        // 1-based file line, counting the header row.
        let line = index + 2;

        let record = match record {
            Ok(record) => record,
            Err(err) => {
                dropped.push(Diagnostic::new(
                    DiagnosticKind::InvalidRow,
                    format!("'{}' line {}: unreadable row ({}); dropped", label, line, err),
                ));
                continue;
            }
        };

        let raw_team = record.get(team_idx).unwrap_or("");
        let Some(equipo) = parse_team_id(raw_team) else {
            dropped.push(Diagnostic::new(
                DiagnosticKind::InvalidRow,
                format!(
                    "'{}' line {}: team number '{}' is not an integer; dropped",
                    label,
                    line,
                    raw_team.trim()
                ),
            ));
            continue;
        };

        let alumno = record.get(member_idx).map(|name| name.to_string());
        rows.push(RosterRow { equipo, alumno });
    }

    Ok(RowSet { rows, dropped })
}

/// Find the index of the first header matching any accepted spelling.
/// Headers are compared trimmed and case-insensitively.
pub fn resolve_column(headers: &csv::StringRecord, spellings: &[String]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().to_lowercase();
        spellings
            .iter()
            .any(|spelling| header == spelling.trim().to_lowercase())
    })
}

fn missing_column(label: &str, field: &str, spellings: &[String]) -> EtlError {
    EtlError::ProcessingError {
        message: format!(
            "'{}' has no {} column (accepted spellings: {})",
            label,
            field,
            spellings.join(", ")
        ),
    }
}

/// Team numbers arrive as integer text, but spreadsheet exports sometimes
/// float-format them ("3.0") when the column carried blanks.
fn parse_team_id(raw: &str) -> Option<i64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e18 => Some(f as i64),
        _ => None,
    }
}
