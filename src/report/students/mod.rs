use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::schema::Schema;
use super::table::{AttemptRow, AttemptTable};


// System accounts that must not appear in the enrollment count or listing.
const EXCLUDED_IDENTITIES: &[&str] = &["admin", "rajithsanjaya"];

const FINISHED_STATUS: &str = "finished";

// Sorts below any real grade, so an ungraded attempt never wins.
const MISSING_GRADE: f64 = -1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub username: String,
    pub email: String,
    pub grade: Option<f64>,
    pub status: String,
    pub duration: String,
    pub not_attempted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionStats {
    pub enrolled: usize,
    pub completed: usize,
    pub percent: f64,
}

struct BestAttempt<'a> {
    row: &'a AttemptRow,
    grade: f64,
}

/// Collapses attempts to one record per identity (trimmed, lowercased
/// username) and counts completion against the enrollment baseline.
pub fn resolve(table: &AttemptTable, schema: &Schema) -> (Vec<StudentRecord>, CompletionStats) {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, BestAttempt> = HashMap::new();

    for row in table.rows() {
        let username = cell(row, schema.username.as_deref()).trim();
        if username.is_empty() {
            continue;
        }
        let identity = username.to_lowercase();
        if EXCLUDED_IDENTITIES.contains(&identity.as_str()) {
            continue;
        }

        let grade = parse_grade(cell(row, schema.grade.as_deref()));
        match best.entry(identity) {
            Entry::Occupied(mut entry) => {
                // Strictly greater: ties keep the first-seen attempt.
                let attempt = entry.get_mut();
                if grade > attempt.grade {
                    attempt.row = row;
                    attempt.grade = grade;
                }
            }
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(BestAttempt { row, grade });
            }
        }
    }

    let enrolled = order.len();
    let mut completed = 0;
    let mut records = Vec::with_capacity(enrolled);
    for identity in &order {
        let attempt = &best[identity];
        let status = cell(attempt.row, schema.status.as_deref()).trim();
        if status.eq_ignore_ascii_case(FINISHED_STATUS) || attempt.grade >= 0.0 {
            completed += 1;
        }
        records.push(build_record(attempt, schema));
    }

    // Graded records first, highest grade on top; the ungraded tail and any
    // grade ties keep first-seen order.
    records.sort_by(|a, b| {
        b.grade.is_some().cmp(&a.grade.is_some()).then(
            b.grade
                .unwrap_or(MISSING_GRADE)
                .total_cmp(&a.grade.unwrap_or(MISSING_GRADE)),
        )
    });

    let percent = if enrolled == 0 {
        0.0
    } else {
        round1(100.0 * completed as f64 / enrolled as f64)
    };

    (
        records,
        CompletionStats {
            enrolled,
            completed,
            percent,
        },
    )
}

fn build_record(attempt: &BestAttempt, schema: &Schema) -> StudentRecord {
    let row = attempt.row;
    let username = cell(row, schema.username.as_deref()).trim().to_owned();
    let first_name = cell(row, schema.first_name.as_deref()).trim();
    let last_name = cell(row, schema.last_name.as_deref()).trim();

    let full_name = format!("{} {}", first_name, last_name);
    let full_name = full_name.trim();
    let name = if full_name.is_empty() {
        username.clone()
    } else {
        full_name.to_owned()
    };

    let status = cell(row, schema.status.as_deref()).trim().to_owned();
    let grade = if attempt.grade < 0.0 {
        None
    } else {
        Some(attempt.grade)
    };
    let not_attempted = grade.is_none() || !status.eq_ignore_ascii_case(FINISHED_STATUS);

    StudentRecord {
        name,
        username,
        email: cell(row, schema.email.as_deref()).trim().to_owned(),
        grade,
        status,
        duration: cell(row, schema.duration.as_deref()).trim().to_owned(),
        not_attempted,
    }
}

fn cell<'a>(row: &'a AttemptRow, column: Option<&str>) -> &'a str {
    column.and_then(|column| row.value(column)).unwrap_or("")
}

fn parse_grade(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(grade) if !grade.is_nan() => grade,
        _ => MISSING_GRADE,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
