use itertools::Itertools;

use super::schema::QuestionColumns;
use super::table::{is_blank, AttemptTable};

#[cfg(test)]
mod tests;

pub const HARDEST_COUNT: usize = 3;

// Free-text questions can produce an unbounded answer set; cap the fallback
// option list at something a reader can scan.
const MAX_FALLBACK_OPTIONS: usize = 6;

const PROMPT_DELIMITER: char = ':';
const OPTION_DELIMITER: char = ';';

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionSummary {
    pub index: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub answered: usize,
    pub correct_percent: f64,
    pub wrong_percent: f64,
}

impl QuestionSummary {
    pub fn label(&self) -> String {
        format!("Q{}", self.index)
    }
}

pub fn summarize(table: &AttemptTable, questions: &[QuestionColumns]) -> Vec<QuestionSummary> {
    questions
        .iter()
        .map(|columns| summarize_question(table, columns))
        .collect()
}

/// Lowest correct percentage first; ties keep ascending index order.
pub fn hardest(summaries: &[QuestionSummary]) -> Vec<QuestionSummary> {
    summaries
        .iter()
        .sorted_by(|a, b| a.correct_percent.total_cmp(&b.correct_percent))
        .take(HARDEST_COUNT)
        .cloned()
        .collect()
}

pub fn average_percent(summaries: &[QuestionSummary]) -> f64 {
    if summaries.is_empty() {
        return 0.0;
    }
    let total: f64 = summaries.iter().map(|summary| summary.correct_percent).sum();
    round2(total / summaries.len() as f64)
}

fn summarize_question(table: &AttemptTable, columns: &QuestionColumns) -> QuestionSummary {
    let text = columns
        .question_text
        .as_deref()
        .and_then(|column| first_value(table, column));
    let (prompt, mut options) = match text.as_deref() {
        Some(text) => split_prompt(text),
        None => (format!("Q{}", columns.index), Vec::new()),
    };
    if options.is_empty() {
        options = fallback_options(table, columns);
    }

    let correct_answer = first_value(table, &columns.right_answer).unwrap_or_default();

    let mut answered = 0;
    let mut correct = 0;
    for row in table.rows() {
        let response = match row.value(&columns.response) {
            Some(value) if !is_blank(value) => value,
            _ => continue,
        };
        answered += 1;
        // Raw equality: case and whitespace differences count as wrong.
        if row.value(&columns.right_answer) == Some(response) {
            correct += 1;
        }
    }

    let correct_percent = if answered == 0 {
        0.0
    } else {
        round2(100.0 * correct as f64 / answered as f64)
    };
    let wrong_percent = round2(100.0 - correct_percent);

    QuestionSummary {
        index: columns.index,
        prompt,
        options,
        correct_answer,
        answered,
        correct_percent,
        wrong_percent,
    }
}

// Precondition: a question's text and answer key do not vary across rows, so
// the first non-blank value is representative of the whole column.
fn first_value(table: &AttemptTable, column: &str) -> Option<String> {
    table
        .rows()
        .iter()
        .filter_map(|row| row.value(column))
        .map(str::trim)
        .find(|value| !is_blank(value))
        .map(str::to_owned)
}

fn split_prompt(text: &str) -> (String, Vec<String>) {
    match text.split_once(PROMPT_DELIMITER) {
        Some((prompt, rest)) => {
            let options = rest
                .split(OPTION_DELIMITER)
                .map(str::trim)
                .filter(|option| !is_blank(option))
                .map(str::to_owned)
                .collect();
            (prompt.trim().to_owned(), options)
        }
        None => (text.to_owned(), Vec::new()),
    }
}

// When the question text carries no option list, the distinct values seen
// across the answer key and responses stand in for one.
fn fallback_options(table: &AttemptTable, columns: &QuestionColumns) -> Vec<String> {
    let right_answers = table
        .rows()
        .iter()
        .filter_map(|row| row.value(&columns.right_answer));
    let responses = table
        .rows()
        .iter()
        .filter_map(|row| row.value(&columns.response));

    right_answers
        .chain(responses)
        .map(str::trim)
        .filter(|value| !is_blank(value))
        .map(str::to_owned)
        .unique()
        .take(MAX_FALLBACK_OPTIONS)
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
