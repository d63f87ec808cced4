use std::collections::HashMap;

use super::*;
use crate::report::schema::Schema;
use crate::report::table::AttemptRow;

fn table(columns: &[&str], rows: &[&[(&str, &str)]]) -> AttemptTable {
    let columns: Vec<String> = columns.iter().map(|column| column.to_string()).collect();
    let rows = rows
        .iter()
        .map(|fields| {
            let fields: HashMap<String, String> = fields
                .iter()
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect();
            AttemptRow::new(fields)
        })
        .collect();
    AttemptTable::new(columns, rows)
}

fn summaries(table: &AttemptTable) -> Vec<QuestionSummary> {
    let schema = Schema::discover(table.columns());
    summarize(table, schema.questions())
}

#[test]
fn counts_only_answered_rows() {
    let table = table(
        &["Response 1", "Right answer 1"],
        &[
            &[("Response 1", "B"), ("Right answer 1", "B")],
            &[("Response 1", "B"), ("Right answer 1", "B")],
            &[("Response 1", "B"), ("Right answer 1", "B")],
            &[("Response 1", ""), ("Right answer 1", "B")],
        ],
    );

    let summary = &summaries(&table)[0];
    assert_eq!(summary.answered, 3);
    assert_eq!(summary.correct_percent, 100.0);
    assert_eq!(summary.wrong_percent, 0.0);
}

#[test]
fn splits_prompt_and_options_and_drops_placeholders() {
    let table = table(
        &["Response 1", "Right answer 1", "Question 1"],
        &[&[
            ("Response 1", "Red"),
            ("Right answer 1", "Red"),
            ("Question 1", "Pick a color: Red; Blue; -"),
        ]],
    );

    let summary = &summaries(&table)[0];
    assert_eq!(summary.prompt, "Pick a color");
    assert_eq!(summary.options, vec!["Red".to_owned(), "Blue".to_owned()]);
    assert_eq!(summary.correct_answer, "Red");
}

#[test]
fn question_with_no_answers_reports_zero_and_hundred() {
    let table = table(
        &["Response 1", "Right answer 1"],
        &[
            &[("Response 1", ""), ("Right answer 1", "A")],
            &[("Response 1", "-"), ("Right answer 1", "A")],
        ],
    );

    let summary = &summaries(&table)[0];
    assert_eq!(summary.answered, 0);
    assert_eq!(summary.correct_percent, 0.0);
    assert_eq!(summary.wrong_percent, 100.0);
}

#[test]
fn text_without_delimiter_falls_back_to_answer_union() {
    let table = table(
        &["Response 1", "Right answer 1", "Question 1"],
        &[
            &[
                ("Response 1", "False"),
                ("Right answer 1", "True"),
                ("Question 1", "The sky is green"),
            ],
            &[
                ("Response 1", "True"),
                ("Right answer 1", "True"),
                ("Question 1", "The sky is green"),
            ],
        ],
    );

    let summary = &summaries(&table)[0];
    assert_eq!(summary.prompt, "The sky is green");
    // Answer-key values come first, then responses, first seen wins.
    assert_eq!(summary.options, vec!["True".to_owned(), "False".to_owned()]);
}

#[test]
fn fallback_options_are_deduplicated_and_capped() {
    let responses = ["A", "B", "C", "D", "E", "F", "G", "A"];
    let rows: Vec<Vec<(&str, &str)>> = responses
        .iter()
        .map(|response| vec![("Response 1", *response), ("Right answer 1", "")])
        .collect();
    let rows: Vec<&[(&str, &str)]> = rows.iter().map(Vec::as_slice).collect();
    let table = table(&["Response 1", "Right answer 1"], &rows);

    let summary = &summaries(&table)[0];
    assert_eq!(summary.correct_answer, "");
    assert_eq!(
        summary.options,
        vec!["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    );
}

#[test]
fn correctness_uses_raw_equality() {
    let table = table(
        &["Response 1", "Right answer 1"],
        &[
            &[("Response 1", "red"), ("Right answer 1", "Red")],
            &[("Response 1", "Red "), ("Right answer 1", "Red")],
        ],
    );

    let summary = &summaries(&table)[0];
    assert_eq!(summary.answered, 2);
    assert_eq!(summary.correct_percent, 0.0);
}

#[test]
fn prompt_falls_back_to_synthetic_label() {
    let table = table(
        &["Response 2", "Right answer 2"],
        &[&[("Response 2", "A"), ("Right answer 2", "A")]],
    );

    let summary = &summaries(&table)[0];
    assert_eq!(summary.index, 2);
    assert_eq!(summary.prompt, "Q2");
    assert_eq!(summary.label(), "Q2");
}

#[test]
fn hardest_ranking_is_stable_and_capped() {
    let make = |index, correct_percent| QuestionSummary {
        index,
        prompt: format!("Q{}", index),
        options: Vec::new(),
        correct_answer: String::new(),
        answered: 4,
        correct_percent,
        wrong_percent: 100.0 - correct_percent,
    };
    let all = vec![make(1, 50.0), make(2, 50.0), make(3, 25.0), make(4, 100.0)];

    let hardest = hardest(&all);
    let indexes: Vec<u32> = hardest.iter().map(|summary| summary.index).collect();
    assert_eq!(indexes, vec![3, 1, 2]);
}

#[test]
fn average_is_zero_without_questions() {
    assert_eq!(average_percent(&[]), 0.0);
}

#[test]
fn percentages_always_sum_to_hundred() {
    let table = table(
        &["Response 1", "Right answer 1"],
        &[
            &[("Response 1", "A"), ("Right answer 1", "A")],
            &[("Response 1", "B"), ("Right answer 1", "A")],
            &[("Response 1", "C"), ("Right answer 1", "A")],
        ],
    );

    let summary = &summaries(&table)[0];
    assert_eq!(summary.correct_percent, 33.33);
    assert_eq!(summary.wrong_percent, 66.67);
    assert!((summary.correct_percent + summary.wrong_percent - 100.0).abs() < 0.01);
}
