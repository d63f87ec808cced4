use anyhow::*;
use chrono::{DateTime, Local};
use log::{debug, info};

pub mod questions;
pub mod schema;
pub mod students;
pub mod table;


use self::questions::QuestionSummary;
use self::schema::Schema;
use self::students::{CompletionStats, StudentRecord};
use self::table::AttemptTable;
use crate::output::{Block, DocumentSink};

pub struct Report {
    pub generated: DateTime<Local>,
    pub participants: usize,
    pub questions: Vec<QuestionSummary>,
    pub hardest: Vec<QuestionSummary>,
    pub average_percent: f64,
    pub completion: CompletionStats,
    pub students: Vec<StudentRecord>,
}

impl Report {
    pub fn build(table: &AttemptTable) -> Report {
        let schema = Schema::discover(table.columns());
        debug!("Discovered {} question column groups", schema.questions().len());

        let questions = questions::summarize(table, schema.questions());
        let hardest = questions::hardest(&questions);
        let average_percent = questions::average_percent(&questions);
        let (students, completion) = students::resolve(table, &schema);
        info!(
            "Summarized {} questions and {} students across {} attempts",
            questions.len(),
            students.len(),
            table.len()
        );

        Report {
            generated: Local::now(),
            participants: table.len(),
            questions,
            hardest,
            average_percent,
            completion,
            students,
        }
    }
}

pub fn emit(report: &Report, sink: &mut impl DocumentSink) -> Result<()> {
    sink.append(Block::Title("Quiz Summary Report".to_owned()))?;
    sink.append(Block::Meta(format!(
        "Generated: {}",
        report.generated.format("%Y-%m-%d %H:%M")
    )))?;
    sink.append(Block::Text(format!(
        "Total participants: {}",
        report.participants
    )))?;
    sink.append(Block::Text(format!(
        "Average score across all questions: {}%",
        report.average_percent
    )))?;

    sink.append(Block::Heading("Hardest Questions".to_owned()))?;
    for question in &report.hardest {
        sink.append(Block::Text(format!(
            "{}: {}% correct",
            question.label(),
            question.correct_percent
        )))?;
    }

    sink.append(Block::Heading("Question Performance".to_owned()))?;
    sink.append(Block::QuestionTable(report.questions.clone()))?;

    sink.append(Block::Heading("Student Results".to_owned()))?;
    sink.append(Block::Text(format!(
        "Students completed: {} / {} ({}%)",
        report.completion.completed, report.completion.enrolled, report.completion.percent
    )))?;
    sink.append(Block::StudentTable(report.students.clone()))?;

    sink.append(Block::Meta("Generated by Quiz-To-Reports".to_owned()))?;
    sink.finish()
}
