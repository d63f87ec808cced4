use anyhow::{Context, Result};
use std::io;
use std::io::Write;

use super::{Block, DocumentSink, Severity};
use crate::error::ReportError;
use crate::report::questions::QuestionSummary;
use crate::report::students::StudentRecord;

const BAR_WIDTH: usize = 24;

pub struct TextDocument<W: Write> {
    writer: W,
}

impl<W: Write> TextDocument<W> {
    pub fn new(writer: W) -> Self {
        TextDocument { writer }
    }

    fn write_block(&mut self, block: &Block) -> io::Result<()> {
        match block {
            Block::Title(text) => {
                writeln!(self.writer, "{}", "=".repeat(text.len()))?;
                writeln!(self.writer, "{}", text)?;
                writeln!(self.writer, "{}", "=".repeat(text.len()))
            }
            Block::Meta(text) => writeln!(self.writer, "{}", text),
            Block::Heading(text) => writeln!(self.writer, "\n## {}", text),
            Block::Text(text) => writeln!(self.writer, "{}", text),
            Block::QuestionTable(questions) => self.write_question_table(questions),
            Block::StudentTable(students) => self.write_student_table(students),
        }
    }

    fn write_question_table(&mut self, questions: &[QuestionSummary]) -> io::Result<()> {
        for question in questions {
            writeln!(self.writer, "{}. {}", question.label(), question.prompt)?;
            for option in &question.options {
                let marker = if !question.correct_answer.is_empty()
                    && option.trim() == question.correct_answer.trim()
                {
                    "*"
                } else {
                    "-"
                };
                writeln!(self.writer, "   {} {}", marker, option)?;
            }
            writeln!(
                self.writer,
                "   answered {:>3}  correct {:>6.2}%  wrong {:>6.2}%  {}",
                question.answered,
                question.correct_percent,
                question.wrong_percent,
                bar(question.correct_percent)
            )?;
        }
        Ok(())
    }

    fn write_student_table(&mut self, students: &[StudentRecord]) -> io::Result<()> {
        for student in students {
            let grade = match student.grade {
                Some(grade) => format!("{:.2}", grade),
                None => "-".to_owned(),
            };
            // The leading marker is the row-level emphasis for students who
            // never attempted or never finished.
            let marker = if student.not_attempted { "!" } else { " " };
            writeln!(
                self.writer,
                "{} {} ({})  {}  grade {}  {}  {}",
                marker,
                student.name,
                student.username,
                or_placeholder(&student.email),
                grade,
                or_placeholder(&student.status),
                or_placeholder(&student.duration)
            )?;
        }
        Ok(())
    }
}

impl<W: Write> DocumentSink for TextDocument<W> {
    fn append(&mut self, block: Block) -> Result<()> {
        self.write_block(&block).context(ReportError::OutputUnavailable)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context(ReportError::OutputUnavailable)
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let tier = match Severity::from_percent(percent) {
        Severity::Green => "green",
        Severity::Orange => "orange",
        Severity::Red => "red",
    };
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        tier
    )
}
