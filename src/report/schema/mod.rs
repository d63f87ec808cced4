use lazy_static::lazy_static;
use regex::Regex;


pub const USERNAME_COLUMN: &str = "Username";
pub const FIRST_NAME_COLUMN: &str = "First name";
pub const LAST_NAME_COLUMN: &str = "Last name";
pub const EMAIL_COLUMN: &str = "Email address";
pub const STATUS_COLUMN: &str = "Status";
pub const DURATION_COLUMN: &str = "Duration";

// The grade column carries the maximum mark in its name (eg "Grade/100.00"),
// so it is resolved by prefix rather than exact match.
const GRADE_COLUMN_PREFIX: &str = "Grade";

lazy_static! {
    static ref RESPONSE_COLUMN_REGEX: Regex = Regex::new(r"^Response (\S+)$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionColumns {
    pub index: u32,
    pub response: String,
    pub right_answer: String,
    pub question_text: Option<String>,
}

/// Mapping from semantic field names to the canonical columns of one export,
/// built once so the aggregation passes never probe column names themselves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schema {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub duration: Option<String>,
    pub grade: Option<String>,
    questions: Vec<QuestionColumns>,
}

impl Schema {
    pub fn discover(columns: &[String]) -> Schema {
        // N is the largest integer suffix on any response column. Suffixes
        // that do not parse as integers belong to unrelated columns and are
        // skipped, not errors.
        let max_index = columns
            .iter()
            .filter_map(|column| RESPONSE_COLUMN_REGEX.captures(column))
            .filter_map(|captures| captures[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        let mut questions = Vec::new();
        for index in 1..=max_index {
            let response = format!("Response {}", index);
            let right_answer = format!("Right answer {}", index);
            if !columns.contains(&response) || !columns.contains(&right_answer) {
                continue;
            }
            let question_text =
                Some(format!("Question {}", index)).filter(|column| columns.contains(column));
            questions.push(QuestionColumns {
                index,
                response,
                right_answer,
                question_text,
            });
        }

        let find = |name: &str| columns.iter().find(|column| column.as_str() == name).cloned();
        Schema {
            username: find(USERNAME_COLUMN),
            first_name: find(FIRST_NAME_COLUMN),
            last_name: find(LAST_NAME_COLUMN),
            email: find(EMAIL_COLUMN),
            status: find(STATUS_COLUMN),
            duration: find(DURATION_COLUMN),
            grade: columns
                .iter()
                .find(|column| column.starts_with(GRADE_COLUMN_PREFIX))
                .cloned(),
            questions,
        }
    }

    pub fn questions(&self) -> &[QuestionColumns] {
        &self.questions
    }
}
