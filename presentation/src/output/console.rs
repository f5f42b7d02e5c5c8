//! Console output formatter for the index and detail surfaces

use colored::Colorize;
use polls_domain::{Question, QuestionId};

/// Timestamp layout used in rendered listings
const DATE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Formats questions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the index surface: published questions newest first
    ///
    /// Renders the literal "No polls are available." when the list is
    /// empty.
    pub fn format_index(title: &str, questions: &[Question]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", format!("=== {} ===", title).cyan().bold()));

        if questions.is_empty() {
            output.push_str("No polls are available.\n");
            return output;
        }

        for question in questions {
            output.push_str(&format!(
                "{} {}  {}\n",
                format!("[{}]", question.id()).yellow().bold(),
                question.question_text(),
                format!("(published {})", question.pub_date().format(DATE_LAYOUT)).dimmed()
            ));
        }

        output
    }

    /// Format the index surface as JSON
    pub fn format_index_json(questions: &[Question]) -> String {
        serde_json::to_string_pretty(questions).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the detail surface for a single published question
    pub fn format_detail(question: &Question) -> String {
        format!(
            "{}\n{}\n",
            question.question_text().bold(),
            format!("Published {}", question.pub_date().format(DATE_LAYOUT)).dimmed()
        )
    }

    /// Format a single question as JSON
    pub fn format_detail_json(question: &Question) -> String {
        serde_json::to_string_pretty(question).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the not-found surface
    ///
    /// Used for absent ids and future-dated questions alike; the two
    /// cases must render identically.
    pub fn format_not_found(id: QuestionId) -> String {
        format!("{} Question {} not found.\n", "Not found:".red().bold(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn question(id: u64, text: &str) -> Question {
        Question::new(QuestionId::new(id), text, fixed_now())
    }

    #[test]
    fn test_empty_index_shows_no_polls_message() {
        let output = ConsoleFormatter::format_index("Polls", &[]);
        assert!(output.contains("No polls are available."));
    }

    #[test]
    fn test_index_lists_question_text() {
        let questions = vec![question(1, "Past question.")];
        let output = ConsoleFormatter::format_index("Polls", &questions);
        assert!(output.contains("Past question."));
        assert!(!output.contains("No polls are available."));
    }

    #[test]
    fn test_index_preserves_given_order() {
        let questions = vec![question(2, "Newest."), question(1, "Oldest.")];
        let output = ConsoleFormatter::format_index("Polls", &questions);
        let newest = output.find("Newest.").unwrap();
        let oldest = output.find("Oldest.").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_index_json_round_trips() {
        let questions = vec![question(1, "Past question.")];
        let json = ConsoleFormatter::format_index_json(&questions);
        let parsed: Vec<Question> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, questions);
    }

    #[test]
    fn test_detail_contains_question_text() {
        let output = ConsoleFormatter::format_detail(&question(1, "Past question."));
        assert!(output.contains("Past question."));
        assert!(output.contains("Published 2024-06-15"));
    }

    #[test]
    fn test_not_found_names_the_id() {
        let output = ConsoleFormatter::format_not_found(QuestionId::new(7));
        assert!(output.contains("Question 7 not found."));
    }
}
