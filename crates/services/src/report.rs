use chrono::{DateTime, Utc};
use serde::Serialize;

use whys_core::model::Session;

/// One numbered question/answer line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportStep {
    pub number: usize,
    pub question: String,
    pub answer: String,
}

/// Read-only transcript of a session, for display and copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub problem: String,
    pub steps: Vec<ReportStep>,
    pub root_cause: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Report {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let steps = session
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| ReportStep {
                number: i + 1,
                question: step.question().to_string(),
                answer: step.answer().to_string(),
            })
            .collect();

        Self {
            problem: session.problem_text().to_string(),
            steps,
            root_cause: session.root_cause().map(str::to_string),
            started_at: session.started_at(),
            completed_at: session.completed_at(),
        }
    }

    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![format!("# Five Whys: {}", self.problem), String::new()];
        for step in &self.steps {
            lines.push(format!("{}. **{}**", step.number, step.question));
            if step.answer.is_empty() {
                lines.push("   _(unanswered)_".to_string());
            } else {
                lines.push(format!("   {}", step.answer));
            }
        }
        if let Some(root) = &self.root_cause {
            lines.push(String::new());
            lines.push(format!("**Root cause:** {root}"));
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use whys_core::model::InputText;
    use whys_core::time::fixed_now;

    use super::*;

    #[test]
    fn markdown_marks_open_step_as_unanswered() {
        let session = Session::start(&InputText::parse("Server is slow").unwrap(), fixed_now());
        let md = Report::from_session(&session).to_markdown();
        assert!(md.starts_with("# Five Whys: Server is slow\n"));
        assert!(md.contains("1. **Why is \"Server is slow\" happening?**"));
        assert!(md.contains("_(unanswered)_"));
        assert!(!md.contains("Root cause"));
    }

    #[test]
    fn markdown_lists_every_answer_then_root_cause() {
        let now = fixed_now();
        let mut session = Session::start(&InputText::parse("Server is slow").unwrap(), now);
        for answer in ["Disk full", "Logs grow", "No rotation", "No config", "No review"] {
            session
                .answer_current(&InputText::parse(answer).unwrap(), now)
                .unwrap();
        }
        let md = Report::from_session(&session).to_markdown();
        let expected = "# Five Whys: Server is slow\n\n\
            1. **Why is \"Server is slow\" happening?**\n   Disk full\n\
            2. **Why is \"Disk full\" happening?**\n   Logs grow\n\
            3. **Why is \"Logs grow\" happening?**\n   No rotation\n\
            4. **Why is \"No rotation\" happening?**\n   No config\n\
            5. **Why is \"No config\" happening?**\n   No review\n\
            \n**Root cause:** No review\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn json_carries_root_cause_and_timestamps() {
        let now = fixed_now();
        let mut session = Session::start(&InputText::parse("Server is slow").unwrap(), now);
        for answer in ["Disk full", "Logs grow", "No rotation", "No config", "No review"] {
            session
                .answer_current(&InputText::parse(answer).unwrap(), now)
                .unwrap();
        }
        let json = Report::from_session(&session).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root_cause"], "No review");
        assert_eq!(value["steps"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["started_at"], "2023-11-14T22:13:20Z");
    }
}
