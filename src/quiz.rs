use tracing::{debug, info};
use crate::models::QuizQuestion;

/// Tier thresholds assume a ten-question quiz regardless of the bank size.
const TOP_TIER: usize = 8;
const MIDDLE_TIER: usize = 5;

/// The built-in question bank.
pub fn default_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "What should you do if you receive an email asking for your password?",
            &["A) Reply with your password", "B) Delete the email", "C) Report the email as phishing", "D) Ignore it"],
            "C",
        ),
        QuizQuestion::new(
            "True or False: It's safe to use the same password for multiple accounts.",
            &["A) True", "B) False"],
            "B",
        ),
    ]
}

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizProgress {
    /// More questions remain; lines hold feedback plus the next question.
    Next(Vec<String>),
    /// The last question was answered; lines hold feedback plus the summary.
    Finished { score: usize, total: usize, lines: Vec<String> },
}

/// A quiz in progress. Dropped by the session once it finishes.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
}

impl QuizSession {
    /// Starts a quiz over a fixed question list and returns it along with the
    /// lines that introduce the first question.
    pub fn start(questions: Vec<QuizQuestion>) -> (Self, Vec<String>) {
        let session = QuizSession { questions, current_index: 0, score: 0 };
        info!(total = session.total(), "quiz started");
        let mut lines = vec!["🎯 Cybersecurity Quiz Started!".to_string()];
        match session.question_lines() {
            Some(q) => lines.extend(q),
            None => lines.push(session.summary_line()),
        }
        (session, lines)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Scores `answer` against the current question and advances.
    ///
    /// Anything that does not match the correct letter after trimming and
    /// upper-casing counts as wrong.
    pub fn submit_answer(&mut self, answer: &str) -> QuizProgress {
        let mut lines = Vec::new();
        if let Some(q) = self.questions.get(self.current_index) {
            let correct = answer.trim().to_uppercase() == q.correct_answer;
            if correct {
                self.score += 1;
                lines.push("✅ Correct!".to_string());
            } else {
                lines.push(format!("❌ Incorrect. The correct answer was {}.", q.correct_answer));
            }
            debug!(index = self.current_index, correct, "quiz answer scored");
            self.current_index += 1;
        }

        match self.question_lines() {
            Some(next) => {
                lines.extend(next);
                QuizProgress::Next(lines)
            }
            None => {
                info!(score = self.score, total = self.total(), "quiz completed");
                lines.push(self.summary_line());
                lines.push(tier_message(self.score).to_string());
                QuizProgress::Finished { score: self.score, total: self.total(), lines }
            }
        }
    }

    fn question_lines(&self) -> Option<Vec<String>> {
        let q = self.questions.get(self.current_index)?;
        let mut lines = vec![format!("Q{}: {}", self.current_index + 1, q.prompt)];
        lines.extend(q.options.iter().cloned());
        lines.push("👉 Please answer with the letter (e.g., A, B, C, D).".to_string());
        Some(lines)
    }

    fn summary_line(&self) -> String {
        format!("🎉 Quiz Completed! Final Score: {}/{}", self.score, self.total())
    }
}

/// Closing message for a final score.
pub fn tier_message(score: usize) -> &'static str {
    if score >= TOP_TIER {
        "🏆 Excellent work! You're a cybersecurity pro!"
    } else if score >= MIDDLE_TIER {
        "👍 Not bad! Keep practicing to improve your knowledge."
    } else {
        "📘 Keep learning to stay safe online. You're on the right path!"
    }
}
