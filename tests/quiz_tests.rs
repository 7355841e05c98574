use cyberbot::models::QuizQuestion;
use cyberbot::quiz::{default_questions, tier_message, QuizProgress, QuizSession};

#[test]
fn test_start_shows_first_question() {
    let (quiz, lines) = QuizSession::start(default_questions());
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.score(), 0);
    assert_eq!(lines[0], "🎯 Cybersecurity Quiz Started!");
    assert!(lines[1].starts_with("Q1: "));
    assert_eq!(lines[2], "A) Reply with your password");
    assert!(lines.last().unwrap().contains("answer with the letter"));
}

#[test]
fn test_all_correct_scores_question_count() {
    let questions = default_questions();
    let total = questions.len();
    let answers: Vec<String> = questions.iter().map(|q| q.correct_answer.clone()).collect();
    let (mut quiz, _) = QuizSession::start(questions);

    let mut last = None;
    for a in answers {
        last = Some(quiz.submit_answer(&a.to_lowercase()));
    }
    match last.unwrap() {
        QuizProgress::Finished { score, total: t, lines } => {
            assert_eq!(score, total);
            assert_eq!(t, total);
            assert!(lines.contains(&format!("🎉 Quiz Completed! Final Score: {}/{}", total, total)));
        }
        other => panic!("quiz should be finished, got {:?}", other),
    }
}

#[test]
fn test_one_wrong_one_right() {
    let (mut quiz, _) = QuizSession::start(default_questions());
    match quiz.submit_answer("A") {
        QuizProgress::Next(lines) => {
            assert_eq!(lines[0], "❌ Incorrect. The correct answer was C.");
            assert!(lines[1].starts_with("Q2: "));
        }
        other => panic!("expected next question, got {:?}", other),
    }
    match quiz.submit_answer("  b ") {
        QuizProgress::Finished { score, total, lines } => {
            assert_eq!((score, total), (1, 2));
            assert_eq!(lines[0], "✅ Correct!");
            // Thresholds are absolute, so one point lands in the lowest tier.
            assert_eq!(lines.last().unwrap(), tier_message(1));
        }
        other => panic!("expected finish, got {:?}", other),
    }
}

#[test]
fn test_tiers_are_literal() {
    assert!(tier_message(8).starts_with("🏆"));
    assert!(tier_message(10).starts_with("🏆"));
    assert!(tier_message(5).starts_with("👍"));
    assert!(tier_message(7).starts_with("👍"));
    assert!(tier_message(4).starts_with("📘"));
    assert!(tier_message(2).starts_with("📘"));
}

#[test]
fn test_garbage_answer_counts_as_wrong() {
    let (mut quiz, _) = QuizSession::start(vec![QuizQuestion::new("Q?", &["A) x", "B) y"], "b")]);
    match quiz.submit_answer("banana") {
        QuizProgress::Finished { score, .. } => assert_eq!(score, 0),
        other => panic!("expected finish, got {:?}", other),
    }
    assert!(quiz.is_finished());
}
