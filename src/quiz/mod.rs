pub mod questions;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl Question {
    pub fn new(prompt: String, options: Vec<String>, correct: usize) -> Self {
        Self {
            prompt,
            options,
            correct,
        }
    }
}

/// Proficiency tier assigned by the placement test. A chat keeps exactly one
/// current level; it only changes when another test is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn from_score(score: u32) -> Self {
        match score {
            score if score >= 2 => Level::Advanced,
            1 => Level::Intermediate,
            _ => Level::Beginner,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Level::Beginner => "Новичок",
            Level::Intermediate => "Средний",
            Level::Advanced => "Продвинутый",
        }
        .to_string()
    }
}

/// Result of answering the last question.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Completion {
    pub score: u32,
    pub level: Level,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Session {
    questions: Vec<Question>,
    current_question: usize,
    score: u32,
    active: bool,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_question: 0,
            score: 0,
            active: false,
        }
    }

    /// Begins the test from the first question. Starting again mid-session
    /// discards any progress without confirmation.
    pub fn start(&mut self) {
        self.current_question = 0;
        self.score = 0;
        self.active = true;
    }

    /// Records the selected option index for the current question. Any index
    /// other than the correct one counts as a wrong answer, out-of-range
    /// included. Returns the result once the last question is answered,
    /// `None` while the test continues or when no test is running.
    pub fn answer(&mut self, selected: usize) -> Option<Completion> {
        if !self.active {
            return None;
        }
        let correct = self.questions.get(self.current_question)?.correct;
        if selected == correct {
            self.score += 1;
        }

        if self.current_question + 1 < self.questions.len() {
            self.current_question += 1;
            return None;
        }

        let completion = Completion {
            score: self.score,
            level: Level::from_score(self.score),
        };
        self.current_question = 0;
        self.score = 0;
        self.active = false;
        Some(completion)
    }

    pub fn current(&self) -> Option<&Question> {
        if !self.active {
            return None;
        }
        self.questions.get(self.current_question)
    }

    /// 1-based question number and the total, for the progress line.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_question + 1, self.questions.len())
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_session() -> Session {
        let mut session = Session::new(questions::placement_questions());
        session.start();
        session
    }

    #[test]
    fn start_resets_progress_even_mid_session() {
        let mut session = started_session();
        assert!(session.answer(1).is_none());
        assert_eq!(session.score(), 1);

        session.start();
        assert!(session.is_active());
        assert_eq!(session.score(), 0);
        assert_eq!(session.progress(), (1, 3));
    }

    #[test]
    fn all_correct_answers_give_advanced() {
        let mut session = started_session();
        assert!(session.answer(1).is_none());
        assert!(session.answer(1).is_none());
        let completion = session.answer(1).expect("last answer finishes the test");
        assert_eq!(
            completion,
            Completion {
                score: 3,
                level: Level::Advanced
            }
        );
    }

    #[test]
    fn two_correct_answers_are_still_advanced() {
        let mut session = started_session();
        session.answer(1);
        session.answer(1);
        let completion = session.answer(0).unwrap();
        assert_eq!(completion.level, Level::Advanced);
        assert_eq!(completion.score, 2);
    }

    #[test]
    fn single_correct_answer_gives_intermediate() {
        let mut session = started_session();
        session.answer(1);
        session.answer(0);
        let completion = session.answer(3).unwrap();
        assert_eq!(completion.level, Level::Intermediate);
        assert_eq!(completion.score, 1);
    }

    #[test]
    fn no_correct_answers_give_beginner() {
        let mut session = started_session();
        session.answer(0);
        session.answer(2);
        let completion = session.answer(0).unwrap();
        assert_eq!(completion.level, Level::Beginner);
        assert_eq!(completion.score, 0);
    }

    #[test]
    fn out_of_range_answers_count_as_wrong_and_advance() {
        let mut session = started_session();
        assert!(session.answer(17).is_none());
        assert_eq!(session.progress(), (2, 3));
        session.answer(usize::MAX);
        let completion = session.answer(99).unwrap();
        assert_eq!(completion.level, Level::Beginner);
    }

    #[test]
    fn completion_returns_session_to_not_started() {
        let mut session = started_session();
        session.answer(1);
        session.answer(0);
        session.answer(1);

        assert!(!session.is_active());
        assert_eq!(session.score(), 0);
        assert_eq!(session.progress(), (1, 3));
        assert!(session.current().is_none());
    }

    #[test]
    fn answer_without_start_is_a_noop() {
        let mut session = Session::new(questions::placement_questions());
        assert!(session.answer(1).is_none());
        assert_eq!(session.score(), 0);
        assert!(!session.is_active());
    }

    #[test]
    fn current_question_follows_progress() {
        let mut session = started_session();
        let first = session.current().unwrap().prompt.clone();
        session.answer(1);
        let second = session.current().unwrap().prompt.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(Level::from_score(0), Level::Beginner);
        assert_eq!(Level::from_score(1), Level::Intermediate);
        assert_eq!(Level::from_score(2), Level::Advanced);
        assert_eq!(Level::from_score(3), Level::Advanced);
    }
}
