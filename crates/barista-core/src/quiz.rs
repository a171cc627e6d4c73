use barista_types::{AdvanceTicket, OptionMark, OptionView, QuestionView, QuizView};

use crate::error::ConfigError;

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl QuizItem {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, ConfigError> {
        let prompt = prompt.into();

        if options.len() < 2 {
            return Err(ConfigError::TooFewOptions {
                prompt,
                count: options.len(),
            });
        }

        if correct_index >= options.len() {
            return Err(ConfigError::CorrectIndexOutOfRange {
                prompt,
                index: correct_index,
                count: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_index,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InQuestion,
    /// Answer shown, waiting for the advance ticket
    AnswerEvaluated,
    Finished,
}

/// State of a single quiz run
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub current_index: usize,
    pub score: u32,
    pub answered: bool,
    /// Marks for the options of the displayed question
    pub marks: Vec<OptionMark>,
    generation: u64,
}

impl QuizSession {
    fn new(generation: u64, option_count: usize) -> Self {
        Self {
            current_index: 0,
            score: 0,
            answered: false,
            marks: vec![OptionMark::Unmarked; option_count],
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a selection that was accepted
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub correct: bool,
    /// Question with marks applied
    pub view: QuizView,
    /// Redeem with [`QuizEngine::advance`] once the answer has been on screen long enough
    pub ticket: AdvanceTicket,
}

pub struct QuizEngine {
    items: Vec<QuizItem>,
    session: Option<QuizSession>,
    phase: QuizPhase,
    generation: u64,
}

impl QuizEngine {
    pub fn new(items: Vec<QuizItem>) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::EmptyQuiz);
        }

        Ok(Self {
            items,
            session: None,
            phase: QuizPhase::NotStarted,
            generation: 0,
        })
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Score of the current run; 0 before the first start
    pub fn current_score(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.score)
    }

    /// Begin a new run, superseding any previous one
    pub fn start(&mut self) -> QuizView {
        self.generation += 1;
        self.session = Some(QuizSession::new(
            self.generation,
            self.items[0].options.len(),
        ));
        self.phase = QuizPhase::InQuestion;

        tracing::debug!(generation = self.generation, "quiz started");
        self.render_current()
    }

    pub fn render_current(&self) -> QuizView {
        let Some(session) = &self.session else {
            return QuizView::NotStarted;
        };

        if self.phase == QuizPhase::Finished {
            return QuizView::Summary {
                score: session.score,
                total: self.items.len(),
            };
        }

        let item = &self.items[session.current_index];
        let options = item
            .options
            .iter()
            .zip(&session.marks)
            .enumerate()
            .map(|(index, (text, mark))| OptionView {
                index,
                text: text.clone(),
                mark: *mark,
            })
            .collect();

        QuizView::Question(QuestionView {
            number: session.current_index + 1,
            total: self.items.len(),
            prompt: item.prompt.clone(),
            options,
            answered: session.answered,
        })
    }

    /// Evaluate an answer for the displayed question.
    ///
    /// Returns `None` when the selection is ignored: no question on screen, the question was
    /// already answered, or `index` is not one of its options.
    pub fn select_option(&mut self, index: usize) -> Option<Evaluation> {
        if self.phase != QuizPhase::InQuestion {
            tracing::debug!(phase = ?self.phase, index, "selection ignored");
            return None;
        }

        let session = self.session.as_mut()?;
        if session.answered {
            return None;
        }

        let item = &self.items[session.current_index];
        if index >= item.options.len() {
            tracing::warn!(
                index,
                options = item.options.len(),
                "selection out of range ignored"
            );
            return None;
        }

        session.answered = true;
        let correct = index == item.correct_index;
        if correct {
            session.marks[index] = OptionMark::Correct;
            session.score += 1;
        } else {
            session.marks[index] = OptionMark::Wrong;
            session.marks[item.correct_index] = OptionMark::Correct;
        }

        let ticket = AdvanceTicket {
            generation: session.generation,
            index: session.current_index,
        };
        self.phase = QuizPhase::AnswerEvaluated;

        tracing::debug!(
            question = ticket.index,
            correct,
            score = session.score,
            "answer evaluated"
        );

        Some(Evaluation {
            correct,
            view: self.render_current(),
            ticket,
        })
    }

    /// Move past an evaluated question.
    ///
    /// Returns `None` for a ticket that does not belong to the current question of the current
    /// run, e.g. one issued before a restart.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Option<QuizView> {
        if self.phase != QuizPhase::AnswerEvaluated {
            return None;
        }

        let session = self.session.as_mut()?;
        if session.generation != ticket.generation || session.current_index != ticket.index {
            tracing::debug!(?ticket, "stale advance ticket ignored");
            return None;
        }

        if session.current_index + 1 < self.items.len() {
            session.current_index += 1;
            session.answered = false;
            let option_count = self.items[session.current_index].options.len();
            session.marks = vec![OptionMark::Unmarked; option_count];
            self.phase = QuizPhase::InQuestion;
        } else {
            self.phase = QuizPhase::Finished;
            tracing::info!(score = session.score, total = self.items.len(), "quiz finished");
        }

        Some(self.render_current())
    }
}
