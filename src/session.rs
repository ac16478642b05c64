//! Review session flow: queue construction, answer grading, scheduling.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::clock;
use crate::config::{DEFAULT_QUESTIONS, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::domain::{Direction, Feedback, FeedbackKind, PoolKind, StudyMode};
use crate::grading::{Language, grade};
use crate::srs;
use crate::store::{StoreError, WordStore};

/// One question of a session, fully resolved at session start.
///
/// The direction is fixed here so that grading can never disagree with
/// what was shown as the prompt.
#[derive(Debug, Clone)]
pub struct Turn {
    pub word_id: i64,
    pub direction: Direction,
    /// What the learner is shown
    pub prompt: String,
    /// Every acceptable answer, first one canonical
    pub answers: Vec<String>,
    /// Box the word was in when the session started
    pub box_level: u8,
}

impl Turn {
    /// Language the answer is expected in.
    pub fn answer_language(&self) -> Language {
        match self.direction {
            Direction::GermanToTurkish => Language::Turkish,
            Direction::TurkishToGerman => Language::German,
        }
    }
}

/// Failures while driving a session.
#[derive(Debug)]
pub enum SessionError {
    /// The queue is exhausted; there is no turn to answer
    Done,
    Store(StoreError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done => write!(f, "session has no remaining turns"),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Done => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub skipped: usize,
}

/// A running review session over a fixed queue of turns.
pub struct ReviewSession {
    mode: StudyMode,
    pool: PoolKind,
    turns: Vec<Turn>,
    index: usize,
    correct: usize,
    wrong: usize,
    skipped: usize,
    last_feedback: Option<Feedback>,
}

/// Parse a requested question count, falling back to the default on
/// malformed input and clamping to the allowed range.
pub fn parse_question_count(raw: &str) -> usize {
    raw.trim()
        .parse::<usize>()
        .unwrap_or(DEFAULT_QUESTIONS)
        .clamp(MIN_QUESTIONS, MAX_QUESTIONS)
}

fn join_answers(answers: &[String]) -> String {
    answers.join(", ")
}

impl ReviewSession {
    /// Build a session queue from the chosen pool.
    ///
    /// Words without any translation are skipped, so the queue can come out
    /// shorter than requested. Mixed mode resolves each turn's direction
    /// here, once, using the injected randomness.
    pub fn start(
        store: &impl WordStore,
        mode: StudyMode,
        pool: PoolKind,
        count: usize,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> Result<Self, StoreError> {
        let count = count.clamp(MIN_QUESTIONS, MAX_QUESTIONS);
        let words = match pool {
            PoolKind::Due => store.fetch_due_words(now, count)?,
            PoolKind::Random => store.fetch_random_words(count)?,
        };

        let mut turns = Vec::with_capacity(words.len());
        for word in words {
            let translations = store.fetch_translations(word.id)?;
            if translations.is_empty() {
                tracing::warn!(word_id = word.id, "word has no translations, skipping");
                continue;
            }

            let direction = match mode {
                StudyMode::GermanToTurkish => Direction::GermanToTurkish,
                StudyMode::TurkishToGerman => Direction::TurkishToGerman,
                StudyMode::Mixed => {
                    if rng.random_bool(0.5) {
                        Direction::GermanToTurkish
                    } else {
                        Direction::TurkishToGerman
                    }
                }
            };

            let (prompt, answers) = match direction {
                Direction::GermanToTurkish => (word.german.clone(), translations),
                Direction::TurkishToGerman => {
                    let pick = rng.random_range(0..translations.len());
                    (translations[pick].clone(), vec![word.german.clone()])
                }
            };

            turns.push(Turn {
                word_id: word.id,
                direction,
                prompt,
                answers,
                box_level: word.box_level,
            });
        }

        tracing::info!(
            mode = mode.as_str(),
            pool = pool.as_str(),
            turns = turns.len(),
            "session started"
        );

        Ok(Self {
            mode,
            pool,
            turns,
            index: 0,
            correct: 0,
            wrong: 0,
            skipped: 0,
            last_feedback: None,
        })
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn pool(&self) -> PoolKind {
        self.pool
    }

    pub fn total(&self) -> usize {
        self.turns.len()
    }

    /// 1-based position of the current turn, for display.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.turns.len().max(1))
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.turns.len()
    }

    pub fn current_turn(&self) -> Option<&Turn> {
        self.turns.get(self.index)
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    /// Grade the answer for the current turn, persist the scheduling
    /// outcome and advance the queue.
    ///
    /// A blank answer counts as a skip: the word is rescheduled as if it
    /// had been answered wrong, but the feedback stays in the softer
    /// category. Calling with no turn left is an error in the caller.
    pub fn submit_answer(
        &mut self,
        store: &impl WordStore,
        answer: &str,
    ) -> Result<&Feedback, SessionError> {
        let turn = self.turns.get(self.index).ok_or(SessionError::Done)?;

        let now = clock::now();
        let outcome = grade(answer, &turn.answers, turn.answer_language());
        let skipped = answer.trim().is_empty();
        let was_correct = outcome.accepted;

        let result = srs::calculate_review(turn.box_level, was_correct, now);
        store.persist_review_outcome(
            turn.word_id,
            result.new_box,
            result.next_due,
            was_correct,
            now,
        )?;

        let shown = join_answers(&turn.answers);
        let feedback = if was_correct {
            self.correct += 1;
            let extra = if outcome.exact {
                String::new()
            } else {
                format!(" (close match, similarity {:.2})", outcome.confidence)
            };
            Feedback {
                kind: FeedbackKind::Correct,
                message: format!(
                    "Correct{}! Answers: {} | box -> {}",
                    extra, shown, result.new_box
                ),
            }
        } else if skipped {
            self.skipped += 1;
            Feedback {
                kind: FeedbackKind::Skipped,
                message: format!("Skipped. Answers: {} | box -> {}", shown, result.new_box),
            }
        } else {
            self.wrong += 1;
            Feedback {
                kind: FeedbackKind::Wrong,
                message: format!("Wrong. Answers: {} | box -> {}", shown, result.new_box),
            }
        };

        self.index += 1;
        Ok(self.last_feedback.insert(feedback))
    }

    pub fn finish(&self) -> SessionSummary {
        SessionSummary {
            total: self.turns.len(),
            correct: self.correct,
            wrong: self.wrong,
            skipped: self.skipped,
        }
    }
}
