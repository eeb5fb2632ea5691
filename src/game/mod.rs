//! Game engine
//!
//! A `GameSession` walks the player up the prize ladder one question at a
//! time. Level 0 means the game was lost, `CLEARED_LEVEL` means every rung was
//! cleared; neither has an active question.

mod lifeline;

pub use lifeline::{fifty_fifty, LifelineEffect, LifelineHandler, LifelineKind};

use crate::bank::QuestionBank;
use crate::ladder::{self, LADDER_LEN};
use crate::random::RandomSource;
use crate::types::{PublicQuestion, Question};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

pub type SessionId = String;

/// Level after a wrong answer
pub const LOST_LEVEL: usize = 0;

/// Level after the last question was answered correctly
pub const CLEARED_LEVEL: usize = LADDER_LEN + 1;

/// Errors returned by game operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Unknown lifeline '{0}'")]
    UnknownLifeline(String),

    #[error("Lifeline '{0}' has already been used")]
    LifelineUsed(LifelineKind),

    #[error("No active question")]
    NoActiveQuestion,

    #[error("Lifeline '{0}' is not available yet")]
    UnsupportedLifeline(LifelineKind),

    #[error("No question configured for level {0}")]
    MissingQuestion(usize),
}

/// Result of submitting an answer
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    Correct {
        won: u64,
        next_question: PublicQuestion,
        current_level: usize,
    },
    Win {
        final_prize: u64,
    },
    Wrong {
        correct_answer: String,
        final_prize: u64,
    },
    /// Nothing to answer: the game is lost, won, or was never started
    GameOver,
}

/// Result of a successful lifeline use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifelineOutcome {
    pub kind: LifelineKind,
    pub effect: LifelineEffect,
    pub lifelines: Vec<LifelineKind>,
}

/// Read-only view of a session, safe to expose
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub started_at: String,
    pub current_level: usize,
    pub lifelines: Vec<LifelineKind>,
    pub active: bool,
    /// The game was lost or the ladder was cleared
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    started_at: String,
    bank: Arc<QuestionBank>,
    current_level: usize,
    lifelines: BTreeSet<LifelineKind>,
}

impl GameSession {
    /// Start a fresh game at level 1 with every lifeline available
    pub fn start(bank: Arc<QuestionBank>) -> Result<(Self, PublicQuestion), GameError> {
        let first = bank.get(1).ok_or(GameError::MissingQuestion(1))?.public_view();

        let session = Self {
            id: ulid::Ulid::new().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            bank,
            current_level: 1,
            lifelines: LifelineKind::ALL.into_iter().collect(),
        };

        tracing::info!("Game session started: {}", session.id);
        Ok((session, first))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Remaining lifelines in declaration order
    pub fn lifelines(&self) -> Vec<LifelineKind> {
        self.lifelines.iter().copied().collect()
    }

    pub fn is_active(&self) -> bool {
        self.current_question().is_some()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.current_level, LOST_LEVEL | CLEARED_LEVEL)
    }

    /// Question currently being asked, if any
    pub fn current_question(&self) -> Option<&Question> {
        if (1..=LADDER_LEN).contains(&self.current_level) {
            self.bank.get(self.current_level)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.clone(),
            started_at: self.started_at.clone(),
            current_level: self.current_level,
            lifelines: self.lifelines(),
            active: self.is_active(),
            finished: self.is_finished(),
        }
    }

    /// Resolve an answer to the current question.
    ///
    /// Anything other than the correct index is wrong, including missing,
    /// negative and out-of-range values.
    pub fn answer(&mut self, submitted_index: Option<i64>) -> AnswerOutcome {
        if !self.is_active() {
            return AnswerOutcome::GameOver;
        }
        let level = self.current_level;
        let bank = Arc::clone(&self.bank);
        let Some(question) = bank.get(level) else {
            return AnswerOutcome::GameOver;
        };

        if !question.is_correct(submitted_index) {
            let final_prize = ladder::find_safe_prize(level);
            self.current_level = LOST_LEVEL;
            tracing::info!(
                "Session {}: wrong answer at level {}, payout {}",
                self.id,
                level,
                final_prize
            );
            return AnswerOutcome::Wrong {
                correct_answer: question.correct_option().to_string(),
                final_prize,
            };
        }

        self.current_level = level + 1;
        match self.current_question() {
            Some(next) => {
                tracing::info!(
                    "Session {}: level {} cleared, now at level {}",
                    self.id,
                    level,
                    self.current_level
                );
                AnswerOutcome::Correct {
                    won: question.prize,
                    next_question: next.public_view(),
                    current_level: self.current_level,
                }
            }
            None => {
                let final_prize = ladder::top_prize();
                tracing::info!("Session {}: ladder cleared, payout {}", self.id, final_prize);
                AnswerOutcome::Win { final_prize }
            }
        }
    }

    /// Spend a lifeline on the current question.
    ///
    /// Every check runs before the lifeline is consumed, so a rejected call
    /// leaves the session untouched.
    pub fn use_lifeline(
        &mut self,
        kind: LifelineKind,
        rng: &mut dyn RandomSource,
    ) -> Result<LifelineOutcome, GameError> {
        if !self.lifelines.contains(&kind) {
            return Err(GameError::LifelineUsed(kind));
        }
        let question = self.current_question().ok_or(GameError::NoActiveQuestion)?;
        let handler = kind.handler().ok_or(GameError::UnsupportedLifeline(kind))?;

        let effect = handler(question, rng);
        self.lifelines.remove(&kind);

        tracing::info!(
            "Session {}: lifeline {} used at level {}",
            self.id,
            kind,
            self.current_level
        );

        Ok(LifelineOutcome {
            kind,
            effect,
            lifelines: self.lifelines(),
        })
    }
}
