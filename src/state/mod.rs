use crate::bank::QuestionBank;
use crate::game::{
    AnswerOutcome, GameError, GameSession, LifelineKind, LifelineOutcome, SessionSnapshot,
};
use crate::random::{RandomSource, ThreadRandom};
use crate::types::PublicQuestion;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared application state
///
/// Holds the single current game. Every mutating method keeps the session
/// write lock for its whole duration, so game operations never interleave.
#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    pub session: Arc<RwLock<Option<GameSession>>>,
    rng: Arc<Mutex<Box<dyn RandomSource>>>,
}

impl AppState {
    pub fn new(bank: QuestionBank) -> Self {
        Self::new_with_rng(bank, Box::new(ThreadRandom))
    }

    pub fn new_with_rng(bank: QuestionBank, rng: Box<dyn RandomSource>) -> Self {
        Self {
            bank: Arc::new(bank),
            session: Arc::new(RwLock::new(None)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Start a new game, discarding any game in progress
    pub async fn start_game(&self) -> Result<(PublicQuestion, Vec<LifelineKind>), GameError> {
        let mut slot = self.session.write().await;
        let (session, question) = GameSession::start(Arc::clone(&self.bank))?;
        let lifelines = session.lifelines();

        if let Some(previous) = slot.replace(session) {
            tracing::debug!("Discarded previous session {}", previous.id());
        }
        Ok((question, lifelines))
    }

    /// Answer the current question. Without a started game this is game over.
    pub async fn submit_answer(&self, answer_index: Option<i64>) -> AnswerOutcome {
        let mut slot = self.session.write().await;
        match slot.as_mut() {
            Some(session) => session.answer(answer_index),
            None => AnswerOutcome::GameOver,
        }
    }

    /// Use a lifeline by its wire name
    pub async fn use_lifeline(&self, kind: &str) -> Result<LifelineOutcome, GameError> {
        let kind: LifelineKind = kind.parse()?;

        let mut slot = self.session.write().await;
        let session = slot.as_mut().ok_or(GameError::NoActiveQuestion)?;
        let mut rng = self.rng.lock().await;
        session.use_lifeline(kind, &mut **rng)
    }

    pub async fn session_snapshot(&self) -> Option<SessionSnapshot> {
        self.session.read().await.as_ref().map(GameSession::snapshot)
    }
}
