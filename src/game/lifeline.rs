//! Lifeline kinds and their handlers

use crate::random::RandomSource;
use crate::types::Question;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GameError;

/// One-shot aids available during a game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LifelineKind {
    #[serde(rename = "50/50")]
    FiftyFifty,
    #[serde(rename = "phone")]
    Phone,
}

impl LifelineKind {
    /// Lifelines granted at the start of every game
    pub const ALL: [LifelineKind; 2] = [LifelineKind::FiftyFifty, LifelineKind::Phone];

    pub fn as_str(self) -> &'static str {
        match self {
            LifelineKind::FiftyFifty => "50/50",
            LifelineKind::Phone => "phone",
        }
    }

    /// Handler resolving this lifeline, or None if it has no implementation yet
    pub fn handler(self) -> Option<LifelineHandler> {
        match self {
            LifelineKind::FiftyFifty => Some(fifty_fifty),
            LifelineKind::Phone => None,
        }
    }
}

impl fmt::Display for LifelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifelineKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifelineKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GameError::UnknownLifeline(s.to_string()))
    }
}

/// What a resolved lifeline reveals to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifelineEffect {
    /// Two option indices left on the board, ascending
    FiftyFifty { options_to_keep: [usize; 2] },
}

pub type LifelineHandler = fn(&Question, &mut dyn RandomSource) -> LifelineEffect;

/// Keep the correct option and one wrong option chosen uniformly at random
pub fn fifty_fifty(question: &Question, rng: &mut dyn RandomSource) -> LifelineEffect {
    let wrong: Vec<usize> = (0..question.options.len())
        .filter(|&i| i != question.correct_index)
        .collect();
    let kept_wrong = wrong[rng.pick(wrong.len())];

    let mut options_to_keep = [question.correct_index, kept_wrong];
    options_to_keep.sort_unstable();
    LifelineEffect::FiftyFifty { options_to_keep }
}
