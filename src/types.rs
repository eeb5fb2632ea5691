use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of answer options every question carries
pub const OPTION_COUNT: usize = 4;

/// Opaque question identifier. Banks use either numbers or strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A question record as stored in the bank
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    /// Amount announced when this question is answered correctly
    pub prize: u64,
}

impl Question {
    /// The subset of the question that is safe to send to the player
    pub fn public_view(&self) -> PublicQuestion {
        PublicQuestion {
            id: self.id.clone(),
            question: self.question.clone(),
            options: self.options.clone(),
            prize: self.prize,
        }
    }

    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Out-of-range and negative submissions are simply wrong
    pub fn is_correct(&self, submitted_index: Option<i64>) -> bool {
        submitted_index
            .and_then(|i| usize::try_from(i).ok())
            .is_some_and(|i| i == self.correct_index)
    }
}

/// Question as shown to the player (never carries the correct index)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicQuestion {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    pub prize: u64,
}
