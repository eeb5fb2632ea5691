//! Question bank loading
//!
//! The bank is a JSON array of question records, loaded once at startup.
//! Any problem with it is fatal: the server must not answer requests with a
//! broken bank.

use crate::ladder::LADDER_LEN;
use crate::types::{Question, OPTION_COUNT};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading the question bank
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read question bank {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Question bank has {found} questions, at least {required} are required")]
    TooFewQuestions { found: usize, required: usize },

    #[error("Question #{position} is invalid: {reason}")]
    InvalidQuestion { position: usize, reason: String },

    #[error("Duplicate question id: {0}")]
    DuplicateId(String),
}

/// Ordered, immutable collection of questions
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate already-parsed questions
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.len() < LADDER_LEN {
            return Err(LoadError::TooFewQuestions {
                found: questions.len(),
                required: LADDER_LEN,
            });
        }

        let mut seen = HashSet::new();
        for (i, q) in questions.iter().enumerate() {
            let position = i + 1;
            if q.options.len() != OPTION_COUNT {
                return Err(LoadError::InvalidQuestion {
                    position,
                    reason: format!(
                        "expected {} options, found {}",
                        OPTION_COUNT,
                        q.options.len()
                    ),
                });
            }
            if q.correct_index >= q.options.len() {
                return Err(LoadError::InvalidQuestion {
                    position,
                    reason: format!("correct_index {} is out of range", q.correct_index),
                });
            }
            if !seen.insert(&q.id) {
                return Err(LoadError::DuplicateId(q.id.to_string()));
            }
        }

        if questions.len() > LADDER_LEN {
            tracing::warn!(
                "Question bank has {} questions, only the first {} are played",
                questions.len(),
                LADDER_LEN
            );
        }

        Ok(Self { questions })
    }

    /// Parse and validate a JSON array of questions
    pub fn load(source: &str) -> Result<Self, LoadError> {
        let questions: Vec<Question> = serde_json::from_str(source)?;
        Self::from_questions(questions)
    }

    /// Read, parse and validate a bank file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::load(&source)?;
        tracing::info!("Loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Question at 1-based `position`, or None when out of range
    pub fn get(&self, position: usize) -> Option<&Question> {
        position
            .checked_sub(1)
            .and_then(|i| self.questions.get(i))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Deterministic bank used across the test suites
#[cfg(test)]
pub(crate) fn sample_questions(count: usize) -> Vec<Question> {
    use crate::types::QuestionId;

    (1..=count)
        .map(|n| Question {
            id: QuestionId::Number(n as i64),
            question: format!("Question {}?", n),
            options: (0..OPTION_COUNT)
                .map(|o| format!("Answer {}-{}", n, o))
                .collect(),
            correct_index: n % OPTION_COUNT,
            prize: crate::ladder::entry(n).map_or(0, |e| e.prize),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_preserves_order() {
        let json = serde_json::to_string(&sample_questions(15)).unwrap();
        let bank = QuestionBank::load(&json).unwrap();

        assert_eq!(bank.len(), 15);
        assert_eq!(bank.get(1).unwrap().question, "Question 1?");
        assert_eq!(bank.get(15).unwrap().question, "Question 15?");
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let bank = QuestionBank::from_questions(sample_questions(15)).unwrap();

        assert!(bank.get(0).is_none());
        assert!(bank.get(16).is_none());
        assert!(bank.get(usize::MAX).is_none());
    }

    #[test]
    fn test_too_few_questions() {
        let result = QuestionBank::from_questions(sample_questions(14));
        assert!(matches!(
            result,
            Err(LoadError::TooFewQuestions {
                found: 14,
                required: 15
            })
        ));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let result = QuestionBank::load("[]");
        assert!(matches!(result, Err(LoadError::TooFewQuestions { found: 0, .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = QuestionBank::load("{ not json");
        assert!(matches!(result, Err(LoadError::Parse(_))));

        let result = QuestionBank::load(r#"[{"id": 1, "question": "missing fields"}]"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_wrong_option_count() {
        let mut questions = sample_questions(15);
        questions[3].options.pop();

        let err = QuestionBank::from_questions(questions).unwrap_err();
        assert!(matches!(err, LoadError::InvalidQuestion { position: 4, .. }));
        assert!(err.to_string().contains("expected 4 options"));
    }

    #[test]
    fn test_correct_index_out_of_range() {
        let mut questions = sample_questions(15);
        questions[0].correct_index = 4;

        let err = QuestionBank::from_questions(questions).unwrap_err();
        assert!(matches!(err, LoadError::InvalidQuestion { position: 1, .. }));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut questions = sample_questions(15);
        questions[9].id = questions[2].id.clone();

        let err = QuestionBank::from_questions(questions).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(ref id) if id == "3"));
    }

    #[test]
    fn test_extra_questions_are_kept() {
        let bank = QuestionBank::from_questions(sample_questions(20)).unwrap();
        assert_eq!(bank.len(), 20);
        assert!(bank.get(20).is_some());
    }

    #[test]
    fn test_bundled_bank_is_valid() {
        let bank = QuestionBank::load(include_str!("../questions.json")).unwrap();
        assert_eq!(bank.len(), LADDER_LEN);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&sample_questions(15)).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let bank = QuestionBank::load_from_path(file.path()).unwrap();
        assert_eq!(bank.len(), 15);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("questions.json");

        let err = QuestionBank::load_from_path(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("questions.json"));
    }
}
