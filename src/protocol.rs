//! JSON request and response bodies for the HTTP API
//!
//! Every response carries a `status` tag the client switches on.

use crate::game::{AnswerOutcome, LifelineEffect, LifelineKind, LifelineOutcome, SessionSnapshot};
use crate::types::PublicQuestion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// Any JSON value is accepted; see [`AnswerRequest::index`]
    #[serde(default)]
    pub answer_index: Option<serde_json::Value>,
}

impl AnswerRequest {
    /// The submitted index as an integer.
    ///
    /// Whole-valued numbers such as `1.0` count. Strings, fractions, booleans
    /// and other values give None, which is a wrong answer.
    pub fn index(&self) -> Option<i64> {
        let value = self.answer_index.as_ref()?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifelineRequest {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StartResponse {
    Started {
        question: PublicQuestion,
        lifelines: Vec<LifelineKind>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerResponse {
    Correct {
        message: String,
        next_question: PublicQuestion,
        current_level: usize,
    },
    Win {
        final_prize: u64,
    },
    Wrong {
        message: String,
        final_prize: u64,
    },
    GameOver {
        message: String,
    },
}

impl From<AnswerOutcome> for AnswerResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Correct {
                won,
                next_question,
                current_level,
            } => AnswerResponse::Correct {
                message: format!("Correct! You have won {}", won),
                next_question,
                current_level,
            },
            AnswerOutcome::Win { final_prize } => AnswerResponse::Win { final_prize },
            AnswerOutcome::Wrong {
                correct_answer,
                final_prize,
            } => AnswerResponse::Wrong {
                message: format!("Wrong. The correct answer was: {}", correct_answer),
                final_prize,
            },
            AnswerOutcome::GameOver => AnswerResponse::GameOver {
                message: "The game is over, there are no more questions".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LifelineResponse {
    Success {
        #[serde(rename = "type")]
        kind: LifelineKind,
        options_to_keep: Vec<usize>,
        lifelines: Vec<LifelineKind>,
    },
    Error {
        message: String,
    },
}

impl From<LifelineOutcome> for LifelineResponse {
    fn from(outcome: LifelineOutcome) -> Self {
        match outcome.effect {
            LifelineEffect::FiftyFifty { options_to_keep } => LifelineResponse::Success {
                kind: outcome.kind,
                options_to_keep: options_to_keep.to_vec(),
                lifelines: outcome.lifelines,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionResponse {
    Idle,
    Active(SessionSnapshot),
    Finished(SessionSnapshot),
}

impl From<Option<SessionSnapshot>> for SessionResponse {
    fn from(snapshot: Option<SessionSnapshot>) -> Self {
        match snapshot {
            None => SessionResponse::Idle,
            Some(s) if s.active => SessionResponse::Active(s),
            Some(s) => SessionResponse::Finished(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionId;
    use serde_json::json;

    fn public_question() -> PublicQuestion {
        PublicQuestion {
            id: QuestionId::Number(2),
            question: "Question 2?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            prize: 1000,
        }
    }

    #[test]
    fn test_answer_request_parsing() {
        let index = |body: &str| serde_json::from_str::<AnswerRequest>(body).unwrap().index();

        assert_eq!(index(r#"{"answer_index": 2}"#), Some(2));
        assert_eq!(index(r#"{"answer_index": -3}"#), Some(-3));
        assert_eq!(index(r#"{"answer_index": 1.0}"#), Some(1));
        assert_eq!(index("{}"), None);
        assert_eq!(index(r#"{"answer_index": null}"#), None);
    }

    #[test]
    fn test_non_integer_answer_index_has_no_index() {
        let index = |body: &str| serde_json::from_str::<AnswerRequest>(body).unwrap().index();

        assert_eq!(index(r#"{"answer_index": "2"}"#), None);
        assert_eq!(index(r#"{"answer_index": 1.5}"#), None);
        assert_eq!(index(r#"{"answer_index": true}"#), None);
        assert_eq!(index(r#"{"answer_index": [1]}"#), None);
        assert_eq!(index(r#"{"answer_index": 1e300}"#), None);
    }

    #[test]
    fn test_lifeline_request_uses_type_key() {
        let req: LifelineRequest = serde_json::from_str(r#"{"type": "50/50"}"#).unwrap();
        assert_eq!(req.kind, "50/50");
    }

    #[test]
    fn test_start_response_shape() {
        let resp = StartResponse::Started {
            question: public_question(),
            lifelines: LifelineKind::ALL.to_vec(),
        };
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["status"], "started");
        assert_eq!(value["lifelines"], json!(["50/50", "phone"]));
        assert!(value["question"].get("correct_index").is_none());
    }

    #[test]
    fn test_answer_response_shapes() {
        let correct: AnswerResponse = AnswerOutcome::Correct {
            won: 500,
            next_question: public_question(),
            current_level: 2,
        }
        .into();
        let value = serde_json::to_value(&correct).unwrap();
        assert_eq!(value["status"], "correct");
        assert_eq!(value["current_level"], 2);
        assert!(value["message"].as_str().unwrap().contains("500"));

        let win: AnswerResponse = AnswerOutcome::Win {
            final_prize: 3_000_000,
        }
        .into();
        assert_eq!(
            serde_json::to_value(&win).unwrap(),
            json!({"status": "win", "final_prize": 3_000_000})
        );

        let wrong: AnswerResponse = AnswerOutcome::Wrong {
            correct_answer: "Mars".to_string(),
            final_prize: 5000,
        }
        .into();
        let value = serde_json::to_value(&wrong).unwrap();
        assert_eq!(value["status"], "wrong");
        assert_eq!(value["final_prize"], 5000);
        assert!(value["message"].as_str().unwrap().contains("Mars"));

        let over: AnswerResponse = AnswerOutcome::GameOver.into();
        assert_eq!(serde_json::to_value(&over).unwrap()["status"], "game_over");
    }

    #[test]
    fn test_lifeline_response_shape() {
        let resp: LifelineResponse = LifelineOutcome {
            kind: LifelineKind::FiftyFifty,
            effect: LifelineEffect::FiftyFifty {
                options_to_keep: [0, 3],
            },
            lifelines: vec![LifelineKind::Phone],
        }
        .into();

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "status": "success",
                "type": "50/50",
                "options_to_keep": [0, 3],
                "lifelines": ["phone"],
            })
        );
    }

    #[test]
    fn test_session_response_states() {
        let idle = serde_json::to_value(SessionResponse::from(None)).unwrap();
        assert_eq!(idle, json!({"status": "idle"}));

        let snap = SessionSnapshot {
            session_id: "01H".to_string(),
            started_at: "2024-01-01T00:00:00+00:00".to_string(),
            current_level: 0,
            lifelines: vec![],
            active: false,
            finished: true,
        };
        let finished = serde_json::to_value(SessionResponse::from(Some(snap))).unwrap();
        assert_eq!(finished["status"], "finished");
        assert_eq!(finished["current_level"], 0);
        assert_eq!(finished["finished"], true);
    }
}
