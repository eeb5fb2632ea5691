//! Server configuration from environment variables

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

pub const DEFAULT_QUESTIONS_FILE: &str = "questions.json";
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 5000));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Path of the JSON question bank
    pub questions_file: PathBuf,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Fixed seed for lifeline randomness (None = thread randomness)
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            questions_file: PathBuf::from(DEFAULT_QUESTIONS_FILE),
            bind_addr: DEFAULT_BIND_ADDR,
            rng_seed: None,
        }
    }
}

/// Read a variable, trimmed, treating empty values as unset
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_var<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value,
    })
}

impl ServerConfig {
    /// Load config from environment variables:
    /// QUIZ_QUESTIONS_FILE, QUIZ_BIND_ADDR, QUIZ_RNG_SEED
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let questions_file = env_var("QUIZ_QUESTIONS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.questions_file);

        let bind_addr = match env_var("QUIZ_BIND_ADDR") {
            Some(v) => parse_var("QUIZ_BIND_ADDR", v)?,
            None => defaults.bind_addr,
        };

        let rng_seed = env_var("QUIZ_RNG_SEED")
            .map(|v| parse_var("QUIZ_RNG_SEED", v))
            .transpose()?;

        if rng_seed.is_some() {
            tracing::warn!("QUIZ_RNG_SEED is set - lifeline choices are predictable");
        }

        Ok(Self {
            questions_file,
            bind_addr,
            rng_seed,
        })
    }
}
