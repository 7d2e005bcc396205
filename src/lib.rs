//! Alianza: relationship-coaching companion.
//!
//! The core is two deterministic subsystems: the love-language
//! [`assessment`] engine (a forced-choice psychometric test over a fixed
//! question bank) and the daily [`reminder`] scheduler (chained one-shot
//! timers firing an AI-generated mission, with a deterministic fallback).
//! Content generation ([`llm`]) and notification delivery ([`notify`]) are
//! capability traits with real Gemini/Gotify implementations behind them;
//! [`profile`] holds the couple profile both subsystems read.

pub mod assessment;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod notify;
pub mod profile;
pub mod reminder;

pub use error::{Error, Result};
