//! Natural-language explanations of simulated weather.
//!
//! A [`Narrator`] asks a Gemini model for a six-section explanation and
//! falls back to templated text when no API key is configured or the call
//! fails.

pub mod client;
pub mod error;
pub mod fallback;
pub mod narrator;
pub mod prompt;
pub mod retry;
pub mod sections;

pub use client::GeminiClient;
pub use error::NarrativeError;
pub use fallback::fallback_sections;
pub use narrator::{Narrator, CHAT_ERROR_REPLY, NOT_CONFIGURED_REPLY};
pub use retry::RetryPolicy;
pub use sections::{parse_sections, NarrativeSections, SECTION_HEADERS};
