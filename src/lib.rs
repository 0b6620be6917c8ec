//! VoiceFlow console: client library for the VoiceFlow voice-agent backend.
//!
//! Registration and onboarding wizards, the agent template catalog, the
//! session context and a typed HTTP gateway to the REST API.

pub mod api;
pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod session;
pub mod wizard;
