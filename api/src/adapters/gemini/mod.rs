//! Gemini adapter
//!
//! Implements the text-generation port against the Google Generative
//! Language API.

pub mod client;

pub use client::GeminiClientImpl;
