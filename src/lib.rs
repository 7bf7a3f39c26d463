//! # Skill Mint Server
//!
//! HTTP skeleton for the Skill Mint authentication API.
//!
//! The service exposes two placeholder endpoints, `POST /skill-mint/login` and
//! `POST /skill-mint/signup`. Incoming payloads are validated for shape only
//! (email syntax, non-empty fields) before a handler runs; handlers are pure
//! and unconditionally answer `{"status": "success"}`. No credentials are
//! checked and nothing is persisted.
//!
//! Validation failures are the only error path: they short-circuit before the
//! handler with a `422 Unprocessable Entity` carrying a per-field error list.

pub mod api;
pub mod cli;
