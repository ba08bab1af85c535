//! HTTP service in front of the move advisor engine
//!
//! - `api` - Router and the `POST /api/get_ai_move` handler
//! - `config` - Command line and environment configuration

pub mod api;
pub mod config;
