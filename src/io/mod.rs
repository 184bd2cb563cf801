//! Input/Output handling for CLI and tool integration.
//!
//! This module provides:
//! - Unified output formatting (text, JSON)
//! - Consistent error handling and exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, EntityType, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
