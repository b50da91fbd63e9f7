//! Pieces shared by every binary in the workspace: logging setup and
//! small response types.

pub mod types;
pub mod utils;
