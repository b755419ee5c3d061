//! Library components of the `backlog-export` CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
