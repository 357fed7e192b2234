//! CLI module graph.

pub mod address;
pub mod buy;
pub mod command;
pub mod listing;
pub mod output;
