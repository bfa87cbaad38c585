//! Operational subcommands for the exit beacon agent.

pub mod fire;
