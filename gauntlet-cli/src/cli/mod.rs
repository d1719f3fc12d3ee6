//! Command-line interface orchestration for gauntlet.
//!
//! Each subcommand builds one artefact (a graph, a tree or a set of strings)
//! from a single seeded random source and returns it as an
//! [`ExecutionSummary`] for [`render_summary`] to print.

mod commands;

pub use commands::{
    AbacabaCommand, AntiHashCommand, Cli, CliError, Command, ExecutionSummary, GraphCommand,
    GraphOutput, ThueMorseCommand, TreeCommand, WeightRange, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
