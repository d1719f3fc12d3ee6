//! Command implementations and argument parsing for the gauntlet CLI.

use std::io::Write;

use clap::{Args, Parser, Subcommand};
use gauntlet_core::{
    FormatError, GenerateError, GraphError, LabeledGraph, SeededRandom, StringError,
    format::{OutputModifier, write_graph},
    generate::{RandomGraphBuilder, random_edge_weights, random_tree, random_vertex_weights},
    strings::{DEFAULT_WORD_LIMIT, HashBase, StringRandom},
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "gauntlet", about = "Generate adversarial graphs and strings.")]
pub struct Cli {
    /// Seed for the random source; drawn from the operating system when absent.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a uniformly random graph.
    Graph(GraphCommand),
    /// Generate a random recursive tree.
    Tree(TreeCommand),
    /// Generate two distinct strings with equal polynomial hashes.
    AntiHash(AntiHashCommand),
    /// Print a Thue-Morse sequence.
    ThueMorse(ThueMorseCommand),
    /// Print an abacaba sequence.
    Abacaba(AbacabaCommand),
}

/// Options accepted by the `graph` command.
#[derive(Debug, Args, Clone)]
pub struct GraphCommand {
    /// Number of vertices.
    pub vertices: usize,

    /// Number of edges.
    pub edges: usize,

    /// Generate a directed graph.
    #[arg(long)]
    pub directed: bool,

    /// Allow self-loops.
    #[arg(long)]
    pub loops: bool,

    /// Allow parallel edges.
    #[arg(long = "multi-edges")]
    pub multi_edges: bool,

    /// Weight and output options.
    #[command(flatten)]
    pub output: GraphOutput,
}

/// Options accepted by the `tree` command.
#[derive(Debug, Args, Clone)]
pub struct TreeCommand {
    /// Number of vertices.
    pub vertices: usize,

    /// Weight and output options.
    #[command(flatten)]
    pub output: GraphOutput,
}

/// Post-processing shared by the graph-producing commands.
#[derive(Debug, Args, Clone, Default)]
pub struct GraphOutput {
    /// Uniform integer edge weights, as `LO:HI`.
    #[arg(long = "edge-weights", value_parser = parse_weight_range)]
    pub edge_weights: Option<WeightRange>,

    /// Uniform integer vertex weights, as `LO:HI`.
    #[arg(long = "vertex-weights", value_parser = parse_weight_range)]
    pub vertex_weights: Option<WeightRange>,

    /// Randomise labels, edge order and endpoint order.
    #[arg(long, conflicts_with = "normalize")]
    pub shuffle: bool,

    /// Sort edges by their endpoints.
    #[arg(long)]
    pub normalize: bool,

    /// Print labels starting from 1.
    #[arg(long = "one-based")]
    pub one_based: bool,

    /// Omit the `n m` header line.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

/// Options accepted by the `anti-hash` command.
#[derive(Debug, Args, Clone)]
pub struct AntiHashCommand {
    /// Hash to defeat, as `MOD:BASE`; repeat for several hashes.
    #[arg(long = "base", value_parser = parse_hash_base)]
    pub bases: Vec<HashBase>,

    /// Characters to draw from, with `a-z` style ranges.
    #[arg(long, default_value = "a-z")]
    pub alphabet: String,

    /// Pad both strings to exactly this many characters.
    #[arg(long)]
    pub length: Option<usize>,

    /// Longest sampled word, in letters, before giving up.
    #[arg(long = "word-limit", default_value_t = DEFAULT_WORD_LIMIT)]
    pub word_limit: usize,
}

/// Options accepted by the `thue-morse` command.
#[derive(Debug, Args, Clone)]
pub struct ThueMorseCommand {
    /// Sequence length.
    pub length: usize,

    /// Character used at even-parity positions.
    #[arg(long, default_value_t = 'a')]
    pub first: char,

    /// Character used at odd-parity positions.
    #[arg(long, default_value_t = 'b')]
    pub second: char,
}

/// Options accepted by the `abacaba` command.
#[derive(Debug, Args, Clone)]
pub struct AbacabaCommand {
    /// Sequence length.
    pub length: usize,

    /// Lowest character of the sequence.
    #[arg(long, default_value_t = 'a')]
    pub first: char,
}

/// Inclusive integer range parsed from `LO:HI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRange {
    /// Smallest weight.
    pub low: i64,
    /// Largest weight.
    pub high: i64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Generator configuration or execution failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// String generation failed.
    #[error(transparent)]
    Strings(#[from] StringError),
}

impl CliError {
    /// Stable machine-readable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Generate(GenerateError::Graph(error)) => error.code().as_str(),
            Self::Generate(error) => error.code().as_str(),
            Self::Strings(error) => error.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A graph ready to be printed with `modifier`.
    Graph {
        /// Generated graph.
        graph: LabeledGraph,
        /// Header and label options.
        modifier: OutputModifier,
    },
    /// Strings printed one per line.
    Strings(Vec<String>),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation fails.
///
/// # Examples
/// ```
/// use gauntlet_cli::cli::{Cli, Command, ExecutionSummary, ThueMorseCommand, run_cli};
///
/// let cli = Cli {
///     seed: None,
///     command: Command::ThueMorse(ThueMorseCommand { length: 4, first: 'a', second: 'b' }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary, ExecutionSummary::Strings(lines) if lines == ["abba"]));
/// # Ok::<(), gauntlet_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, seed = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let mut rng = match cli.seed {
        Some(seed) => {
            span.record("seed", seed);
            SeededRandom::new(seed)
        }
        None => SeededRandom::from_entropy(),
    };
    let strings = StringRandom::new();

    match cli.command {
        Command::Graph(command) => {
            span.record("command", field::display("graph"));
            run_graph(command, &mut rng)
        }
        Command::Tree(command) => {
            span.record("command", field::display("tree"));
            let tree = random_tree(command.vertices, &mut rng)?;
            finish_graph(tree, &command.output, &mut rng)
        }
        Command::AntiHash(command) => {
            span.record("command", field::display("anti-hash"));
            run_anti_hash(&strings.with_word_limit(command.word_limit), command, &mut rng)
        }
        Command::ThueMorse(command) => {
            span.record("command", field::display("thue-morse"));
            let line = strings.thue_morse(command.length, command.first, command.second);
            Ok(ExecutionSummary::Strings(vec![line]))
        }
        Command::Abacaba(command) => {
            span.record("command", field::display("abacaba"));
            let line = strings.abacaba(command.length, command.first)?;
            Ok(ExecutionSummary::Strings(vec![line]))
        }
    }
}

#[instrument(
    name = "cli.graph",
    err,
    skip(command, rng),
    fields(vertices = command.vertices, edges = command.edges, directed = command.directed),
)]
pub(super) fn run_graph(
    command: GraphCommand,
    rng: &mut SeededRandom,
) -> Result<ExecutionSummary, CliError> {
    let graph = RandomGraphBuilder::new()
        .with_vertices(command.vertices)
        .with_edges(command.edges)
        .with_directed(command.directed)
        .with_loops(command.loops)
        .with_multi_edges(command.multi_edges)
        .build()?
        .generate(rng)?;
    finish_graph(graph, &command.output, rng)
}

/// Applies weights and reordering, then packages the graph for printing.
pub(super) fn finish_graph(
    mut graph: LabeledGraph,
    output: &GraphOutput,
    rng: &mut SeededRandom,
) -> Result<ExecutionSummary, CliError> {
    if let Some(range) = output.edge_weights {
        random_edge_weights(&mut graph, range.low, range.high, rng)?;
    }
    if let Some(range) = output.vertex_weights {
        random_vertex_weights(&mut graph, range.low, range.high, rng)?;
    }
    if output.shuffle {
        graph.shuffle(rng)?;
    } else if output.normalize {
        graph.normalize_edges()?;
    }
    info!(
        vertices = graph.n(),
        edges = graph.m(),
        components = graph.component_count(),
        "graph ready"
    );
    let modifier = OutputModifier {
        print_n: !output.no_header,
        print_m: !output.no_header,
        add_one: output.one_based,
    };
    Ok(ExecutionSummary::Graph { graph, modifier })
}

#[instrument(
    name = "cli.anti_hash",
    err,
    skip(strings, command, rng),
    fields(bases = command.bases.len(), alphabet = %command.alphabet),
)]
pub(super) fn run_anti_hash(
    strings: &StringRandom,
    command: AntiHashCommand,
    rng: &mut SeededRandom,
) -> Result<ExecutionSummary, CliError> {
    let (left, right) =
        strings.anti_hash(rng, &command.bases, &command.alphabet, command.length)?;
    info!(length = left.chars().count(), "anti-hash pair ready");
    Ok(ExecutionSummary::Strings(vec![left, right]))
}

pub(super) fn parse_weight_range(raw: &str) -> Result<WeightRange, String> {
    let (low, high) = split_pair(raw, "LO:HI")?;
    let low: i64 = low.parse().map_err(|err| format!("invalid low weight `{low}`: {err}"))?;
    let high: i64 = high
        .parse()
        .map_err(|err| format!("invalid high weight `{high}`: {err}"))?;
    if high < low {
        return Err(format!("empty weight range {low}:{high}"));
    }
    Ok(WeightRange { low, high })
}

pub(super) fn parse_hash_base(raw: &str) -> Result<HashBase, String> {
    let (modulus, base) = split_pair(raw, "MOD:BASE")?;
    let modulus: u64 = modulus
        .parse()
        .map_err(|err| format!("invalid modulus `{modulus}`: {err}"))?;
    let base: u64 = base
        .parse()
        .map_err(|err| format!("invalid base `{base}`: {err}"))?;
    HashBase::new(modulus, base).map_err(|err| err.to_string())
}

fn split_pair<'a>(raw: &'a str, shape: &str) -> Result<(&'a str, &'a str), String> {
    raw.split_once(':')
        .map(|(left, right)| (left.trim(), right.trim()))
        .ok_or_else(|| format!("expected {shape}, got `{raw}`"))
}

/// Renders `summary` to `writer`.
///
/// Graphs use the edge-list layout of [`write_graph`]; strings are written
/// one per line.
///
/// # Errors
/// Returns [`FormatError`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use gauntlet_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Strings(vec!["ab".into(), "ba".into()]);
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"ab\nba\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    mut writer: impl Write,
) -> Result<(), FormatError> {
    match summary {
        ExecutionSummary::Graph { graph, modifier } => write_graph(graph, modifier, &mut writer),
        ExecutionSummary::Strings(lines) => {
            for line in lines {
                writeln!(writer, "{line}")?;
            }
            Ok(())
        }
    }
}
