//! Unit tests for the CLI commands and argument parsers.

use super::commands::{parse_hash_base, parse_weight_range};
use super::{
    AbacabaCommand, AntiHashCommand, Cli, CliError, Command, ExecutionSummary, GraphCommand,
    GraphOutput, ThueMorseCommand, TreeCommand, WeightRange, render_summary, run_cli,
};

use clap::Parser;
use gauntlet_core::{GenerateError, Weight, strings::HashBase};
use rstest::rstest;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn seeded(command: Command) -> Cli {
    Cli {
        seed: Some(17),
        command,
    }
}

fn graph_command(vertices: usize, edges: usize, output: GraphOutput) -> Command {
    Command::Graph(GraphCommand {
        vertices,
        edges,
        directed: false,
        loops: false,
        multi_edges: false,
        output,
    })
}

fn rendered(summary: &ExecutionSummary) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[rstest]
#[case("1:5", WeightRange { low: 1, high: 5 })]
#[case(" -3 : 3 ", WeightRange { low: -3, high: 3 })]
#[case("7:7", WeightRange { low: 7, high: 7 })]
fn weight_ranges_parse(#[case] raw: &str, #[case] expected: WeightRange) {
    assert_eq!(parse_weight_range(raw), Ok(expected));
}

#[rstest]
#[case("5")]
#[case("a:b")]
#[case("5:1")]
fn weight_ranges_reject_malformed_input(#[case] raw: &str) {
    assert!(parse_weight_range(raw).is_err());
}

#[rstest]
fn hash_bases_parse_and_validate() {
    assert_eq!(
        parse_hash_base("1000000007:31"),
        Ok(HashBase::new(1_000_000_007, 31).expect("valid base"))
    );
    let err = parse_hash_base("7:9").expect_err("base must be below the modulus");
    assert!(err.contains("0 < base < modulus"), "unexpected message: {err}");
    assert!(parse_hash_base("7").is_err());
}

#[rstest]
fn clap_accepts_repeated_bases_and_global_seed() {
    let cli = Cli::try_parse_from([
        "gauntlet",
        "anti-hash",
        "--base",
        "1000000007:31",
        "--base",
        "998244353:257",
        "--length",
        "50",
        "--seed",
        "3",
    ])
    .expect("arguments parse");
    assert_eq!(cli.seed, Some(3));
    let Command::AntiHash(command) = cli.command else {
        panic!("expected anti-hash command");
    };
    assert_eq!(command.bases.len(), 2);
    assert_eq!(command.alphabet, "a-z");
    assert_eq!(command.length, Some(50));
}

#[rstest]
fn clap_rejects_shuffle_with_normalize() {
    let result = Cli::try_parse_from(["gauntlet", "graph", "4", "3", "--shuffle", "--normalize"]);
    assert!(result.is_err());
}

#[rstest]
fn graph_command_prints_header_and_edges() -> TestResult {
    let output = GraphOutput {
        normalize: true,
        edge_weights: Some(WeightRange { low: 2, high: 2 }),
        ..GraphOutput::default()
    };
    let summary = run_cli(seeded(graph_command(5, 4, output)))?;
    let text = rendered(&summary)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"5 4"));
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().skip(1).all(|line| line.ends_with(" 2")));
    Ok(())
}

#[rstest]
fn graph_command_is_reproducible_for_a_seed() -> TestResult {
    let output = GraphOutput {
        shuffle: true,
        ..GraphOutput::default()
    };
    let first = rendered(&run_cli(seeded(graph_command(9, 12, output.clone())))?)?;
    let second = rendered(&run_cli(seeded(graph_command(9, 12, output)))?)?;
    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn graph_command_reports_unsatisfiable_shapes() {
    let err = run_cli(seeded(graph_command(3, 4, GraphOutput::default())))
        .expect_err("three vertices hold at most three edges");
    assert!(matches!(
        err,
        CliError::Generate(GenerateError::TooManyEdges {
            requested: 4,
            capacity: 3,
        })
    ));
    assert_eq!(err.code(), "GENERATE_TOO_MANY_EDGES");
}

#[rstest]
fn tree_command_applies_vertex_weights() -> TestResult {
    let summary = run_cli(seeded(Command::Tree(TreeCommand {
        vertices: 6,
        output: GraphOutput {
            vertex_weights: Some(WeightRange { low: 4, high: 4 }),
            one_based: true,
            no_header: true,
            ..GraphOutput::default()
        },
    })))?;
    let ExecutionSummary::Graph { graph, .. } = &summary else {
        panic!("tree command yields a graph");
    };
    assert!(graph.is_connected());
    assert_eq!(graph.vertex_weight(5)?, &Weight::Int(4));

    let text = rendered(&summary)?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("4 4 4 4 4 4"));
    assert_eq!(lines.count(), 5);
    Ok(())
}

#[rstest]
fn anti_hash_command_prints_two_colliding_lines() -> TestResult {
    let base = HashBase::new(1_000_003, 29)?;
    let summary = run_cli(seeded(Command::AntiHash(AntiHashCommand {
        bases: vec![base],
        alphabet: "a-c".into(),
        length: Some(30),
        word_limit: 64,
    })))?;
    let text = rendered(&summary)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_ne!(lines[0], lines[1]);
    assert_eq!(base.hash(lines[0]), base.hash(lines[1]));
    assert!(lines.iter().all(|line| line.len() == 30));
    Ok(())
}

#[rstest]
fn anti_hash_command_reports_string_errors() {
    let err = run_cli(seeded(Command::AntiHash(AntiHashCommand {
        bases: Vec::new(),
        alphabet: "x".into(),
        length: None,
        word_limit: 64,
    })))
    .expect_err("single character alphabet");
    assert_eq!(err.code(), "STRING_ALPHABET_TOO_SMALL");
}

#[rstest]
#[case(Command::ThueMorse(ThueMorseCommand { length: 8, first: '0', second: '1' }), "01101001\n")]
#[case(Command::Abacaba(AbacabaCommand { length: 7, first: 'p' }), "pqprpqp\n")]
fn sequence_commands_print_one_line(#[case] command: Command, #[case] expected: &str) -> TestResult {
    let summary = run_cli(Cli {
        seed: None,
        command,
    })?;
    assert_eq!(rendered(&summary)?, expected);
    Ok(())
}
