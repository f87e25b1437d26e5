//! bn-assert command-line checker
//!
//! Evaluates a registered big-number matcher over operands given on the
//! command line, the same way a test would through `expect(..)`:
//! - Operands accept decimal, digit-grouped ("1,000") and 0x-prefixed hex input
//! - Exit status 0 on pass, 1 on a failed comparison, 2 on bad input
//!
//! Run with: cargo run -- check bnLt 3500000000000000000 4000000000000000000
//! Collections: cargo run -- check-all --expected 100 --expected 200 --received 100 --received 201

use bn_assert::{init_matchers, Amount, ComparisonResult, MatcherArgs, MatcherKind};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, error, info, info_span, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for the matcher checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase output verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered matcher names
    List,

    /// Evaluate a scalar matcher: <matcher> <expected> <received>
    Check {
        matcher: String,
        #[arg(allow_hyphen_values = true)]
        expected: String,
        #[arg(allow_hyphen_values = true)]
        received: String,

        /// Context appended to the diagnostic
        #[arg(long, default_value = "")]
        message: String,

        /// Print the result as a JSON object instead of the diagnostic text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Evaluate collectionBnEqual over two sequences
    CheckAll {
        #[arg(long = "expected", allow_hyphen_values = true)]
        expected: Vec<String>,
        #[arg(long = "received", allow_hyphen_values = true)]
        received: Vec<String>,

        #[arg(long, default_value = "")]
        message: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

const EXIT_FAILED: i32 = 1;
const EXIT_BAD_INPUT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    let registry = init_matchers();

    let (result, json) = match cli.command {
        Command::List => {
            for name in registry.names() {
                println!("{}", name);
            }
            return;
        }
        Command::Check {
            matcher,
            expected,
            received,
            message,
            json,
        } => {
            let _span = info_span!("check", matcher = %matcher).entered();
            let kind = matcher.parse::<MatcherKind>().unwrap_or_else(|err| {
                warn!("{}", err);
                std::process::exit(EXIT_BAD_INPUT);
            });
            let expected = parse_operand(&expected);
            let received = parse_operand(&received);
            debug!(%expected, %received, "parsed operands");

            let result = registry.invoke(
                kind.name(),
                MatcherArgs::Scalar {
                    expected: &expected,
                    received: &received,
                    message: &message,
                },
            );
            (result, json)
        }
        Command::CheckAll {
            expected,
            received,
            message,
            json,
        } => {
            let _span = info_span!("check_all").entered();
            let expected: Vec<Amount> = expected.iter().map(|s| parse_operand(s)).collect();
            let received: Vec<Amount> = received.iter().map(|s| parse_operand(s)).collect();
            debug!(
                expected_len = expected.len(),
                received_len = received.len(),
                "parsed sequences"
            );

            let result = registry.invoke(
                MatcherKind::CollectionBnEqual.name(),
                MatcherArgs::Collection {
                    expected: &expected,
                    received: &received,
                    message: &message,
                },
            );
            (result, json)
        }
    };

    match result {
        Ok(result) => report(&result, json),
        Err(err) => {
            error!("{}", err);
            std::process::exit(EXIT_BAD_INPUT);
        }
    }
}

fn parse_operand(input: &str) -> Amount {
    Amount::parse(input).unwrap_or_else(|err| {
        error!("{}", err);
        std::process::exit(EXIT_BAD_INPUT);
    })
}

/// Print the outcome and exit non-zero on a failed comparison
fn report(result: &ComparisonResult, json: bool) {
    if json {
        match result.to_json() {
            Ok(line) => println!("{}", line),
            Err(err) => {
                error!("{}", err);
                std::process::exit(EXIT_BAD_INPUT);
            }
        }
    } else {
        println!("{}", result.message());
    }

    if result.passed {
        info!("  ✓ {} passed", result.matcher);
    } else {
        error!("  ✗ {} failed", result.matcher);
        std::process::exit(EXIT_FAILED);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn,bn_assert=info",
        1 => "info,bn_assert=debug",
        _ => "debug,bn_assert=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    use tracing_tree::HierarchicalLayer;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(false)
                .with_bracketed_fields(true),
        )
        .init();
}
