//! cronhuman - one-shot cron expression explainer
//!
//! Validates an expression, prints the plain-English description, and lists
//! upcoming run times. Text by default, `--json` for machine consumers.

use clap::Parser;
use serde::Serialize;

use libcronhuman::{explain, next_runs, validate, CronhumanError, Result, ValidateOptions};

#[derive(Parser, Debug)]
#[command(name = "cronhuman")]
#[command(about = "Converts cron expressions to human-readable English and prints next run times", long_about = None)]
#[command(version)]
struct Cli {
    /// Cron expression to parse
    expression: String,

    /// How many upcoming run times to print (1-100)
    #[arg(short = 'n', long, default_value_t = 5)]
    next: usize,

    /// Timezone for output (default: system timezone)
    #[arg(long)]
    tz: Option<String>,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Only print the one-line human explanation (no next runs)
    #[arg(short, long)]
    quiet: bool,

    /// Support 6-field cron expressions with seconds
    #[arg(long)]
    seconds: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    expression: &'a str,
    description: String,
    #[serde(rename = "nextRuns", skip_serializing_if = "Option::is_none")]
    next_runs: Option<Vec<String>>,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        libcronhuman::logging::init_default();
    }

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    // Pre-flight checks on the arguments before touching the expression
    if let Some(tz) = &cli.tz {
        libcronhuman::engine::resolve_timezone(tz)?;
    }

    if cli.next < 1 || cli.next > 100 {
        return Err(CronhumanError::Count);
    }

    validate(
        &cli.expression,
        &ValidateOptions {
            timezone: cli.tz.clone(),
            allow_seconds: cli.seconds,
        },
    )?;

    let description = explain(&cli.expression)
        .map_err(|e| CronhumanError::Describe(e.to_string()))?;

    let runs = if cli.quiet {
        None
    } else {
        Some(next_runs(&cli.expression, cli.next, cli.tz.as_deref())?)
    };

    tracing::debug!(expression = %cli.expression, "report generated");

    let report = Report {
        expression: &cli.expression,
        description,
        next_runs: runs,
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    } else {
        println!("{}", report.description);
        if let Some(runs) = &report.next_runs {
            if !runs.is_empty() {
                println!("\nNext {} runs:", runs.len());
                for run in runs {
                    println!("- {}", run);
                }
            }
        }
    }

    Ok(())
}
