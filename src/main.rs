use anyhow::Context;
use chronal::cycle::{CycleDetector, Step, DEFAULT_MAX_ITERATIONS};
use chronal::output::{self, OutputFormat};
use chronal::{next_value, Sequence, SolveError};
use clap::{Args, Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the values that halt the program soonest and latest
    Solve(SolveArgs),
    /// Runs one pass of the program from a register value and prints the result
    Pass(PassArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    #[clap(long = "max-iterations", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u64,
    #[clap(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Default for SolveArgs {
    fn default() -> Self {
        SolveArgs {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Args, Debug)]
struct PassArgs {
    register: u32,
    #[clap(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn run_solve(args: &SolveArgs) -> Result<(), SolveError> {
    info!("Solving with at most {} iterations", args.max_iterations);

    if args.format == OutputFormat::Json {
        let report = chronal::solve_with(args.max_iterations)?;
        println!("{}", output::render_report(&report, args.format));
        return Ok(());
    }

    // Text output reports part 1 as soon as it is known.
    let mut detector = CycleDetector::new(args.max_iterations);
    for value in Sequence::new() {
        match detector.push(value)? {
            Step::First(first) => println!("{}", output::part1_line(first)),
            Step::Fresh(_) => {}
            Step::Repeat(report) => {
                info!(
                    "Cycle of length {} starts at index {}",
                    report.cycle_len(),
                    report.cycle_start
                );
                println!("{}", output::part2_line(report.last_before_repeat));
                return Ok(());
            }
        }
    }

    Err(SolveError::SequenceExhausted {
        produced: detector.distinct(),
    })
}

fn run_pass(args: &PassArgs) {
    let value = next_value(args.register);
    info!("Single pass from register {}", args.register);
    println!("{}", output::render_pass(args.register, value, args.format));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        None => run_solve(&SolveArgs::default()).context("Failed to solve activation program")?,
        Some(Commands::Solve(args)) => {
            run_solve(args).context("Failed to solve activation program")?
        }
        Some(Commands::Pass(args)) => run_pass(args),
    }

    Ok(())
}
