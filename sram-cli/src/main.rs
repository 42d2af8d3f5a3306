use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sram_loader::{load_program, Loaded};
use sram_runtime::{read_snapshot, write_snapshot, Engine};
use sram_search::{format_dump, format_report, run_dump, Search, SearchConfig};
use sram_spec::{Program, DEFAULT_DUMP_ITERATIONS, DEFAULT_INNER_ITERATIONS, DEFAULT_OUTER_ITERATIONS};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sram")]
#[command(about = "Simulate cartridge SRAM corruption and search for planted jumps", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Treat a behavior file that stops loading early as an error
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search seed x probe iterations for jump opcodes in the signature window
    Search {
        /// Initial SRAM image
        #[arg(long, default_value = "sram_start.dmp")]
        snapshot: PathBuf,

        /// Behavior advancing the seed state once per outer iteration
        #[arg(long, default_value = "behavior_c6.txt")]
        seed_program: PathBuf,

        /// Behavior run repeatedly on each seed
        #[arg(long, default_value = "behavior_dc.txt")]
        probe_program: PathBuf,

        /// Outer (seed) iterations
        #[arg(long, default_value_t = DEFAULT_OUTER_ITERATIONS)]
        outer: u32,

        /// Inner (probe) iterations per seed
        #[arg(long, default_value_t = DEFAULT_INNER_ITERATIONS)]
        inner: u32,
    },

    /// Print the signature window after each pass of one behavior
    Dump {
        /// Initial SRAM image
        #[arg(long, default_value = "sram_start.dmp")]
        snapshot: PathBuf,

        /// Behavior to run
        #[arg(long, default_value = "behavior_1f.txt")]
        program: PathBuf,

        /// Number of passes
        #[arg(long, default_value_t = DEFAULT_DUMP_ITERATIONS)]
        iterations: usize,

        /// Where to write the final SRAM image
        #[arg(long, default_value = "sram_noice.dmp")]
        output: PathBuf,
    },

    /// List a behavior file as decoded instructions
    Disasm {
        /// Behavior file
        program: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_behavior(path: &Path, strict: bool) -> Result<Program> {
    let Loaded { program, stopped } = load_program(path)
        .with_context(|| format!("reading behavior file {}", path.display()))?;

    if let Some(err) = stopped {
        if strict {
            return Err(err).with_context(|| format!("parsing {}", path.display()));
        }
        warn!(path = %path.display(), "{err}");
    }

    let invalid = program.invalid_count();
    if invalid > 0 {
        warn!(
            path = %path.display(),
            invalid,
            "behavior contains unknown operations; passes reaching them will fail"
        );
    }
    info!(path = %path.display(), instructions = program.len(), "loaded behavior");
    Ok(program)
}

fn run_search(
    snapshot: &Path,
    seed_program: &Path,
    probe_program: &Path,
    config: SearchConfig,
    strict: bool,
) -> Result<()> {
    info!("reading seeded SRAM data");
    let sram = read_snapshot(snapshot)
        .with_context(|| format!("reading snapshot {}", snapshot.display()))?;
    let seed = Engine::with_program(sram, read_behavior(seed_program, strict)?);
    let probe = read_behavior(probe_program, strict)?;

    let mut search = Search::new(seed, probe, config)?;
    let outcome = search.run()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(format_report(&outcome.report).as_bytes())?;
    stdout.flush()?;

    info!(
        "reachable addresses: {:.2}% ({}/65536)",
        outcome.report.coverage() * 100.0,
        outcome.report.unique_addresses()
    );
    Ok(())
}

fn run_dump_mode(
    snapshot: &Path,
    program: &Path,
    iterations: usize,
    output: &Path,
    strict: bool,
) -> Result<()> {
    let sram = read_snapshot(snapshot)
        .with_context(|| format!("reading snapshot {}", snapshot.display()))?;
    let mut engine = Engine::with_program(sram, read_behavior(program, strict)?);

    let windows = run_dump(&mut engine, iterations)?;
    print!("{}", format_dump(&windows));

    write_snapshot(output, engine.sram())
        .with_context(|| format!("writing snapshot {}", output.display()))?;
    info!(path = %output.display(), "wrote final SRAM image");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Search {
            snapshot,
            seed_program,
            probe_program,
            outer,
            inner,
        } => {
            let config = SearchConfig::new(*outer, *inner)?;
            run_search(snapshot, seed_program, probe_program, config, cli.strict)
        }
        Command::Dump {
            snapshot,
            program,
            iterations,
            output,
        } => run_dump_mode(snapshot, program, *iterations, output, cli.strict),
        Command::Disasm { program } => {
            let program = read_behavior(program, cli.strict)?;
            print!("{program}");
            Ok(())
        }
    }
}
