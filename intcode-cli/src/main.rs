//! intcode - stored-program processor and amplifier pipelines
//! Command-line interface for running programs and searching phase settings

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use intcode_core::config::{self, PipelineConfig};
use intcode_core::opcode::{Opcode, ParamKind};
use intcode_core::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "intcode")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "intcode - stored-program processor and amplifier pipelines", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program with console input/output
    Run {
        /// Program image (comma or whitespace separated integers)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print the final memory as JSON
        #[arg(long)]
        dump: bool,
    },

    /// Run one series amplifier chain
    Amplify {
        /// Program image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Phase setting per stage, in stage order (e.g. 4,3,2,1,0)
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        phases: Vec<i64>,

        /// Value forwarded into stage 0 [default: INTCODE_INITIAL_INPUT or 0]
        #[arg(short, long, allow_hyphen_values = true)]
        initial: Option<i64>,
    },

    /// Find the phase permutation with the largest chain output
    Search {
        /// Program image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Phase set to permute [default: INTCODE_PHASES or 0,1,2,3,4]
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        phases: Option<Vec<i64>>,

        /// Value forwarded into stage 0 [default: INTCODE_INITIAL_INPUT or 0]
        #[arg(short, long, allow_hyphen_values = true)]
        initial: Option<i64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the noun/verb pair that makes Memory[0] equal a target
    Patch {
        /// Program image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Expected Memory[0] [default: INTCODE_PATCH_TARGET or 19690720]
        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<i64>,

        /// Exclusive upper bound for noun and verb [default: INTCODE_PATCH_MAX or 100]
        #[arg(short, long)]
        max: Option<i64>,
    },

    /// Show the instruction set
    Info,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run { input, dump } => run_command(&input, dump),
        Commands::Amplify { input, phases, initial } => amplify_command(&input, phases, initial),
        Commands::Search { input, phases, initial, json } => {
            search_command(&input, phases, initial, json)
        }
        Commands::Patch { input, target, max } => patch_command(&input, target, max),
        Commands::Info => {
            print_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "intcode=warn,intcode_core=warn",
        1 => "intcode=debug,intcode_core=debug",
        _ => "intcode=trace,intcode_core=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(path: &Path) -> Result<Memory> {
    ProgramLoader::load_file(path).with_context(|| format!("loading {}", path.display()))
}

fn format_phases(phases: &[i64]) -> String {
    phases
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

// ============================================================================
// Commands
// ============================================================================

fn run_command(input: &Path, dump: bool) -> Result<()> {
    let program = load(input)?;
    tracing::info!(cells = program.len(), "running {}", input.display());

    let output = Console::new(std::io::empty(), std::io::stdout());
    let mut cpu = Processor::new(program, Console::stdio(), output);
    let execution = cpu.run();

    if let RunState::Faulted(fault) = &execution.state {
        bail!("processor faulted after {} instructions: {}", cpu.cycles(), fault);
    }

    println!(
        "{} after {} instructions",
        "Halted".green().bold(),
        cpu.cycles()
    );
    if let Some(answer) = execution.answer() {
        println!("{} {}", "Memory[0]:".bold(), answer.to_string().cyan());
    }

    if dump {
        println!("{}", serde_json::to_string(&execution.memory)?);
    }

    Ok(())
}

fn amplify_command(input: &Path, phases: Vec<i64>, initial: Option<i64>) -> Result<()> {
    let program = load(input)?;
    let mut config = PipelineConfig::default().with_phases(phases);
    if let Some(initial) = initial {
        config = config.with_initial(initial);
    }

    let output = Pipeline::new(program)
        .run_with_config(&config)
        .with_context(|| format!("phases {}", format_phases(&config.phases)))?;

    println!(
        "{} {} {}",
        output.to_string().cyan().bold(),
        "<-".dimmed(),
        format_phases(&config.phases)
    );
    Ok(())
}

fn search_command(
    input: &Path,
    phases: Option<Vec<i64>>,
    initial: Option<i64>,
    json: bool,
) -> Result<()> {
    let program = load(input)?;
    let phases = phases.unwrap_or_else(|| config::PHASES.clone());
    let initial = initial.unwrap_or(*config::INITIAL_INPUT);

    let best = best_phase_setting(&program, &phases, initial)
        .with_context(|| format!("searching permutations of {}", format_phases(&phases)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&best)?);
    } else {
        println!(
            "{}: {}  ({} permutations)",
            best.output.to_string().cyan().bold(),
            format_phases(&best.phases),
            best.candidates
        );
    }
    Ok(())
}

fn patch_command(input: &Path, target: Option<i64>, max: Option<i64>) -> Result<()> {
    let program = load(input)?;
    let target = target.unwrap_or(*config::PATCH_TARGET);
    let max = max.unwrap_or(*config::PATCH_MAX);

    let Some(found) = find_noun_verb(&program, target, 0..max) else {
        bail!("no noun/verb in 0..{} produces {}", max, target);
    };

    println!(
        "{} noun={} verb={} ({} {})",
        "Found".green().bold(),
        found.noun,
        found.verb,
        "100*noun+verb =".dimmed(),
        found.code().to_string().cyan()
    );
    Ok(())
}

fn print_info() {
    println!("{}", "intcode instruction set".bold());
    println!();
    for op in Opcode::all() {
        let params = op
            .params()
            .iter()
            .map(|kind| match kind {
                ParamKind::Data => "data",
                ParamKind::Address => "addr",
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:>2}  {:<5} {}", op.code(), op.mnemonic().cyan(), params);
    }
    println!();
    println!("Parameter modes: 0 = position, 1 = immediate");
    println!("Environment: INTCODE_PHASES, INTCODE_INITIAL_INPUT, INTCODE_PATCH_TARGET, INTCODE_PATCH_MAX");
}
