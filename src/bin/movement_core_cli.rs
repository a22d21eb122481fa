use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use movement_core::{
    build_info,
    cards::ExpirationDateGenerator,
    config::{Config, ConfigManager},
    core::services::MovementReportService,
    init,
    storage::{JsonMovementStorage, MovementStorage},
    FailurePolicy,
};

#[derive(Parser, Debug)]
#[command(name = "movement_core_cli", version, about = "Export and report banking movements")]
struct Cli {
    /// Fail on I/O and parse errors instead of logging them
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-export a movement file into the configured export directory
    Export {
        #[arg(short = 'i', long = "input")]
        input: PathBuf,
        /// Destination file (defaults to <export dir>/movements.json)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Summarize the movements stored in a JSON file
    Import {
        input: PathBuf,
    },
    /// Render a PDF report for one movement or for the whole file
    Report {
        #[arg(short = 'i', long = "input")]
        input: PathBuf,
        /// Report a single movement by id
        #[arg(long)]
        id: Option<String>,
    },
    /// Print generated card expiration dates
    ExpDate {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
        #[arg(long, env = "MOVEMENT_CORE_SEED")]
        seed: Option<u64>,
    },
    /// Show build metadata and resolved directories
    Info,
}

fn main() {
    init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let manager = ConfigManager::new();
    let mut config = manager.load()?;
    if cli.strict {
        config.failure_policy = FailurePolicy::Strict;
    }
    let service = MovementReportService::from_config(&config, manager.base_dir());

    match cli.command {
        Command::Export { input, output } => {
            let movements = service.import_from(&input)?;
            let path = match output {
                Some(path) => {
                    JsonMovementStorage::new(config.failure_policy)
                        .export_json(&path, &movements)?;
                    path
                }
                None => service.export(&movements)?,
            };
            println!("Exported {} movement(s) to {}", movements.len(), path.display());
        }
        Command::Import { input } => {
            let movements = service.import_from(&input)?;
            println!("{} movement(s) loaded from {}", movements.len(), input.display());
            for movement in &movements {
                println!(
                    "{}  {}  {}  {}",
                    movement.id, movement.type_movement, movement.amount, movement.balance
                );
            }
        }
        Command::Report { input, id } => {
            let movements = service.import_from(&input)?;
            let path = match id {
                Some(id) => {
                    let movement = MovementReportService::find(&movements, &id)?;
                    service.report_movement(movement)?
                }
                None => service.report_movements(&movements)?,
            };
            println!("Report written to {}", path.display());
        }
        Command::ExpDate { count, seed } => {
            let mut generator = match seed {
                Some(seed) => ExpirationDateGenerator::seeded(seed),
                None => ExpirationDateGenerator::new(),
            };
            for _ in 0..count {
                println!("{}", generator.generate());
            }
        }
        Command::Info => print_info(&config, &manager),
    }
    Ok(())
}

fn print_info(config: &Config, manager: &ConfigManager) {
    let info = build_info();
    println!("movement_core {} ({})", info.version, info.git_hash);
    println!("built {} for {} [{}]", info.timestamp, info.target, info.profile);
    println!("config: {}", manager.path().display());
    println!(
        "exports: {}",
        config.resolve_export_dir(manager.base_dir()).display()
    );
    println!(
        "reports: {}",
        config.resolve_report_dir(manager.base_dir()).display()
    );
    println!("failure policy: {:?}", config.failure_policy);
}
