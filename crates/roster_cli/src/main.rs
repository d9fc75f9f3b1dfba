//! CLI entry point for the roster engine.
//!
//! # Responsibility
//! - Provide a minimal executable to drive `roster_core` from a shell.
//! - Keep output deterministic for quick local sanity checks.
//!
//! # Commands
//!
//! - `list` - Print every record in insertion order
//! - `add` / `update` / `delete` - Mutate the roster and persist it
//! - `search` - Run one search strategy over the roster
//! - `sort` - Print a sorted view without touching the store
//! - `stats` - Print count, mean GPA and per-major counts
//! - `export` - Write the roster as CSV
//!
//! Without a command it prints the ping/version smoke lines.

use clap::{Parser, Subcommand};
use log::info;
use roster_core::{
    init_logging, RosterService, SearchStrategy, SortAlgorithm, Student, StudentField,
    StudentStore, DEFAULT_SNAPSHOT_FILE,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

type CliResult = Result<(), Box<dyn Error>>;

/// Student roster record management.
#[derive(Parser)]
#[command(name = "roster_cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the JSON roster snapshot
    #[arg(global = true, short, long, default_value = DEFAULT_SNAPSHOT_FILE)]
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every record
    List,

    /// Add a new record
    Add {
        /// 12-digit student number
        id: String,
        name: String,
        major: String,
        /// GPA between 0.00 and 4.00
        gpa: String,
    },

    /// Replace the record stored under OLD_ID
    Update {
        old_id: String,
        id: String,
        name: String,
        major: String,
        gpa: String,
    },

    /// Delete a record by id
    Delete { id: String },

    /// Search the roster (`field:value` narrows to one field)
    Search {
        /// linear, sequential or binary
        #[arg(value_parser = SearchStrategy::from_str)]
        strategy: SearchStrategy,
        query: String,
    },

    /// Print a sorted view of the roster
    Sort {
        /// bubble, insertion, selection, merge or shell
        #[arg(value_parser = SortAlgorithm::from_str)]
        algorithm: SortAlgorithm,
        /// id, name, major or gpa
        #[arg(value_parser = StudentField::from_str)]
        field: StudentField,
    },

    /// Print roster statistics
    Stats,

    /// Export the roster as CSV
    Export { path: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("roster_core ping={}", roster_core::ping());
        println!("roster_core version={}", roster_core::core_version());
        return ExitCode::SUCCESS;
    };

    if let Err(err) = init_logging_from_env() {
        eprintln!("warning: {err}");
    }

    match run(cli.snapshot, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Enables file logging when `ROSTER_LOG_DIR` is set.
fn init_logging_from_env() -> CliResult {
    let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") else {
        return Ok(());
    };
    let level = std::env::var("ROSTER_LOG_LEVEL")
        .unwrap_or_else(|_| roster_core::default_log_level().to_string());
    init_logging(&level, &log_dir)?;
    Ok(())
}

fn run(snapshot: PathBuf, command: Commands) -> CliResult {
    let mut service = RosterService::new(StudentStore::open(snapshot));

    match command {
        Commands::List => {
            info!("event=cli_command module=cli command=list");
            print_students(&service.list_students());
        }
        Commands::Add {
            id,
            name,
            major,
            gpa,
        } => {
            info!("event=cli_command module=cli command=add");
            service.add_student(Student::parse(&id, &name, &major, &gpa)?)?;
            println!("added {id}");
        }
        Commands::Update {
            old_id,
            id,
            name,
            major,
            gpa,
        } => {
            info!("event=cli_command module=cli command=update");
            service.update_student(&old_id, Student::parse(&id, &name, &major, &gpa)?)?;
            println!("updated {old_id}");
        }
        Commands::Delete { id } => {
            info!("event=cli_command module=cli command=delete");
            let removed = service.delete_student(&id)?;
            println!("deleted {}", removed.id);
        }
        Commands::Search { strategy, query } => {
            info!("event=cli_command module=cli command=search strategy={strategy}");
            let hits = service.search_raw(strategy, &query);
            if hits.is_empty() {
                println!("no matches");
            }
            for hit in hits {
                println!("#{} {}", hit.index, format_student(&hit.student));
            }
        }
        Commands::Sort { algorithm, field } => {
            info!("event=cli_command module=cli command=sort algorithm={algorithm} field={field}");
            print_students(&service.sort(algorithm, field));
        }
        Commands::Stats => {
            info!("event=cli_command module=cli command=stats");
            let stats = service.stats();
            println!("total={} mean_gpa={}", stats.total, stats.mean_gpa);
            for (major, count) in &stats.by_major {
                println!("  {major}: {count}");
            }
        }
        Commands::Export { path } => {
            info!("event=cli_command module=cli command=export");
            let students = service.list_students();
            service.export_csv_file(&path, &students)?;
            println!(
                "exported {} records to {}",
                students.len(),
                path.display()
            );
        }
    }
    Ok(())
}

fn print_students(students: &[Student]) {
    for student in students {
        println!("{}", format_student(student));
    }
}

fn format_student(student: &Student) -> String {
    format!(
        "{}  {:<30}  {:<20}  {}",
        student.id, student.name, student.major, student.gpa
    )
}
