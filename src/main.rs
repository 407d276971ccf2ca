//! Rolemap CLI - Reshape branch roster spreadsheets
//!
//! # Commands
//!
//! ```bash
//! rolemap map roster.xlsx -o Mapping.xlsx   # Full pipeline, xlsx output
//! rolemap map roster.csv                    # Full pipeline, CSV to stdout
//! rolemap check roster.xlsx                 # Verify required columns only
//! rolemap parse roster.csv                  # Dump parsed rows as JSON
//! rolemap roles                             # Show the role → column mapping
//! ```

use clap::{Parser, Subcommand};
use rolemap::{
    assignments_to_csv_string, map_roster, missing_columns, parse_csv_bytes, parse_sheet_file,
    required_columns, write_assignments_csv_file, write_assignments_xlsx, Role,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rolemap")]
#[command(about = "Reshape wide branch rosters into long role-assignment tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: roster file → assignment table
    Map {
        /// Input roster file (.xlsx or .csv)
        input: PathBuf,

        /// Output file; format chosen by extension (.xlsx or .csv).
        /// CSV goes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify that a roster carries every required column
    Check {
        /// Input roster file
        input: PathBuf,
    },

    /// Parse a roster file and output its rows as JSON
    Parse {
        /// Input roster file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the fixed role → column mapping
    Roles,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Map { input, output } => cmd_map(&input, output.as_deref()),
        Commands::Check { input } => cmd_check(&input),
        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),
        Commands::Roles => cmd_roles(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_map(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Processing: {}", input.display());

    let sheet = parse_sheet_file(input)?;
    eprintln!("   Format: {}", sheet.format.describe());
    eprintln!("   Rows: {}", sheet.rows.len());

    let result = map_roster(&sheet)?;
    eprintln!(
        "Reshaped {} roster rows into {} assignments ({} role slots scanned)",
        result.input_rows,
        result.assignments.len(),
        result.melted_rows
    );

    match output {
        Some(path) if is_workbook(path) => {
            write_assignments_xlsx(&result.assignments, path)?;
            eprintln!("Output written to: {}", path.display());
        }
        Some(path) => {
            write_assignments_csv_file(&result.assignments, path)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => {
            print!("{}", assignments_to_csv_string(&result.assignments)?);
        }
    }

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = parse_sheet_file(input)?;
    let missing = missing_columns(&sheet.headers);

    if missing.is_empty() {
        eprintln!(
            "OK: all {} required columns present ({} data rows)",
            required_columns().len(),
            sheet.rows.len()
        );
        Ok(())
    } else {
        Err(format!("Missing required columns: {}", missing.join(", ")).into())
    }
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Parsing: {}", input.display());

    let sheet = if delimiter.is_some() {
        let bytes = fs::read(input)?;
        parse_csv_bytes(&bytes, delimiter)?
    } else {
        parse_sheet_file(input)?
    };

    eprintln!("   Format: {}", sheet.format.describe());
    eprintln!("   Columns: {}", sheet.headers.join(", "));
    eprintln!("Parsed {} rows", sheet.rows.len());

    let json = serde_json::to_string_pretty(&sheet.rows)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_roles() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:<6} {:<18} {:<18} {}", "Role", "Name column", "Emp ID column", "Output");
    for role in Role::ALL {
        let (name_col, id_col) = role.source_columns();
        println!(
            "{:<6} {:<18} {:<18} {}",
            role.as_code(),
            name_col,
            id_col,
            role.collapse().as_code()
        );
    }
    Ok(())
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "xlsx" | "xlsm"))
        .unwrap_or(false)
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("Output written to: {}", p.display());
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
