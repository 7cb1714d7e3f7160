//! CLI command definitions and the stdin decode filter.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use can_dbc::Database;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cantools")]
#[command(about = "Decode CAN frames against one or more DBC files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read `<iface> <hex_id> [<len>] <hex>...` lines from stdin and decode
    /// each against the loaded DBC files.
    Decode {
        /// One or more DBC files to load.
        dbfiles: Vec<PathBuf>,
    },
}

pub fn execute_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Decode { dbfiles } => decode_stdin(&dbfiles),
    }
}

fn decode_stdin(dbfiles: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::new();
    for path in dbfiles {
        db.add_dbc_file(path)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match decode_line(&db, &line) {
            Some(summary) => writeln!(out, "{line} :: {summary}")?,
            None => writeln!(out, "{line}")?,
        }
    }
    Ok(())
}

/// Parses `<iface> <hex_id> [<len>] <hex>...`, decodes it against `db`, and
/// formats `MSG_NAME(sig1: v1 , sig2: v2 , …)`. Returns `None` for anything
/// that fails to parse or whose id isn't in `db` — the caller passes such
/// lines through unchanged (spec §4.7).
fn decode_line(db: &Database, line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    let _iface = tokens.next()?;
    let hex_id = tokens.next()?;
    let frame_id = u32::from_str_radix(hex_id, 16).ok()?;

    let mut rest: Vec<&str> = tokens.collect();
    if let Some(first) = rest.first() {
        if first.starts_with('[') && first.ends_with(']') {
            rest.remove(0);
        }
    }

    let mut bytes = Vec::with_capacity(rest.len());
    for token in rest {
        bytes.push(u8::from_str_radix(token, 16).ok()?);
    }

    let message = db.lookup_message(frame_id).ok()?;
    let decoded = message.decode(&bytes).ok()?;

    let body = decoded
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(" , ");
    Some(format!("{}({} )", message.name(), body))
}
