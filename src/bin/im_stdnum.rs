//! Command line interface for standard number validation

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use im_stdnum::{detect, NumberKind, StandardNumber};

#[derive(Parser)]
#[command(name = "im-stdnum", about = "Validate, normalize, and format standard numbers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a value against one scheme
    Validate {
        /// Scheme name, e.g. isbn, issn, orcid
        kind: String,
        /// The raw input value
        value: String,
        /// Repair a missing or wrong check digit
        #[arg(long)]
        repair: bool,
        /// Prefer the thirteen-digit form (isbn only)
        #[arg(long)]
        ean: bool,
        /// Emit a JSON record instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Try every scheme and report the ones that accept the value
    Detect {
        /// The raw input value
        value: String,
        /// Emit JSON records instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Record {
    kind: NumberKind,
    value: String,
    formatted: Option<String>,
}

fn record(number: &mut dyn StandardNumber) -> Option<Record> {
    let value = number.normalized_value()?.to_string();
    Some(Record {
        kind: number.kind(),
        value,
        formatted: number.format(),
    })
}

fn print_record(record: &Record, json: bool) {
    if json {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("error: {err}"),
        }
    } else {
        match &record.formatted {
            Some(formatted) => println!("{} {} ({})", record.kind.name(), record.value, formatted),
            None => println!("{} {}", record.kind.name(), record.value),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Validate {
            kind,
            value,
            repair,
            ean,
            json,
        } => {
            let Some(kind) = NumberKind::from_name(&kind) else {
                eprintln!("error: unknown scheme: {kind}");
                return ExitCode::FAILURE;
            };
            let mut number = kind.make();
            number.set(&value);
            number.create_checksum(repair);
            if ean && kind == NumberKind::Isbn {
                // rebuild as a long-form-preferred handler
                let mut isbn = im_stdnum::Isbn::new();
                isbn.ean(true);
                isbn.set(&value);
                isbn.create_checksum(repair);
                number = Box::new(isbn);
            }
            number.normalize();
            if let Err(err) = number.verify() {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            match record(number.as_mut()) {
                Some(record) => print_record(&record, json),
                None => {
                    eprintln!("error: preferred form not derivable");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Command::Detect { value, json } => {
            let mut hits = detect(&value);
            if hits.is_empty() {
                eprintln!("error: no scheme accepts the input");
                return ExitCode::FAILURE;
            }
            for number in &mut hits {
                if let Some(record) = record(number.as_mut()) {
                    print_record(&record, json);
                }
            }
            ExitCode::SUCCESS
        }
    }
}
