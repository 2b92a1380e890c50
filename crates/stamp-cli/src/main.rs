//! `stamp` CLI — parse and format RFC 3339 timestamps from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse any RFC 3339 text and print the canonical UTC date-time
//! stamp parse 2016-02-01T00:00:00-11:00
//!
//! # Parse from stdin
//! echo 2016-12-17 | stamp parse
//!
//! # Force the input shape instead of auto-detection
//! stamp parse --form time 11:00:12Z
//!
//! # Print epoch milliseconds, or a JSON record
//! stamp parse --millis 2016-02-01T00:00:00Z
//! stamp parse --json 2016-02-01T00:00:00Z
//!
//! # Print the current instant
//! stamp now
//! stamp now --form date
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use stamp_core::{
    parse_date, parse_datetime, parse_time, serialize_date, serialize_datetime, serialize_time,
    Instant,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "stamp",
    version,
    about = "RFC 3339 timestamp parser and formatter"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse timestamp text and print the canonical UTC date-time
    Parse {
        /// Text to parse (reads from stdin if omitted)
        text: Option<String>,
        /// Input shape (auto-detected if omitted)
        #[arg(long, value_enum)]
        form: Option<Form>,
        /// Print epoch milliseconds instead of date-time text
        #[arg(long)]
        millis: bool,
        /// Print a JSON record with the input, canonical text, and milliseconds
        #[arg(long, conflicts_with = "millis")]
        json: bool,
    },
    /// Print the current instant
    Now {
        /// Output shape
        #[arg(long, value_enum, default_value = "datetime")]
        form: Form,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Form {
    Date,
    Time,
    #[value(name = "datetime")]
    DateTime,
}

impl Form {
    fn label(self) -> &'static str {
        match self {
            Form::Date => "date",
            Form::Time => "time",
            Form::DateTime => "date-time",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            text,
            form,
            millis,
            json,
        } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let text = text.trim();
            let form = form.unwrap_or_else(|| detect_form(text));
            let instant = parse_as(form, text)?;

            if millis {
                println!("{}", instant.as_millis());
            } else if json {
                let record = serde_json::json!({
                    "input": text,
                    "rfc3339": serialize_datetime(instant),
                    "millis": instant.as_millis(),
                });
                println!("{record}");
            } else {
                println!("{}", serialize_datetime(instant));
            }
        }
        Commands::Now { form } => {
            let now = Instant::now();
            let out = match form {
                Form::Date => serialize_date(now),
                Form::Time => serialize_time(now),
                Form::DateTime => serialize_datetime(now),
            };
            println!("{out}");
        }
    }

    Ok(())
}

/// Guess the input shape: a 'T' separator means a full date-time, a ':'
/// means a bare time of day, anything else is a date.
fn detect_form(text: &str) -> Form {
    if text.contains(['T', 't']) {
        Form::DateTime
    } else if text.contains(':') {
        Form::Time
    } else {
        Form::Date
    }
}

fn parse_as(form: Form, text: &str) -> Result<Instant> {
    let instant = match form {
        Form::Date => parse_date(text),
        Form::Time => parse_time(text),
        Form::DateTime => parse_datetime(text),
    };
    instant.with_context(|| format!("failed to parse {:?} as a {} string", text, form.label()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read from stdin")?;
    Ok(buf)
}
