//! Command-line harness for the RFC 3339 codec.
//!
//! Prints the current time, parses and renders timestamps, and times the
//! parse/format loops.

use std::hint::black_box;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rfc3339::{OffsetMode, SystemClock, Timestamp, canonical_len, format_into, now_timestamp, parse};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "rfc3339", version, about = "RFC 3339 timestamp parser and formatter")]
struct App {
    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current time
    Now {
        /// Fixed UTC offset, `Z` or `±HH:MM`
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
    },
    /// Parse a timestamp and print its fields
    Parse {
        input: String,
        /// Emit the fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a Unix instant
    Format {
        /// Seconds since 1970-01-01T00:00:00Z
        #[arg(long, allow_hyphen_values = true)]
        unix: i64,
        /// Sub-second fraction in nanoseconds
        #[arg(long, default_value_t = 0)]
        nanos: u32,
        /// Fixed UTC offset, `Z` or `±HH:MM`
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
    },
    /// Time the parse and format loops
    Bench {
        #[arg(long, default_value_t = 1_000_000)]
        iterations: u32,
    },
}

#[derive(Debug, Serialize)]
struct ParsedFields {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanos: u32,
    utc_offset_seconds: i32,
    unix_seconds: i64,
}

impl From<&Timestamp> for ParsedFields {
    fn from(ts: &Timestamp) -> Self {
        let c = &ts.calendar;
        Self {
            year: c.year,
            month: c.month,
            day: c.day,
            hour: c.hour,
            minute: c.minute,
            second: c.second,
            nanos: ts.nanos,
            utc_offset_seconds: c.utc_offset_seconds,
            unix_seconds: ts.unix_seconds(),
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parses `Z` or `±HH:MM` by running the suffix through the full grammar.
fn parse_offset(offset: Option<&str>) -> Result<(i32, OffsetMode)> {
    let Some(offset) = offset else {
        return Ok((0, OffsetMode::Utc));
    };
    let stamp = format!("2000-01-01T00:00:00{offset}");
    let ts = parse(&stamp).with_context(|| format!("invalid offset {offset:?}"))?;
    let mode = if offset == "Z" {
        OffsetMode::Utc
    } else {
        OffsetMode::Local
    };
    Ok((ts.calendar.utc_offset_seconds, mode))
}

fn render(ts: &Timestamp, mode: OffsetMode) -> Result<String> {
    let mut buf = [0u8; rfc3339::limits::MAX_CANONICAL_LEN];
    let len = format_into(&ts.calendar, ts.nanos, mode, &mut buf)?;
    Ok(String::from_utf8(buf[..len].to_vec())?)
}

fn cmd_now(offset: Option<&str>) -> Result<()> {
    let (seconds, mode) = parse_offset(offset)?;
    let now = now_timestamp(&SystemClock, seconds)?;
    debug!(unix_seconds = now.unix_seconds(), nanos = now.nanos, "sampled clock");
    println!("{}", render(&now, mode)?);
    Ok(())
}

fn cmd_parse(input: &str, json: bool) -> Result<bool> {
    let ts = match parse(input) {
        Ok(ts) => ts,
        Err(err) => {
            debug!(code = err.code().code(), "parse failed");
            if json {
                let report = serde_json::json!({
                    "error": err.code().code(),
                    "message": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                eprintln!("error: {err}");
            }
            return Ok(false);
        }
    };

    let fields = ParsedFields::from(&ts);
    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        println!("Date:   {:04}-{:02}-{:02}", fields.year, fields.month, fields.day);
        println!(
            "Time:   {:02}:{:02}:{:02}.{:09}",
            fields.hour, fields.minute, fields.second, fields.nanos
        );
        println!("Offset: {}s", fields.utc_offset_seconds);
        println!("Unix:   {}", fields.unix_seconds);
        println!("Canonical: {}", render(&ts, ts.offset_mode())?);
    }
    Ok(true)
}

fn cmd_format(unix: i64, nanos: u32, offset: Option<&str>) -> Result<()> {
    let (seconds, mode) = parse_offset(offset)?;
    let ts = Timestamp::from_unix(unix, nanos, seconds)?;
    println!("{}", render(&ts, mode)?);
    Ok(())
}

const BENCH_INPUTS: &[&str] = &[
    "1996-12-19T16:39:57.001-08:00",
    "2000-02-29T00:00:00Z",
    "2022-08-24T20:27:00.000048+03:00",
    "2024-03-15T14:30:00.123456789Z",
];

fn cmd_bench(iterations: u32) -> Result<()> {
    if iterations == 0 {
        bail!("iterations must be positive");
    }
    info!(iterations, inputs = BENCH_INPUTS.len(), "starting benchmark");

    let parsed: Vec<Timestamp> = BENCH_INPUTS
        .iter()
        .map(|s| parse(s))
        .collect::<Result<_, _>>()?;

    let t0 = Instant::now();
    for _ in 0..iterations {
        for input in BENCH_INPUTS {
            black_box(parse(black_box(input))?);
        }
    }
    let parse_time = t0.elapsed();

    let mut buf = [0u8; rfc3339::limits::MAX_CANONICAL_LEN];
    let t1 = Instant::now();
    for _ in 0..iterations {
        for ts in &parsed {
            black_box(format_into(
                &ts.calendar,
                ts.nanos,
                OffsetMode::Local,
                black_box(&mut buf),
            )?);
        }
    }
    let format_time = t1.elapsed();

    let ops = iterations as f64 * BENCH_INPUTS.len() as f64;
    println!("=== Benchmark ({} ops each) ===", ops);
    println!(
        "  parse:  {:?} total, {:.1} ns/op",
        parse_time,
        parse_time.as_nanos() as f64 / ops
    );
    println!(
        "  format: {:?} total, {:.1} ns/op ({} bytes/op)",
        format_time,
        format_time.as_nanos() as f64 / ops,
        canonical_len(OffsetMode::Local)
    );
    Ok(())
}

fn main() -> Result<ExitCode> {
    let app = App::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Now { offset } => cmd_now(offset.as_deref())?,
        Commands::Parse { input, json } => {
            if !cmd_parse(&input, json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Format {
            unix,
            nanos,
            offset,
        } => cmd_format(unix, nanos, offset.as_deref())?,
        Commands::Bench { iterations } => cmd_bench(iterations)?,
    }
    Ok(ExitCode::SUCCESS)
}
