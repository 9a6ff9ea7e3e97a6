use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hashing::Algorithm;

mod discovery;
mod input;

use crate::discovery::{discover_files, Depth};

/// Name printed in place of a path for messages read from stdin
const STDIN_NAME: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "hashing")]
#[command(version, about = "hashing - compute hash algorithm checksum", long_about = None)]
struct Cli {
    /// Files or directories to hash. Without any, or for `-`, the message is read from stdin
    #[arg(value_name = "FILE")]
    paths: Vec<PathBuf>,

    /// Hash algorithm to use (sha256, md5)
    #[arg(short, long, value_name = "ALGORITHM", default_value_t = Algorithm::Sha256)]
    algorithm: Algorithm,

    /// Directory depth limit, -1 for no limit
    #[arg(short, long, value_name = "DEPTH", default_value = "1", allow_negative_numbers = true)]
    depth: Depth,

    /// Concatenate all files into one message
    #[arg(short, long)]
    concat: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Prints failures the way the tool reports them and keeps track of whether any occurred.
struct Report {
    failed: bool,
}

impl Report {
    fn failure(&mut self, path: &Path, reason: impl std::fmt::Display) {
        eprintln!("hashing: {}: {reason}", path.display());
        self.failed = true;
    }
}

fn print_digest(out: &mut impl Write, digest: &str, name: Option<&str>) -> Result<()> {
    let written = match name {
        Some(name) => writeln!(out, "{digest}  {name}"),
        None => writeln!(out, "{digest}"),
    };

    written.context("failed to write digest")
}

fn hash_stdin(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let message = input::read_stdin()?;
    let digest = hashing::digest(cli.algorithm, &message)?;
    print_digest(out, &digest, Some(STDIN_NAME))
}

fn hash_concatenated(cli: &Cli, out: &mut impl Write, report: &mut Report) -> Result<()> {
    let mut files = Vec::new();
    for path in &cli.paths {
        match discover_files(path, cli.depth) {
            Ok(found) => files.extend(found),
            Err(err) => report.failure(path, err),
        }
    }

    let message = input::read_concatenated(&files)?;
    let digest = hashing::digest(cli.algorithm, &message)?;
    print_digest(out, &digest, None)
}

fn hash_each(cli: &Cli, out: &mut impl Write, report: &mut Report) -> Result<()> {
    for path in &cli.paths {
        if path.as_os_str() == STDIN_NAME {
            hash_stdin(cli, out)?;
            continue;
        }

        let files = match discover_files(path, cli.depth) {
            Ok(files) => files,
            Err(err) => {
                report.failure(path, err);
                continue;
            }
        };

        for file in files {
            let digest = input::read_file(&file)
                .and_then(|message| hashing::digest(cli.algorithm, &message).map_err(Into::into));

            match digest {
                Ok(digest) => print_digest(out, &digest, Some(&file.display().to_string()))?,
                Err(err) => report.failure(&file, format!("{err:#}")),
            }
        }
    }

    Ok(())
}

/// Runs the tool and returns whether every path could be hashed.
fn run(cli: &Cli) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut report = Report { failed: false };

    log::debug!("hashing {} paths with {}", cli.paths.len(), cli.algorithm);

    if cli.paths.is_empty() {
        hash_stdin(cli, &mut out)?;
    } else if cli.concat {
        hash_concatenated(cli, &mut out, &mut report)?;
    } else {
        hash_each(cli, &mut out, &mut report)?;
    }

    out.flush().context("failed to flush stdout")?;

    Ok(!report.failed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("hashing: {err:#}");
            ExitCode::FAILURE
        }
    }
}
