mod args;
mod pipeline;

use anyhow::{Context, Result};
use numbered_lines::NumberedLines;
use numbered_lines_config::Config;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

use args::{USAGE, parse_args};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let ops = pipeline::compile(&args.steps, &config)?;

    let pages = read_pages(&args.files)?;
    let lines = NumberedLines::from_pages(&pages);
    log::info!("read {} lines from {} page(s)", lines.len(), pages.len());

    let lines = pipeline::run(lines, &ops);

    let limits = config.preview_limits();
    let preview = args.preview.then_some(&limits);
    let pad = args.pad.or(config.pad);

    let mut stdout = io::stdout().lock();
    for line in pipeline::render(&lines, pad, preview) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            log::info!("Config path: {}", path.display());
            Some(
                Config::load_from_path(&path)?
                    .with_context(|| format!("config file not found: {}", path.display()))?,
            )
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };

    Ok(config.unwrap_or_else(|| {
        log::debug!("No config file, using defaults");
        Config::default()
    }))
}

fn read_pages(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    files
        .iter()
        .map(|file| {
            if file.as_os_str() == "-" {
                return read_stdin();
            }
            fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
        })
        .collect()
}

fn read_stdin() -> Result<String> {
    io::read_to_string(io::stdin()).context("failed to read stdin")
}
