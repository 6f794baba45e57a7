use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use slovostat::{InputFile, LoadMode, analyze, write_report};

const USAGE: &str = "usage: slovostat [--input-mode=mmap|owned] <file>...";

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in &config.inputs {
        let start = Instant::now();
        let input = InputFile::load(path, config.load_mode)?;
        info!(
            "loaded {} ({} bytes)",
            input.path().display(),
            input.bytes().len()
        );

        let analysis = analyze(input.bytes());
        info!(
            "{} tokens, {} stems in {} ms",
            analysis.tokens.len(),
            analysis.stems.len(),
            start.elapsed().as_millis()
        );

        write_report(&mut out, &analysis)
            .with_context(|| format!("writing report for {}", path.display()))?;
    }
    out.flush()?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    inputs: Vec<PathBuf>,
    load_mode: LoadMode,
}

fn load_config() -> Result<Config> {
    let mut inputs = Vec::new();
    let mut load_mode = LoadMode::Mmap;
    for arg in env::args().skip(1) {
        if let Some(mode) = arg.strip_prefix("--input-mode=") {
            load_mode =
                parse_load_mode(mode).with_context(|| format!("unknown input mode: {mode}"))?;
        } else if arg.starts_with("--") {
            bail!("unknown flag {arg}\n{USAGE}");
        } else {
            inputs.push(PathBuf::from(arg));
        }
    }
    if inputs.is_empty() {
        bail!("{USAGE}");
    }
    Ok(Config { inputs, load_mode })
}

fn parse_load_mode(raw: &str) -> Option<LoadMode> {
    match raw.to_ascii_lowercase().as_str() {
        "mmap" => Some(LoadMode::Mmap),
        "owned" => Some(LoadMode::Owned),
        _ => None,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
