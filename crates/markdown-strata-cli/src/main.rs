mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum, ValueHint};
use markdown_strata_config::{Config, OutputFormat};
use markdown_strata_engine::{
    ParseMode, normalize, parse_document, parsing::snapshot, read_document,
};
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    BlocksAndSpans,
    BlocksOnly,
    TopBlocks,
}

impl From<ModeArg> for ParseMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::BlocksAndSpans => ParseMode::BlocksAndSpans,
            ModeArg::BlocksOnly => ParseMode::BlocksOnly,
            ModeArg::TopBlocks => ParseMode::TopBlocks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Html,
    Events,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Events => OutputFormat::Events,
        }
    }
}

/// Parse a markdown document into block and span events.
#[derive(Debug, Parser)]
#[command(name = "markdown-strata", version, about)]
struct Cli {
    /// Document to read; stdin when omitted
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Where to write the result; stdout when omitted
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// How deep parsing goes
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Rendered HTML or the indented event dump
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Config file to use instead of ~/.config/markdown-strata/config.toml
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path);
            match Config::load_from_path(&path)? {
                Some(config) => config,
                None => bail!("Config file '{}' does not exist", path.display()),
            }
        }
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config
        .with_mode(cli.mode.map(Into::into))
        .with_format(cli.format.map(Into::into)))
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => read_document(path)
            .with_context(|| format!("Failed to read input '{}'", path.display())),
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(normalize(&bytes))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let text = read_input(cli.input.as_ref())?;
    log::debug!(
        "parsing {} bytes in {:?} mode",
        text.len(),
        config.parse.mode
    );

    let doc = parse_document(&text, &config.parse).context("Failed to parse document")?;
    log::info!(
        "parsed {} tags, {} references",
        doc.tags.len(),
        doc.references.len()
    );

    let rendered = match config.output.format {
        OutputFormat::Html => render::render_html(&doc.tags),
        OutputFormat::Events => snapshot::dump(&doc),
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output '{}'", path.display()))?,
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write stdout")?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    run(&cli)
}
