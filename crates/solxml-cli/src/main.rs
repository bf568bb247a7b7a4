use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use solxml::xml::reader::DEFAULT_MAX_SIZE;
use solxml::{element_to_value, from_str_with_config, to_string, to_xml_string_named, Config};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "solxml",
    version,
    about = "Read tag/attribute markup and print it as a value or re-encoded markup"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output form
    #[arg(short, long, value_enum, default_value_t = Target::Value)]
    to: Target,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Root tag for `--to xml` (defaults to the input's root tag)
    #[arg(long, value_name = "NAME")]
    root: Option<String>,
    /// Maximum nesting depth, 0 for unlimited
    #[arg(long, value_name = "N")]
    max_depth: Option<u16>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Decoded value as pretty JSON
    Value,
    /// Decoded value written back as markup
    Xml,
    /// Element tree written back as-is
    Tree,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let input = read_input(args.input.as_ref())?;
    let config = match args.max_depth {
        Some(depth) => Config::new(depth, DEFAULT_MAX_SIZE),
        None => Config::default(),
    };
    let root = from_str_with_config(&input, config).context("failed to parse input")?;
    debug!(root = %root.name, target = ?args.to, "parsed input");

    let mut output = match args.to {
        Target::Value => {
            let value = element_to_value(&root);
            serde_json::to_string_pretty(&value).context("failed to serialize value")?
        }
        Target::Xml => {
            let value = element_to_value(&root);
            let name = args.root.as_deref().unwrap_or(&root.name);
            to_xml_string_named(name, &value).context("failed to write value")?
        }
        Target::Tree => to_string(&root).context("failed to write element tree")?,
    };
    output.push('\n');

    write_output(args.output.as_ref(), output.as_bytes())?;
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
