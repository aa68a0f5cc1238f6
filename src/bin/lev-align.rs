//! lev-align -- edit distance, cost matrix and alignment for two words.
//!
//! Usage:
//!   lev-align [--json] [--output <path>] [--raw] [--max-len <n>] [--gap <c>] <word-a> <word-b>
//!   lev-align --serve [--raw] [--max-len <n>] [--gap <c>]

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use lev_align::report::{Report, ReportConfig, ReportFormat};
use lev_align::server::ServerConfig;

const USAGE: &str = "\
usage: lev-align [--json] [--output <path>] [--raw] [--max-len <n>] [--gap <c>] <word-a> <word-b>
       lev-align --serve [--raw] [--max-len <n>] [--gap <c>]

  --json           print the report as JSON
  --output <path>  write the report to <path> instead of stdout
  --raw            compare words as given (no trim/lowercase/letter filter)
  --max-len <n>    reject words longer than <n> characters (0 = no limit)
  --gap <c>        gap marker in the alignment (default: _)
  --serve          answer JSON-RPC 2.0 calls (edit_distance, align, matrix) on stdin/stdout";

#[derive(Debug)]
struct Cli {
    serve: bool,
    format: ReportFormat,
    output: Option<PathBuf>,
    config: ReportConfig,
    words: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<Cli>> {
    let mut cli = Cli {
        serve: false,
        format: ReportFormat::Text,
        output: None,
        config: ReportConfig::default(),
        words: Vec::new(),
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--serve" => cli.serve = true,
            "--json" => cli.format = ReportFormat::Json,
            "--raw" => cli.config.normalize = false,
            "--output" => {
                let path = args.next().context("--output needs a path")?;
                cli.output = Some(PathBuf::from(path));
            }
            "--max-len" => {
                let value = args.next().context("--max-len needs a number")?;
                let max: usize = value
                    .parse()
                    .with_context(|| format!("invalid --max-len value: {value}"))?;
                cli.config.max_input_chars = (max > 0).then_some(max);
            }
            "--gap" => {
                let value = args.next().context("--gap needs a character")?;
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => cli.config.gap = c,
                    _ => bail!("--gap takes exactly one character, got {value:?}"),
                }
            }
            flag if flag.starts_with("--") => bail!("unknown option: {flag}\n\n{USAGE}"),
            _ => cli.words.push(arg),
        }
    }

    if cli.serve {
        if !cli.words.is_empty() {
            bail!("--serve takes no words\n\n{USAGE}");
        }
    } else if cli.words.len() != 2 {
        bail!("expected two words, got {}\n\n{USAGE}", cli.words.len());
    }
    Ok(Some(cli))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the report or JSON-RPC stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(cli) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    if cli.serve {
        return lev_align::run_server(&ServerConfig { report: cli.config });
    }

    let report = Report::compute(&cli.words[0], &cli.words[1], &cli.config)?;

    match cli.output {
        Some(path) => {
            report.write_to(&path, cli.format)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{}", report.render(cli.format)?),
    }
    Ok(())
}
