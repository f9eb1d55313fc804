use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingArg {
    Native,
    Lf,
    Crlf,
}

#[derive(Parser, Debug)]
#[command(
    name = "inikv-cli",
    about = "Check, normalize and query [section] / name=value documents",
    version
)]
struct Args {
    /// Fail on the first malformed or duplicate line (default skips them)
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Line ending for normalized output
    #[arg(long, value_enum, default_value_t = LineEndingArg::Native)]
    line_ending: LineEndingArg,

    /// Print the document as JSON instead of normalized text
    #[arg(long, default_value_t = false, conflicts_with = "get")]
    json: bool,

    /// Pretty-print JSON on output
    #[arg(long, default_value_t = false, requires = "json")]
    pretty: bool,

    /// Print a single value; exits with an error if it is missing
    #[arg(long, num_args = 2, value_names = ["SECTION", "KEY"])]
    get: Option<Vec<String>>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = inikv::ParseOptions {
        strict: args.strict,
    };
    // editors on Windows often save UTF-8 with a byte order mark
    let text = buf.strip_prefix('\u{FEFF}').unwrap_or(&buf);
    let doc = inikv::parse_with(text, &options)?;
    tracing::debug!(sections = doc.len(), "document loaded");

    if let Some(query) = &args.get {
        let [section, key] = query.as_slice() else {
            bail!("--get expects SECTION and KEY");
        };
        match doc.value(section, key) {
            Some(value) => println!("{}", value),
            None => bail!("no item {:?} in section {:?}", key, section),
        }
    } else if args.json {
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            println!("{}", serde_json::to_string(&doc)?);
        }
    } else {
        let line_ending = match args.line_ending {
            LineEndingArg::Native => inikv::LineEnding::Native,
            LineEndingArg::Lf => inikv::LineEnding::Lf,
            LineEndingArg::Crlf => inikv::LineEnding::Crlf,
        };
        let out = doc.to_string_with(&inikv::WriteOptions { line_ending });
        print!("{}", out);
        if !out.is_empty() {
            print!("{}", line_ending.as_str());
        }
    }

    Ok(())
}
