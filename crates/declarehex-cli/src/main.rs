//! Command-line front end for the declarehex engine.
//!
//! Reads a stylesheet from a file (or stdin when no file is given), rewrites
//! its hex colors into variable declarations and references, and prints the
//! result to stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use declarehex::{declare_hexcodes, CaseConvention, Dialect, Settings};

/// Declare hex colors as stylesheet variables.
#[derive(Parser)]
#[command(name = "declarehex", version)]
#[command(about = "Extract hex colors from a stylesheet into variable declarations")]
struct Cli {
    /// Stylesheet to rewrite; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Target preprocessor dialect; vanilla CSS custom properties when omitted.
    #[arg(long, value_name = "scss|sass|less|stylus")]
    preprocessor: Option<Dialect>,

    /// Case convention for generated names.
    #[arg(long, value_name = "dash|snake|camel|pascal", default_value = "dash")]
    case: CaseConvention,

    /// Prefix prepended to each generated name.
    #[arg(long, default_value = "")]
    prefix: String,

    /// Target ruleset selector for vanilla CSS output.
    #[arg(long, default_value = ":root")]
    selector: String,

    /// Indent generated declarations with a tab instead of two spaces.
    #[arg(long)]
    tabs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let content = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let settings = Settings {
        css_preprocessor: cli.preprocessor,
        type_case: cli.case,
        color_name_prefix: cli.prefix,
        css_selector: cli.selector,
        use_tabs: cli.tabs,
    };

    let output = declare_hexcodes(&content, &settings)?;
    print!("{}", output);

    Ok(())
}
