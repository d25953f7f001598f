//! pastex CLI - clipboard cleanup and math-to-LaTeX conversion
//!
//! A command-line front end for the pastex pipelines. Reads clipboard
//! payloads from files, stdin, or the system clipboard.

#[cfg(feature = "clipboard")]
mod clipboard;

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use pastex::{
    clean, config::KEY_MERGE_HYPHENATED_WORDS, convert_to_latex, wrap_inline_math,
    ClipboardBundle, CleanerConfig, ConfigStore, PasteAction, SymbolTable,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Clipboard text cleanup and paste-as-LaTeX
#[derive(Parser)]
#[command(
    name = "pastex",
    author = "iyulab",
    version,
    about = "Clean clipboard text or convert clipboard math to LaTeX",
    long_about = "pastex - clipboard cleanup and best-effort math-to-LaTeX conversion.\n\n\
                  Usage:\n  \
                  pastex clean notes.txt         Clean text from a file\n  \
                  pastex latex --html copy.html  Convert an HTML fragment to $...$\n  \
                  pastex paste latex             Convert the system clipboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean plain text for pasting as body text
    Clean {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep hyphens at line wraps, overriding the saved setting
        #[arg(long)]
        keep_hyphens: bool,
    },

    /// Convert clipboard representations to inline LaTeX math
    #[command(visible_alias = "tex")]
    Latex {
        /// Plain-text representation file
        #[arg(long)]
        text: Option<PathBuf>,

        /// HTML representation file
        #[arg(long)]
        html: Option<PathBuf>,

        /// MathML representation file
        #[arg(long)]
        mathml: Option<PathBuf>,

        /// JSON bundle file ({"text", "html", "mathML"})
        #[arg(long, conflicts_with_all = ["text", "html", "mathml"])]
        bundle: Option<PathBuf>,

        /// Print the bare fragment without $ delimiters
        #[arg(long)]
        no_wrap: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a paste action on the system clipboard
    Paste {
        /// Which paste action to run
        action: ActionArg,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommand>,
    },

    /// List the Unicode symbol table
    Symbols,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print current settings as JSON
    Show,
    /// Print the settings file path
    Path,
    /// Change a setting
    Set {
        /// Setting key (e.g. mergeHyphenatedWords)
        key: String,
        /// New value (true/false)
        value: String,
    },
}

/// Paste action
#[derive(Clone, Copy, ValueEnum)]
enum ActionArg {
    /// Paste cleaned text
    #[value(alias = "paste-cleaned-text")]
    CleanedText,
    /// Paste as LaTeX
    #[value(alias = "paste-as-latex")]
    Latex,
}

impl From<ActionArg> for PasteAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::CleanedText => PasteAction::CleanedText,
            ActionArg::Latex => PasteAction::Latex,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = match cli.config {
        Some(path) => ConfigStore::at(path),
        None => ConfigStore::platform_default()?,
    };

    match cli.command {
        Commands::Clean {
            input,
            output,
            keep_hyphens,
        } => {
            let mut config = store.load_or_default();
            if keep_hyphens {
                config = config.without_hyphen_merging();
            }

            let text = read_input(input.as_deref())?;
            let cleaned = clean(&text, &config);
            write_output(output.as_deref(), &cleaned)?;
            report_written(output.as_deref(), "Cleaned text");
        }

        Commands::Latex {
            text,
            html,
            mathml,
            bundle,
            no_wrap,
            output,
        } => {
            let bundle: ClipboardBundle = match bundle {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
                None => build_bundle(text.as_deref(), html.as_deref(), mathml.as_deref())?,
            };

            let latex = convert_to_latex(&bundle);
            let rendered = if no_wrap {
                latex
            } else {
                wrap_inline_math(&latex)
            };
            write_output(output.as_deref(), &rendered)?;
            report_written(output.as_deref(), "LaTeX");
        }

        Commands::Paste { action, output } => {
            let config = store.load_or_default();
            let rendered = paste_system_clipboard(action.into(), &config)?;
            write_output(output.as_deref(), &rendered)?;
            report_written(output.as_deref(), "Paste result");
        }

        Commands::Config { command } => match command.unwrap_or(ConfigCommand::Show) {
            ConfigCommand::Show => {
                let config = store.load()?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommand::Path => {
                println!("{}", store.path().display());
            }
            ConfigCommand::Set { key, value } => {
                let mut config = store.load_or_default();
                config.set(&key, &value)?;
                store.save(&config)?;
                println!(
                    "{} {} = {}",
                    "✓".green().bold(),
                    key,
                    config.merge_hyphenated_words
                );
            }
        },

        Commands::Symbols => {
            let table = SymbolTable::standard();
            println!("{}", "Symbol Table".cyan().bold());
            println!("{}", "─".repeat(40));
            for (symbol, latex) in table.iter() {
                println!("  {}  {}", symbol, latex);
            }
            println!("\n{}: {}", "Entries".bold(), table.len());
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Builds a bundle from representation files. Reads stdin as text if none are given.
fn build_bundle(
    text: Option<&Path>,
    html: Option<&Path>,
    mathml: Option<&Path>,
) -> io::Result<ClipboardBundle> {
    if text.is_none() && html.is_none() && mathml.is_none() {
        return Ok(ClipboardBundle::text_only(read_input(None)?));
    }

    let mut bundle = match text {
        Some(path) => ClipboardBundle::text_only(fs::read_to_string(path)?),
        None => ClipboardBundle::new(),
    };
    if let Some(path) = html {
        bundle = bundle.with_html(fs::read_to_string(path)?);
    }
    if let Some(path) = mathml {
        bundle = bundle.with_math_ml(fs::read_to_string(path)?);
    }
    Ok(bundle)
}

#[cfg(feature = "clipboard")]
fn paste_system_clipboard(
    action: PasteAction,
    config: &CleanerConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut source = clipboard::SystemClipboard::open()?;
    Ok(pastex::paste_from(&mut source, action, config))
}

#[cfg(not(feature = "clipboard"))]
fn paste_system_clipboard(
    _action: PasteAction,
    _config: &CleanerConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    Err("pastex was built without clipboard support (enable the `clipboard` feature)".into())
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> io::Result<()> {
    match path {
        Some(p) => fs::write(p, content),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)
        }
    }
}

fn report_written(path: Option<&Path>, what: &str) {
    if let Some(p) = path {
        println!("{} {} written to {}", "✓".green().bold(), what, p.display());
    }
}

fn print_version() {
    println!("{} {}", "pastex".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Clipboard text cleanup and math-to-LaTeX conversion");
    println!();
    println!("Paste actions: {}", PasteAction::ALL.map(|a| a.id()).join(", "));
    println!("Settings key: {}", KEY_MERGE_HYPHENATED_WORDS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_latex_args() {
        let cli = Cli::try_parse_from(["pastex", "latex", "--html", "a.html", "--no-wrap"]).unwrap();
        match cli.command {
            Commands::Latex { html, no_wrap, .. } => {
                assert_eq!(html, Some(PathBuf::from("a.html")));
                assert!(no_wrap);
            }
            _ => panic!("expected latex command"),
        }
    }

    #[test]
    fn test_bundle_conflicts_with_files() {
        let result = Cli::try_parse_from(["pastex", "latex", "--bundle", "b.json", "--text", "t"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_action_aliases() {
        let cli = Cli::try_parse_from(["pastex", "paste", "paste-as-latex"]).unwrap();
        match cli.command {
            Commands::Paste { action, .. } => {
                assert_eq!(PasteAction::from(action), PasteAction::Latex);
            }
            _ => panic!("expected paste command"),
        }
    }

    #[test]
    fn test_build_bundle_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("t.txt");
        let mathml = dir.path().join("m.xml");
        fs::write(&text, "x2").unwrap();
        fs::write(&mathml, "<msup><mi>x</mi><mn>2</mn></msup>").unwrap();

        let bundle = build_bundle(Some(&text), None, Some(&mathml)).unwrap();
        assert_eq!(bundle.text, "x2");
        assert!(bundle.html.is_none());
        assert_eq!(convert_to_latex(&bundle), "^{x2}");
    }

    #[test]
    fn test_build_bundle_html_only() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("h.html");
        fs::write(&html, "H<sub>2</sub>O").unwrap();

        let bundle = build_bundle(None, Some(&html), None).unwrap();
        assert_eq!(bundle.text, "");
        assert_eq!(convert_to_latex(&bundle), "H_{2}O");
    }
}
