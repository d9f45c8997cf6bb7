use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_toc_config::Config;
use markdown_toc_engine::{Buffer, Cmd, Outcome, TextDocument, TocBounds, io};
use std::path::PathBuf;

mod notifier;

use notifier::TerminalNotifier;

/// Keep a generated table of contents and chapter numbers in sync with a
/// Markdown document's headings.
#[derive(Parser, Debug)]
#[command(name = "markdown-toc", version, about)]
struct Cli {
    /// Config file path, defaults to ~/.config/markdown-toc/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the resulting document instead of rewriting the file
    #[arg(long, global = true)]
    stdout: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Refresh the table of contents containing LINE, or insert a new one at LINE
    Toc {
        file: PathBuf,
        /// One-based cursor line
        #[arg(short, long)]
        line: usize,
    },
    /// Remove the table of contents containing LINE, or the one from BEGIN to END
    Remove {
        file: PathBuf,
        /// One-based cursor line
        #[arg(short, long, required_unless_present = "begin")]
        line: Option<usize>,
        /// One-based line of the start marker
        #[arg(long, requires = "end", conflicts_with = "line")]
        begin: Option<usize>,
        /// One-based line of the end marker
        #[arg(long, requires = "begin")]
        end: Option<usize>,
    },
    /// Number every level 2 to 6 heading
    Number { file: PathBuf },
}

/// What to run, where, with the cursor on which zero-based line.
struct Invocation {
    file: PathBuf,
    cursor_line: usize,
    cmd: Cmd,
}

fn to_index(line: usize) -> Result<usize> {
    match line.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Line numbers start at 1"),
    }
}

impl Command {
    fn invocation(self) -> Result<Invocation> {
        let invocation = match self {
            Command::Toc { file, line } => Invocation {
                file,
                cursor_line: to_index(line)?,
                cmd: Cmd::GenerateToc,
            },
            Command::Remove {
                file,
                line,
                begin,
                end,
            } => {
                let bounds = match (begin, end) {
                    (Some(begin), Some(end)) => {
                        Some(TocBounds::new(to_index(begin)?, to_index(end)?))
                    }
                    _ => None,
                };
                let cursor_line = match (line, bounds) {
                    (Some(line), _) => to_index(line)?,
                    (None, Some(bounds)) => bounds.start,
                    (None, None) => bail!("Either --line or --begin/--end is required"),
                };
                Invocation {
                    file,
                    cursor_line,
                    cmd: Cmd::RemoveToc { bounds },
                }
            }
            Command::Number { file } => Invocation {
                file,
                cursor_line: 0,
                cmd: Cmd::NumberHeadings,
            },
        };
        Ok(invocation)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file '{}' not found", path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

/// Runs the command against the file and returns the resulting document.
fn execute(cli: Cli) -> Result<(Outcome, String)> {
    let config = load_config(cli.config.as_ref())?;
    let invocation = cli.command.invocation()?;

    io::validate_markdown_file(&invocation.file)?;
    let content = io::read_file(&invocation.file)?;
    let mut buffer = Buffer::from_bytes(content.as_bytes())
        .with_context(|| format!("Failed to load '{}'", invocation.file.display()))?;
    buffer.set_cursor_line(invocation.cursor_line);

    log::debug!(
        "{:?} on {} at line {}",
        invocation.cmd,
        invocation.file.display(),
        invocation.cursor_line
    );
    let outcome = invocation
        .cmd
        .run(&mut buffer, &TerminalNotifier, &config.toc)?;
    let text = buffer.text();

    if !cli.stdout && outcome.changed_document() {
        io::write_file(&invocation.file, &text)?;
        log::info!("Wrote {}", invocation.file.display());
    }

    Ok((outcome, text))
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let stdout = cli.stdout;
    let (_, text) = execute(cli)?;

    if stdout {
        print!("{text}");
    }

    Ok(())
}
