use std::{
    io::{self, Read, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use log::{LevelFilter, debug};
use mdbubble::{
    RenderOptions, io::document_title, parse_markdown_with, render_file, standalone_document,
    write_html,
};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Render chat-bubble Markdown to HTML")]
struct Cli {
    /// Write `<name>.html` next to each input instead of printing
    #[arg(long = "write", requires = "files")]
    write: bool,
    /// Wrap output in a minimal HTML document
    #[arg(long = "standalone")]
    standalone: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Diagnostic verbosity on stderr
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    /// Markdown files to render
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct FormatOpts {
    /// Open links in the same tab (omit target="_blank")
    #[arg(long = "same-tab")]
    same_tab: bool,
    /// Keep links with any scheme, including javascript:
    #[arg(long = "unsafe-links")]
    unsafe_links: bool,
}

impl From<FormatOpts> for RenderOptions {
    fn from(opts: FormatOpts) -> Self {
        Self {
            same_tab: opts.same_tab,
            unsafe_links: opts.unsafe_links,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn setup_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn finish(fragment: String, standalone: bool, title: &str) -> String {
    if standalone {
        standalone_document(&fragment, title)
    } else {
        fragment
    }
}

fn render_path(path: &Path, opts: &RenderOptions, standalone: bool) -> anyhow::Result<String> {
    let fragment =
        render_file(path, opts).with_context(|| format!("failed to render {}", path.display()))?;
    Ok(finish(fragment, standalone, &document_title(path)))
}

/// Entry point for the command-line renderer.
///
/// With no files, reads Markdown from standard input and prints HTML. With
/// files, renders them in parallel and prints each result in argument order,
/// or writes sibling `.html` files when `--write` is given.
///
/// # Examples
///
/// ```sh
/// # Render a message to stdout
/// mdbubble reply.md
///
/// # Write reply.html as a full document
/// mdbubble --write --standalone reply.md
///
/// # Render from standard input
/// echo '**hi**' | mdbubble
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);
    let opts = RenderOptions::from(cli.opts);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        let html = finish(parse_markdown_with(&input, &opts), cli.standalone, "mdbubble");
        println!("{html}");
        return Ok(());
    }

    if cli.write {
        let written: Vec<anyhow::Result<PathBuf>> = cli
            .files
            .par_iter()
            .map(|path| {
                write_html(path, &opts, cli.standalone)
                    .with_context(|| format!("failed to write HTML for {}", path.display()))
            })
            .collect();
        for target in written {
            debug!("wrote {}", target?.display());
        }
        return Ok(());
    }

    let rendered: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| render_path(path, &opts, cli.standalone))
        .collect();
    let mut stdout = io::stdout().lock();
    for html in rendered {
        writeln!(stdout, "{}", html?)?;
    }
    Ok(())
}
