use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use slash_comment_config::Config;
use slash_comment_engine::{
    SelectionRange, Span, ViewState, build_decorations, buffer::slice_to_string, io,
    render::{inner_html, render_reading_tree, to_html, to_html_document},
};
use std::{
    io::stdout,
    path::{Path, PathBuf},
};

mod view;

use view::App;

#[derive(Debug, Parser)]
#[command(name = "slash-comment-cli", version, about = "Render and preview // comments in Markdown")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a Markdown file to reading-view HTML
    Html {
        file: Option<PathBuf>,
        /// Emit a complete document with the comment stylesheet
        #[arg(long)]
        standalone: bool,
    },
    /// Open a Markdown file in the terminal view
    View {
        file: Option<PathBuf>,
        /// Start in source mode instead of live preview
        #[arg(long)]
        source: bool,
    },
    /// Print the live decoration ranges for a Markdown file
    Ranges {
        file: Option<PathBuf>,
        /// Compute ranges for source mode instead of live preview
        #[arg(long)]
        source: bool,
        /// Byte offset of the caret
        #[arg(long)]
        cursor: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        Config::default()
    });

    match cli.command {
        Command::Html { file, standalone } => {
            let path = config.document_path(file)?;
            print_html(&path, config.wants_standalone(standalone))
        }
        Command::View { file, source } => {
            let path = config.document_path(file)?;
            run_view(&path, config.starts_live(source))
        }
        Command::Ranges {
            file,
            source,
            cursor,
        } => {
            let path = config.document_path(file)?;
            print_ranges(&path, !source, cursor)
        }
    }
}

fn print_html(path: &Path, standalone: bool) -> Result<()> {
    let content =
        io::read_document(path).with_context(|| format!("reading {}", path.display()))?;
    let root = render_reading_tree(&content);
    log::info!("Rendered {}", path.display());

    if standalone {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        print!("{}", to_html_document(&root, &title));
    } else {
        match root.as_element() {
            Some(el) => print!("{}", inner_html(el)),
            None => print!("{}", to_html(&root)),
        }
    }
    Ok(())
}

fn print_ranges(path: &Path, live_preview: bool, cursor: Option<usize>) -> Result<()> {
    let buffer = io::load_buffer(path).with_context(|| format!("reading {}", path.display()))?;
    let state = ViewState::new(buffer.clone())
        .with_live_preview(live_preview)
        .with_selection(cursor.map(SelectionRange::cursor));
    let set = build_decorations(&state);
    log::info!("{} decoration(s) in {}", set.len(), path.display());

    for d in &set {
        let line = buffer.line_at(d.from);
        let text = slice_to_string(&buffer, Span::new(d.from, d.to));
        println!(
            "{}:{}-{}\t{}\t{text:?}",
            line.number + 1,
            d.from - line.start(),
            d.to - line.start(),
            d.style.class()
        );
    }
    Ok(())
}

fn run_view(path: &Path, live_preview: bool) -> Result<()> {
    let buffer = io::load_buffer(path).with_context(|| format!("reading {}", path.display()))?;
    log::info!("Opening {} ({} lines)", path.display(), buffer.line_count());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(buffer, path.display().to_string(), live_preview);
    let res = view::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
