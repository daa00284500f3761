//! sidelog - side-by-side git branch history
//!
//! Binary entry point.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use sidelog::app::App;
use sidelog::cli::Cli;
use sidelog::compare::{BranchSelection, CompareOptions, Comparison, compare};
use sidelog::git::GitExecutor;
use sidelog::ui::render::Renderer;
use sidelog::ui::views::CompareView;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let selection = BranchSelection::from_args(cli.branches.as_slice())?;

    let executor = match &cli.repo {
        Some(path) => GitExecutor::with_repo_path(path.clone()),
        None => GitExecutor::new(),
    };
    executor.check_version()?;

    let (left, right) = selection.load(&executor)?;
    let comparison = compare(left, right, CompareOptions { converge: !cli.full });
    let renderer = Renderer::new(cli.width);

    if cli.interactive {
        run_interactive(&comparison, &renderer)
    } else {
        let styled = cli.color.enabled(io::stdout().is_terminal());
        print_comparison(&comparison, &renderer.with_style(styled))
    }
}

/// Write the composed lines to stdout
fn print_comparison(comparison: &Comparison, renderer: &Renderer) -> color_eyre::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in renderer.render(comparison) {
        if let Err(e) = writeln!(stdout, "{line}") {
            // Reader went away (e.g. piped into `head`)
            if e.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(e.into());
        }
    }
    Ok(())
}

/// Show the comparison in the full-screen viewer
fn run_interactive(comparison: &Comparison, renderer: &Renderer) -> color_eyre::Result<()> {
    let app = App::new(CompareView::new(comparison, renderer));
    let terminal = ratatui::init();
    let _restore = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, app)
}

/// Run the viewer's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }
    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a timeout so resizes are redrawn promptly.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
