use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, process::ExitCode};
use tracing::error;

use rfe::{logging, ui, App, Args, Controller, SortMode, SystemOpener, TreeView};

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press {
                // Clear status message on any key press
                app.clear_status();

                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Esc, _) if !app.show_help => return Ok(()),
                    (KeyCode::Esc, _) => app.show_help = false,
                    (KeyCode::Char('?'), _) => app.show_help = !app.show_help,
                    _ if app.show_help => app.show_help = false, // Any key closes help
                    // Navigation
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.view_mut().next(),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.view_mut().previous(),
                    (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => app.view_mut().page_down(),
                    (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => app.view_mut().page_up(),
                    (KeyCode::Char('H'), _) | (KeyCode::Home, _) => app.view_mut().go_to_first(),
                    (KeyCode::Char('G'), _) | (KeyCode::End, _) => app.view_mut().go_to_last(),
                    // Actions
                    (KeyCode::Enter, _) | (KeyCode::Char('o'), _) => app.activate_selected(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.expand_selected(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.collapse_selected(),
                    (KeyCode::Backspace, _) | (KeyCode::Char('u'), _) => app.go_up(),
                    (KeyCode::Char('r'), _) => app.refresh(),
                    // Sort options
                    (KeyCode::Char('s'), _) => app.cycle_sort(),
                    _ => {}
                }
            }
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let view = TreeView::new(SortMode::default());
    let opener = SystemOpener::from_command(args.opener.clone());
    let controller = match Controller::initialize(&args.path, view, opener) {
        Ok(controller) => controller,
        Err(err) => {
            error!(error = %err, "startup failed");
            eprintln!("rfe: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    // Setup panic hook before entering raw mode
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(controller));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal loop failed");
        println!("{:?}", err);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
