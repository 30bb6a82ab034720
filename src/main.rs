//! Lapacho - a terminal-based investment briefing deck.

mod app;
mod content;
mod counter;
mod error;
mod form;
mod numeric;
mod ui;
mod util;

use anyhow::Result;
use app::{App, Page};
use clap::Parser;
use content::{Deck, Locale};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form::Field;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "lapacho")]
#[command(about = "A terminal-based investment briefing deck", long_about = None)]
struct Args {
    /// Content language (en or es)
    #[arg(long, default_value = "en")]
    locale: String,

    /// Count-up animation length in milliseconds
    #[arg(long, default_value_t = 2000)]
    duration_ms: u64,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Lapacho");
    }

    // Resolve locale and content before touching the terminal
    let locale: Locale = match args.locale.parse() {
        Ok(locale) => locale,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let deck = Deck::load(locale)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(locale, deck, Duration::from_millis(args.duration_ms));
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Lapacho exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| ui::draw(f, &mut app, now))?;

        // Short poll keeps count-ups and bar sweeps smooth
        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                // Form editing mode - keystrokes go to the form
                if app.form_editing {
                    match (key.modifiers, key.code) {
                        (KeyModifiers::NONE, KeyCode::Esc) => {
                            app.form_editing = false;
                            app.status = "Stopped editing".to_string();
                        }
                        (KeyModifiers::NONE, KeyCode::Enter) => {
                            app.submit_form();
                        }
                        (KeyModifiers::NONE, KeyCode::Tab)
                        | (KeyModifiers::NONE, KeyCode::Down) => {
                            app.form.focus_next();
                        }
                        (KeyModifiers::SHIFT, KeyCode::BackTab)
                        | (KeyModifiers::NONE, KeyCode::BackTab)
                        | (KeyModifiers::NONE, KeyCode::Up) => {
                            app.form.focus_prev();
                        }
                        (KeyModifiers::NONE, KeyCode::Backspace) => {
                            app.form.backspace();
                        }
                        (KeyModifiers::NONE, KeyCode::Char(' '))
                            if app.form.focus == Field::Country =>
                        {
                            app.form.cycle_country(app.deck.contact.countries.len());
                        }
                        (KeyModifiers::NONE, KeyCode::Char(c))
                        | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                            app.form.input(c);
                        }
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Page navigation
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.prev_page();
                    }
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l'))
                    | (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.next_page();
                    }
                    (KeyModifiers::NONE, KeyCode::Char(c)) if c.is_ascii_digit() => {
                        if let Some(page) = c.to_digit(10).and_then(Page::from_digit) {
                            app.goto(page);
                        }
                    }

                    // Scrolling
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.scroll_down();
                    }
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.scroll_up();
                    }

                    // Features
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_contact();
                    }
                    (KeyModifiers::NONE, KeyCode::Enter) => {
                        if app.page == Page::Contact {
                            app.form_editing = true;
                            app.status = "Editing form (Esc to stop)".to_string();
                        }
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status =
                            "Help: q=quit, h/l=pages, 1-5=jump, j/k=scroll, y=copy contact, T=theme"
                                .to_string();
                    }

                    _ => {}
                }
            }
        }
    }
}
