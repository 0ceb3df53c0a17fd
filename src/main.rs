//! Terminal entry point: argument handling, storage and theme setup, the
//! screen loop, and terminal teardown.

use arcade::build_info;
use arcade::games::flappy::{self, FlappyGame};
use arcade::games::tictactoe::{TicTacToeGame, STATS_KEY};
use arcade::games::GameKind;
use arcade::input::{self, InputResult, MenuAction};
use arcade::scheduler::{FrameScheduler, FRAME_INTERVAL_MS};
use arcade::storage::Storage;
use arcade::theme::{self, Theme};
use arcade::ui::menu_scene::MenuState;
use arcade::ui::{flappy_scene, menu_scene, tictactoe_scene};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

/// Which screen owns the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    TicTacToe,
    Flappy,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(arg) = args.first() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!(
                    "arcade {} ({} {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_COMMIT,
                    build_info::BUILD_DATE
                );
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("unknown argument: {}", other);
                eprintln!("try 'arcade --help'");
                std::process::exit(1);
            }
        }
    }

    // Storage must be usable before any screen draws.
    let storage = Storage::open()?;
    let mut theme = theme::load_theme(&storage);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &storage, &mut theme);

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn print_help() {
    println!("arcade - two small terminal games");
    println!();
    println!("Usage: arcade [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -v, --version  Print version information");
    println!("  -h, --help     Print this help");
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    storage: &Storage,
    theme: &mut Theme,
) -> io::Result<()> {
    let mut screen = Screen::Menu;
    let mut menu = MenuState::new();
    let mut tictactoe: Option<TicTacToeGame> = None;
    let mut flappy: Option<FlappyGame> = None;
    let mut scheduler = FrameScheduler::new(Duration::from_millis(FRAME_INTERVAL_MS));
    let mut palette = theme.palette();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.size();
                match screen {
                    Screen::Menu => menu_scene::draw(frame, area, &menu, *theme, &palette),
                    Screen::TicTacToe => {
                        if let Some(game) = &tictactoe {
                            tictactoe_scene::draw(frame, area, game, &palette);
                        }
                    }
                    Screen::Flappy => {
                        if let Some(game) = &flappy {
                            flappy_scene::draw(frame, area, game, &palette);
                        }
                    }
                }
            })?;
            dirty = false;
        }

        let timeout = scheduler.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            let ev = event::read()?;
            dirty = true;

            match screen {
                Screen::Menu => match input::handle_menu_event(&ev, &mut menu) {
                    MenuAction::Play(GameKind::TicTacToe) => {
                        tictactoe = Some(TicTacToeGame::new(storage.get_or_default(STATS_KEY)));
                        screen = Screen::TicTacToe;
                    }
                    MenuAction::Play(GameKind::Flappy) => {
                        flappy = Some(FlappyGame::new());
                        screen = Screen::Flappy;
                    }
                    MenuAction::ToggleTheme => {
                        *theme = theme.toggle();
                        palette = theme.palette();
                        theme::save_theme(storage, *theme)?;
                    }
                    MenuAction::Quit => break,
                    MenuAction::None => {}
                },
                Screen::TicTacToe => {
                    let area = terminal.size()?;
                    if let Some(game) = tictactoe.as_mut() {
                        match input::handle_tictactoe_event(&ev, game, area) {
                            InputResult::NeedsSave => storage.set(STATS_KEY, &game.stats)?,
                            InputResult::ToMenu => {
                                tictactoe = None;
                                screen = Screen::Menu;
                            }
                            InputResult::Continue => {}
                        }
                    }
                }
                Screen::Flappy => {
                    let area = terminal.size()?;
                    if let Some(game) = flappy.as_mut() {
                        match input::handle_flappy_event(&ev, game, area) {
                            InputResult::ToMenu => {
                                // Teardown cancels any scheduled tick.
                                scheduler.cancel();
                                flappy = None;
                                screen = Screen::Menu;
                            }
                            _ => {
                                // A flap from idle started the session; arm
                                // its first tick.
                                if game.running {
                                    scheduler.request(Instant::now());
                                }
                            }
                        }
                    }
                }
            }
        }

        if screen == Screen::Flappy {
            if let Some(game) = flappy.as_mut() {
                let now = Instant::now();
                if scheduler.due(now) {
                    if flappy::tick(game, &mut rand::thread_rng()) {
                        dirty = true;
                    }
                    // Self-scheduling continues only while the session runs.
                    if game.running {
                        scheduler.request(now);
                    }
                }
            }
        }
    }
    Ok(())
}
