use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ratatui::{backend::TermionBackend, Terminal};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use tethermarks::config::Config;
use tethermarks::editor::mode::{MarkScope, PickerMode};
use tethermarks::editor::picker::Picker;
use tethermarks::editor::session::Session;
use tethermarks::file::loader::load_state_file;
use tethermarks::file::saver::save_state_file;
use tethermarks::file::default_state_path;
use tethermarks::host::{locator_for, OpenFileLocator, SessionWorkspace, Workspace};
use tethermarks::input::keys::Keybinds;
use tethermarks::input::InputHandler;
use tethermarks::theme::colors::ThemeColors;
use tethermarks::theme::{get_builtin_theme, list_builtin_themes, Theme};
use tethermarks::ui::UI;

/// Tether Marks - file marks and a Harpoon list for your editor
///
/// Actions for the calling editor are printed to stdout, one per line:
/// `focus<TAB>leaf<TAB>path`, `open-tab<TAB>path` or `open<TAB>path`.
#[derive(Parser)]
#[command(name = "tether")]
#[command(version)]
#[command(about = "Vim-style file marks and a Harpoon list", long_about = None)]
struct Cli {
    /// State file (default: <data dir>/tethermarks/data.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (default: ~/.config/tethermarks/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// File currently being edited
    #[arg(long, global = true)]
    active: Option<String>,

    /// Files open in the editor (repeatable)
    #[arg(long = "open", global = true)]
    open: Vec<String>,

    /// Files in tabs restored from a previous session but not loaded yet (repeatable)
    #[arg(long, global = true)]
    restored: Vec<String>,

    /// Directory marked paths are relative to
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Theme name (overrides config)
    #[arg(short, long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Set a mark to the active file
    Set {
        /// Register to use instead of opening the mark list
        #[arg(short, long)]
        register: Option<String>,
    },
    /// Go to a mark
    Goto {
        #[arg(short, long)]
        register: Option<String>,
    },
    /// Delete a mark
    Delete {
        #[arg(short, long)]
        register: Option<String>,
    },
    /// Add the active file to the first free Harpoon register
    HarpoonAdd,
    /// Go to a Harpoon mark
    Harpoon {
        #[arg(short, long)]
        register: Option<String>,
    },
    /// Print marks, one per line
    List {
        /// List Harpoon marks instead of general marks
        #[arg(long)]
        harpoon: bool,
    },
    /// Restore the last changed mark
    Undo,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    env_logger::init();
    setup_panic_hook();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Some(Config::load_from(path)),
        None => Config::load(),
    };

    let data_path = match cli.data.clone().or_else(default_state_path) {
        Some(path) => path,
        None => bail!("Could not determine data directory; pass --data"),
    };

    let loaded = load_state_file(&data_path)?;
    let backup_on_save = loaded.schema_warning.is_some();
    let mut session = Session::from_state(loaded.state, config);
    if let Some(warning) = &loaded.schema_warning {
        eprintln!("Warning: {}", warning);
        session.report(warning);
    }

    let mut workspace = SessionWorkspace::new(&cli.root);
    if let Some(active) = &cli.active {
        workspace = workspace.with_active(active.clone());
    }
    for path in &cli.open {
        workspace.push_leaf(path.clone(), true);
    }
    for path in &cli.restored {
        workspace.push_leaf(path.clone(), false);
    }
    let locator = locator_for(session.config());

    match cli.command {
        Command::Set { register } => run_command(
            PickerMode::Set,
            MarkScope::General,
            register,
            cli.theme.as_deref(),
            &mut session,
            &mut workspace,
            locator.as_ref(),
        )?,
        Command::Goto { register } => run_command(
            PickerMode::Goto,
            MarkScope::General,
            register,
            cli.theme.as_deref(),
            &mut session,
            &mut workspace,
            locator.as_ref(),
        )?,
        Command::Delete { register } => run_command(
            PickerMode::Delete,
            MarkScope::General,
            register,
            cli.theme.as_deref(),
            &mut session,
            &mut workspace,
            locator.as_ref(),
        )?,
        Command::Harpoon { register } => run_command(
            PickerMode::Goto,
            MarkScope::Harpoon,
            register,
            cli.theme.as_deref(),
            &mut session,
            &mut workspace,
            locator.as_ref(),
        )?,
        Command::HarpoonAdd => {
            if let Err(e) = session.add_file_to_harpoon(&workspace) {
                session.report(&e);
            }
        }
        Command::Undo => {
            if let Err(e) = session.restore_last_changed() {
                session.report(&e);
            }
        }
        Command::List { harpoon } => {
            let scope = if harpoon {
                MarkScope::Harpoon
            } else {
                MarkScope::General
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for mark in session.visible_marks(scope) {
                writeln!(out, "{}\t{}", mark.symbol, mark.file_path)?;
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for action in workspace.take_actions() {
        writeln!(out, "{}", action.to_line())?;
    }

    if let Some(message) = session.message() {
        eprintln!("{}", message.text);
    }

    if session.is_dirty() {
        save_state_file(&data_path, &session.to_state(), backup_on_save)?;
        session.clear_dirty();
    }

    Ok(())
}

/// Runs set/goto/delete either directly on `register` or through the
/// interactive mark list.
fn run_command(
    mode: PickerMode,
    scope: MarkScope,
    register: Option<String>,
    theme: Option<&str>,
    session: &mut Session,
    workspace: &mut SessionWorkspace,
    locator: &dyn OpenFileLocator,
) -> Result<()> {
    let Some(symbol) = register else {
        return run_picker(mode, scope, theme, session, workspace, locator);
    };

    if !session.config().registers(scope).contains(&symbol) {
        let kind = match scope {
            MarkScope::General => "mark",
            MarkScope::Harpoon => "Harpoon",
        };
        bail!("'{}' is not a {} register", symbol, kind);
    }

    let result = match mode {
        PickerMode::Set => session.set_mark(&symbol, &*workspace),
        PickerMode::Goto => session.goto_mark(&symbol, workspace, locator).map(|_| ()),
        PickerMode::Delete => session.delete_mark(&symbol).map(|_| ()),
    };
    if let Err(e) = result {
        session.report(&e);
    }
    Ok(())
}

/// Opens the mark list on the terminal and runs it until it closes.
///
/// Rendering goes to `/dev/tty` so stdout stays free for action lines.
fn run_picker(
    mode: PickerMode,
    scope: MarkScope,
    theme: Option<&str>,
    session: &mut Session,
    workspace: &mut dyn Workspace,
    locator: &dyn OpenFileLocator,
) -> Result<()> {
    let theme_name = theme
        .map(str::to_string)
        .unwrap_or_else(|| session.config().theme.clone());
    let theme = get_builtin_theme(&theme_name).unwrap_or_else(|| {
        eprintln!(
            "Warning: Theme '{}' not found, using default-dark (available: {})",
            theme_name,
            list_builtin_themes().join(", ")
        );
        Theme {
            name: "default-dark".to_string(),
            colors: ThemeColors::default_dark(),
        }
    });
    let ui = UI::new(theme);
    let mut input_handler = InputHandler::new_with_tty(Keybinds::from_config(session.config()))?;

    let tty = File::options()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .context("Failed to open /dev/tty for drawing")?;
    let tty = tty.into_raw_mode().context("Failed to enable raw mode")?;
    let tty = tty
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;
    let backend = TermionBackend::new(tty);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut picker = Picker::new(mode, scope, session);

    let result = (|| -> Result<()> {
        loop {
            ui.render(&mut terminal, &picker, session, input_handler.keybinds())?;

            match input_handler.poll_event(Duration::from_millis(100))? {
                Some(event) => {
                    if input_handler.handle_event(event, &mut picker, session, workspace, locator) {
                        break;
                    }
                }
                None => break,
            }
        }
        Ok(())
    })();

    // Termion restores the screen and raw mode through Drop guards
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}
