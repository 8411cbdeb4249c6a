//! Menu demo - tui-disclosure example
//!
//! A playlist screen with three panes:
//! - a disclosure menu (Enter/Space/Down opens, Up/Down/Home/End move,
//!   Esc closes, mouse works too)
//! - a bio text area with a character counter
//! - a list of track cards (Up/Down select, Enter plays)
//!
//! Tab and Shift+Tab move between panes, Ctrl+C quits.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p menu-demo -- --max-chars 140 --log-file menu-demo.log --log-level debug
//! cargo run -p menu-demo -- --keymap vim-keys.json
//! ```

mod action;
mod reducer;
mod state;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tui_disclosure::prelude::*;

use crate::action::DemoAction;
use crate::reducer::{reducer, DemoEffect};
use crate::state::{DemoState, Focus, MENU_ITEMS};

/// Menu demo - tui-disclosure example
#[derive(Parser, Debug)]
#[command(name = "menu-demo")]
#[command(about = "A playlist TUI demonstrating the tui-disclosure menu")]
struct Args {
    /// JSON file overriding the menu key bindings
    #[arg(long)]
    keymap: Option<PathBuf>,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "tui_disclosure_components=trace"
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Character limit of the bio field
    #[arg(long, default_value = "140")]
    max_chars: usize,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    // Load bindings before entering TUI mode so errors reach the shell
    let keymap = match &args.keymap {
        Some(path) => match MenuKeymap::load(path) {
            Ok(keymap) => keymap,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => MenuKeymap::default(),
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, keymap, args.max_chars).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging(path: &Path, level: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .init();

    Ok(())
}

fn menu_props<'a>(style: &'a MenuStyle, state: &DemoState) -> MenuContainerProps<'a> {
    MenuContainerProps {
        title: Some("Menu"),
        style,
        is_focused: state.focus == Focus::Menu,
    }
}

/// Bindings rendered for the status line, e.g. "Enter/Space"
fn key_list(bindings: &[String]) -> String {
    bindings
        .iter()
        .map(|binding| format_key_for_display(binding))
        .collect::<Vec<_>>()
        .join("/")
}

fn help_line(keymap: &MenuKeymap) -> String {
    format!(
        "{}: open  {}: close  {}: switch pane  {}: quit",
        key_list(&keymap.trigger_open),
        key_list(&keymap.dismiss),
        format_key_for_display("tab"),
        format_key_for_display("ctrl+c"),
    )
}

struct DemoUi {
    menu: MenuContainer,
    menu_style: MenuStyle,
    help: String,
    bio: CountedTextArea,
    cards: Vec<TrackCard>,
}

impl DemoUi {
    fn new(keymap: MenuKeymap, track_count: usize) -> Result<Self, MountError> {
        let help = help_line(&keymap);
        let root = Scope::root();
        let mut menu = MenuContainer::mount_with_keymap(&root, keymap);
        menu.set_trigger(MenuTrigger::mount(menu.scope(), "Playlist")?);
        let mut panel = MenuPanel::mount(menu.scope())?;
        for label in MENU_ITEMS {
            panel.add_item(label)?;
        }
        menu.set_panel(panel);

        Ok(Self {
            menu,
            menu_style: MenuStyle::default(),
            help,
            bio: CountedTextArea::new(),
            cards: (0..track_count).map(|_| TrackCard::new()).collect(),
        })
    }

    /// Keep the menu's notion of focus in step with the pane focus
    fn sync_focus(&self, state: &DemoState) {
        let ctx = self.menu.context();
        if state.focus == Focus::Menu {
            ctx.dispatch(MenuAction::Focus(FocusRequest::Trigger));
        } else {
            ctx.dispatch_all([MenuAction::Close, MenuAction::Blur]);
        }
    }

    fn layout(&self, area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(self.menu.height()),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    fn card_areas(&self, area: Rect, state: &DemoState) -> Vec<Rect> {
        let mut y = area.y;
        state
            .tracks
            .iter()
            .map(|track| {
                let height = TrackCard::height(track.album.is_some());
                let card = Rect::new(area.x, y, area.width, height).intersection(area);
                y = y.saturating_add(height);
                card
            })
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, state: &DemoState) {
        let [menu_area, bio_area, tracks_area, status_area] = self.layout(frame.area());

        self.menu
            .render(frame, menu_area, menu_props(&self.menu_style, state));

        self.bio.render(
            frame,
            bio_area,
            CountedTextAreaProps {
                label: "Bio",
                value: &state.bio,
                placeholder: "Tell us about yourself",
                max_chars: state.max_chars,
                is_focused: state.focus == Focus::Bio,
                on_change: DemoAction::BioChange,
            },
        );

        let areas = self.card_areas(tracks_area, state);
        for (i, (card, track)) in self.cards.iter_mut().zip(&state.tracks).enumerate() {
            let props = TrackCardProps {
                title: &track.title,
                artist: &track.artist,
                album: track.album.as_deref(),
                duration: track.duration,
                is_selected: state.focus == Focus::Tracks && i == state.selected_track,
                on_open: Some(DemoAction::TrackPlay(i)),
            };
            card.render(frame, areas[i], props);
        }

        let status = format!("{}  |  {}", state.status(), self.help);
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            status_area,
        );
    }

    /// Route one event; returns demo actions and whether the menu changed
    fn map_event(&mut self, event: &EventKind, state: &DemoState) -> (Vec<DemoAction>, bool) {
        if let Some(key) = event.key_press() {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return (vec![DemoAction::Quit], false);
            }
            match key.code {
                KeyCode::Tab => return (vec![DemoAction::FocusNext], false),
                KeyCode::BackTab => return (vec![DemoAction::FocusPrev], false),
                _ => {}
            }
        }

        let is_click = event.left_press().is_some();
        let outcome = self
            .menu
            .route(event, menu_props(&self.menu_style, state));
        if outcome.is_consumed() {
            let mut chosen = Vec::new();
            if is_click && state.focus != Focus::Menu {
                chosen.push(DemoAction::FocusPane(Focus::Menu));
            }
            chosen.extend(outcome.actions.iter().filter_map(|action| match action {
                MenuAction::Select(i) => Some(DemoAction::MenuChoose(*i)),
                _ => None,
            }));
            let changed = self.menu.context().dispatch_all(outcome.actions);
            return (chosen, changed || outcome.needs_render);
        }

        let mut actions = Vec::new();
        if state.focus == Focus::Bio {
            let props = CountedTextAreaProps {
                label: "Bio",
                value: &state.bio,
                placeholder: "",
                max_chars: state.max_chars,
                is_focused: true,
                on_change: DemoAction::BioChange,
            };
            actions.extend(self.bio.handle_event(event, props));
        }

        if state.focus == Focus::Tracks {
            match event.key_press().map(|key| key.code) {
                Some(KeyCode::Up) => actions.push(DemoAction::TrackPrev),
                Some(KeyCode::Down) => actions.push(DemoAction::TrackNext),
                _ => {}
            }
        }
        for (i, (card, track)) in self.cards.iter_mut().zip(&state.tracks).enumerate() {
            let props = TrackCardProps {
                title: &track.title,
                artist: &track.artist,
                album: track.album.as_deref(),
                duration: track.duration,
                is_selected: state.focus == Focus::Tracks && i == state.selected_track,
                on_open: Some(DemoAction::TrackPlay(i)),
            };
            let opened: Vec<_> = card.handle_event(event, props).into_iter().collect();
            if is_click && !opened.is_empty() && state.focus != Focus::Tracks {
                actions.push(DemoAction::FocusPane(Focus::Tracks));
            }
            actions.extend(opened);
        }

        (actions, matches!(event, EventKind::Resize(..)))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    keymap: MenuKeymap,
    max_chars: usize,
) -> io::Result<()> {
    let mut store = EffectStore::with_middleware(
        DemoState::new(Some(max_chars)),
        reducer,
        LoggingMiddleware::new(),
    );
    let mut ui = DemoUi::new(keymap, store.state().tracks.len())
        .map_err(io::Error::other)?;
    ui.sync_focus(store.state());

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    info!("menu demo started");
    let mut should_render = true;

    'main: loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, store.state()))?;
            // Deferred focus lands once the panel is on screen
            should_render = ui.menu.after_render();
        }

        let Some(raw_event) = event_rx.recv().await else {
            warn!("event channel closed");
            break;
        };
        let event = process_raw_event(raw_event);
        let (actions, menu_changed) = ui.map_event(&event, store.state());
        should_render |= menu_changed;

        for action in actions {
            let focus_before = store.state().focus;
            let result = store.dispatch(action);
            should_render |= result.changed;
            if store.state().focus != focus_before {
                ui.sync_focus(store.state());
            }
            if result.effects.contains(&DemoEffect::Exit) {
                break 'main;
            }
        }
    }

    cancel_token.cancel();
    info!("menu demo stopped");
    Ok(())
}
