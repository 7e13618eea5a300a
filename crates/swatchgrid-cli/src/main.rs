//! swatchgrid - TUI and CLI for SVG design-grid swatches
//!
//! Usage:
//!   swatchgrid                 Launch TUI grid browser
//!   swatchgrid rect [options]  Generate a free-form rectangle
//!   swatchgrid scales [-b px]  List the scale table

use std::env;
use std::io::{self, stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use image::{DynamicImage, RgbaImage};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use ratatui_image::{
    picker::{Picker, ProtocolType},
    protocol::StatefulProtocol,
    StatefulImage,
};
use resvg::usvg;
use tiny_skia::Pixmap;

use swatchgrid::{build_catalog, fmt_number, svg_from_data_uri, GridEntry, GRID_SCALE};

mod cli;

use cli::actions::{copy_with_feedback, Notify, SystemClipboard};
use cli::prefs::{load_prefs, save_prefs, Prefs};
use cli::{cmd_rect, cmd_scales};

/// Square canvas for the terminal preview image.
const PREVIEW_CANVAS: u32 = 1200;

/// Base units the `b` key cycles through.
const BASE_UNITS: &[f64] = &[2.0, 4.0, 5.0, 8.0, 10.0, 16.0];

/// How long a transient status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(2);

/// Render a swatch preview document onto a white square canvas.
///
/// The document is scaled up to fill the canvas; tiny swatches (a 4px
/// document is legal) would otherwise be invisible at terminal resolution.
fn render_preview(preview_svg: &str) -> Option<DynamicImage> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(preview_svg, &options).ok()?;
    let side = tree.size().width().max(tree.size().height());
    if side <= 0.0 {
        return None;
    }
    let scale = PREVIEW_CANVAS as f32 / side;

    let mut pixmap = Pixmap::new(PREVIEW_CANVAS, PREVIEW_CANVAS)?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(PREVIEW_CANVAS, PREVIEW_CANVAS, pixmap.take())?;
    Some(DynamicImage::ImageRgba8(rgba))
}

/// Transient status line - the HUD analog. Messages expire after a
/// couple of seconds.
struct StatusLine {
    message: Option<(String, Instant)>,
}

impl StatusLine {
    fn new() -> Self {
        StatusLine { message: None }
    }

    fn current(&self) -> Option<&str> {
        match &self.message {
            Some((text, shown_at)) if shown_at.elapsed() < STATUS_TTL => Some(text),
            _ => None,
        }
    }
}

impl Notify for StatusLine {
    fn notify(&mut self, message: &str) {
        self.message = Some((message.to_string(), Instant::now()));
    }
}

/// Application state for TUI
struct App {
    /// Current catalog entries (one per scale step)
    entries: Vec<GridEntry>,
    /// Selection in the size list
    list_state: ListState,
    /// Design-grid base unit in px
    base_unit: f64,
    /// Rotating palette on/off
    multicolor: bool,
    /// Should exit
    should_quit: bool,
    /// Is a catalog rebuild in progress?
    is_loading: bool,
    /// Flag to rebuild again after the current rebuild completes
    needs_rebuild: bool,
    /// Channel to receive rebuilt catalogs
    result_rx: Receiver<Vec<GridEntry>>,
    /// Channel handed to rebuild threads
    result_tx: Sender<Vec<GridEntry>>,
    /// Animation frame counter for spinner
    spinner_frame: usize,
    /// Image picker for terminal protocol detection
    picker: Picker,
    /// Current rendered image protocol state
    image_state: Option<Box<dyn StatefulProtocol>>,
    /// Flag to indicate image needs re-rendering
    needs_image_update: bool,
    /// Transient copy feedback
    status: StatusLine,
    /// System clipboard sink
    clipboard: SystemClipboard,
}

impl App {
    fn new() -> Self {
        let prefs = load_prefs();

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let (result_tx, result_rx) = mpsc::channel();

        // Initialize image picker - force Sixel protocol
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        let mut app = App {
            entries: Vec::new(),
            list_state,
            base_unit: prefs.base_unit,
            multicolor: prefs.multicolor,
            should_quit: false,
            is_loading: false,
            needs_rebuild: false,
            result_rx,
            result_tx,
            spinner_frame: 0,
            picker,
            image_state: None,
            needs_image_update: true,
            status: StatusLine::new(),
            clipboard: SystemClipboard::new(),
        };

        app.rebuild_catalog();
        app
    }

    /// Rebuild the catalog on a background thread. Generation is cheap,
    /// but keeping it off the event loop means the UI can show a uniform
    /// loading state and coalesce rapid setting changes.
    fn rebuild_catalog(&mut self) {
        if self.is_loading {
            self.needs_rebuild = true;
            return;
        }

        self.needs_rebuild = false;
        let base_unit = self.base_unit;
        let multicolor = self.multicolor;
        let tx = self.result_tx.clone();

        self.is_loading = true;

        thread::spawn(move || {
            let entries = build_catalog(base_unit, GRID_SCALE, multicolor);
            let _ = tx.send(entries);
        });
    }

    fn check_catalog_result(&mut self) {
        // Drain all pending results, keep only the latest
        let mut latest: Option<Vec<GridEntry>> = None;
        while let Ok(entries) = self.result_rx.try_recv() {
            latest = Some(entries);
        }

        if let Some(entries) = latest {
            self.entries = entries;
            self.is_loading = false;
            self.needs_image_update = true;

            // Keep the selection in range after a rebuild
            let selected = self.list_state.selected().unwrap_or(0);
            if selected >= self.entries.len() && !self.entries.is_empty() {
                self.list_state.select(Some(self.entries.len() - 1));
            }

            // If the user changed settings mid-rebuild, go again
            if self.needs_rebuild {
                self.rebuild_catalog();
            }
        }
    }

    fn selected_entry(&self) -> Option<&GridEntry> {
        self.entries.get(self.list_state.selected()?)
    }

    fn update_image(&mut self) {
        if self.needs_image_update && !self.is_loading {
            let preview = self
                .selected_entry()
                .and_then(|entry| svg_from_data_uri(&entry.preview_data_uri))
                .and_then(|svg| render_preview(&svg));
            if let Some(img) = preview {
                self.image_state = Some(self.picker.new_resize_protocol(img));
            }
            self.needs_image_update = false;
        }
    }

    fn next_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.needs_image_update = true;
    }

    fn prev_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.entries.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        self.needs_image_update = true;
    }

    fn toggle_multicolor(&mut self) {
        self.multicolor = !self.multicolor;
        self.save_prefs();
        self.rebuild_catalog();
    }

    /// Step through BASE_UNITS; direction is +1 or -1.
    fn cycle_base_unit(&mut self, direction: isize) {
        let current = BASE_UNITS
            .iter()
            .position(|u| *u == self.base_unit)
            .unwrap_or(3); // default slot is 8px
        let len = BASE_UNITS.len() as isize;
        let next = (current as isize + direction).rem_euclid(len) as usize;
        self.base_unit = BASE_UNITS[next];
        self.save_prefs();
        self.rebuild_catalog();
    }

    fn save_prefs(&self) {
        save_prefs(&Prefs {
            base_unit: self.base_unit,
            multicolor: self.multicolor,
        });
    }

    /// Copy the selected entry's raw document to the clipboard and surface
    /// the outcome on the status line.
    fn copy_selected(&mut self) {
        let svg = match self.selected_entry() {
            Some(entry) => entry.raw_svg.clone(),
            None => return,
        };
        copy_with_feedback(&mut self.clipboard, &mut self.status, &svg);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Check for CLI subcommands
    if args.len() >= 2 {
        match args[1].as_str() {
            "rect" => {
                cmd_rect(&args[2..]);
                return;
            }
            "scales" => {
                cmd_scales(&args[2..]);
                return;
            }
            "grid" => {
                // Fall through to the TUI
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = run_tui() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_tui() -> Result<(), String> {
    // Initialize terminal
    enable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(EnterAlternateScreen).map_err(|e| e.to_string())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| e.to_string())?;

    let mut app = App::new();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(LeaveAlternateScreen).map_err(|e| e.to_string())?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        // Check for completed catalog rebuild (non-blocking)
        app.check_catalog_result();

        // Update the rendered preview if needed
        app.update_image();

        // Animate spinner while loading
        if app.is_loading {
            app.spinner_frame = (app.spinner_frame + 1) % 8;
        }

        terminal.draw(|frame| ui(frame, app)).map_err(|_| "Draw error".to_string())?;

        if event::poll(Duration::from_millis(50)).map_err(|e| e.to_string())? {
            if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.prev_entry();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.next_entry();
                        }
                        KeyCode::Enter | KeyCode::Char('c') => {
                            app.copy_selected();
                        }
                        KeyCode::Char('m') => {
                            app.toggle_multicolor();
                        }
                        KeyCode::Char('b') => {
                            app.cycle_base_unit(1);
                        }
                        KeyCode::Char('B') => {
                            app.cycle_base_unit(-1);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(4)])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(30)])
        .split(main_layout[0]);

    // Split left sidebar into size list and grid settings
    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(top_layout[0]);

    // Size list
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| ListItem::new(format!("{}px", fmt_number(entry.size))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Sizes ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.list_state);

    // Grid settings panel
    let settings_text = format!(
        "Base: {}px\nColors: {}\nEntries: {}",
        fmt_number(app.base_unit),
        if app.multicolor { "multi" } else { "single" },
        app.entries.len()
    );
    let settings = Paragraph::new(settings_text)
        .block(
            Block::default()
                .title(" Grid ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(settings, sidebar_layout[1]);

    // Spinner animation frames
    let spinner_chars = ['|', '/', '-', '\\', '|', '/', '-', '\\'];
    let spinner = spinner_chars[app.spinner_frame % spinner_chars.len()];

    let image_title = if app.is_loading {
        format!(" [{}] Rebuilding... ", spinner)
    } else {
        match app.selected_entry() {
            Some(entry) => format!(" {}px swatch ", fmt_number(entry.size)),
            None => " Preview ".to_string(),
        }
    };

    let border_color = if app.is_loading { Color::Yellow } else { Color::Green };

    let image_block = Block::default()
        .title(image_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = image_block.inner(top_layout[1]);
    frame.render_widget(image_block, top_layout[1]);

    // Render the preview using ratatui-image
    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }

    // Bottom bar: transient status + help
    let bottom_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(36)])
        .split(main_layout[1]);

    let status_text = match app.status.current() {
        Some(message) => message.to_string(),
        None => "Enter copies the raw SVG for the selected size".to_string(),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Status ").borders(Borders::ALL));

    frame.render_widget(status, bottom_layout[0]);

    let help = Paragraph::new("↑↓ select  Enter copy\nm colors  b/B base unit  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, bottom_layout[1]);
}

fn print_usage() {
    eprintln!("swatchgrid - SVG design-grid swatch generation");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  swatchgrid                 Launch TUI grid browser");
    eprintln!("  swatchgrid rect [options]  Generate a free-form rectangle");
    eprintln!("  swatchgrid scales [-b px]  List the scale table");
    eprintln!();
    eprintln!("TUI Controls:");
    eprintln!("  ↑/↓ or j/k    Select size");
    eprintln!("  Enter or c    Copy raw SVG to clipboard");
    eprintln!("  m             Toggle rotating palette");
    eprintln!("  b / B         Cycle base unit forward / back");
    eprintln!("  q or Esc      Quit");
    eprintln!();
    eprintln!("See 'swatchgrid rect --help' for rect options.");
}
