use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mdpaste_config::Config;
use mdpaste_engine::{NotifyKind, PasteOutcome, PasteSession, PasteSettings, ToastQueue, convert};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::{
    env, fs,
    io::{self, Read, Stdout, Write, stdout},
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

mod clipboard;
mod preview;

use clipboard::SystemClipboard;

const TICK: Duration = Duration::from_millis(100);
const SAVE_FILE_NAME: &str = "converted.md";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Interactive,
    Convert { input: Option<PathBuf> },
    Help,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut args = args.into_iter().skip(1);
    let command = match args.next().as_deref() {
        None => Command::Interactive,
        Some("convert") => Command::Convert {
            // `-` means stdin
            input: args.next().filter(|a| a != "-").map(PathBuf::from),
        },
        Some("-h" | "--help" | "help") => Command::Help,
        Some(other) => bail!("unknown command '{other}'"),
    };

    if let Some(extra) = args.next() {
        bail!("unexpected argument '{extra}'");
    }
    Ok(command)
}

fn paste_settings(config: &Config) -> PasteSettings {
    PasteSettings {
        refractory: Duration::from_millis(config.refractory_ms),
        toast_duration: Duration::from_millis(config.toast_duration_ms),
        copy_notice_delay: Duration::from_millis(config.copy_notice_delay_ms),
        auto_copy: config.auto_copy,
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [convert [FILE]]");
    eprintln!();
    eprintln!("  (no command)    interactive mode: Ctrl+V pastes and converts the clipboard");
    eprintln!("  convert [FILE]  convert FILE (or stdin) and print Markdown to stdout");
    eprintln!();
    eprintln!("Settings are read from {}", Config::config_path().display());
}

struct App {
    session: PasteSession,
    clipboard: SystemClipboard,
    toasts: ToastQueue,
    output_dir: Option<PathBuf>,
    preview: Vec<Line<'static>>,
    raw_scroll: u16,
}

impl App {
    fn new(config: &Config) -> Self {
        let settings = paste_settings(config);
        Self {
            toasts: ToastQueue::new(settings.toast_duration),
            session: PasteSession::new(settings),
            clipboard: SystemClipboard::default(),
            output_dir: config.output_dir.clone(),
            preview: Vec::new(),
            raw_scroll: 0,
        }
    }

    fn paste(&mut self) {
        let outcome = self
            .session
            .paste(Instant::now(), &mut self.clipboard, &mut self.toasts);
        if let PasteOutcome::Converted { markdown } = outcome {
            self.preview = preview::render(&markdown);
            self.raw_scroll = 0;
        }
    }

    fn copy(&mut self) {
        self.session
            .copy_current(&mut self.clipboard, &mut self.toasts);
    }

    fn save(&mut self) {
        let Some(markdown) = self.session.markdown() else {
            return;
        };
        let Some(dir) = self.output_dir.as_ref() else {
            self.toasts
                .show("Set output_dir in the config to save", NotifyKind::Warning);
            return;
        };

        let path = dir.join(SAVE_FILE_NAME);
        let result = fs::create_dir_all(dir).and_then(|()| fs::write(&path, markdown));
        match result {
            Ok(()) => {
                log::info!("Saved Markdown to {}", path.display());
                self.toasts
                    .show(format!("Saved to {}", path.display()), NotifyKind::Success);
            }
            Err(e) => {
                log::warn!("Failed to save {}: {e}", path.display());
                self.toasts.show("Failed to save Markdown", NotifyKind::Error);
            }
        }
    }

    fn dismiss_latest(&mut self) {
        self.toasts.dismiss_latest();
    }

    fn scroll_down(&mut self) {
        let lines = self.session.markdown().map_or(0, |m| m.lines().count());
        self.raw_scroll = scrolled_down(self.raw_scroll, lines);
    }

    fn scroll_up(&mut self) {
        self.raw_scroll = self.raw_scroll.saturating_sub(1);
    }

    fn tick(&mut self) {
        self.toasts.expire(Instant::now());
    }
}

/// Next scroll offset for the raw pane, kept on the last line and within `u16`.
fn scrolled_down(offset: u16, lines: usize) -> u16 {
    if usize::from(offset) + 1 < lines {
        offset.saturating_add(1)
    } else {
        offset
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "mdpaste-cli".to_string());

    let command = match parse_args(args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(&program);
            process::exit(1);
        }
    };

    // Keep the alternate screen free of routine log lines
    let default_level = match command {
        Command::Interactive => log::LevelFilter::Warn,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match command {
        Command::Help => {
            print_usage(&program);
            Ok(())
        }
        Command::Convert { input } => run_convert(input),
        Command::Interactive => {
            let config = match Config::load_or_default() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: Failed to load config file: {e}");
                    process::exit(1);
                }
            };
            run_interactive(&config)
        }
    }
}

fn run_convert(input: Option<PathBuf>) -> Result<()> {
    let text = match &input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let markdown = convert(&text);
    log::info!(
        "Converted {} lines into {} lines of Markdown",
        text.trim().lines().count(),
        markdown.lines().count()
    );

    let mut out = stdout().lock();
    if !markdown.is_empty() {
        writeln!(out, "{markdown}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_interactive(config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui(f, app))?;

        // Poll so toasts expire without a key press
        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('v') if ctrl => app.paste(),
                KeyCode::Char('c') if ctrl => return Ok(()),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('p') => app.paste(),
                KeyCode::Char('c') => app.copy(),
                KeyCode::Char('s') => app.save(),
                KeyCode::Char('d') => app.dismiss_latest(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(rows[0]);

    // Preview panel
    let preview_text = if app.preview.is_empty() {
        vec![
            Line::from("Ready to convert!"),
            Line::default(),
            Line::from("Press Ctrl+V (or p) to paste the clipboard and convert it to Markdown"),
        ]
    } else {
        app.preview.clone()
    };
    let preview = Paragraph::new(preview_text)
        .block(Block::default().borders(Borders::ALL).title("Markdown Preview"))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, panes[0]);

    // Raw markdown panel
    let raw_text: Vec<Line> = app
        .session
        .markdown()
        .map(|m| m.lines().map(|l| Line::from(l.to_string())).collect())
        .unwrap_or_default();
    let raw = Paragraph::new(raw_text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Raw Markdown"))
        .scroll((app.raw_scroll, 0));
    f.render_widget(raw, panes[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("Ctrl+V/p: Paste | "),
        Span::raw("c: Copy raw | "),
        Span::raw("s: Save | "),
        Span::raw("d: Dismiss | "),
        Span::raw("↑/↓: Scroll | "),
        Span::raw("q: Quit"),
    ]);
    f.render_widget(Paragraph::new(help_text), rows[1]);

    render_toasts(f, app, rows[0]);
}

/// Stacks toasts in the bottom-right corner, newest at the bottom.
fn render_toasts(f: &mut Frame, app: &App, area: Rect) {
    const TOAST_WIDTH: u16 = 44;
    const TOAST_HEIGHT: u16 = 3;

    let width = TOAST_WIDTH.min(area.width);
    let fit = usize::from(area.height / TOAST_HEIGHT);
    let toasts = app.toasts.visible();
    let shown = &toasts[toasts.len().saturating_sub(fit)..];

    let mut y = area.bottom();
    for toast in shown.iter().rev() {
        y = y.saturating_sub(TOAST_HEIGHT);
        let rect = Rect::new(area.right().saturating_sub(width), y, width, TOAST_HEIGHT);
        let color = match toast.kind {
            NotifyKind::Success => Color::Green,
            NotifyKind::Error => Color::Red,
            NotifyKind::Warning => Color::Yellow,
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", toast.kind.icon()), Style::default().fg(color)),
            Span::raw(toast.message.clone()),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}
