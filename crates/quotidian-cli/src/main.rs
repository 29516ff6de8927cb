//! Quotidian CLI — daily quotes in your terminal

use std::io;

use clap::Parser;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;

use quotidian::corpus::{BuiltinCorpus, QuoteSource};
use quotidian::data::{FavoritesManager, FavoritesStore, Quote};

#[derive(Parser)]
#[command(name = "quotidian", about = "Daily quote in your terminal", version)]
struct Cli {
    /// Print one quote to stdout and exit instead of starting the TUI
    #[arg(long)]
    print: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Today,
    Favorites,
}

struct App {
    tab: Tab,
    current: Option<Quote>,
    /// Cursor into the favorites list
    selected: usize,
    /// Transient feedback line (share text, add/remove confirmation)
    status: Option<String>,
    running: bool,
}

impl App {
    fn new(current: Option<Quote>) -> Self {
        Self {
            tab: Tab::Today,
            current,
            selected: 0,
            status: None,
            running: true,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let corpus = BuiltinCorpus::new();
    let store = match FavoritesStore::open() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut manager = FavoritesManager::new(store);
    manager.initialize();

    if cli.print {
        match corpus.pick_random() {
            Some(quote) => println!("{}", quote.share_text()),
            None => {
                eprintln!("Error: the quote corpus is empty");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Enter TUI
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(corpus.pick_random());

    while app.running {
        terminal.draw(|f| draw_ui(f, &app, &manager))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key.code, &mut app, &mut manager, &corpus);
            }
        }
    }

    // Let queued writes land before tearing the terminal down
    manager.flush();

    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

fn handle_key(code: KeyCode, app: &mut App, manager: &mut FavoritesManager, corpus: &BuiltinCorpus) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Tab => {
            app.tab = match app.tab {
                Tab::Today => Tab::Favorites,
                Tab::Favorites => Tab::Today,
            };
            app.status = None;
        }
        _ => match app.tab {
            Tab::Today => handle_today_key(code, app, manager, corpus),
            Tab::Favorites => handle_favorites_key(code, app, manager),
        },
    }
}

fn handle_today_key(
    code: KeyCode,
    app: &mut App,
    manager: &mut FavoritesManager,
    corpus: &BuiltinCorpus,
) {
    match code {
        KeyCode::Char('n') => {
            app.current = corpus.pick_random();
            app.status = None;
        }
        KeyCode::Char('f') => {
            if let Some(quote) = &app.current {
                manager.toggle(quote);
                app.status = Some(
                    if manager.is_favorited(quote) {
                        "Added to favorites"
                    } else {
                        "Removed from favorites"
                    }
                    .to_string(),
                );
            }
        }
        KeyCode::Char('s') => {
            if let Some(quote) = &app.current {
                app.status = Some(format!("Share: {}", quote.share_text()));
            }
        }
        _ => {}
    }
}

fn handle_favorites_key(code: KeyCode, app: &mut App, manager: &mut FavoritesManager) {
    match code {
        KeyCode::Up => {
            app.selected = app.selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected + 1 < manager.count() {
                app.selected += 1;
            }
        }
        KeyCode::Char('d') => {
            if let Some(quote) = manager.all().get(app.selected).cloned() {
                manager.remove(&quote);
                app.status = Some("Removed from favorites".to_string());
                if app.selected >= manager.count() && app.selected > 0 {
                    app.selected -= 1;
                }
            }
        }
        _ => {}
    }
}

fn draw_ui(f: &mut Frame, app: &App, manager: &FavoritesManager) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Quotidian v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // tab bar
        Constraint::Min(5),    // content
        Constraint::Length(1), // status line
        Constraint::Length(1), // help bar
    ])
    .split(inner);

    draw_tabs(f, app, chunks[0]);
    match app.tab {
        Tab::Today => draw_today(f, app, manager, chunks[1]),
        Tab::Favorites => draw_favorites(f, app, manager, chunks[1]),
    }
    draw_status(f, app, chunks[2]);
    draw_help(f, app, chunks[3]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let selected = match app.tab {
        Tab::Today => 0,
        Tab::Favorites => 1,
    };
    let tabs = Tabs::new(["Today", "Favorites"])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Magenta).bold());
    f.render_widget(tabs, area);
}

fn draw_today(f: &mut Frame, app: &App, manager: &FavoritesManager, area: Rect) {
    let Some(quote) = &app.current else {
        f.render_widget(
            Paragraph::new("The quote corpus is empty").alignment(Alignment::Center),
            area,
        );
        return;
    };

    let favorited = manager.is_favorited(quote);
    let marker = if favorited { "♥ favorited" } else { "♡ press 'f' to favorite" };
    let marker_color = if favorited { Color::Red } else { Color::DarkGray };

    let text = vec![
        Line::raw(""),
        Line::styled(
            quote.text.clone(),
            Style::default().fg(Color::White).bold(),
        ),
        Line::raw(""),
        Line::styled(
            format!("— {}", quote.display_author()),
            Style::default().fg(Color::DarkGray).italic(),
        ),
        Line::raw(""),
        Line::styled(marker, Style::default().fg(marker_color)),
    ];

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(card),
        centered_rect(area, 60, 10),
    );
}

fn draw_favorites(f: &mut Frame, app: &App, manager: &FavoritesManager, area: Rect) {
    if manager.is_empty() {
        let empty = vec![
            Line::raw(""),
            Line::styled("No favorites yet", Style::default().fg(Color::DarkGray)),
            Line::styled(
                "Press 'f' on the Today tab to add one",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        f.render_widget(Paragraph::new(empty).alignment(Alignment::Center), area);
        return;
    }

    let items: Vec<ListItem> = manager
        .iter()
        .map(|quote| {
            ListItem::new(vec![
                Line::raw(quote.text.clone()),
                Line::styled(
                    format!("  — {}", quote.display_author()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Favorites ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().fg(Color::Magenta).bold())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected.min(manager.count() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(status.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow)),
            area,
        );
    }
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let keys: &[(&str, &str)] = match app.tab {
        Tab::Today => &[
            ("n", "new quote"),
            ("f", "favorite"),
            ("s", "share"),
            ("Tab", "favorites"),
            ("q", "quit"),
        ],
        Tab::Favorites => &[
            ("↑/↓", "select"),
            ("d", "remove"),
            ("Tab", "today"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  |  "));
        }
        spans.push(Span::styled(
            format!("'{}' ", key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(*action));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
