// Card, placeholder, and error views.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::{App, View};
use crate::models::{Repo, count_display};

pub fn draw(frame: &mut Frame, app: &App) {
    match app.view() {
        View::Card(repo) => draw_card(frame, repo),
        View::Error {
            owner_repo,
            message,
        } => draw_error(frame, owner_repo, message),
        View::Loading => draw_loading(frame, app.owner_repo.as_deref()),
    }
}

fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" GitHub ")
        .padding(Padding::horizontal(1))
}

fn draw_card(frame: &mut Frame, repo: &Repo) {
    let block = card_block();
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let [header, description, counters, clone, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .spacing(1)
    .areas(inner);

    let title = Line::from(vec![
        repo.owner.login.as_str().blue(),
        " / ".into(),
        repo.name.as_str().blue().bold(),
    ]);
    frame.render_widget(Paragraph::new(title), header);

    frame.render_widget(
        Paragraph::new(repo.description.as_deref().unwrap_or_default())
            .wrap(Wrap { trim: true }),
        description,
    );

    let cells: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(counters);
    draw_counter(frame, cells[0], "Watchers", repo.subscribers_count);
    draw_counter(frame, cells[1], "Stars", repo.stargazers_count);
    draw_counter(frame, cells[2], "Forks", repo.forks_count);
    draw_counter(frame, cells[3], "Issues", repo.open_issues_count);

    frame.render_widget(Paragraph::new(repo.ssh_url.as_str()).dim(), clone);

    let [language, license, updated] =
        Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(footer);
    let language_line = Line::from(vec![
        Span::styled("● ", Style::new().fg(language_color(repo.language.as_deref()))),
        repo.display_language().into(),
    ]);
    frame.render_widget(Paragraph::new(language_line), language);
    frame.render_widget(
        Paragraph::new(repo.display_license()).alignment(Alignment::Center),
        license,
    );
    frame.render_widget(
        Paragraph::new(format!("Updated {}", repo.display_pushed_at()))
            .alignment(Alignment::Right),
        updated,
    );
}

fn draw_counter(frame: &mut Frame, area: Rect, label: &str, count: u64) {
    let text = vec![
        Line::from(label.dim()),
        Line::from(count_display(count).bold()),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_loading(frame: &mut Frame, owner_repo: Option<&str>) {
    let text = match owner_repo {
        Some(owner_repo) => format!("Loading {owner_repo}…"),
        None => String::from("Loading…"),
    };
    frame.render_widget(
        Paragraph::new(text.dim())
            .block(card_block())
            .alignment(Alignment::Center),
        frame.area(),
    );
}

fn draw_error(frame: &mut Frame, owner_repo: &str, message: &str) {
    let lines = vec![
        Line::from(format!("Error getting {owner_repo} details from GitHub:")),
        Line::from(format!("\"{message}\"").red()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(card_block())
            .wrap(Wrap { trim: true }),
        frame.area(),
    );
}

/// GitHub linguist colors for the footer dot, for the languages a card is
/// likely to show. Everything else gets gray.
fn language_color(language: Option<&str>) -> Color {
    match language {
        Some("Rust") => Color::Rgb(0xde, 0xa5, 0x84),
        Some("JavaScript") => Color::Rgb(0xf1, 0xe0, 0x5a),
        Some("TypeScript") => Color::Rgb(0x31, 0x78, 0xc6),
        Some("Python") => Color::Rgb(0x35, 0x72, 0xa5),
        Some("Go") => Color::Rgb(0x00, 0xad, 0xd8),
        Some("Java") => Color::Rgb(0xb0, 0x72, 0x19),
        Some("C") => Color::Rgb(0x55, 0x55, 0x55),
        Some("C++") => Color::Rgb(0xf3, 0x4b, 0x7d),
        Some("C#") => Color::Rgb(0x17, 0x86, 0x00),
        Some("Ruby") => Color::Rgb(0x70, 0x15, 0x16),
        Some("Swift") => Color::Rgb(0xf0, 0x51, 0x38),
        Some("Kotlin") => Color::Rgb(0xa9, 0x7b, 0xff),
        Some("PHP") => Color::Rgb(0x4f, 0x5d, 0x95),
        Some("Shell") => Color::Rgb(0x89, 0xe0, 0x51),
        Some("HTML") => Color::Rgb(0xe3, 0x4c, 0x26),
        Some("CSS") => Color::Rgb(0x56, 0x3d, 0x7c),
        _ => Color::Rgb(0x9e, 0x9e, 0x9e),
    }
}
