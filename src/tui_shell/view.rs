use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::{App, PromptKind, Screen};

pub(super) fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.screen {
        Screen::SessionExpired => {
            render_gate_screen(
                frame,
                area,
                "Session expired",
                "Log in again with `cabinet login` (press q to quit)",
            );
            return;
        }
        Screen::AccessDenied => {
            render_gate_screen(
                frame,
                area,
                "Access denied",
                "This folder belongs to another account (Esc: back, q: quit)",
            );
            return;
        }
        _ => {}
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    match app.screen {
        Screen::Folders => render_folders(frame, parts[0], app),
        Screen::Files => render_files(frame, parts[0], app),
        _ => {}
    }
    render_status(frame, parts[1], app);
    render_hints(frame, parts[2], app);
}

fn render_folders(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.folders.current_page();
    let title = listing_title(
        "Folders",
        app.folders.page(),
        app.folders.total_pages(),
        app.folders.query(),
    );

    let mut rows: Vec<ListItem> = page
        .items
        .iter()
        .map(|f| ListItem::new(format!("{:>6}  {}", f.id, f.path)))
        .collect();
    if rows.is_empty() {
        rows.push(ListItem::new("(no folders)"));
    }

    let mut state = ListState::default();
    if !page.items.is_empty() {
        state.select(Some(app.selected.min(page.items.len() - 1)));
    }

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_files(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.files.current_page();
    let scope = app.folder.as_deref().unwrap_or("?");
    let title = listing_title(
        &format!("Files in '{scope}'"),
        app.files.page(),
        app.files.total_pages(),
        app.files.query(),
    );

    let mut rows: Vec<ListItem> = page
        .items
        .iter()
        .map(|f| ListItem::new(format!("r{:<4} {}", f.revision, f.filename)))
        .collect();
    if rows.is_empty() {
        rows.push(ListItem::new("(no files)"));
    }

    let mut state = ListState::default();
    if !page.items.is_empty() {
        state.select(Some(app.selected.min(page.items.len() - 1)));
    }

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, area, &mut state);
}

fn listing_title(label: &str, page: usize, total: usize, query: &str) -> String {
    if query.is_empty() {
        format!("{label} [{page}/{total}]")
    } else {
        format!("{label} [{page}/{total}] filter: {query}")
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(prompt) = &app.prompt {
        let label = match prompt.kind {
            PromptKind::Search => "search",
            PromptKind::CreateFolder => "new folder",
            PromptKind::Upload => "upload paths",
        };
        let line = Line::from(format!("{label}: {}_", prompt.input.buf));
        frame.render_widget(
            Paragraph::new(line).style(Style::default().fg(Color::Cyan)),
            area,
        );
        return;
    }

    let pending = match app.screen {
        Screen::Folders => app.folders.pending_delete(),
        Screen::Files => app.files.pending_delete(),
        _ => None,
    };
    if let Some(key) = pending {
        let line = Line::from(format!("Delete '{key}'? (y/n)"));
        frame.render_widget(
            Paragraph::new(line).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            area,
        );
        return;
    }

    if let Some(notice) = &app.notice {
        let color = if notice.error {
            Color::Red
        } else {
            Color::Green
        };
        frame.render_widget(
            Paragraph::new(Line::from(notice.text.clone())).style(Style::default().fg(color)),
            area,
        );
    }
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.screen {
        Screen::Folders => {
            "up/down: select  left/right: page  /: search  c: create  d: delete  Enter: open  r: reload  q: quit"
        }
        Screen::Files => {
            "up/down: select  left/right: page  /: search  u: upload  d: delete  o: preview  s: download  r: reload  Esc: back"
        }
        _ => "",
    };
    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_gate_screen(frame: &mut Frame, area: Rect, title: &str, body: &str) {
    let text = vec![Line::from(""), Line::from(body.to_string())];
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    frame.render_widget(Paragraph::new(text).block(block), area);
}
