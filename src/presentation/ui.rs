// Terminal rendering of the panels' view models
use crate::application::controller::AppController;
use crate::application::dashboard_panel::{KpiRegion, TableBody};
use crate::application::log_panel::LogItem;
use crate::application::notifier::NoticeKind;
use crate::application::settings_editor::SettingField;
use crate::domain::view::ViewId;
use crate::presentation::screen::ScreenState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, controller: &AppController, screen: &ScreenState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_tabs(frame, controller, chunks[0]);
    match controller.router.active() {
        ViewId::Dashboard => draw_dashboard(frame, controller, chunks[1]),
        ViewId::Settings => draw_settings(frame, controller, screen, chunks[1]),
        ViewId::Logs => draw_logs(frame, controller, chunks[1]),
    }
    draw_notice(frame, controller, chunks[2]);
    draw_footer(frame, controller, chunks[3]);
}

fn draw_tabs(frame: &mut Frame, controller: &AppController, area: Rect) {
    let selected = ViewId::ALL
        .iter()
        .position(|view| controller.router.is_active(*view))
        .unwrap_or(0);
    let tabs = Tabs::new(ViewId::ALL.iter().map(|view| view.label()))
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("opsdeck"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn draw_dashboard(frame: &mut Frame, controller: &AppController, area: Rect) {
    let panel = &controller.dashboard;
    if panel.is_loading() {
        let loader = Paragraph::new("Loading dashboard…")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Dashboard"));
        frame.render_widget(loader, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(35),
            Constraint::Min(0),
        ])
        .split(area);

    let caption = Paragraph::new(format!("Generated {}", panel.generated_at()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(caption, chunks[0]);

    let kpi_items: Vec<ListItem> = match panel.kpi_region() {
        KpiRegion::Placeholder(text) => {
            vec![ListItem::new(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )))]
        }
        KpiRegion::Cards(cards) => cards
            .into_iter()
            .map(|card| {
                ListItem::new(Line::from(vec![
                    Span::styled(card.label, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(card.value, Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect(),
    };
    let kpis = List::new(kpi_items)
        .block(Block::default().borders(Borders::ALL).title("Key indicators"));
    frame.render_widget(kpis, chunks[1]);

    let cards = panel.table_cards();
    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let table_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[2]);

    for (card, chunk) in cards.iter().zip(table_chunks.iter()) {
        let columns = card.headers.len().max(1);
        let widths = vec![Constraint::Ratio(1, columns as u32); columns];
        let header = Row::new(card.headers.iter().map(|header| Cell::from(header.as_str())))
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = match &card.body {
            TableBody::Rows(rows) => rows
                .iter()
                .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))))
                .collect(),
            TableBody::Placeholder { text, .. } => {
                vec![Row::new(vec![Cell::from(*text)])
                    .style(Style::default().fg(Color::DarkGray))]
            }
        };
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(card.title.as_str()));
        frame.render_widget(table, *chunk);
    }
}

fn draw_settings(frame: &mut Frame, controller: &AppController, screen: &ScreenState, area: Rect) {
    let editor = &controller.settings;
    let title = if editor.is_loading() { "Settings (loading…)" } else { "Settings" };

    let header = Row::new(["Key", "Value", "Notes"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = editor
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let selected = index == screen.selected_row;
            let cells = [
                (SettingField::Key, row.entry.key.as_str()),
                (SettingField::Value, row.entry.value.as_str()),
                (SettingField::Notes, row.entry.notes.as_str()),
            ]
            .map(|(field, text)| {
                let mut style = Style::default();
                if selected {
                    style = style.add_modifier(Modifier::BOLD);
                    if field == screen.selected_field {
                        style = if screen.editing {
                            style.add_modifier(Modifier::REVERSED)
                        } else {
                            style.add_modifier(Modifier::UNDERLINED)
                        };
                    }
                }
                Cell::from(text).style(style)
            });
            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(40),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn draw_logs(frame: &mut Frame, controller: &AppController, area: Rect) {
    let panel = &controller.logs;
    let title = if panel.is_loading() { "Logs (loading…)" } else { "Logs" };

    let items: Vec<ListItem> = panel
        .items()
        .into_iter()
        .map(|item| match item {
            LogItem::Placeholder(text) => ListItem::new(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            ))),
            LogItem::Entry { meta, message, details } => {
                let mut lines = vec![
                    Line::from(Span::styled(meta, Style::default().fg(Color::Cyan))),
                    Line::from(message),
                ];
                if let Some(details) = details {
                    lines.push(Line::from(Span::styled(
                        details,
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(Text::from(lines))
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_notice(frame: &mut Frame, controller: &AppController, area: Rect) {
    let Some(notice) = controller.notifier.current() else {
        return;
    };
    let style = match notice.kind {
        NoticeKind::Info => Style::default().fg(Color::Black).bg(Color::Cyan),
        NoticeKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
        NoticeKind::Error => Style::default().fg(Color::White).bg(Color::Red),
    };
    let toast = Paragraph::new(notice.message.as_str())
        .style(style)
        .wrap(Wrap { trim: true });
    frame.render_widget(toast, area);
}

fn draw_footer(frame: &mut Frame, controller: &AppController, area: Rect) {
    let hints = match controller.router.active() {
        ViewId::Dashboard => "1-3 switch view | r refresh | q quit",
        ViewId::Settings => {
            "1-3 switch view | arrows move | Enter edit | a add | x remove | s save | r reload | q quit"
        }
        ViewId::Logs => "1-3 switch view | r refresh | q quit",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, area);
}
