use nd_core::header::HeaderView;
use nd_core::shell::{Pagination, Screen, LOADING_LABEL};
use nd_core::ArticleEntry;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use tui::Frame;

const KEY_HINTS: &str = "←/→ page  ↑/↓ select  enter open  e/s language  m masthead  q quit";

pub fn draw<B: Backend>(f: &mut Frame<B>, screen: &Screen, selected: usize, notice: Option<&str>) {
    let area = f.size();
    match screen {
        Screen::Loading => draw_centered(f, area, LOADING_LABEL, Style::default().fg(Color::Yellow)),
        Screen::Error(message) => draw_centered(f, area, message, Style::default().fg(Color::Red)),
        Screen::Ready {
            header,
            articles,
            pagination,
        } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(3),
                    Constraint::Length(3),
                ])
                .split(area);
            draw_header(f, chunks[0], header);
            draw_articles(f, chunks[1], articles, selected);
            draw_footer(f, chunks[2], pagination, notice);
        }
    }
}

fn draw_centered<B: Backend>(f: &mut Frame<B>, area: Rect, text: &str, style: Style) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    let paragraph = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, rows[1]);
}

fn draw_header<B: Backend>(f: &mut Frame<B>, area: Rect, header: &HeaderView) {
    let dim = Style::default().fg(Color::Gray);
    let mut spans = vec![
        Span::styled(header.date_line.clone(), dim),
        Span::raw("    "),
        Span::styled(header.masthead, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("    "),
    ];
    for (i, locale) in header.locales.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", dim));
        }
        let style = if locale.active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            dim
        };
        spans.push(Span::styled(locale.label, style));
    }

    let paragraph = Paragraph::new(Spans::from(spans))
        .block(Block::default().borders(Borders::BOTTOM))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn article_item(entry: &ArticleEntry) -> ListItem<'static> {
    let mut lines = vec![
        Spans::from(Span::styled(
            entry.date_line.clone(),
            Style::default().fg(Color::Gray),
        )),
        Spans::from(Span::styled(
            entry.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if !entry.description.is_empty() {
        lines.push(Spans::from(entry.description.clone()));
    }
    lines.push(Spans::from(Span::styled(
        entry.byline.clone(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));
    if let Some(thumb) = &entry.thumbnail {
        lines.push(Spans::from(Span::styled(
            format!("▣ {}", thumb.url),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !entry.categories.is_empty() {
        lines.push(Spans::from(Span::styled(
            entry.categories.join(" · "),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Spans::from(""));
    ListItem::new(lines)
}

fn draw_articles<B: Backend>(f: &mut Frame<B>, area: Rect, articles: &[ArticleEntry], selected: usize) {
    if articles.is_empty() {
        let paragraph = Paragraph::new("No articles.").alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = articles.iter().map(article_item).collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▌ ");

    let mut state = ListState::default();
    state.select(Some(selected.min(articles.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_footer<B: Backend>(f: &mut Frame<B>, area: Rect, pagination: &Pagination, notice: Option<&str>) {
    let enabled = Style::default().add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    let controls = Spans::from(vec![
        Span::styled(
            "◀ Previous",
            if pagination.previous_enabled { enabled } else { disabled },
        ),
        Span::raw("   "),
        Span::raw(pagination.label.clone()),
        Span::raw("   "),
        Span::styled(
            "Next ▶",
            if pagination.next_enabled { enabled } else { disabled },
        ),
    ]);
    let status = match notice {
        Some(message) => Spans::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
        None => Spans::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
    };

    let paragraph = Paragraph::new(vec![controls, status])
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use nd_core::shell::{render, Phase, UiState};
    use nd_core::Article;
    use tui::backend::TestBackend;
    use tui::buffer::Buffer;
    use tui::Terminal;

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol.as_str()).collect()
    }

    fn draw_state(state: &UiState, notice: Option<&str>) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let screen = render(state, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        terminal.draw(|f| draw(f, &screen, 0, notice)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_screen() {
        let text = draw_state(&UiState::default(), None);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_error_screen_has_no_articles() {
        let state = UiState {
            phase: Phase::Error("HTTP error: status 500".to_string()),
            ..UiState::default()
        };
        let text = draw_state(&state, None);
        assert!(text.contains("Error: HTTP error: status 500"));
        assert!(!text.contains("Page"));
    }

    #[test]
    fn test_ready_screen() {
        let article = Article {
            guid: "a1".to_string(),
            title: "Chip Shortage Eases".to_string(),
            description: "D".to_string(),
            pub_date: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            link: "https://x/y".to_string(),
            creator: None,
            categories: vec![],
            media: None,
        };
        let state = UiState {
            total_pages: 3,
            phase: Phase::Ready(vec![article]),
            ..UiState::default()
        };
        let text = draw_state(&state, Some("no browser"));

        assert!(text.contains("Tue, Jan 2, 2024"));
        assert!(text.contains("Chip Shortage Eases"));
        assert!(text.contains("BY STAFF WRITER"));
        assert!(text.contains("Page 1 of 3"));
        assert!(text.contains("no browser"));
    }
}
