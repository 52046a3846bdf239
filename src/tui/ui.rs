//! Terminal setup, the main loop and rendering for [`CatalogApp`].

use super::app::{CatalogApp, Focus};
use super::events::{Event, EventHandler, handle_key_event, handle_mouse_event};
use super::theme::{
    FooterHints, Styles, Theme, card_badge, colors, filter_badge, render_footer_hints, set_theme,
};
use super::viewmodel::CycleFilter;
use super::widgets::{
    ChipRow, MIN_HEIGHT, MIN_WIDTH, check_terminal_size, render_message, render_size_warning,
};
use crate::catalog::{
    ListingCard, LOAD_FAILED_MESSAGE, LoadStatus, NO_RESULTS_MESSAGE, RenderFrame,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState as WidgetListState, Paragraph},
};
use std::io::{self, stdout};

/// Run the catalog TUI until the user quits.
///
/// The feed is loaded on a worker thread; the first frames show the
/// loading indicator.
pub fn run_catalog_tui(app: &mut CatalogApp) -> io::Result<()> {
    set_theme(Theme::from_name(&app.theme_name));

    enable_raw_mode()?;
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut CatalogApp) -> io::Result<()> {
    let mut events = EventHandler::default();
    events.start_load(app.source().clone());

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Loaded(outcome) => app.on_loaded(outcome),
            Event::Resize(_, _) => {}
            Event::Tick => app.tick += 1,
        }

        if app.take_reload_request() {
            events.start_load(app.source().clone());
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &mut CatalogApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Carriers
            Constraint::Length(3), // Models
            Constraint::Length(3), // Storages
            Constraint::Min(6),    // Cards
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app.frame());
    render_chip_rows(frame, [chunks[1], chunks[2], chunks[3]], app);
    render_content(frame, chunks[4], app);
    render_status_bar(frame, chunks[5], app);
    render_footer(frame, chunks[6], app.focus);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &RenderFrame) {
    let muted = Style::default().fg(colors().muted);
    let mut title = vec![
        Span::styled("iPhone Price Catalog", Styles::header_title()),
        Span::styled(" │ ", muted),
        Span::styled(format!("更新: {}", view.updated_at), Styles::text_muted()),
    ];
    if view.status == LoadStatus::Loading {
        title.push(Span::styled(" │ ", muted));
        title.push(Span::styled("読み込み中…", Styles::warning()));
    }

    let mut selectors = filter_badge("並び替え", view.selection.sort_key.display_name());
    selectors.push(Span::raw("  "));
    selectors.extend(filter_badge(
        "価格",
        view.selection.pricing_mode.display_name(),
    ));

    let header = Paragraph::new(vec![Line::from(title), Line::from(selectors)]);
    frame.render_widget(header, area);
}

fn render_chip_rows(frame: &mut Frame, areas: [Rect; 3], app: &CatalogApp) {
    let view = app.frame();

    ChipRow {
        title: Focus::Carriers.title(),
        chips: view.carriers.iter().map(|c| (c.label, c.selected)).collect(),
        cursor: app.carrier_cursor.selected,
        focused: app.focus == Focus::Carriers,
    }
    .render(frame, areas[0]);

    ChipRow {
        title: Focus::Models.title(),
        chips: view
            .models
            .iter()
            .map(|c| (c.label.as_str(), c.selected))
            .collect(),
        cursor: app.model_cursor.selected,
        focused: app.focus == Focus::Models,
    }
    .render(frame, areas[1]);

    ChipRow {
        title: Focus::Storages.title(),
        chips: view
            .storages
            .iter()
            .map(|c| (c.label.as_str(), c.selected))
            .collect(),
        cursor: app.storage_cursor.selected,
        focused: app.focus == Focus::Storages,
    }
    .render(frame, areas[2]);
}

fn render_content(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    let view = app.frame();
    let scheme = colors();

    match &view.status {
        LoadStatus::Loading => {
            render_message(
                frame,
                area,
                vec![
                    Line::from(""),
                    Line::styled("読み込み中…", Styles::text_muted()),
                ],
                scheme.border,
            );
            return;
        }
        LoadStatus::Failed { message } => {
            render_message(
                frame,
                area,
                vec![
                    Line::from(""),
                    Line::styled(LOAD_FAILED_MESSAGE, Styles::error()),
                    Line::styled(message.clone(), Styles::text_muted()),
                    Line::from(""),
                    Line::styled("[r] 再読み込み", Styles::shortcut_key()),
                ],
                scheme.error,
            );
            return;
        }
        LoadStatus::Ready => {}
    }

    if view.is_no_results() {
        render_message(
            frame,
            area,
            vec![
                Line::from(""),
                Line::styled(NO_RESULTS_MESSAGE, Styles::text_muted()),
            ],
            scheme.border,
        );
        return;
    }

    let items: Vec<ListItem> = view.cards.iter().map(card_item).collect();

    let mut bottom = Vec::new();
    if let Some(label) = &view.show_more_label {
        bottom.push(Span::styled(format!(" [m] {label} "), Styles::shortcut_key()));
    }
    if view.is_expanded {
        bottom.push(Span::styled(" [c] 閉じる ", Styles::shortcut_desc()));
    }

    let border_style = if app.focus == Focus::Cards {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(
                    " {} ({}/{}) ",
                    Focus::Cards.title(),
                    view.cards.len(),
                    view.matching_count
                ))
                .title_bottom(Line::from(bottom))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = WidgetListState::default().with_selected(Some(app.cards.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_item(card: &ListingCard) -> ListItem<'static> {
    let scheme = colors();

    let mut first = vec![
        Span::styled(card.model.clone(), Styles::text().bold()),
        Span::raw(" "),
        Span::styled(card.storage.clone(), Styles::text_muted()),
    ];
    for badge in &card.badges {
        first.push(Span::raw(" "));
        first.push(card_badge(badge));
    }

    let mut second = vec![
        Span::raw("  "),
        Span::styled(
            card.carrier_name,
            Style::default().fg(scheme.carrier_color(card.carrier)),
        ),
        Span::raw("  "),
        Span::styled(card.unit, Styles::text_muted()),
        Span::raw(" "),
        Span::styled(card.price_text.clone(), Styles::price()),
    ];
    if let Some(in_stock) = card.in_stock_variants {
        second.push(Span::styled(
            format!("  在庫 {in_stock}色"),
            Styles::text_muted(),
        ));
    }

    let mut lines = vec![Line::from(first), Line::from(second)];
    if let Some(phases) = &card.phases {
        lines.push(Line::styled(
            format!("  {phases}"),
            Style::default().fg(scheme.phases),
        ));
    }
    ListItem::new(lines)
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &mut CatalogApp) {
    let idle = format!("{} │ theme: {}", app.source(), app.theme_name);
    let text = app.status.message().map_or(idle, ToString::to_string);
    frame.render_widget(Paragraph::new(text).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, focus: Focus) {
    let hints = FooterHints::for_focus(focus);
    frame.render_widget(Paragraph::new(Line::from(render_footer_hints(&hints))), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    let rows = [
        ("Tab / Shift+Tab", "パネル切り替え"),
        ("← → / h l", "チップ移動"),
        ("Enter / Space", "選択・切り替え"),
        ("1-6", "キャリア切り替え"),
        ("↑ ↓ / j k", "一覧移動"),
        ("m / +", "もっと見る"),
        ("c / -", "閉じる"),
        ("s / S", "並び替え"),
        ("p", "月々 / 一括"),
        ("r", "新しいセッション"),
        ("T", "テーマ"),
        ("q / Esc", "終了"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:<18}"), Styles::shortcut_key()),
                Span::styled(*desc, Styles::text()),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        ),
        popup,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterSelection;
    use crate::model::{Carrier, Listing, ListingStore};
    use crate::parsers::FeedSource;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn draw(app: &mut CatalogApp) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app() -> CatalogApp {
        CatalogApp::new(
            FilterSelection::default(),
            FeedSource::File(PathBuf::from("data.json")),
        )
    }

    #[test]
    fn test_renders_loaded_catalog() {
        let mut app = app();
        app.on_loaded(Ok(ListingStore::new(vec![
            Listing::new(Carrier::Au, "iPhone 15", "128GB", 112_530),
        ])));
        let screen = draw(&mut app);
        assert!(screen.contains("iPhone Price Catalog"));
        assert!(screen.contains("iPhone"));
        assert!(screen.contains("128GB"));
    }

    #[test]
    fn test_renders_failure() {
        let mut app = app();
        app.on_loaded(Err("HTTP error! status: 500".to_string()));
        let screen = draw(&mut app);
        assert!(screen.contains("500"));
    }

    #[test]
    fn test_small_terminal_warning() {
        let mut app = app();
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Terminal too small"));
    }
}
