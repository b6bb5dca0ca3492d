// Ranking widget: statistic header and the ranked players table.
//
// Columns: #, Photo, Player, Team, Value, Rank
// Rows above `scroll` are skipped; a scrollbar appears on overflow.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    Wrap,
};
use ratatui::Frame;

use kings_core::pages::RankingView;
use kings_core::ranking::display::MISSING_VALUE;
use kings_core::ranking::DisplayRow;

use super::focused_border_style;

/// Shown in place of the table when no player qualifies.
pub const NO_RECORDS: &str = "No players recorded for this statistic.";

/// Marker standing in for a player photo.
const PHOTO_MARKER: &str = "[img]";

/// Render the ranking page into the given area.
///
/// When `focused` is true, the results border is highlighted to show that
/// the navigation keys scroll the table.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &RankingView,
    scroll: usize,
    focused: bool,
) {
    let border = focused_border_style(focused, Style::default());

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_header(frame, sections[0], view);

    if view.outcome.is_empty() {
        let paragraph = Paragraph::new(format!("  {}", NO_RECORDS))
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title("Players"),
            );
        frame.render_widget(paragraph, sections[1]);
        return;
    }

    render_table(frame, sections[1], view.outcome.rows(), scroll, border);
}

fn render_header(frame: &mut Frame, area: Rect, view: &RankingView) {
    let stat_name = view.stat_name.as_deref().unwrap_or(MISSING_VALUE);
    let lines = vec![
        Line::from(Span::styled(
            stat_name.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Ranking by Statistic"),
        );
    frame.render_widget(paragraph, area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[DisplayRow],
    scroll: usize,
    border: Style,
) {
    // Borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total = rows.len();
    let scroll = scroll.min(total.saturating_sub(1));

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Photo"),
        Cell::from("Player"),
        Cell::from("Team"),
        Cell::from("Value"),
        Cell::from("Rank"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(scroll)
        .map(|(i, row)| format_row(i + 1, row))
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Min(14),
        Constraint::Min(12),
        Constraint::Length(20),
        Constraint::Length(5),
    ];

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("Players ({})", total)),
    );
    frame.render_widget(table, area);

    if total > visible_rows {
        let max_offset = total.saturating_sub(visible_rows);
        let mut scrollbar_state =
            ScrollbarState::new(max_offset).position(scroll.min(max_offset));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Format one ranked player as a table row. `position` is 1-based.
fn format_row(position: usize, row: &DisplayRow) -> Row<'static> {
    let photo = if row.image_url.is_some() {
        PHOTO_MARKER
    } else {
        MISSING_VALUE
    };
    let value_style = if row.value.is_missing() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };

    Row::new(vec![
        Cell::from(format!("{}", position)),
        Cell::from(photo),
        Cell::from(row.short_name.clone()),
        Cell::from(row.team_name.clone()),
        Cell::from(Span::styled(row.value.to_string(), value_style)),
        Cell::from(
            row.stat_ranking
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use kings_core::ranking::{DisplayValue, RankOutcome};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn display_row(id: &str, value: DisplayValue, image: bool) -> DisplayRow {
        DisplayRow {
            player_id: id.to_string(),
            short_name: format!("Player {id}"),
            team_name: "Porcinos".to_string(),
            image_url: image.then(|| format!("https://img.example/{id}.png")),
            stat_total: 1.0,
            value,
            stat_ranking: Some(id.to_string()),
        }
    }

    fn view(outcome: RankOutcome) -> RankingView {
        RankingView {
            stat_name: Some("Goals".to_string()),
            description: "Goals scored".to_string(),
            outcome,
        }
    }

    fn draw(
        view: &RankingView,
        scroll: usize,
        height: u16,
        focused: bool,
    ) -> Terminal<TestBackend> {
        let backend = TestBackend::new(90, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), view, scroll, focused))
            .unwrap();
        terminal
    }

    fn screen(view: &RankingView, scroll: usize, height: u16) -> String {
        let terminal = draw(view, scroll, height, false);
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..90 {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_header_and_rows() {
        let rows = vec![
            display_row(
                "1",
                DisplayValue::Paired {
                    pct: 50,
                    total: 5,
                    denominator: 10,
                },
                true,
            ),
            display_row("2", DisplayValue::Count(3), false),
        ];
        let text = screen(&view(RankOutcome::Ranked(rows)), 0, 16);
        assert!(text.contains("Goals scored"));
        assert!(text.contains("50% (5 de 10)"));
        assert!(text.contains("[img]"));
        assert!(text.contains("Player 2"));
        assert!(text.contains("Players (2)"));
    }

    #[test]
    fn empty_outcome_shows_message() {
        let text = screen(&view(RankOutcome::NoQualifyingRecords), 0, 12);
        assert!(text.contains(NO_RECORDS));
    }

    #[test]
    fn scroll_skips_leading_rows() {
        let rows = (1..=3)
            .map(|i| display_row(&i.to_string(), DisplayValue::Count(i), false))
            .collect();
        let text = screen(&view(RankOutcome::Ranked(rows)), 2, 16);
        assert!(!text.contains("Player 1"));
        assert!(text.contains("Player 3"));
    }

    #[test]
    fn overflowing_table_does_not_panic() {
        let rows = (1..=40)
            .map(|i| display_row(&i.to_string(), DisplayValue::Missing, false))
            .collect();
        screen(&view(RankOutcome::Ranked(rows)), 100, 12);
    }

    #[test]
    fn results_border_follows_focus() {
        let ranked = view(RankOutcome::Ranked(vec![display_row(
            "1",
            DisplayValue::Count(2),
            false,
        )]));
        let empty = view(RankOutcome::NoQualifyingRecords);

        // Results block starts below the 4-row header.
        let focused = draw(&ranked, 0, 12, true);
        assert_eq!(focused.backend().buffer()[(0, 4)].fg, Color::Cyan);
        let unfocused = draw(&ranked, 0, 12, false);
        assert_ne!(unfocused.backend().buffer()[(0, 4)].fg, Color::Cyan);
        let focused_empty = draw(&empty, 0, 12, true);
        assert_eq!(focused_empty.backend().buffer()[(0, 4)].fg, Color::Cyan);
    }
}
