use crate::highlight::Highlight;
use crate::tui::app::App;
use crate::tui::colors;
use crate::View;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Text before the query in the input line
const PROMPT: &str = " > ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_results(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

/// Horizontal scroll for the input line and the cursor offset within it.
///
/// `column` is the cursor's display column in the query and `width` the
/// inner width of the search bar. The line scrolls so the cursor stays on
/// the last visible cell.
fn input_scroll(column: u16, width: u16) -> (u16, u16) {
    let total = (PROMPT.len() as u16).saturating_add(column);
    let scroll = total.saturating_add(1).saturating_sub(width);
    let offset = total
        .saturating_sub(scroll)
        .min(width.saturating_sub(1));
    (scroll, offset)
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::input_border(app.widget.is_focused()))
        .title(" Search ")
        .title_bottom(Line::from(" Esc: clear ").right_aligned());
    let inner = block.inner(area);

    let query = app.widget.raw_query();
    let line = if query.is_empty() {
        Line::from(vec![
            Span::raw(PROMPT),
            Span::styled(app.placeholder.as_str(), colors::placeholder()),
        ])
    } else {
        Line::from(vec![Span::raw(PROMPT), Span::raw(query)])
    };

    let column = app.cursor.display_column(query);
    let (scroll, offset) = input_scroll(column, inner.width);

    let paragraph = Paragraph::new(line)
        .block(block)
        .style(Style::default().fg(Color::White))
        .scroll((0, scroll));

    frame.render_widget(paragraph, area);

    // Show cursor in search bar when focused
    if app.widget.is_focused() && !inner.is_empty() {
        let cursor_x = inner.x.saturating_add(offset);
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::input_border(!app.widget.is_focused()))
        .title(" Results ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.list.set_visible_rows(inner.height as usize);

    let view = app.widget.view();
    match &view {
        View::Hint { .. } => {
            let text = view.message().unwrap_or_default();
            let hint = Paragraph::new(text)
                .style(colors::hint())
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, inner);
        }
        View::Empty { .. } => {
            let text = view.message().unwrap_or_default();
            let empty = Paragraph::new(text)
                .style(colors::empty_state())
                .wrap(Wrap { trim: false });
            frame.render_widget(empty, inner);
        }
        View::Matches { query, results } => {
            let start = app.list.scroll_offset;
            let end = (start + inner.height as usize).min(results.len());

            let lines: Vec<Line> = (start..end)
                .filter_map(|idx| {
                    let item = results.get(idx)?;
                    let selected = app.list.selected == Some(idx);
                    Some(result_line(item, query, idx, selected))
                })
                .collect();

            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}

/// One result with its match marked
pub fn result_line<'a>(item: &'a str, query: &str, index: usize, selected: bool) -> Line<'a> {
    let spans = match Highlight::new(item, query) {
        Highlight::Plain(text) => vec![Span::raw(" "), Span::raw(text)],
        Highlight::Marked {
            before,
            matched,
            after,
        } => vec![
            Span::raw(" "),
            Span::raw(before),
            Span::styled(matched, colors::matched_text()),
            Span::raw(after),
        ],
    };
    Line::from(spans).style(colors::result_row(index, selected))
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.widget.candidates().len();
    let left_text = if app.widget.is_pending() {
        " Typing...".to_string()
    } else {
        format!(" {} of {}", app.widget.results().len(), total)
    };

    let right_text = " Tab:Results  Ctrl+L:Clear  Ctrl+Q:Quit ";

    // Build the status line: left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.len();
    let right_len = right_text.len();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str).style(colors::status_bar());

    frame.render_widget(status, area);
}
