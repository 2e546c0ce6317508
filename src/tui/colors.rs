use ratatui::style::{Color, Modifier, Style};

pub const STATUS_BG: Color = Color::Rgb(0, 95, 135);
pub const SELECTED_BG: Color = Color::Rgb(60, 60, 80);
pub const ALT_ROW_BG: Color = Color::Rgb(25, 25, 35);

pub fn input_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn placeholder() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// The matched part of a result
pub fn matched_text() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn result_row(index: usize, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::White)
            .bg(SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else if index % 2 == 1 {
        Style::default().fg(Color::White).bg(ALT_ROW_BG)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn hint() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn empty_state() -> Style {
    Style::default().fg(Color::LightRed)
}

pub fn status_bar() -> Style {
    Style::default().fg(Color::White).bg(STATUS_BG)
}
