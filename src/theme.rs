use ratatui::style::{Color, Modifier, Style};

pub const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub const HEADER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
