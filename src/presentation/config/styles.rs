use std::collections::HashMap;

use color_eyre::eyre::Result;
use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::domain::options::Theme;

/// Named styles, e.g. `"theme.green": "fg:green"` or `"card.selected": "bold"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, style)| (key, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

impl Styles {
    pub fn get_or_default(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }

    /// Accent colour of a theme: `theme.<id>` foreground, or the built-in palette
    pub fn accent(&self, theme: Theme) -> Color {
        self.get(&format!("theme.{theme}"))
            .and_then(|style| style.fg)
            .unwrap_or_else(|| builtin_accent(theme))
    }
}

fn builtin_accent(theme: Theme) -> Color {
    match theme {
        Theme::Blue => Color::Blue,
        Theme::Green => Color::Green,
        Theme::Purple => Color::Magenta,
        Theme::Orange => Color::Rgb(255, 140, 0),
        Theme::Dark => Color::Gray,
    }
}

pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bright ", "")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let s = s.strip_prefix("fg:").unwrap_or(s);

    if let Some(index) = s.strip_prefix("color") {
        return index.parse::<u8>().ok().map(Color::Indexed);
    }
    if let Some(level) = s.strip_prefix("gray") {
        return Some(Color::Indexed(232 + level.parse::<u8>().unwrap_or_default().min(23)));
    }
    if let Some(digits) = s.strip_prefix("rgb") {
        // 6x6x6 cube: each digit is 0-5
        let channel = |i: usize| {
            digits
                .chars()
                .nth(i)
                .and_then(|c| c.to_digit(6))
                .unwrap_or_default() as u8
        };
        return Some(Color::Indexed(16 + channel(0) * 36 + channel(1) * 6 + channel(2)));
    }

    let index = match s {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        _ => return None,
    };
    Some(Color::Indexed(index))
}
