//! Launcher theme settings (`minuisettings.txt`).

use serde::Serialize;

use crate::ini::{self, parse_hex, parse_int};
use crate::palette::{self, Step};
use crate::store::SettingsFile;

pub const FONTS: &[&str] = &["Next", "OG"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinUISettings {
    pub font: i32,
    pub color1: u32,
    pub color2: u32,
    pub color3: u32,
}

impl Default for MinUISettings {
    fn default() -> Self {
        Self {
            font: 1,
            color1: 0xFFFFFF,
            color2: 0x9B2257,
            color3: 0x1E2329,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeField {
    Font,
    Color1,
    Color2,
    Color3,
}

impl ThemeField {
    pub const ALL: [ThemeField; 4] = [Self::Font, Self::Color1, Self::Color2, Self::Color3];

    pub fn label(self) -> &'static str {
        match self {
            Self::Font => "Font",
            Self::Color1 => "Color1",
            Self::Color2 => "Color2",
            Self::Color3 => "Color3",
        }
    }
}

impl MinUISettings {
    pub fn font_name(&self) -> &'static str {
        usize::try_from(self.font - 1)
            .ok()
            .and_then(|i| FONTS.get(i))
            .copied()
            .unwrap_or("?")
    }

    pub fn color(&self, field: ThemeField) -> Option<u32> {
        match field {
            ThemeField::Font => None,
            ThemeField::Color1 => Some(self.color1),
            ThemeField::Color2 => Some(self.color2),
            ThemeField::Color3 => Some(self.color3),
        }
    }

    pub fn step(&mut self, field: ThemeField, step: Step) {
        let p = palette::THEME;
        match field {
            ThemeField::Font => self.font = step.cycle(self.font, FONTS.len() as i32),
            ThemeField::Color1 => self.color1 = p.step(self.color1, step),
            ThemeField::Color2 => self.color2 = p.step(self.color2, step),
            ThemeField::Color3 => self.color3 = p.step(self.color3, step),
        }
    }
}

impl SettingsFile for MinUISettings {
    const FILE_NAME: &'static str = "minuisettings.txt";

    fn apply(&mut self, _section: Option<&str>, key: &str, value: &str) {
        let slot = match key {
            "font" => {
                if let Some(v) = parse_int(value) {
                    self.font = v;
                }
                return;
            }
            "color1" => &mut self.color1,
            "color2" => &mut self.color2,
            "color3" => &mut self.color3,
            _ => return,
        };
        if let Some(v) = parse_hex(value) {
            *slot = v;
        }
    }

    fn render(&self) -> String {
        format!(
            "font={}\ncolor1={}\ncolor2={}\ncolor3={}\n",
            self.font,
            ini::format_color(self.color1),
            ini::format_color(self.color2),
            ini::format_color(self.color3),
        )
    }
}
