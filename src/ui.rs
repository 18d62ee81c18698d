//! Full-frame redraw of the settings menu.

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Editor};
use crate::effects::{self, TRIGGER_COUNT};
use crate::ini;
use crate::lights::{BRIGHTNESS_MAX, LIGHT_COUNT, LightField, LightsConfig};
use crate::minui::{MinUISettings, ThemeField};
use crate::palette;

// ═══════════════════════════════════════════════════════════════════════════════
//  Theme
// ═══════════════════════════════════════════════════════════════════════════════

struct Theme;

impl Theme {
    const ACCENT: Color = Color::Rgb(255, 196, 0);
    const ACCENT2: Color = Color::Rgb(255, 225, 120);
    const DIM: Color = Color::Rgb(120, 120, 110);
    const DARK: Color = Color::Rgb(32, 36, 32);
    const BG_HL: Color = Color::Rgb(235, 235, 235);
    const FG: Color = Color::Rgb(255, 255, 255);
    const FG_DIM: Color = Color::Rgb(150, 150, 150);
    const WARN: Color = Color::Rgb(255, 170, 40);
    const ERR: Color = Color::Rgb(255, 70, 50);
}

pub fn draw(f: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(4),
    ])
    .areas(f.area());

    match &app.editor {
        Editor::Lights {
            cfg,
            light,
            description,
            ..
        } => {
            draw_light_header(f, header, cfg, *light);
            let [rows, side] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(body);
            draw_rows(f, rows, app.sel, &light_rows(cfg, *light));
            draw_description(f, side, &cfg.light(*light).effect_name(), description);
        }
        Editor::Theme(cfg) => {
            draw_title(f, header, "MinUI Next Settings");
            draw_rows(f, body, app.sel, &theme_rows(cfg));
        }
    }

    draw_footer(f, footer, app);
}

// ─── Header ─────────────────────────────────────────────────────────────────

fn header_block() -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(Theme::DIM))
}

fn draw_title(f: &mut Frame, area: Rect, title: &str) {
    let line = Line::from(Span::styled(
        format!("  {title}"),
        Style::new().fg(Theme::FG).bold(),
    ));
    f.render_widget(Paragraph::new(line).block(header_block()), area);
}

fn draw_light_header(f: &mut Frame, area: Rect, cfg: &LightsConfig, light: usize) {
    let line = Line::from(vec![
        Span::styled("  ◀ L  ", Style::new().fg(Theme::DIM)),
        Span::styled(
            cfg.light(light).display_name,
            Style::new().fg(Theme::FG).bold(),
        ),
        Span::styled("  R ▶", Style::new().fg(Theme::DIM)),
        Span::styled(
            format!("   {}/{}", light + 1, LIGHT_COUNT),
            Style::new().fg(Theme::FG_DIM),
        ),
    ]);
    f.render_widget(Paragraph::new(line).block(header_block()), area);
}

// ─── Setting Rows ───────────────────────────────────────────────────────────

/// Value cell of one row.
enum Value {
    Text(String),
    Swatch(u32),
    Level(i32, i32),
}

fn light_rows(cfg: &LightsConfig, idx: usize) -> Vec<(&'static str, Value)> {
    let l = cfg.light(idx);
    LightField::ALL
        .iter()
        .map(|&field| {
            let v = match field {
                LightField::Effect => Value::Text(format!(
                    "◀ {} ▶  {}/{}",
                    l.effect_name(),
                    l.effect,
                    l.max_effects
                )),
                LightField::Color1 => Value::Swatch(l.color1),
                LightField::Color2 => Value::Swatch(l.color2),
                LightField::Duration => Value::Text(format!("{} ms", l.duration)),
                LightField::Brightness => Value::Level(l.brightness, BRIGHTNESS_MAX),
                LightField::Trigger => Value::Text(format!(
                    "◀ {} ▶  {}/{}",
                    effects::trigger_name(l.trigger),
                    l.trigger,
                    TRIGGER_COUNT
                )),
            };
            (field.label(), v)
        })
        .collect()
}

fn theme_rows(cfg: &MinUISettings) -> Vec<(&'static str, Value)> {
    ThemeField::ALL
        .iter()
        .map(|&field| {
            let v = match cfg.color(field) {
                Some(c) => Value::Swatch(c),
                None => Value::Text(format!("◀ {} ▶", cfg.font_name())),
            };
            (field.label(), v)
        })
        .collect()
}

fn value_spans(v: &Value, sel: bool) -> Vec<Span<'static>> {
    let text_style = if sel {
        Style::new().fg(Color::Black).bg(Theme::BG_HL).bold()
    } else {
        Style::new().fg(Theme::ACCENT2)
    };
    match *v {
        Value::Text(ref s) => vec![Span::styled(s.clone(), text_style)],
        Value::Swatch(c) => {
            let (r, g, b) = palette::rgb(c);
            vec![
                Span::styled(" ████ ", Style::new().fg(Color::Rgb(r, g, b))),
                Span::styled(ini::format_color(c), text_style),
            ]
        }
        Value::Level(level, max) => {
            let w = 20usize;
            let fill = (level.clamp(0, max) as usize * w / max.max(1) as usize).min(w);
            vec![
                Span::styled("━".repeat(fill), Style::new().fg(Theme::ACCENT)),
                Span::styled("─".repeat(w - fill), Style::new().fg(Theme::DARK)),
                Span::styled(format!(" {level}"), text_style),
            ]
        }
    }
}

fn draw_rows(f: &mut Frame, area: Rect, selected: usize, rows: &[(&'static str, Value)]) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(Theme::DIM));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() * 2);
    for (i, (label, value)) in rows.iter().enumerate() {
        let sel = i == selected;
        let (arrow, label_style) = if sel {
            (" ▸ ", Style::new().fg(Color::Black).bg(Theme::BG_HL).bold())
        } else {
            ("   ", Style::new().fg(Theme::FG))
        };
        let mut spans = vec![
            Span::styled(arrow, label_style),
            Span::styled(format!("{label:<12}"), label_style),
        ];
        spans.extend(value_spans(value, sel));
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines), inner);
}

// ─── Effect Description ─────────────────────────────────────────────────────

fn draw_description(f: &mut Frame, area: Rect, effect: &str, text: &str) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(Theme::DIM))
        .title(Span::styled(
            format!(" {effect} "),
            Style::new().fg(Theme::ACCENT).bold(),
        ));

    f.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::new().fg(Theme::FG_DIM))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

// ─── Footer ─────────────────────────────────────────────────────────────────

fn badge(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!(" {key} "),
            Style::new().fg(Theme::DARK).bg(Theme::FG).bold(),
        ),
        Span::styled(format!(" {label}   "), Style::new().fg(Theme::FG)),
    ]
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut hints: Vec<Span> = Vec::new();
    if matches!(app.editor, Editor::Lights { .. }) {
        hints.extend(badge("L/R", "Light"));
    }
    hints.extend(badge("A", "Save"));
    hints.extend(badge("B", "Quit"));
    if app.autosave {
        hints.push(Span::styled("autosave", Style::new().fg(Theme::FG_DIM)));
    }

    let status_color = if app.err {
        Theme::ERR
    } else if app.dirty {
        Theme::WARN
    } else {
        Theme::FG_DIM
    };

    let lines = vec![
        Line::from(hints).right_aligned(),
        Line::from(Span::styled(
            app.status.clone(),
            Style::new().fg(status_color),
        )),
    ];

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(Theme::DARK));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
