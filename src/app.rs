//! Editor state and the main loop.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::effects::Descriptions;
use crate::input::{self, Button, Gamepad};
use crate::lights::{LIGHT_COUNT, LightField, LightsConfig};
use crate::minui::{MinUISettings, ThemeField};
use crate::palette::Step;
use crate::store::{self, SettingsError};
use crate::ui;

const POLL: Duration = Duration::from_millis(50);

pub enum Editor {
    Lights {
        cfg: LightsConfig,
        light: usize,
        descriptions: Descriptions,
        /// Text for `described`, the effect id it was looked up for.
        description: String,
        described: Option<i32>,
    },
    Theme(MinUISettings),
}

impl Editor {
    pub fn lights(cfg: LightsConfig, descriptions: Descriptions) -> Self {
        let mut ed = Self::Lights {
            cfg,
            light: 0,
            descriptions,
            description: String::new(),
            described: None,
        };
        ed.refresh_description();
        ed
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Lights { .. } => LightField::ALL.len(),
            Self::Theme(_) => ThemeField::ALL.len(),
        }
    }

    fn step(&mut self, row: usize, step: Step) {
        match self {
            Self::Lights { cfg, light, .. } => cfg.step(*light, LightField::ALL[row], step),
            Self::Theme(cfg) => cfg.step(ThemeField::ALL[row], step),
        }
        self.refresh_description();
    }

    fn switch_light(&mut self, step: Step) {
        if let Self::Lights { light, .. } = self {
            *light = (*light as i32 + step.delta()).rem_euclid(LIGHT_COUNT as i32) as usize;
        }
        self.refresh_description();
    }

    fn refresh_description(&mut self) {
        if let Self::Lights {
            cfg,
            light,
            descriptions,
            description,
            described,
        } = self
        {
            let effect = cfg.light(*light).effect;
            if *described != Some(effect) {
                *description = descriptions.get(effect).to_string();
                *described = Some(effect);
            }
        }
    }

    fn save(&self, path: &std::path::Path) -> Result<usize, SettingsError> {
        match self {
            Self::Lights { cfg, .. } => store::save(path, cfg),
            Self::Theme(cfg) => store::save(path, cfg),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Application State
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    pub(crate) editor: Editor,
    pub(crate) path: PathBuf,
    pub(crate) sel: usize,
    pub(crate) autosave: bool,
    pub(crate) dirty: bool,
    pub(crate) status: String,
    pub(crate) err: bool,
    quit_armed: bool,
    quit: bool,
}

impl App {
    pub fn new(editor: Editor, path: PathBuf, autosave: bool) -> Self {
        Self {
            status: format!("  Editing {}", path.display()),
            editor,
            path,
            sel: 0,
            autosave,
            dirty: false,
            err: false,
            quit_armed: false,
            quit: false,
        }
    }

    // ─── Button Handling ────────────────────────────────────────────────────

    pub fn on_button(&mut self, b: Button) {
        if b != Button::Quit {
            self.quit_armed = false;
        }
        let rows = self.editor.row_count();

        match b {
            Button::Up => self.sel = (self.sel + rows - 1) % rows,
            Button::Down => self.sel = (self.sel + 1) % rows,
            Button::Left => self.change(Step::Prev),
            Button::Right => self.change(Step::Next),
            Button::PrevLight => self.editor.switch_light(Step::Prev),
            Button::NextLight => self.editor.switch_light(Step::Next),
            Button::Save => self.save(),
            Button::Quit => self.request_quit(),
        }
    }

    fn change(&mut self, step: Step) {
        self.editor.step(self.sel, step);
        self.dirty = true;
        if self.autosave {
            self.save();
        } else {
            self.status = "  ● Unsaved changes, A to save".into();
            self.err = false;
        }
    }

    fn save(&mut self) {
        match self.editor.save(&self.path) {
            Ok(bytes) => {
                tracing::info!(path = %self.path.display(), bytes, "settings saved");
                self.dirty = false;
                self.status = format!("  ✓ Saved → {}", self.path.display());
                self.err = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                self.status = format!("  ✗ Save: {e}");
                self.err = true;
            }
        }
    }

    fn request_quit(&mut self) {
        if self.dirty && !self.quit_armed {
            self.quit_armed = true;
            self.status = "  ⚠ Unsaved changes, press B again to discard and quit".into();
            self.err = true;
            return;
        }
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    // ─── Main Loop ──────────────────────────────────────────────────────────

    pub fn run(mut self, mut term: ratatui::DefaultTerminal, mut pad: Option<Gamepad>) -> Result<()> {
        loop {
            term.draw(|f| ui::draw(f, &self))?;

            if event::poll(POLL)?
                && let Event::Key(k) = event::read()?
                && k.kind == KeyEventKind::Press
                && let Some(b) = input::from_key(k)
            {
                self.on_button(b);
            }

            for b in pad.iter_mut().flat_map(Gamepad::poll) {
                self.on_button(b);
            }

            if self.should_quit() {
                break;
            }
        }
        tracing::info!(unsaved = self.dirty, "quit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SettingsFile;
    use std::fs;

    fn lights_app(autosave: bool) -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let path = store::path_in::<LightsConfig>(dir.path());
        let ed = Editor::lights(LightsConfig::default(), Descriptions::new(dir.path()));
        (dir, App::new(ed, path, autosave))
    }

    fn lights(app: &App) -> (&LightsConfig, usize) {
        match &app.editor {
            Editor::Lights { cfg, light, .. } => (cfg, *light),
            Editor::Theme(_) => panic!("expected lights editor"),
        }
    }

    #[test]
    fn rows_wrap_in_both_directions() {
        let (_dir, mut app) = lights_app(false);
        app.on_button(Button::Up);
        assert_eq!(app.sel, 5);
        app.on_button(Button::Down);
        assert_eq!(app.sel, 0);
    }

    #[test]
    fn shoulders_switch_lights_and_edit_the_selected_one() {
        let (_dir, mut app) = lights_app(false);
        app.on_button(Button::PrevLight);
        assert_eq!(lights(&app).1, 1);
        app.on_button(Button::Right);
        let (cfg, _) = lights(&app);
        assert_eq!(cfg.light(1).effect, 2);
        assert_eq!(cfg.light(0).effect, 1);

        app.on_button(Button::NextLight);
        assert_eq!(lights(&app).1, 0);
    }

    #[test]
    fn edits_wait_for_explicit_save() {
        let (_dir, mut app) = lights_app(false);
        app.on_button(Button::Right);
        assert!(app.dirty);
        assert!(!app.path.exists());

        app.on_button(Button::Save);
        assert!(!app.dirty);
        let saved = LightsConfig::parse(&fs::read_to_string(&app.path).unwrap());
        assert_eq!(saved.light(0).effect, 2);
    }

    #[test]
    fn autosave_writes_on_every_change() {
        let (_dir, mut app) = lights_app(true);
        app.on_button(Button::Down);
        app.on_button(Button::Left);
        assert!(!app.dirty);
        let saved = LightsConfig::parse(&fs::read_to_string(&app.path).unwrap());
        assert_eq!(saved.light(0).color1, crate::palette::LED[88]);
    }

    #[test]
    fn quitting_with_unsaved_changes_needs_confirmation() {
        let (_dir, mut app) = lights_app(false);
        app.on_button(Button::Quit);
        assert!(app.should_quit());

        let (_dir, mut app) = lights_app(false);
        app.on_button(Button::Right);
        app.on_button(Button::Quit);
        assert!(!app.should_quit());
        app.on_button(Button::Down);
        app.on_button(Button::Quit);
        assert!(!app.should_quit());
        app.on_button(Button::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn save_failure_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be
        let path = dir.path().join("ledsettings.txt");
        fs::create_dir(&path).unwrap();
        let ed = Editor::lights(LightsConfig::default(), Descriptions::new(dir.path()));
        let mut app = App::new(ed, path, false);

        app.on_button(Button::Right);
        app.on_button(Button::Save);
        assert!(app.err);
        assert!(app.dirty);
        assert!(app.status.contains("Save"));
    }

    #[test]
    fn description_follows_the_effect() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Breathe.txt"), "Slow fade in and out.").unwrap();
        let ed = Editor::lights(LightsConfig::default(), Descriptions::new(dir.path()));
        let mut app = App::new(ed, dir.path().join("ledsettings.txt"), false);

        app.on_button(Button::Right);
        match &app.editor {
            Editor::Lights { description, .. } => assert_eq!(description, "Slow fade in and out."),
            Editor::Theme(_) => unreachable!(),
        }
    }

    #[test]
    fn description_is_kept_while_the_effect_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let ed = Editor::lights(LightsConfig::default(), Descriptions::new(dir.path()));
        let mut app = App::new(ed, dir.path().join("ledsettings.txt"), false);

        // both lights start on effect 1; editing a color or switching
        // lights must not look the text up again
        app.on_button(Button::Down);
        app.on_button(Button::Right);
        app.on_button(Button::NextLight);
        match &app.editor {
            Editor::Lights { described, .. } => assert_eq!(*described, Some(1)),
            Editor::Theme(_) => unreachable!(),
        }

        app.on_button(Button::Up);
        app.on_button(Button::Right);
        match &app.editor {
            Editor::Lights {
                described,
                description,
                ..
            } => {
                assert_eq!(*described, Some(2));
                assert_eq!(description, crate::effects::NO_DESCRIPTION);
            }
            Editor::Theme(_) => unreachable!(),
        }
    }

    #[test]
    fn theme_editor_has_four_rows_and_ignores_shoulders() {
        let dir = tempfile::tempdir().unwrap();
        let path = store::path_in::<MinUISettings>(dir.path());
        let mut app = App::new(Editor::Theme(MinUISettings::default()), path, false);

        app.on_button(Button::Up);
        assert_eq!(app.sel, 3);
        app.on_button(Button::NextLight);
        app.on_button(Button::Down);
        app.on_button(Button::Right);
        match &app.editor {
            Editor::Theme(s) => assert_eq!(s.font, 2),
            Editor::Lights { .. } => unreachable!(),
        }
    }
}
