//! Effect and trigger catalogues shared with the LED daemon, plus the
//! free-text effect descriptions shown in the side panel.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const EFFECTS: &[&str] = &[
    "Linear",
    "Breathe",
    "Interval Breathe",
    "Static",
    "Blink 1",
    "Blink 2",
    "Blink 3",
    "Rainbow",
    "Twinkle",
    "Fire",
    "Glitter",
    "NeonGlow",
    "Firefly",
    "Aurora",
];

pub const TRIGGERS: &[&str] = &[
    "B", "A", "Y", "X", "L", "R", "FN1", "FN2", "MENU", "SELECT", "START", "ALL", "LR", "DPAD",
];

pub const TRIGGER_COUNT: i32 = TRIGGERS.len() as i32;

pub const NO_DESCRIPTION: &str = "No description available.";

fn lookup(table: &'static [&'static str], id: i32) -> Option<&'static str> {
    usize::try_from(id)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| table.get(i).copied())
}

/// Display name of a 1-based effect id.
pub fn effect_name(id: i32) -> Cow<'static, str> {
    match lookup(EFFECTS, id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("Effect {id}")),
    }
}

pub fn trigger_name(id: i32) -> Cow<'static, str> {
    match lookup(TRIGGERS, id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("Button {id}")),
    }
}

// ─── Descriptions ───────────────────────────────────────────────────────────

/// Reads `<dir>/<effect name>.txt` on first use and keeps the text per
/// effect id.
pub struct Descriptions {
    dir: PathBuf,
    cache: HashMap<i32, String>,
}

impl Descriptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, effect: i32) -> PathBuf {
        self.dir.join(format!("{}.txt", effect_name(effect)))
    }

    pub fn get(&mut self, effect: i32) -> &str {
        if !self.cache.contains_key(&effect) {
            let path = self.path_for(effect);
            let text = match fs::read(&path) {
                Ok(bytes) => {
                    let s = String::from_utf8_lossy(&bytes);
                    if s.trim().is_empty() {
                        NO_DESCRIPTION.to_string()
                    } else {
                        s.trim_end().to_string()
                    }
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "no effect description");
                    NO_DESCRIPTION.to_string()
                }
            };
            self.cache.insert(effect, text);
        }
        self.cache.get(&effect).map_or(NO_DESCRIPTION, String::as_str)
    }
}
