//! Per-light LED settings (`ledsettings.txt`).

use std::fmt::Write as _;

use serde::Serialize;

use crate::effects::{self, TRIGGER_COUNT};
use crate::ini::{self, parse_dec, parse_hex};
use crate::palette::{self, Step};
use crate::store::SettingsFile;

pub const DURATION_STEP: i32 = 100;
pub const DURATION_CEILING: i32 = 5000;
pub const BRIGHTNESS_STEP: i32 = 5;
pub const BRIGHTNESS_MAX: i32 = 60;

pub const LIGHT_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightSettings {
    pub name: &'static str,
    pub display_name: &'static str,
    pub max_effects: i32,
    pub effect: i32,
    pub color1: u32,
    pub color2: u32,
    pub duration: i32,
    pub brightness: i32,
    pub trigger: i32,
}

impl LightSettings {
    fn new(name: &'static str, display_name: &'static str, max_effects: i32) -> Self {
        Self {
            name,
            display_name,
            max_effects,
            effect: 1,
            color1: 0xFFFFFF,
            color2: 0x000000,
            duration: 1000,
            brightness: 30,
            trigger: 1,
        }
    }

    pub fn effect_name(&self) -> std::borrow::Cow<'static, str> {
        effects::effect_name(self.effect)
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "effect" => set(&mut self.effect, parse_dec(value)),
            "color1" => set(&mut self.color1, parse_hex(value)),
            "color2" => set(&mut self.color2, parse_hex(value)),
            "duration" => set(&mut self.duration, parse_dec(value)),
            "brightness" => set(&mut self.brightness, parse_dec(value)),
            "trigger" => set(&mut self.trigger, parse_dec(value)),
            _ => {}
        }
    }

    fn render_into(&self, out: &mut String) {
        // writing into a String cannot fail
        let _ = writeln!(out, "[{}]", self.name);
        let _ = writeln!(out, "effect={}", self.effect);
        let _ = writeln!(out, "color1={}", ini::format_color(self.color1));
        let _ = writeln!(out, "color2={}", ini::format_color(self.color2));
        let _ = writeln!(out, "duration={}", self.duration);
        let _ = writeln!(out, "brightness={}", self.brightness);
        let _ = writeln!(out, "trigger={}", self.trigger);
    }
}

fn set<T>(slot: &mut T, parsed: Option<T>) {
    if let Some(v) = parsed {
        *slot = v;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Editable fields
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightField {
    Effect,
    Color1,
    Color2,
    Duration,
    Brightness,
    Trigger,
}

impl LightField {
    pub const ALL: [LightField; 6] = [
        Self::Effect,
        Self::Color1,
        Self::Color2,
        Self::Duration,
        Self::Brightness,
        Self::Trigger,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Effect => "Effect",
            Self::Color1 => "Color",
            Self::Color2 => "Color 2",
            Self::Duration => "Duration",
            Self::Brightness => "Brightness",
            Self::Trigger => "Trigger",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  The two lights
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightsConfig {
    pub lights: [LightSettings; LIGHT_COUNT],
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            lights: [
                LightSettings::new("central", "Central Light", 14),
                LightSettings::new("joysticks", "Joystick Lights", 8),
            ],
        }
    }
}

impl LightsConfig {
    pub fn light(&self, idx: usize) -> &LightSettings {
        &self.lights[idx % LIGHT_COUNT]
    }

    /// Brightness is one hardware setting, so both lights carry the same value.
    pub fn set_brightness(&mut self, value: i32) {
        let value = value.clamp(0, BRIGHTNESS_MAX);
        for light in &mut self.lights {
            light.brightness = value;
        }
    }

    /// Apply one directional step to `field` of light `idx`.
    pub fn step(&mut self, idx: usize, field: LightField, step: Step) {
        let light = &mut self.lights[idx % LIGHT_COUNT];
        match field {
            LightField::Effect => light.effect = step.cycle(light.effect, light.max_effects),
            LightField::Color1 => light.color1 = palette::LED.step(light.color1, step),
            LightField::Color2 => light.color2 = palette::LED.step(light.color2, step),
            LightField::Duration => {
                let moved =
                    i64::from(light.duration) + i64::from(step.delta() * DURATION_STEP);
                light.duration = moved.rem_euclid(i64::from(DURATION_CEILING)) as i32;
            }
            LightField::Brightness => {
                let target = light
                    .brightness
                    .saturating_add(step.delta() * BRIGHTNESS_STEP);
                self.set_brightness(target);
            }
            LightField::Trigger => light.trigger = step.cycle(light.trigger, TRIGGER_COUNT),
        }
    }
}

impl SettingsFile for LightsConfig {
    const FILE_NAME: &'static str = "ledsettings.txt";

    fn apply(&mut self, section: Option<&str>, key: &str, value: &str) {
        let Some(section) = section else { return };
        if let Some(light) = self.lights.iter_mut().find(|l| l.name == section) {
            light.apply(key, value);
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (i, light) in self.lights.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            light.render_into(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    const SAMPLE: &str = "\
stray=1
[central]
effect=3
color1=0xFF3333
color2=0x0000aa
duration=1500
brightness=20
trigger=11

[bogus]
effect=9

[joysticks]
effect=7
color=0x123456
color1=0x33FF33
trigger=notanumber
";

    #[test]
    fn parses_sections_into_the_matching_light() {
        let cfg = LightsConfig::parse(SAMPLE);
        let c = cfg.light(0);
        assert_eq!(c.effect, 3);
        assert_eq!(c.color1, 0xFF3333);
        assert_eq!(c.color2, 0x0000AA);
        assert_eq!(c.duration, 1500);
        assert_eq!(c.brightness, 20);
        assert_eq!(c.trigger, 11);

        let j = cfg.light(1);
        assert_eq!(j.effect, 7);
        // only the exact key names count
        assert_eq!(j.color1, 0x33FF33);
        // unparsable value keeps the default
        assert_eq!(j.trigger, 1);
        assert_eq!(j.duration, 1000);
    }

    #[test]
    fn render_uses_fixed_key_order() {
        let text = LightsConfig::default().render();
        let expected = "\
[central]
effect=1
color1=0xFFFFFF
color2=0x000000
duration=1000
brightness=30
trigger=1

[joysticks]
effect=1
color1=0xFFFFFF
color2=0x000000
duration=1000
brightness=30
trigger=1
";
        assert_eq!(text, expected);
    }

    #[test]
    fn save_then_load_reproduces_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = store::path_in::<LightsConfig>(dir.path());

        let mut cfg = LightsConfig::parse(SAMPLE);
        cfg.step(1, LightField::Color2, Step::Prev);
        cfg.step(0, LightField::Brightness, Step::Next);
        store::save(&path, &cfg).unwrap();

        let back: LightsConfig = store::load(&path).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn non_utf8_comment_does_not_block_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = store::path_in::<LightsConfig>(dir.path());
        std::fs::write(&path, b"# r\xE9glages\n[central]\neffect=3\n").unwrap();

        let cfg: LightsConfig = store::load(&path).unwrap();
        assert_eq!(cfg.light(0).effect, 3);
    }

    #[test]
    fn effect_wraps_within_the_light_bound() {
        let mut cfg = LightsConfig::default();
        cfg.step(1, LightField::Effect, Step::Prev);
        assert_eq!(cfg.light(1).effect, 8);
        cfg.step(1, LightField::Effect, Step::Next);
        assert_eq!(cfg.light(1).effect, 1);

        cfg.lights[0].effect = 14;
        cfg.step(0, LightField::Effect, Step::Next);
        assert_eq!(cfg.light(0).effect, 1);
    }

    #[test]
    fn duration_steps_and_wraps() {
        let mut cfg = LightsConfig::default();
        cfg.step(0, LightField::Duration, Step::Next);
        assert_eq!(cfg.light(0).duration, 1100);

        cfg.lights[0].duration = 4900;
        cfg.step(0, LightField::Duration, Step::Next);
        assert_eq!(cfg.light(0).duration, 0);
        cfg.step(0, LightField::Duration, Step::Prev);
        assert_eq!(cfg.light(0).duration, 4900);
    }

    #[test]
    fn brightness_is_clamped_and_shared() {
        let mut cfg = LightsConfig::default();
        cfg.lights[1].brightness = 0;
        cfg.step(0, LightField::Brightness, Step::Next);
        assert_eq!(cfg.light(0).brightness, 35);
        assert_eq!(cfg.light(1).brightness, 35);

        cfg.set_brightness(BRIGHTNESS_MAX);
        cfg.step(1, LightField::Brightness, Step::Next);
        assert_eq!(cfg.light(0).brightness, BRIGHTNESS_MAX);

        cfg.set_brightness(2);
        cfg.step(1, LightField::Brightness, Step::Prev);
        assert_eq!(cfg.light(0).brightness, 0);
        assert_eq!(cfg.light(1).brightness, 0);
    }

    #[test]
    fn trigger_and_colors_cycle() {
        let mut cfg = LightsConfig::default();
        cfg.step(0, LightField::Trigger, Step::Prev);
        assert_eq!(cfg.light(0).trigger, TRIGGER_COUNT);

        // white is the last LED palette entry
        cfg.step(0, LightField::Color1, Step::Next);
        assert_eq!(cfg.light(0).color1, palette::LED[0]);
        // black sits at the start of the grey ramp
        cfg.step(1, LightField::Color2, Step::Next);
        assert_eq!(cfg.light(1).color2, 0x141414);
    }

    #[test]
    fn stepping_from_integer_extremes_lands_in_range() {
        for start in [i32::MIN, i32::MAX] {
            for step in [Step::Next, Step::Prev] {
                let mut cfg = LightsConfig::default();
                let l = &mut cfg.lights[0];
                l.effect = start;
                l.duration = start;
                l.trigger = start;
                l.brightness = start;

                for field in LightField::ALL {
                    cfg.step(0, field, step);
                }
                let l = cfg.light(0);
                assert!((1..=l.max_effects).contains(&l.effect), "effect {}", l.effect);
                assert!((0..DURATION_CEILING).contains(&l.duration), "duration {}", l.duration);
                assert!((1..=TRIGGER_COUNT).contains(&l.trigger), "trigger {}", l.trigger);
                assert!((0..=BRIGHTNESS_MAX).contains(&l.brightness));
                assert_eq!(cfg.light(1).brightness, l.brightness);
            }
        }
    }

    #[test]
    fn huge_brightness_steps_to_the_top_not_the_bottom() {
        let mut cfg = LightsConfig::parse("[central]\nbrightness=2147483647\n");
        cfg.step(0, LightField::Brightness, Step::Next);
        assert_eq!(cfg.light(0).brightness, BRIGHTNESS_MAX);

        let mut cfg = LightsConfig::parse("[central]\nbrightness=-2147483648\n");
        cfg.step(0, LightField::Brightness, Step::Prev);
        assert_eq!(cfg.light(0).brightness, 0);
    }

    #[test]
    fn dump_serializes_to_json() {
        let json = serde_json::to_value(LightsConfig::default()).unwrap();
        assert_eq!(json["lights"][1]["name"], "joysticks");
        assert_eq!(json["lights"][0]["max_effects"], 14);
    }
}
