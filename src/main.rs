//! # led-settings: handheld LED lighting settings editor
//!
//! Full-screen menu for the console's LED lights: effect, colors, duration,
//! brightness and trigger button per light. The choices go to a plain-text
//! file that the LED daemon reads. `--minui` edits the launcher theme
//! (font and three colors) instead.
//!
//! ## Usage
//!   led-settings                 # Edit ledsettings.txt
//!   led-settings --minui         # Edit minuisettings.txt
//!   led-settings --dump          # Print the parsed file as JSON and exit

mod app;
mod brightness;
mod effects;
mod ini;
mod input;
mod lights;
mod minui;
mod palette;
mod store;
mod ui;

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use app::{App, Editor};
use effects::Descriptions;
use input::Gamepad;
use lights::{BRIGHTNESS_MAX, LightsConfig};
use minui::MinUISettings;
use store::SettingsFile;

const DATA_DIR: &str = "/mnt/SDCARD/.userdata";
const DESC_DIR: &str = "effect_desc";

#[derive(Parser, Debug)]
#[command(version, about = "LED lighting settings editor")]
struct Args {
    /// Edit the launcher theme instead of the LED lights
    #[arg(long)]
    minui: bool,

    /// Directory holding the settings files
    #[arg(long, default_value = DATA_DIR)]
    data_dir: PathBuf,

    /// Directory of `<effect name>.txt` descriptions
    #[arg(long, default_value = DESC_DIR)]
    desc_dir: PathBuf,

    /// Shell command printing the current LED brightness; empty to skip
    #[arg(long, default_value = brightness::DEFAULT_COMMAND)]
    brightness_cmd: String,

    /// Rewrite the file after every change instead of on Save
    #[arg(long)]
    autosave: bool,

    /// Write default settings when the file does not exist yet
    #[arg(long)]
    init: bool,

    /// Print the parsed settings as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Log file (defaults to <data-dir>/logs/led-settings.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Logging
// ═══════════════════════════════════════════════════════════════════════════════

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(anyhow::Error::from_boxed)?;
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_or_init<T: SettingsFile>(path: &Path, init: bool) -> Result<T> {
    match store::load::<T>(path) {
        Ok(model) => Ok(model),
        Err(e) if init && e.is_not_found() => {
            let model = T::default();
            store::save(path, &model)?;
            tracing::info!(path = %path.display(), "wrote default settings");
            Ok(model)
        }
        Err(e) => Err(e.into()),
    }
}

/// The brightness tool owns the real value; the file copy follows it.
fn apply_external_brightness(cfg: &mut LightsConfig, cmd: &str) {
    if cmd.trim().is_empty() {
        return;
    }
    match brightness::probe(cmd) {
        Ok(v) => {
            let clamped = v.clamp(0, BRIGHTNESS_MAX);
            tracing::info!(raw = v, brightness = clamped, "external brightness");
            cfg.set_brightness(clamped);
        }
        Err(e) => tracing::warn!(error = %format!("{e:#}"), "brightness probe failed"),
    }
}

fn dump<T: Serialize>(model: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(model)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Entrypoint
// ═══════════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| args.data_dir.join("logs").join("led-settings.log"));
    if let Err(e) = init_logging(&log_path) {
        eprintln!("led-settings: logging disabled: {e:#}");
    }

    let (editor, path) = if args.minui {
        let path = store::path_in::<MinUISettings>(&args.data_dir);
        tracing::info!(path = %path.display(), "loading launcher settings");
        let cfg: MinUISettings = load_or_init(&path, args.init)?;
        if args.dump {
            return dump(&cfg);
        }
        (Editor::Theme(cfg), path)
    } else {
        let path = store::path_in::<LightsConfig>(&args.data_dir);
        tracing::info!(path = %path.display(), "loading LED settings");
        let mut cfg: LightsConfig = load_or_init(&path, args.init)?;
        apply_external_brightness(&mut cfg, &args.brightness_cmd);
        if args.dump {
            return dump(&cfg);
        }
        let descriptions = Descriptions::new(&args.desc_dir);
        tracing::debug!(dir = %descriptions.dir().display(), "effect descriptions");
        (Editor::lights(cfg, descriptions), path)
    };

    let pad = Gamepad::open();
    let app = App::new(editor, path, args.autosave);

    let terminal = ratatui::try_init().context("initializing terminal")?;
    let result = app.run(terminal, pad);
    ratatui::restore();
    result
}
