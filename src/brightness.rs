//! Reads the LED brightness that another tool owns.

use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

pub const DEFAULT_COMMAND: &str = "cat /sys/class/led_anim/max_scale";

/// Run `cmd` through `sh -c` and parse its stdout as an integer.
pub fn probe(cmd: &str) -> Result<i32> {
    let out = Command::new("sh")
        .args(["-c", cmd])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .with_context(|| format!("spawning `{cmd}`"))?;
    if !out.status.success() {
        bail!("`{cmd}` exited with {}", out.status);
    }
    let text = String::from_utf8_lossy(&out.stdout);
    let value = text.trim();
    value
        .parse()
        .with_context(|| format!("`{cmd}` printed {value:?}, expected an integer"))
}
