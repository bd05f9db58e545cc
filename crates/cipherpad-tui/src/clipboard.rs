//! System clipboard access via platform copy utilities.
//!
//! Pipes text into `pbcopy` on macOS and `wl-copy` or `xclip` on other
//! platforms. Failures are reported to the caller; the runtime logs them
//! without interrupting the session.

use std::{
    io::{self, Write},
    process::{Child, Command, Stdio},
};

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> io::Result<()> {
    let mut child = spawn_copier()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(io::Error::other(format!("clipboard helper exited with {status}")));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn spawn_copier() -> io::Result<Child> {
    Command::new("pbcopy").stdin(Stdio::piped()).stdout(Stdio::null()).stderr(Stdio::null()).spawn()
}

#[cfg(not(target_os = "macos"))]
fn spawn_copier() -> io::Result<Child> {
    let wayland = Command::new("wl-copy")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match wayland {
        Ok(child) => Ok(child),
        Err(_) => Command::new("xclip")
            .args(["-selection", "clipboard"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn(),
    }
}
