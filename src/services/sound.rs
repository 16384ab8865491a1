use crate::models::SoundEvent;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use log::{debug, warn};

/// Audio collaborator. Errors are reported to the caller, which decides
/// whether they matter (the game session ignores them).
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent) -> io::Result<()>;
}

/// Plays nothing
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, event: SoundEvent) -> io::Result<()> {
        debug!("Sound {} muted", event.name());
        Ok(())
    }
}

/// Rings the terminal bell on stderr
pub struct Bell;

impl SoundSink for Bell {
    fn play(&mut self, _event: SoundEvent) -> io::Result<()> {
        let mut err = io::stderr().lock();
        err.write_all(b"\x07")?;
        err.flush()
    }
}

/// Hands the event's asset file to an external player program,
/// e.g. `aplay` or `afplay`. Each child is awaited on its own task so it is
/// reaped when it exits. Must be called from within the tokio runtime.
pub struct CommandPlayer {
    program: String,
    sound_dir: PathBuf,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, sound_dir: impl Into<PathBuf>) -> Self {
        CommandPlayer {
            program: program.into(),
            sound_dir: sound_dir.into(),
        }
    }

    pub fn asset_path(&self, event: SoundEvent) -> PathBuf {
        self.sound_dir.join(event.asset())
    }
}

impl SoundSink for CommandPlayer {
    fn play(&mut self, event: SoundEvent) -> io::Result<()> {
        let path = self.asset_path(event);
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Sound asset missing: {}", path.display()),
            ));
        }

        debug!("Playing {} via {}", path.display(), self.program);
        let mut child = Command::new(&self.program)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => warn!("{} exited with {}", program, status),
                Ok(_) => {}
                Err(e) => warn!("Failed to wait on {}: {}", program, e),
            }
        });
        Ok(())
    }
}
