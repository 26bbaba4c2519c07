//! Linux sysfs GPIO value files as touch input and indicator output.

use crate::{AppError, AppResult};

use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use touchcast_core::{DigitalInput, DigitalOutput};
use tracing::{info, warn};

#[track_caller]
fn open_failed(path: &Path, e: std::io::Error) -> AppError {
    AppError::HardwareInitFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Touch sensor on a GPIO value file.
pub(crate) struct SysfsInput {
    path: PathBuf,
    file: File,
    active_high: bool,
    /// Set after the first failed read so a dead pin logs once.
    failing: bool,
}

impl SysfsInput {
    /// Open `path` for reading. `active_high` selects the pressed level.
    #[track_caller]
    pub(crate) fn open(path: &Path, active_high: bool) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| open_failed(path, e))?;
        info!(path = ?path, active_high, "Touch input opened");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            active_high,
            failing: false,
        })
    }

    fn read_level(&mut self) -> std::io::Result<bool> {
        let mut value = [0u8; 1];
        self.file.seek(SeekFrom::Start(0))?;
        self.file.read_exact(&mut value)?;
        Ok(value[0] == b'1')
    }
}

impl DigitalInput for SysfsInput {
    fn read(&mut self) -> bool {
        match self.read_level() {
            Ok(level) => {
                if self.failing {
                    info!(path = ?self.path, "Touch input readable again");
                    self.failing = false;
                }
                level == self.active_high
            }
            Err(e) => {
                if !self.failing {
                    warn!(path = ?self.path, error = %e, "Touch input read failed, treating as released");
                    self.failing = true;
                }
                false
            }
        }
    }
}

/// Indicator light on a GPIO value file.
pub(crate) struct SysfsOutput {
    path: PathBuf,
    file: File,
    failing: bool,
}

impl SysfsOutput {
    /// Open `path` for writing.
    #[track_caller]
    pub(crate) fn open(path: &Path) -> AppResult<Self> {
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| open_failed(path, e))?;
        info!(path = ?path, "Indicator output opened");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            failing: false,
        })
    }

    fn write_level(&mut self, level: bool) -> std::io::Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(if level { b"1\n" } else { b"0\n" })?;
        self.file.flush()
    }
}

impl DigitalOutput for SysfsOutput {
    fn write(&mut self, level: bool) {
        match self.write_level(level) {
            Ok(()) => self.failing = false,
            Err(e) => {
                if !self.failing {
                    warn!(path = ?self.path, error = %e, "Indicator write failed");
                    self.failing = true;
                }
            }
        }
    }
}
