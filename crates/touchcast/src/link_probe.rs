//! Link status from the kernel's view of a network interface.
//!
//! Association itself is left to the system's network manager; this probe
//! only reports whether the interface is operationally up.

use crate::{AppError, AppResult};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use touchcast_core::Radio;
use tracing::{debug, info};

/// Root of the per-interface sysfs directories.
pub(crate) const SYS_CLASS_NET: &str = "/sys/class/net";

/// [`Radio`] backed by `/sys/class/net/<iface>/operstate`.
pub(crate) struct SysfsRadio {
    interface: String,
    operstate: PathBuf,
}

impl SysfsRadio {
    /// Probe `interface` under `net_root`. Fails if the interface does not exist.
    #[track_caller]
    pub(crate) fn open(net_root: &Path, interface: &str) -> AppResult<Self> {
        let operstate = net_root.join(interface).join("operstate");
        if !operstate.exists() {
            return Err(AppError::HardwareInitFailed {
                path: operstate,
                reason: format!("network interface {} not found", interface),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(interface, "Link probe ready");

        Ok(Self {
            interface: interface.to_string(),
            operstate,
        })
    }
}

impl Radio for SysfsRadio {
    fn begin(&mut self) {
        info!(interface = %self.interface, "Waiting for network association");
    }

    fn is_associated(&mut self) -> bool {
        match fs::read_to_string(&self.operstate) {
            Ok(state) => state.trim() == "up",
            Err(e) => {
                debug!(interface = %self.interface, error = %e, "operstate unreadable");
                false
            }
        }
    }
}
