/// Wireless association primitives consumed by [`crate::LinkSupervisor`].
///
/// Credentials and provisioning live behind this interface.
pub trait Radio {
    /// Start (or restart) association with the configured access point.
    fn begin(&mut self);

    /// Whether the device is currently associated and has a usable link.
    fn is_associated(&mut self) -> bool;
}
