/// Wireless link status, owned by [`crate::LinkSupervisor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStatus {
    /// Not associated; uploads are forbidden.
    Down,
    /// Associated and usable.
    Up,
}

impl LinkStatus {
    /// Whether the link is usable.
    pub fn is_up(self) -> bool {
        self == LinkStatus::Up
    }
}
