mod link_status;
mod supervisor;

pub use {link_status::LinkStatus, supervisor::LinkSupervisor};
