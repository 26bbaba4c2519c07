mod controller;
mod controller_settings;
mod controller_state;
mod recording_session;

pub use {
    controller::RecordingController, controller_settings::ControllerSettings,
    controller_state::ControllerState, recording_session::RecordingSession,
};
