mod detector;
mod gesture_event;
mod thresholds;

pub use {detector::GestureDetector, gesture_event::GestureEvent, thresholds::GestureThresholds};
