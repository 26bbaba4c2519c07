/// A single binary output pin (the indicator light).
pub trait DigitalOutput {
    /// Drive the pin high (`true`) or low (`false`).
    fn write(&mut self, level: bool);
}

/// A single binary input pin (the touch sensor).
pub trait DigitalInput {
    /// Current pin level, `true` while the sensor is touched.
    fn read(&mut self) -> bool;
}
