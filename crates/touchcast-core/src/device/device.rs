//! The cooperative main loop.
//!
//! One tick advances every component once, in a fixed order:
//! link poll, gesture sample, controller, indicator, then either the
//! blocking reconnect (link down) or one capture-and-upload cycle
//! (session active). All state is owned here; nothing is global.

use crate::{
    AudioSource, Clock, CoreResult, DeviceSettings, DigitalInput, DigitalOutput, GestureDetector,
    IndicatorDriver, LinkSupervisor, Radio, RecordingController, TickReport, Transport,
    UploadChannel,
};

use std::time::Duration;

use tracing::{info, instrument, trace};

/// Peripherals and backends the device is assembled from.
pub struct DeviceParts<I, O, R, A, T, C> {
    /// Touch sensor input.
    pub touch: I,
    /// Indicator light output.
    pub indicator: O,
    /// Wireless radio.
    pub radio: R,
    /// Capture source.
    pub audio: A,
    /// Upload connection.
    pub transport: T,
    /// Time source.
    pub clock: C,
}

/// The whole device: every state machine plus its peripherals.
pub struct Device<I, O, R, A, T, C> {
    touch: I,
    audio: A,
    clock: C,
    detector: GestureDetector,
    indicator: IndicatorDriver<O>,
    link: LinkSupervisor<R>,
    controller: RecordingController,
    channel: UploadChannel<T>,
    tick_interval: Duration,
}

impl<I, O, R, A, T, C> Device<I, O, R, A, T, C>
where
    I: DigitalInput,
    O: DigitalOutput,
    R: Radio,
    A: AudioSource,
    T: Transport,
    C: Clock,
{
    /// Assemble a device after validating `settings`.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(parts: DeviceParts<I, O, R, A, T, C>, settings: DeviceSettings) -> CoreResult<Self> {
        settings.validate()?;

        info!(
            host = %settings.upload.host,
            port = settings.upload.port,
            path = %settings.upload.path,
            framing = ?settings.upload.framing,
            capture_bytes = settings.controller.capture_bytes,
            "Device assembled"
        );

        Ok(Self {
            touch: parts.touch,
            audio: parts.audio,
            clock: parts.clock,
            detector: GestureDetector::new(settings.gestures),
            indicator: IndicatorDriver::new(parts.indicator, settings.indicator),
            link: LinkSupervisor::new(parts.radio),
            controller: RecordingController::new(settings.controller),
            channel: UploadChannel::new(parts.transport, settings.upload),
            tick_interval: settings.tick_interval,
        })
    }

    /// Run one scheduler tick.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.now();

        let link = self.link.poll(now);
        let gesture = self.detector.sample(self.touch.read(), now);
        let state = self.controller.handle(gesture, link, now, &mut self.indicator);
        self.indicator.tick(now);

        let mut report = TickReport {
            link,
            gesture,
            state,
            indicator: self.indicator.state(),
            upload: None,
            reconnected: false,
        };

        if !link.is_up() {
            self.link.reconnect(&mut self.indicator, &self.clock);
            report.reconnected = true;
        } else if self.controller.is_recording() {
            report.upload = self
                .controller
                .capture_and_upload(link, &mut self.audio, &mut self.channel)
                .map(|attempt| attempt.outcome);
        } else {
            self.clock.sleep(self.tick_interval);
        }

        trace!(report = ?report, "Tick");
        report
    }

    /// Tick forever.
    pub fn run(&mut self) -> ! {
        info!("Device loop running");
        loop {
            self.tick();
        }
    }

    /// Recording controller.
    pub fn controller(&self) -> &RecordingController {
        &self.controller
    }

    /// Indicator driver.
    pub fn indicator(&self) -> &IndicatorDriver<O> {
        &self.indicator
    }

    /// Link supervisor.
    pub fn link(&self) -> &LinkSupervisor<R> {
        &self.link
    }

    /// Upload channel.
    pub fn channel(&self) -> &UploadChannel<T> {
        &self.channel
    }
}
