//! Wireless association lifecycle.

use crate::{Clock, DigitalOutput, IndicatorDriver, IndicatorState, LinkStatus, Radio};

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

/// Owns the [`Radio`] and is the sole writer of [`LinkStatus`].
pub struct LinkSupervisor<R> {
    radio: R,
    status: LinkStatus,
    down_since: Option<Instant>,
}

impl<R: Radio> LinkSupervisor<R> {
    /// Create a supervisor. The link is considered down until the first poll.
    pub fn new(radio: R) -> Self {
        Self {
            radio,
            status: LinkStatus::Down,
            down_since: None,
        }
    }

    /// Last observed status.
    pub fn status(&self) -> LinkStatus {
        self.status
    }

    /// Sample the radio and log status transitions.
    pub fn poll(&mut self, now: Instant) -> LinkStatus {
        let status = if self.radio.is_associated() {
            LinkStatus::Up
        } else {
            LinkStatus::Down
        };

        match (self.status, status) {
            (LinkStatus::Up, LinkStatus::Down) => {
                warn!("Link lost");
                self.down_since = Some(now);
            }
            (LinkStatus::Down, LinkStatus::Up) => {
                let down_ms = self
                    .down_since
                    .take()
                    .map(|since| now.saturating_duration_since(since).as_millis());
                info!(down_ms = ?down_ms, "Link up");
            }
            _ => {}
        }

        self.status = status;
        status
    }

    /// Block until the radio associates again.
    ///
    /// Plays the reconnect wait pattern on the indicator while waiting and
    /// leaves it `SteadyOn` once associated. Never gives up.
    ///
    /// Returns the number of wait rounds played.
    #[instrument(skip_all)]
    pub fn reconnect<O: DigitalOutput, C: Clock>(
        &mut self,
        indicator: &mut IndicatorDriver<O>,
        clock: &C,
    ) -> u32 {
        let started_at = clock.now();
        let hold = indicator.timing().reconnect_hold;
        let toggle = indicator.timing().reconnect_toggle;
        let toggles = indicator.timing().reconnect_toggles;

        info!("Starting association");
        indicator.set_state(IndicatorState::LinkDownPattern, started_at);
        self.radio.begin();

        let mut rounds = 0;
        while !self.radio.is_associated() {
            rounds += 1;

            indicator.drive(true);
            clock.sleep(hold);
            for _ in 0..toggles {
                indicator.drive(false);
                clock.sleep(toggle);
                indicator.drive(true);
                clock.sleep(toggle);
            }

            debug!(rounds, "Still waiting for association");
        }

        let now = clock.now();
        self.status = LinkStatus::Up;
        self.down_since = None;
        indicator.set_state(IndicatorState::SteadyOn, now);
        indicator.tick(now);

        info!(
            rounds,
            waited_ms = now.saturating_duration_since(started_at).as_millis(),
            "Link restored"
        );

        rounds
    }
}
