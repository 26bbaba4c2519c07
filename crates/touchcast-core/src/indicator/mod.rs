mod driver;
mod indicator_state;
mod timing;

pub use {
    driver::IndicatorDriver,
    indicator_state::{IndicatorState, derive_indicator_state},
    timing::IndicatorTiming,
};
