//! GPS device implementation

use super::Device;

/// GPS receiver stub
///
/// Construction optionally takes a validated poll rate in Hz; `run` reports
/// it when present.
#[derive(Clone, Debug, Default)]
pub struct Gps {
    poll_rate_hz: Option<i64>,
}

impl Gps {
    /// Create a GPS device, optionally with a poll rate in Hz
    pub fn new(poll_rate_hz: Option<i64>) -> Self {
        Self { poll_rate_hz }
    }
}

impl Device for Gps {
    fn name(&self) -> &'static str {
        "gps"
    }

    fn run(&mut self) {
        match self.poll_rate_hz {
            Some(rate) => log::info!("running gps at {rate} Hz"),
            None => log::info!("running gps"),
        }
    }
}
