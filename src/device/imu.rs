//! IMU device implementation

use super::Device;

/// Inertial measurement unit stub
///
/// Construction optionally takes a validated sample rate in Hz; `run`
/// reports it when present.
#[derive(Clone, Debug, Default)]
pub struct Imu {
    sample_rate_hz: Option<i64>,
}

impl Imu {
    /// Create an IMU device, optionally with a sample rate in Hz
    pub fn new(sample_rate_hz: Option<i64>) -> Self {
        Self { sample_rate_hz }
    }
}

impl Device for Imu {
    fn name(&self) -> &'static str {
        "imu"
    }

    fn run(&mut self) {
        match self.sample_rate_hz {
            Some(rate) => log::info!("running imu at {rate} Hz"),
            None => log::info!("running imu"),
        }
    }
}
