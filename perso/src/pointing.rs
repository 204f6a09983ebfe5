//! Confirmed resolution changes of the trackball sensor

use crate::config::SnipeConfig;
use crate::host::{Clock, PointingDevice};

/// Errors of sensor resolution changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CpiError {
    /// The sensor still reported another resolution after `attempts` writes
    NotAcknowledged { target: u16, read_back: u16, attempts: u8 },
    /// The time budget was spent before the sensor reported the target resolution
    Timeout { target: u16, read_back: u16, attempts: u8 },
}

/// Write `target` to the sensor until it reads back the same value.
///
/// The sensor is read first and left alone when it already runs at `target`. Otherwise
/// it is written at most `config.max_retries` times (at least once), and no new write is
/// started once `config.timeout` has elapsed. Returns the number of writes used.
///
/// The elapsed time is measured with the device's own [`Clock`], the host in practice.
pub fn set_cpi_confirmed<D: PointingDevice + Clock>(
    device: &mut D,
    target: u16,
    config: &SnipeConfig,
) -> Result<u8, CpiError> {
    let start = device.now();
    let max_retries = config.max_retries.max(1);
    let mut attempts = 0;
    let mut read_back = device.cpi();

    while read_back != target {
        if attempts > 0 {
            warn!(
                "Sensor resolution is {} instead of {} (attempt {})",
                read_back, target, attempts
            );

            if attempts >= max_retries {
                error!("Sensor resolution change to {}: max retries reached, giving up", target);
                return Err(CpiError::NotAcknowledged {
                    target,
                    read_back,
                    attempts,
                });
            }

            if device.elapsed(start) >= config.timeout {
                error!("Sensor resolution change to {}: timeout, giving up", target);
                return Err(CpiError::Timeout {
                    target,
                    read_back,
                    attempts,
                });
            }
        }

        attempts += 1;
        device.set_cpi(target);
        read_back = device.cpi();
    }

    if attempts > 1 {
        info!("Sensor resolution set to {} after {} attempts", target, attempts);
    }
    Ok(attempts)
}
