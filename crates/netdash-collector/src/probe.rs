//! TCP reachability probes for configured devices.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Instant;

use netdash_core::constants::PROBE_TIMEOUT;
use netdash_core::{Device, DeviceReport};

/// Probe one device with a TCP connect and classify the result.
///
/// Resolution failures and connect errors both yield a `Down` report;
/// the distinction only matters for the log.
#[must_use]
pub fn probe_device(device: &Device) -> DeviceReport {
    DeviceReport::new(device, measure_connect(device))
}

/// Probe every device in order.
#[must_use]
pub fn probe_all(devices: &[Device]) -> Vec<DeviceReport> {
    devices.iter().map(probe_device).collect()
}

fn measure_connect(device: &Device) -> Option<u64> {
    let endpoint = (device.host.as_str(), device.port);
    let addr = match endpoint.to_socket_addrs() {
        Ok(mut addrs) => addrs.next()?,
        Err(err) => {
            tracing::debug!(host = %device.host, %err, "device address did not resolve");
            return None;
        }
    };

    let start = Instant::now();
    match TcpStream::connect_timeout(&addr, PROBE_TIMEOUT) {
        Ok(_) => {
            let ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            Some(ms)
        }
        Err(err) => {
            tracing::debug!(device = %device.name, %err, "probe failed");
            None
        }
    }
}
