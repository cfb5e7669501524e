//! Device list loading.

use std::path::Path;

use netdash_core::{DashError, Device};

/// Load the device list from a JSON file.
///
/// The file holds an array of device objects; `port`, `description`,
/// and `tags` are optional. There is no persistence beyond this file:
/// the dashboard re-reads it only at startup.
pub fn load_devices(path: &Path) -> Result<Vec<Device>, DashError> {
    let display = path.display().to_string();
    let data = std::fs::read_to_string(path).map_err(|source| DashError::DeviceFile {
        path: display.clone(),
        source,
    })?;
    let devices: Vec<Device> =
        serde_json::from_str(&data).map_err(|source| DashError::DeviceFileFormat {
            path: display,
            source,
        })?;

    tracing::debug!(count = devices.len(), "loaded device list");
    Ok(devices)
}
