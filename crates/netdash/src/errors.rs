//! Error handling and exit codes.

use netdash_core::constants::exit_codes;
use netdash_core::DashError;

/// Map a top-level error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DashError>() {
        Some(
            DashError::Config(_)
            | DashError::DeviceFile { .. }
            | DashError::DeviceFileFormat { .. },
        ) => exit_codes::ERROR_CONFIG,
        Some(DashError::Interrupted) => exit_codes::ERROR_CANCELED,
        None => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_to_config_code() {
        let err = anyhow::Error::new(DashError::Config("bad window".into()));
        assert_eq!(exit_code_for(&err), exit_codes::ERROR_CONFIG);
    }

    #[test]
    fn interrupt_maps_to_canceled_code() {
        let err = anyhow::Error::new(DashError::Interrupted);
        assert_eq!(exit_code_for(&err), exit_codes::ERROR_CANCELED);
    }

    #[test]
    fn other_errors_are_generic() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn context_wrapped_errors_keep_their_code() {
        let err =
            anyhow::Error::new(DashError::Config("bad".into())).context("loading configuration");
        assert_eq!(exit_code_for(&err), exit_codes::ERROR_CONFIG);
    }
}
