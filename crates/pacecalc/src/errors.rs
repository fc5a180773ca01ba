//! Error handling and exit codes.

use pacecalc_core::constants::exit_codes;
use pacecalc_core::PaceError;

/// Exit code for a pace input error.
pub fn handle_error(err: &PaceError) -> i32 {
    match err {
        PaceError::InvalidTime(_)
        | PaceError::UnknownDistance(_)
        | PaceError::UnknownStrategy(_) => exit_codes::ERROR_CONFIG,
        PaceError::Serialization(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PaceError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
