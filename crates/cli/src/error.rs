//! Exit-code mapping for scripted use.

use saur_client::ApiError;

/// Process exit codes, stable for shell scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    AuthenticationFailed = 2,
    ConnectionError = 3,
    HttpError = 4,
    MalformedResponse = 5,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Classify a top-level error into an exit code.
///
/// Errors that did not originate in the API client (config parsing, cache
/// I/O) fall through to [`ExitCode::GeneralError`].
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ApiError>() {
        Some(api) if api.is_auth_error() => ExitCode::AuthenticationFailed,
        Some(ApiError::Network(_)) => ExitCode::ConnectionError,
        Some(ApiError::Http { .. }) => ExitCode::HttpError,
        Some(ApiError::MalformedResponse { .. }) => ExitCode::MalformedResponse,
        Some(_) => ExitCode::GeneralError,
        None => ExitCode::GeneralError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_auth_exit_code() {
        let err = anyhow::Error::new(ApiError::AuthFailed("bad password".into()));
        assert_eq!(exit_code_for(&err), ExitCode::AuthenticationFailed);

        let err = anyhow::Error::new(ApiError::AuthExhausted { attempts: 4 });
        assert_eq!(exit_code_for(&err), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_http_error_maps_to_http_exit_code() {
        let err = anyhow::Error::new(ApiError::Http {
            status: 500,
            url: "http://example.invalid/x".into(),
            message: "boom".into(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::HttpError);
    }

    #[test]
    fn test_non_api_error_is_general() {
        let err = anyhow::anyhow!("config file missing");
        assert_eq!(exit_code_for(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_values_are_stable() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::HttpError.as_i32(), 4);
        assert_eq!(ExitCode::MalformedResponse.as_i32(), 5);
    }
}
