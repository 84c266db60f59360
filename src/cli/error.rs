//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_domain_error_when_mapping_then_dataerr() {
        let err = CliError::from(ApplicationError::from(DomainError::VertexOutOfRange {
            vertex: 9,
            num_vertices: 4,
        }));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(
            err.to_string(),
            "vertex 9 out of range: graph has 4 vertices"
        );
    }

    #[test]
    fn given_config_error_when_mapping_then_config_code() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }
}
