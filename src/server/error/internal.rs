use std::path::PathBuf;
use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with Argon2.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Failure to write an uploaded avatar to disk.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to store avatar at '{}': {source}", path.display())]
    AvatarWrite {
        /// Destination file path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}
