//! Handling of the one-off `projects.json` load.
//!
//! The browser adapter performs the request; this module turns what came back
//! into either the project list or a [`LoadError`]. A failed load is terminal
//! for the session: nothing here retries.

use thiserror::Error;

use crate::domain::Project;

/// Errors that can occur while loading the project list
#[derive(Error, Debug)]
pub enum LoadError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be read
    #[error("could not read response body: {0}")]
    Body(String),

    /// The body is not a list of projects
    #[error("malformed project list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Accepts 2xx statuses only.
pub fn check_status(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status { status })
    }
}

/// Parses a response body. A `null` body is an empty list.
pub fn parse_projects(body: &str) -> Result<Vec<Project>, LoadError> {
    let projects: Option<Vec<Project>> = serde_json::from_str(body)?;
    Ok(projects.unwrap_or_default())
}
