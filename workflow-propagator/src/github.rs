//! Classification of GitHub API errors.
//!
//! Two error classes get special treatment: "not found" marks a file or ref
//! that needs creating, and "already exists" marks a create that a previous
//! run has already performed. Everything else propagates unmodified.

/// Returns the HTTP status reported by the GitHub API, if the error
/// carries one.
pub(crate) fn error_status(error: &octocrab::Error) -> Option<u16> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// True when the API reported 404 for the requested resource.
pub(crate) fn is_not_found(error: &octocrab::Error) -> bool {
    error_status(error) == Some(404)
}

/// True when the API rejected a create because the resource already exists.
///
/// GitHub reports "Reference already exists" and "A pull request already
/// exists" as 422 Unprocessable Entity; some ref operations answer 409.
pub(crate) fn is_already_exists(error: &octocrab::Error) -> bool {
    matches!(error_status(error), Some(409 | 422))
}
