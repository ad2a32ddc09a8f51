pub mod login_form;
pub mod registration_form;

use crate::{CoreError, Result as CoreErrorResult};

/// Reject empty or whitespace-only input
#[track_caller]
pub(crate) fn require(field: &'static str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required")));
    }
    Ok(())
}
