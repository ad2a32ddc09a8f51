use mp_core::Identity;

use serde::Serialize;

/// What the session client found in storage at construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadResult {
    /// Identity restored from storage, if the record was complete and valid
    pub user: Option<Identity>,
    /// Present if a record existed but was unusable and has been discarded
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn restored(&self) -> bool {
        self.user.is_some()
    }
}
