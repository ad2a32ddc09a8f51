//! Registration tab input and the checks run before the API is called.

use crate::forms::require;
use crate::{CoreError, Result as CoreErrorResult, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    /// WhatsApp-capable phone number
    pub phone: String,
    pub role: Role,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationForm {
    /// Checks run in order; the first failure is returned.
    ///
    /// 1. name, email, phone and password are non-blank
    /// 2. email contains `@`
    /// 3. password and confirmation match
    pub fn validate(&self) -> CoreErrorResult<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        require("password", &self.password)?;

        if !self.email.contains('@') {
            return Err(CoreError::validation("email", "email address is invalid"));
        }

        if self.password != self.password_confirmation {
            return Err(CoreError::validation(
                "password_confirmation",
                "passwords do not match",
            ));
        }

        Ok(())
    }

    /// Phone to send to the API; blank input is sent as absent
    pub fn phone(&self) -> Option<&str> {
        Some(self.phone.trim()).filter(|p| !p.is_empty())
    }
}
