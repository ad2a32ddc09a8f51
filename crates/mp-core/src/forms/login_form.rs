use crate::Result as CoreErrorResult;
use crate::forms::require;

/// Login tab input. `login` is an email or a username.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> CoreErrorResult<()> {
        require("login", &self.login)?;
        require("password", &self.password)?;
        Ok(())
    }
}
