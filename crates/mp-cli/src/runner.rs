//! Executes parsed commands against a [`SessionClient`] and shapes the JSON output.

use crate::{Commands, Result as CliResult};

use mp_config::Config;
use mp_core::{CoreError, LoginForm, ProfileUpdate, RegistrationForm, Role, Route};
use mp_session::{ApiClient, FileStore, SessionClient};

use std::sync::Arc;

use log::{debug, warn};
use serde_json::{Value, json};

/// Build the session client described by `config`: HTTP transport with the
/// configured timeout, file-backed storage, and the restored session.
pub fn connect(config: &Config) -> CliResult<SessionClient> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.api.timeout() {
        builder = builder.timeout(timeout);
    }
    let api = ApiClient::with_client(&config.api.base_url, builder.build()?);

    let store = FileStore::new(config.storage_path()?);
    debug!("Session storage: {}", store.dir().display());

    let session = SessionClient::load(api, Arc::new(store))?;
    if let Some(reason) = &session.load_result().corruption_error {
        warn!("Starting signed out, stored session was unusable: {reason}");
    }

    Ok(session)
}

pub struct Runner {
    session: SessionClient,
}

impl Runner {
    pub fn new(session: SessionClient) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &SessionClient {
        &self.session
    }

    /// Run one command; the returned value is what gets printed.
    ///
    /// Form checks happen here so invalid input never reaches the API.
    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { login, password } => {
                let form = LoginForm::new(login, password);
                form.validate()?;

                let identity = self.session.login(&form.login, &form.password).await?;
                Ok(json!({
                    "user": identity,
                    "next_route": Route::after_sign_in(&identity).path(),
                }))
            }

            Commands::Register {
                name,
                email,
                phone,
                role,
                password,
                password_confirmation,
            } => {
                let form = RegistrationForm {
                    name,
                    email,
                    phone,
                    role: role.parse::<Role>()?,
                    password,
                    password_confirmation,
                };
                form.validate()?;

                let identity = self
                    .session
                    .register(
                        form.name.trim(),
                        form.email.trim(),
                        &form.password,
                        &form.password_confirmation,
                        form.role,
                        form.phone(),
                    )
                    .await?;
                Ok(json!({
                    "user": identity,
                    "next_route": Route::after_sign_in(&identity).path(),
                }))
            }

            Commands::Logout => {
                self.session.logout().await;
                Ok(json!({ "authenticated": false }))
            }

            Commands::Whoami => Ok(serde_json::to_value(self.session.current_identity())?),

            Commands::Status => {
                let identity = self.session.current_identity();
                Ok(json!({
                    "authenticated": identity.is_some(),
                    "vendor": self.session.is_vendor(),
                    "next_route": Route::get_started(identity.as_ref()).path(),
                }))
            }

            Commands::Navigate { path } => {
                let identity = self.session.current_identity();
                let requested = Route::parse(&path);
                let resolved = requested.clone().guard(identity.as_ref());
                Ok(json!({
                    "requested": requested.path(),
                    "route": resolved.path(),
                    "redirected": requested != resolved,
                }))
            }

            Commands::UpdateProfile {
                name,
                email,
                phone,
                whatsapp_number,
            } => {
                let update = ProfileUpdate {
                    name,
                    email,
                    phone,
                    whatsapp_number,
                };
                if update.is_empty() {
                    return Err(CoreError::validation(
                        "profile",
                        "nothing to update: pass at least one of --name, --email, --phone, --whatsapp-number",
                    )
                    .into());
                }

                let identity = self.session.update_profile(&update).await?;
                Ok(serde_json::to_value(identity)?)
            }
        }
    }
}
