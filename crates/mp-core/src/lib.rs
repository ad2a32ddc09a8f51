pub mod error;
pub mod forms;
pub mod models;
pub mod navigation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use forms::login_form::LoginForm;
pub use forms::registration_form::RegistrationForm;
pub use models::activity_kind::ActivityKind;
pub use models::activity_log::ActivityLog;
pub use models::auth_response::AuthResponse;
pub use models::identity::Identity;
pub use models::payment_info::{PaymentInfo, PaymentMethod};
pub use models::payment_status::PaymentStatus;
pub use models::product::Product;
pub use models::profile_update::ProfileUpdate;
pub use models::role::Role;
pub use models::stats::Stats;
pub use models::subscription::Subscription;
pub use models::subscription_plan::SubscriptionPlan;
pub use models::vendor_profile::VendorProfile;
pub use navigation::route::Route;
