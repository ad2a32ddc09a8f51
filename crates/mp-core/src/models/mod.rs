pub mod activity_kind;
pub mod activity_log;
pub mod auth_response;
pub mod identity;
pub mod payment_info;
pub mod payment_status;
pub mod product;
pub mod profile_update;
pub mod role;
pub mod stats;
pub mod subscription;
pub mod subscription_plan;
pub mod vendor_profile;
