mod identity;
mod payment_info;
mod product;
mod role;
mod stats;
mod subscription;
mod vendor_profile;
