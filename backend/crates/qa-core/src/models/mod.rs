pub mod identity;
pub mod public_user;
