pub mod models;

pub use models::identity::Identity;
pub use models::public_user::PublicUser;

#[cfg(test)]
mod tests;
