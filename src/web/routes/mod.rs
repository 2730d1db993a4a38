pub mod activities;
pub mod board;
pub mod health;

/// `<version>+<unix build time>`, stamped by `build.rs`.
pub const BUILD_ID: &str = env!("ACTIVITY_SIGNUP_BUILD_ID");
