use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Askama compiles templates into the binary; both trees feed the build id.
    println!("cargo:rerun-if-changed=templates");
    println!("cargo:rerun-if-changed=src");

    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());

    println!("cargo:rustc-env=ACTIVITY_SIGNUP_BUILD_ID={}+{}", version, stamp);
}
