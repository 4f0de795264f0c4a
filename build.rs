use chrono::{Datelike, Utc};

fn main() {
    let now = Utc::now();

    // Stamped into the footer via env!
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
