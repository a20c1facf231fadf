use std::env;
use std::process::Command;

fn main() {
    // CI can stamp a build number; local builds report 0
    let build_number = env::var("PLAYFAIR_BUILD_NUMBER")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);

    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let profile = if profile == "release" { "release" } else { "development" };

    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.1.0".to_string());

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=PLAYFAIR_VERSION={}", version);
    println!("cargo:rustc-env=PLAYFAIR_BUILD={}", build_number);
    println!("cargo:rustc-env=PLAYFAIR_PROFILE={}", profile);
    println!("cargo:rustc-env=PLAYFAIR_GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-env-changed=PLAYFAIR_BUILD_NUMBER");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
