use chrono::{DateTime, Utc};

fn main() {
    // Stamped into `furnikit --verbose` output. SOURCE_DATE_EPOCH pins the
    // date for reproducible package builds.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let built = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|epoch| epoch.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    println!(
        "cargo:rustc-env=FURNIKIT_BUILD_DATE={}",
        built.format("%Y-%m-%d")
    );
}
