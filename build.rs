fn main() {
    let built = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let revision = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    // Shown by `--version` on the long form
    println!(
        "cargo:rustc-env=DETECTOR_LONG_VERSION={} (rev {}, built {})",
        env!("CARGO_PKG_VERSION"),
        revision,
        built
    );
    println!("cargo:rerun-if-changed=.git/HEAD");
}
