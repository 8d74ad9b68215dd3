fn main() {
    // Stamp the build so the footer can show when the site was last deployed
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", built_at);

    // Content files are embedded, so edits to them need a rebuild
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
