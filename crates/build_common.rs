// Shared build script helper that turns a crate README into its rustdoc page.
// Pulled into each crate's build.rs with: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Copy `README.md` into `OUT_DIR/README_GENERATED.md`, rewriting links so they
/// resolve inside rustdoc.
///
/// - `](src/foo.rs)` becomes `](foo)` so the link points at the module page
/// - `](../../README.md` becomes the workspace repository URL
///
/// An empty page is written when the crate has no README so that the
/// `include_str!` in `lib.rs` always finds a file.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme_path = Path::new(crate_dir).join("README.md");
    let content = fs::read_to_string(&readme_path).unwrap_or_default();

    let mut rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    if let Some(url) = workspace_repo_url(crate_dir) {
        rustdoc_content = rustdoc_content.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).unwrap();
}

/// Read `repository = "..."` from the workspace Cargo.toml, if present.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let workspace_toml = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(workspace_toml).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        if !line.starts_with("repository") || !line.contains('=') {
            return None;
        }
        let start = line.find('"')?;
        let end = line.rfind('"')?;
        (start < end).then(|| line[start + 1..end].to_string())
    })
}
