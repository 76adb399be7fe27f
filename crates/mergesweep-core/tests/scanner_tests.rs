// Rust guideline compliant 2026-02-06

//! Integration tests for conflict discovery.

use mergesweep_core::{scan, Config};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFLICT: &str = "<<<<<<< HEAD\nA\n=======\nB\n>>>>>>> jules-testing-merges\n";

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("path has a parent"))
        .expect("Failed to create directories");
    fs::write(path, content).expect("Failed to write file");
}

fn relative_names(root: &Path, found: &[std::path::PathBuf]) -> Vec<String> {
    found
        .iter()
        .map(|path| {
            path.strip_prefix(root)
                .expect("candidate under root")
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_scan_finds_marked_files_in_client_and_server() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(root, "client/src/App.tsx", CONFLICT.as_bytes());
    write(root, "server/routes/api.ts", CONFLICT.as_bytes());
    write(root, "client/src/clean.ts", b"export const x = 1;\n");

    let found = scan(root, &Config::default());
    assert_eq!(
        relative_names(root, &found),
        vec!["client/src/App.tsx", "server/routes/api.ts"]
    );
}

#[test]
fn test_scan_excludes_unmarked_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(root, "client/a.ts", b"const a = '<<<<<<< main';\n");
    write(root, "server/b.tsx", b"=======\n>>>>>>> jules-testing-merges\n");

    assert!(scan(root, &Config::default()).is_empty());
}

#[test]
fn test_scan_excludes_other_extensions() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(root, "client/a.js", CONFLICT.as_bytes());
    write(root, "client/a.ts.orig", CONFLICT.as_bytes());
    write(root, "server/README.md", CONFLICT.as_bytes());

    assert!(scan(root, &Config::default()).is_empty());
}

#[test]
fn test_scan_excludes_other_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(root, "shared/types.ts", CONFLICT.as_bytes());
    write(root, "top.ts", CONFLICT.as_bytes());

    assert!(scan(root, &Config::default()).is_empty());
}

#[test]
fn test_scan_matches_directory_substring() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(root, "packages/web-client/index.ts", CONFLICT.as_bytes());
    write(root, "serverless/handler.ts", CONFLICT.as_bytes());

    let found = scan(root, &Config::default());
    assert_eq!(found.len(), 2);
}

#[test]
fn test_scan_ignores_root_directory_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("client");
    write(&root, "lib/a.ts", CONFLICT.as_bytes());

    assert!(scan(&root, &Config::default()).is_empty());
}

#[test]
fn test_scan_skips_non_utf8_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let mut bytes = CONFLICT.as_bytes().to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0x00]);
    write(root, "client/binary.ts", &bytes);
    write(root, "client/text.ts", CONFLICT.as_bytes());

    let found = scan(root, &Config::default());
    assert_eq!(relative_names(root, &found), vec!["client/text.ts"]);
}

#[test]
fn test_scan_missing_root_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let found = scan(&temp_dir.path().join("nope"), &Config::default());
    assert!(found.is_empty());
}

#[test]
fn test_scan_with_custom_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(root, "web/app.js", CONFLICT.as_bytes());
    write(root, "client/app.ts", CONFLICT.as_bytes());

    let config = Config {
        extensions: vec![".js".to_string()],
        dir_fragments: vec!["web".to_string()],
    };
    let found = scan(root, &config);
    assert_eq!(relative_names(root, &found), vec!["web/app.js"]);
}
