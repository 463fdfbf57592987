use modkit_util::fs::{ensure_dir, find_ancestor_with, sanitize_name};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_finds_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Modkit.toml"), "").unwrap();
    let found = find_ancestor_with(tmp.path(), "Modkit.toml").unwrap();
    assert_eq!(found, tmp.path());
}

#[test]
fn test_find_ancestor_with_walks_up() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Modkit.toml"), "").unwrap();
    let nested = tmp.path().join("deep/nested/dir");
    std::fs::create_dir_all(&nested).unwrap();
    let found = find_ancestor_with(&nested, "Modkit.toml").unwrap();
    assert_eq!(found, tmp.path());
}

#[test]
fn test_find_ancestor_with_missing() {
    let tmp = TempDir::new().unwrap();
    assert!(find_ancestor_with(tmp.path(), "no-such-file-xyz").is_none());
}

#[test]
fn test_ensure_dir_creates_parents() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("a/b/c");
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
    // Idempotent on existing directories.
    ensure_dir(&deep).unwrap();
}

#[test]
fn test_sanitize_name() {
    assert_eq!(sanitize_name("afloesch/megamod"), "afloesch-megamod");
    assert_eq!(sanitize_name("my mod v2"), "my-mod-v2");
    assert_eq!(sanitize_name("plain"), "plain");
}
