use modkit_util::progress::{download_bar, spinner, status, status_info, status_warn};

#[test]
fn test_status_lines_do_not_panic() {
    status("Resolving", "afloesch/megamod");
    status_info("Cached", "megamod megamod.zip");
    status_warn("Skipping", "afloesch/empty: release has no files");
}

#[test]
fn test_spinner_finishes() {
    let sp = spinner("Resolving dependencies...");
    sp.finish_and_clear();
    assert!(sp.is_finished());
}

#[test]
fn test_download_bar_tracks_position() {
    let pb = download_bar(1000, "megamod.zip");
    pb.set_position(500);
    assert_eq!(pb.position(), 500);
    pb.finish_and_clear();
    assert!(pb.is_finished());
}
