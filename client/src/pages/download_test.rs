use super::*;

#[test]
fn releases_cover_windows_and_macos() {
    let platforms: Vec<_> = RELEASES.iter().map(|r| r.platform).collect();
    assert_eq!(platforms, ["Windows", "macOS"]);
}

#[test]
fn releases_point_at_hosted_binaries() {
    for release in &RELEASES {
        assert!(release.url.starts_with("https://"), "{} url", release.platform);
        assert!(release.file_name.starts_with("imsdly-"));
    }
}

#[test]
fn button_label_names_platform() {
    assert_eq!(RELEASES[1].button_label(), "Download for macOS");
}
