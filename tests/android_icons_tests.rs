// End-to-end checks of the Android pass against a synthetic master icon

use image::{Rgba, RgbaImage};
use pwa_assets::android;
use pwa_assets::constants::android::{LAUNCHER_ICON, LAUNCHER_ICON_ROUND, MIPMAP_SIZES};
use pwa_assets::declarations;
use std::fs;
use std::path::{Path, PathBuf};

fn red_square(edge: u32) -> RgbaImage {
    RgbaImage::from_pixel(edge, edge, Rgba([255, 0, 0, 255]))
}

fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(files_under(&path));
        } else {
            files.push(path);
        }
    }
    files.sort();
    files
}

#[test]
fn test_mipmaps_from_red_square() {
    let tmp = tempfile::tempdir().unwrap();
    let res = tmp.path().join("res");

    let written = android::generate_mipmaps(&red_square(512), &res).unwrap();
    assert_eq!(written.len(), 10);
    assert_eq!(files_under(&res).len(), 10);

    for &(density, edge) in MIPMAP_SIZES.iter() {
        let dir = res.join(format!("mipmap-{}", density));

        let square = image::open(dir.join(LAUNCHER_ICON)).unwrap().to_rgba8();
        assert_eq!(square.dimensions(), (edge, edge));
        assert_eq!(square.get_pixel(0, 0)[3], 255);

        let round = image::open(dir.join(LAUNCHER_ICON_ROUND)).unwrap().to_rgba8();
        assert_eq!(round.dimensions(), (edge, edge));
        assert_ne!(round.get_pixel(0, 0)[3], 255);
        assert_eq!(round.get_pixel(edge / 2, edge / 2)[3], 255);
    }
}

#[test]
fn test_full_android_pass_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let public = tmp.path().join("public");
    fs::create_dir(&public).unwrap();
    red_square(512).save(public.join("icon-512.png")).unwrap();
    let res = tmp.path().join("res");

    let candidates = vec![public.join("icon-1024x1024.png"), public.join("icon-512.png")];
    let written = android::generate(&candidates, &res).unwrap();

    // 10 mipmaps, background, foreground, two wrappers
    assert_eq!(written.len(), 14);
    assert_eq!(files_under(&res).len(), 14);

    let foreground = image::open(res.join("drawable-v24/ic_launcher_foreground.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(foreground.dimensions(), (1024, 1024));
    assert_eq!(foreground.get_pixel(0, 0)[3], 0);
    assert_eq!(foreground.get_pixel(512, 512)[3], 255);

    let launcher = fs::read_to_string(res.join("mipmap-anydpi-v26/ic_launcher.xml")).unwrap();
    let launcher_round =
        fs::read_to_string(res.join("mipmap-anydpi-v26/ic_launcher_round.xml")).unwrap();
    assert_eq!(launcher, launcher_round);
    assert!(launcher.contains("@drawable/ic_launcher_foreground"));
    assert!(launcher.contains("@drawable/ic_launcher_background"));
}

#[test]
fn test_declarations_are_byte_identical_across_runs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    for dir in [first.path(), second.path()] {
        declarations::write_background(dir).unwrap();
        declarations::write_adaptive_wrappers(dir).unwrap();
    }
    // Re-running into the same directory overwrites with the same bytes
    declarations::write_background(first.path()).unwrap();

    let a = files_under(first.path());
    let b = files_under(second.path());
    assert_eq!(a.len(), 3);
    for (left, right) in a.iter().zip(b.iter()) {
        assert_eq!(
            left.strip_prefix(first.path()).unwrap(),
            right.strip_prefix(second.path()).unwrap()
        );
        assert_eq!(fs::read(left).unwrap(), fs::read(right).unwrap());
    }

    let background =
        fs::read_to_string(first.path().join("drawable/ic_launcher_background.xml")).unwrap();
    assert_eq!(background, declarations::background_xml());
}
