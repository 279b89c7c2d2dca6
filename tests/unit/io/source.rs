use std::io::Cursor;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "strokeglyph_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_rgba() {
    let sprite = decode_sprite(&png_bytes(2, 3, [100, 50, 200, 128])).unwrap();
    assert_eq!(sprite.dimensions(), (2, 3));
    assert_eq!(sprite.image().get_pixel(1, 2).0, [100, 50, 200, 128]);
}

#[test]
fn decode_garbage_fails() {
    assert!(decode_sprite(b"not an image").is_err());
}

#[test]
fn load_group_reads_only_pngs_in_name_order() {
    let dir = temp_dir("load_group").join("ren");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    std::fs::write(dir.join("b.png"), png_bytes(4, 4, [255; 4])).unwrap();
    std::fs::write(dir.join("a.PNG"), png_bytes(2, 6, [255; 4])).unwrap();
    std::fs::write(dir.join("notes.txt"), b"hello").unwrap();
    std::fs::write(dir.join("broken.png"), b"garbage").unwrap();
    std::fs::write(dir.join("nested").join("c.png"), png_bytes(1, 1, [255; 4])).unwrap();

    let group = load_group(&dir).unwrap();
    assert_eq!(group.name, "ren");
    let dims = group.sprites.iter().map(|s| s.dimensions()).collect::<Vec<_>>();
    assert_eq!(dims, vec![(2, 6), (4, 4)]);

    std::fs::remove_dir_all(dir.parent().unwrap()).ok();
}

#[test]
fn load_groups_returns_one_group_per_subdirectory() {
    let root = temp_dir("load_groups");
    std::fs::create_dir_all(root.join("zeta")).unwrap();
    std::fs::create_dir_all(root.join("alpha")).unwrap();
    std::fs::create_dir_all(root.join("empty")).unwrap();
    std::fs::write(root.join("stray.png"), png_bytes(3, 3, [255; 4])).unwrap();
    std::fs::write(root.join("zeta").join("s.png"), png_bytes(3, 3, [255; 4])).unwrap();
    std::fs::write(root.join("alpha").join("s.png"), png_bytes(5, 5, [255; 4])).unwrap();

    let groups = load_groups(&root).unwrap();
    let names = groups.iter().map(|g| g.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["alpha", "empty", "zeta"]);
    assert_eq!(groups[0].sprites.len(), 1);
    assert!(groups[1].sprites.is_empty());

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_root_is_an_error() {
    let root = temp_dir("missing_root");
    assert!(load_groups(&root).is_err());
}

#[test]
fn discover_lists_group_dirs_without_decoding() {
    let root = temp_dir("discover");
    std::fs::create_dir_all(root.join("kou")).unwrap();
    std::fs::create_dir_all(root.join("ichi")).unwrap();
    std::fs::write(root.join("kou").join("broken.png"), b"garbage").unwrap();
    std::fs::write(root.join("loose.png"), png_bytes(3, 3, [255; 4])).unwrap();

    let sources = discover_groups(&root).unwrap();
    let names = sources.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["ichi", "kou"]);
    assert_eq!(sources[1].dir, root.join("kou"));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn unreadable_group_dir_degrades_to_empty_group() {
    let root = temp_dir("unreadable_group");
    let gone = GroupSource {
        name: "gone".to_string(),
        dir: root.join("gone"),
    };
    assert!(gone.load().is_err());
    assert!(gone.strokes().is_err());

    let group = gone.load_or_empty();
    assert_eq!(group.name, "gone");
    assert!(group.sprites.is_empty());
}

#[test]
fn stroke_group_lends_itself_to_the_batch() {
    let group = StrokeGroup {
        name: "ren".to_string(),
        sprites: vec![Sprite::solid(2, 2, [255; 4])],
    };
    assert_eq!(group.group_name(), "ren");
    assert!(matches!(group.strokes().unwrap(), Cow::Borrowed(_)));
}
