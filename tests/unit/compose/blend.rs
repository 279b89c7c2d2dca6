use super::*;

#[test]
fn composite_transparent_src_is_noop() {
    let dst = [10, 20, 30, 255];
    assert_eq!(alpha_composite(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn composite_opaque_src_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 10, 255];
    assert_eq!(alpha_composite(dst, src), src);
}

#[test]
fn composite_over_transparent_dst_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(alpha_composite([0, 0, 0, 0], src), src);
}

#[test]
fn composite_keeps_opaque_dst_opaque() {
    for a in [1u8, 17, 128, 254, 255] {
        let out = alpha_composite([3, 4, 5, 255], [250, 240, 230, a]);
        assert_eq!(out[3], 255, "alpha {a}");
    }
}

#[test]
fn composite_half_alpha_mixes_evenly_on_opaque_dst() {
    let out = alpha_composite([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn paste_with_full_mask_copies_and_zero_mask_keeps() {
    let src = [9, 8, 7, 6];
    let dst = [1, 2, 3, 4];
    assert_eq!(paste_masked(dst, src, 255), src);
    assert_eq!(paste_masked(dst, src, 0), dst);
}

#[test]
fn stroke_over_applies_alpha_twice_on_soft_edges() {
    // layer = (255*128/255, .., 128*128/255) = (128, 128, 128, 64)
    assert_eq!(paste_masked([0, 0, 0, 0], [255, 255, 255, 128], 128), [128, 128, 128, 64]);
    let out = stroke_over([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 32);
}

#[test]
fn stroke_over_with_opaque_stroke_replaces_pixel() {
    assert_eq!(stroke_over([40, 50, 60, 255], [255, 255, 255, 255]), [255, 255, 255, 255]);
}
