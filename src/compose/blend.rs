use crate::foundation::math::mul_div255;

/// Straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Blend `src` into `dst` through an 8-bit `mask`, every channel alike (alpha included).
///
/// This is the masked paste used to stage a stroke onto its transparent layer: with a
/// transparent `dst` and the stroke's own alpha as mask, color and alpha both end up scaled by
/// the mask, which darkens and thins anti-aliased edges.
pub fn paste_masked(dst: StraightRgba8, src: StraightRgba8, mask: u8) -> StraightRgba8 {
    let m = u16::from(mask);
    let inv = 255 - m;
    std::array::from_fn(|i| {
        mul_div255(u16::from(src[i]), m).saturating_add(mul_div255(u16::from(dst[i]), inv))
    })
}

/// Porter-Duff `src over dst` on straight alpha.
///
/// An opaque `dst` stays opaque regardless of `src`.
pub fn alpha_composite(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    let da = u32::from(dst[3]);

    // Everything below is scaled by 255 to stay in integers.
    let dst_weight = da * (255 - sa);
    let out_a255 = sa * 255 + dst_weight;
    if out_a255 == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * dst_weight;
        out[i] = ((num + out_a255 / 2) / out_a255).min(255) as u8;
    }
    out[3] = ((out_a255 + 127) / 255).min(255) as u8;
    out
}

/// Stage `src` onto a transparent layer and composite that layer over `dst`.
pub fn stroke_over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let layer = paste_masked([0, 0, 0, 0], src, src[3]);
    alpha_composite(dst, layer)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
