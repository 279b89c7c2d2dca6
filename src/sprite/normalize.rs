use crate::sprite::model::Sprite;

// Thresholds on the RGB channel sum, i.e. mean brightness 180 and 75.
const WHITE_SUM_ABOVE: u16 = 180 * 3;
const BLACK_SUM_BELOW: u16 = 75 * 3;

/// Snap near-white and near-black visible pixels to pure white / pure black.
///
/// Brightness is the mean of R, G and B. Visible pixels brighter than 180 become `(255,255,255)`,
/// darker than 75 become `(0,0,0)`; alpha is kept. Fully transparent pixels are left untouched.
pub fn normalize_sprite(sprite: &Sprite) -> Sprite {
    let mut out = sprite.image().clone();
    for px in out.pixels_mut() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        let sum = u16::from(r) + u16::from(g) + u16::from(b);
        if sum > WHITE_SUM_ABOVE {
            px.0 = [255, 255, 255, a];
        } else if sum < BLACK_SUM_BELOW {
            px.0 = [0, 0, 0, a];
        }
    }
    Sprite::from_rgba(out)
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/normalize.rs"]
mod tests;
