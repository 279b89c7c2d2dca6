use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::foundation::core::CanvasSize;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(CanvasSize::new(w, h).unwrap())
}

#[test]
fn attraction_ramps_and_saturates() {
    assert_eq!(attraction(0, 150, 0.65), 0.0);
    assert!((attraction(75, 150, 0.65) - 0.325).abs() < 1e-12);
    assert_eq!(attraction(149, 150, 4.0), 1.0);
    assert_eq!(attraction(3, 0, 0.65), 0.0);
}

#[test]
fn base_band_covers_middle_thirds() {
    assert_eq!(base_band(200, 20), Some((34, 166)));
    // window trimmed on the far side by the sprite footprint
    assert_eq!(base_band(200, 100), Some((34, 100)));
    // trimming empties the band: fall back to all fitting offsets
    assert_eq!(base_band(200, 190), Some((0, 10)));
    assert_eq!(base_band(200, 200), Some((0, 0)));
    assert_eq!(base_band(200, 201), None);
}

#[test]
fn placement_on_empty_canvas_succeeds_first_try() {
    let mut c = canvas(200, 200);
    let s = Sprite::solid(30, 40, [255, 255, 255, 255]);
    let mut rng = StdRng::seed_from_u64(11);
    let p = place_sprite(&mut c, &s, &PlacementOpts::default(), &mut rng).unwrap();
    assert_eq!(p.attempt, 0);
    assert_eq!((p.width, p.height), (30, 40));
    assert!(p.position.fits(30, 40, c.size()));
    assert_eq!(c.content_pixel_count(), 30 * 40);
}

#[test]
fn placements_always_stay_on_canvas() {
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut c = canvas(200, 200);
        for (w, h) in [(150, 40), (40, 150), (90, 90), (200, 10), (10, 200), (120, 120)] {
            let s = Sprite::solid(w, h, [255, 255, 255, 255]);
            if let Some(p) = place_sprite(&mut c, &s, &PlacementOpts::default(), &mut rng) {
                assert!(p.position.fits(w, h, c.size()), "seed {seed}: {p:?}");
            }
        }
        assert!(c.is_opaque());
    }
}

#[test]
fn oversized_sprite_is_never_placed() {
    let mut c = canvas(50, 50);
    let s = Sprite::solid(60, 10, [255, 255, 255, 255]);
    let mut rng = StdRng::seed_from_u64(2);
    assert!(place_sprite(&mut c, &s, &PlacementOpts::default(), &mut rng).is_none());
    assert_eq!(c.content_pixel_count(), 0);
}

#[test]
fn exhausted_search_leaves_canvas_untouched() {
    let mut c = Canvas::filled(CanvasSize::new(40, 40).unwrap(), [255, 255, 255]);
    let before = c.pixels().clone();
    let s = Sprite::solid(10, 10, [200, 0, 0, 255]);
    let opts = PlacementOpts {
        overlap_threshold: 0.0,
        ..PlacementOpts::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    assert!(place_sprite(&mut c, &s, &opts, &mut rng).is_none());
    assert_eq!(c.pixels().as_raw(), before.as_raw());
}

#[test]
fn zero_attempt_budget_places_nothing() {
    let mut c = canvas(40, 40);
    let s = Sprite::solid(5, 5, [255, 255, 255, 255]);
    let opts = PlacementOpts {
        max_attempts: 0,
        ..PlacementOpts::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    assert!(place_sprite(&mut c, &s, &opts, &mut rng).is_none());
}

#[test]
fn same_seed_same_position() {
    let s = Sprite::solid(25, 25, [255, 255, 255, 255]);
    let run = |seed| {
        let mut c = canvas(200, 200);
        let mut rng = StdRng::seed_from_u64(seed);
        place_sprite(&mut c, &s, &PlacementOpts::default(), &mut rng)
    };
    assert_eq!(run(77), run(77));
}
