use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spritexform::{
    rotate_sampled, scale2x, Entity, EntityId, IndexedImage, Raster, RotationConfig,
    RotationRegistry, RotationState, BACKGROUND,
};
use std::collections::BTreeSet;

struct Sprite {
    id: EntityId,
    image: IndexedImage,
}

impl Sprite {
    fn new(id: u32, image: IndexedImage) -> Self {
        Self {
            id: EntityId(id),
            image,
        }
    }
}

impl Entity for Sprite {
    type Image = IndexedImage;

    fn id(&self) -> EntityId {
        self.id
    }

    fn image(&self) -> &IndexedImage {
        &self.image
    }

    fn replace_image(&mut self, image: IndexedImage) {
        self.image = image;
    }
}

fn random_image(seed: u64, width: usize, height: usize) -> IndexedImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height)
        .map(|_| rng.random_range(1..6u8))
        .collect();
    IndexedImage::from_vec(data, width, height).unwrap()
}

#[test]
fn twelve_thirty_degree_steps_wrap_to_zero() {
    let mut registry = RotationRegistry::new();
    let source = random_image(1, 6, 5);
    let mut sprite = Sprite::new(10, source.clone());

    for _ in 0..12 {
        registry.change_rotation(&mut sprite, 30);
    }
    assert_eq!(registry.rotation(EntityId(10)), 0);
    assert_eq!(sprite.image, source);
}

#[test]
fn whole_turns_equal_zero_rotation() {
    let source = random_image(2, 7, 4);
    let state = RotationState::new(&source, RotationConfig::default());
    let base = state.render(0);
    assert_eq!(base, source);
    for k in [-5i64, -1, 1, 2, 1000] {
        assert_eq!(state.render(360 * k), base);
    }
}

#[test]
fn quarter_turn_of_three_by_two_is_exact() {
    let source = IndexedImage::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
    let mut registry = RotationRegistry::new();
    let mut sprite = Sprite::new(1, source);

    registry.rotate_to(&mut sprite, 90);
    let expected = IndexedImage::from_rows(&[[4u8, 1], [5, 2], [6, 3]]).unwrap();
    assert_eq!(sprite.image, expected);

    registry.rotate_to(&mut sprite, -270);
    assert_eq!(sprite.image, expected);
}

#[test]
fn forty_five_degrees_samples_inside_supersampled_bounds() {
    let source = random_image(3, 4, 4);
    let supersampled = scale2x(&source);
    let out = rotate_sampled(&source, &supersampled, 2, 45);
    assert_eq!((out.width(), out.height()), (4, 4));

    let center = spritexform::Point::new(2, 2);
    let radians = 45f64.to_radians();
    for y in 0..4i64 {
        for x in 0..4i64 {
            let src = spritexform::PolarVector::between(center, spritexform::Point::new(x, y))
                .rotated(-radians)
                .scaled(2.0)
                .to_point(center.scaled(2));
            let got = out.pixel(x, y);
            if supersampled.contains(src.x, src.y) {
                assert_eq!(got, supersampled.pixel(src.x, src.y));
            } else {
                assert_eq!(got, BACKGROUND);
            }
        }
    }
    assert_eq!(out.pixel(0, 0), BACKGROUND);
}

#[test]
fn arbitrary_angles_only_copy_existing_colors() {
    let source = random_image(4, 11, 9);
    let mut allowed: BTreeSet<u8> = source.data().iter().copied().collect();
    allowed.insert(BACKGROUND);

    let state = RotationState::new(&source, RotationConfig::default());
    for angle in [1i64, 17, 45, 133, 200, 299, -33] {
        let out = state.render(angle);
        assert_eq!((out.width(), out.height()), (11, 9));
        assert!(out.data().iter().all(|c| allowed.contains(c)));
    }
}

#[test]
fn state_ignores_later_changes_to_the_live_image() {
    let mut registry = RotationRegistry::new();
    let source = random_image(5, 4, 4);
    let mut sprite = Sprite::new(2, source.clone());

    registry.change_rotation(&mut sprite, 180);
    sprite.image = IndexedImage::filled(4, 4, 9);
    registry.change_rotation(&mut sprite, 180);
    assert_eq!(sprite.image, source);
}

#[test]
fn registries_are_independent() {
    let source = random_image(6, 3, 3);
    let mut first = RotationRegistry::new();
    let mut second = RotationRegistry::new();
    let mut a = Sprite::new(1, source.clone());
    let mut b = Sprite::new(1, source);

    first.change_rotation(&mut a, 90);
    second.change_rotation(&mut b, 45);
    assert_eq!(first.rotation(EntityId(1)), 90);
    assert_eq!(second.rotation(EntityId(1)), 45);
}
