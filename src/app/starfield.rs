use glam::Vec3;
use rand::Rng;

/// Height of the field relative to its width.
const VERTICAL_SQUASH: f32 = 0.55;

/// Flat `[x, y, z, x, y, z, ...]` buffer of `count` points.
///
/// Depth is drawn first and always lands in `[-spread, 0]`, so the whole
/// field sits in front of a viewer looking down `-z`. Width is `spread`,
/// height is `spread * 0.55`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, spread: f32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let z = -rng.gen::<f32>() * spread;
        let x = (rng.gen::<f32>() - 0.5) * spread;
        let y = (rng.gen::<f32>() - 0.5) * spread * VERTICAL_SQUASH;
        positions.extend_from_slice(&[x, y, z]);
    }
    positions
}

pub fn points(positions: &[f32]) -> impl Iterator<Item = Vec3> + '_ {
    positions
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_count_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(generate(&mut rng, 0, 100.).is_empty());
    }

    #[test]
    fn successive_calls_are_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = generate(&mut rng, 64, 190.);
        let b = generate(&mut rng, 64, 190.);
        assert_eq!(a.len(), b.len());
        let shared = a.iter().filter(|v| b.contains(v)).count();
        assert!(shared < 4, "{shared} coordinates repeated between calls");
    }

    #[test]
    fn same_seed_reproduces_field() {
        let a = generate(&mut ChaCha8Rng::seed_from_u64(42), 100, 240.);
        let b = generate(&mut ChaCha8Rng::seed_from_u64(42), 100, 240.);
        assert_eq!(a, b);
    }

    #[test]
    fn points_walks_triples() {
        let buffer = [1., 2., -3., 4., 5., -6.];
        let collected: Vec<_> = points(&buffer).collect();
        assert_eq!(collected, vec![Vec3::new(1., 2., -3.), Vec3::new(4., 5., -6.)]);
    }

    proptest! {
        #[test]
        fn buffer_holds_three_floats_per_point(seed in any::<u64>(), count in 1usize..2000, spread in 0.5f32..500.) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            prop_assert_eq!(generate(&mut rng, count, spread).len(), count * 3);
        }

        #[test]
        fn points_stay_inside_the_volume(seed in any::<u64>(), count in 1usize..500, spread in 0.5f32..500.) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let half = spread / 2.;
            let band = spread * 0.275;
            // one ulp of slack for the multiplications
            let eps = spread * 1e-6;
            for p in points(&generate(&mut rng, count, spread)) {
                prop_assert!(p.z <= 0. && p.z >= -spread - eps);
                prop_assert!(p.x >= -half - eps && p.x <= half);
                prop_assert!(p.y >= -band - eps && p.y <= band);
            }
        }
    }
}
