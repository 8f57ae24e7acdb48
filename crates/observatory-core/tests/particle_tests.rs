use observatory_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generator_produces_exactly_the_fixed_count() {
    let mut rng = StdRng::seed_from_u64(42);
    let specs = particles::generate(&mut rng, PARTICLE_COUNT);
    assert_eq!(specs.len(), 50);
}

#[test]
fn particle_fields_stay_in_their_ranges() {
    for seed in [0, 1, 7, 42, 1337] {
        let mut rng = StdRng::seed_from_u64(seed);
        for spec in particles::generate(&mut rng, PARTICLE_COUNT) {
            assert!((1.0..5.0).contains(&spec.size_px), "size {}", spec.size_px);
            assert!(
                (0.2..1.0).contains(&spec.opacity),
                "opacity {}",
                spec.opacity
            );
            assert!(
                (0.0..=95.0).contains(&spec.left_pct),
                "left {}",
                spec.left_pct
            );
            assert!((0.0..=95.0).contains(&spec.top_pct), "top {}", spec.top_pct);
            assert!(
                (5.0..15.0).contains(&spec.duration_sec),
                "duration {}",
                spec.duration_sec
            );
            assert!(
                (0.0..5.0).contains(&spec.delay_sec),
                "delay {}",
                spec.delay_sec
            );
        }
    }
}

#[test]
fn origins_never_pass_the_container_clamp() {
    let mut rng = StdRng::seed_from_u64(9);
    for spec in particles::generate(&mut rng, 10_000) {
        assert!(spec.left_pct <= PARTICLE_MAX_ORIGIN_PCT);
        assert!(spec.top_pct <= PARTICLE_MAX_ORIGIN_PCT);
    }
}

#[test]
fn generation_is_deterministic_per_seed() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    assert_eq!(
        particles::generate(&mut a, PARTICLE_COUNT),
        particles::generate(&mut b, PARTICLE_COUNT)
    );

    let mut c = StdRng::seed_from_u64(8);
    let mut d = StdRng::seed_from_u64(7);
    assert_ne!(
        particles::generate(&mut c, PARTICLE_COUNT),
        particles::generate(&mut d, PARTICLE_COUNT)
    );
}
