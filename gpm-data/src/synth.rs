//! Deterministic synthetic data for the widget gallery.
//!
//! The gallery charts want "random-looking" series that are stable across
//! re-renders and testable, so everything here is driven by an explicitly
//! seeded xorshift64* generator instead of an OS entropy source.

use gpm_geo::coordinate::Coordinate;

/// Explicitly seeded xorshift64* generator.
#[derive(Debug, Clone)]
pub struct DemoRng(u64);

impl DemoRng {
    /// Seed the generator. A zero seed is remapped, since xorshift64*
    /// would get stuck on it.
    pub fn seeded(seed: u64) -> Self {
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform sample in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Approximately standard-normal sample (12-uniform sum).
    pub fn normal(&mut self) -> f64 {
        (0..12).map(|_| self.next_f64()).sum::<f64>() - 6.0
    }
}

/// Cumulative sum of normal steps, starting from the first step.
pub fn random_walk(rng: &mut DemoRng, len: usize) -> Vec<f64> {
    let mut walk = Vec::with_capacity(len);
    let mut level = 0.0;

    for _ in 0..len {
        level += rng.normal();
        walk.push(level);
    }

    walk
}

/// One random walk per series name, all of the same length.
pub fn multi_series_walk(
    rng: &mut DemoRng,
    names: &[&str],
    len: usize,
) -> Vec<(String, Vec<f64>)> {
    names
        .iter()
        .map(|name| (name.to_string(), random_walk(rng, len)))
        .collect()
}

/// Bin `samples` normal draws into `bins` equal-width buckets over [-3, 3).
///
/// Draws outside the range are clamped into the edge buckets, so the bin
/// counts always sum to `samples`.
pub fn histogram_bins(rng: &mut DemoRng, samples: usize, bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins.max(1)];
    let width = 6.0 / counts.len() as f64;

    for _ in 0..samples {
        let draw = rng.normal();
        let index = ((draw + 3.0) / width).floor() as isize;
        let index = index.clamp(0, counts.len() as isize - 1) as usize;
        counts[index] += 1;
    }

    counts
}

/// Points scattered around a center, normal in both axes.
///
/// Mirrors the classic "random points around a city" map demo: `spread` is
/// the standard deviation in degrees.
pub fn scatter_around(
    rng: &mut DemoRng,
    center: Coordinate,
    spread: f64,
    count: usize,
) -> Vec<Coordinate> {
    (0..count)
        .map(|_| {
            Coordinate::new(
                center.latitude + rng.normal() * spread,
                center.longitude + rng.normal() * spread,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_series() {
        let mut a = DemoRng::seeded(7);
        let mut b = DemoRng::seeded(7);
        assert_eq!(random_walk(&mut a, 50), random_walk(&mut b, 50));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = DemoRng::seeded(7);
        let mut b = DemoRng::seeded(8);
        assert_ne!(random_walk(&mut a, 50), random_walk(&mut b, 50));
    }

    #[test]
    fn test_next_f64_stays_in_unit_interval() {
        let mut rng = DemoRng::seeded(42);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = DemoRng::seeded(0);
        // Would repeat 0 forever without the remap.
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn test_multi_series_walk_shapes() {
        let mut rng = DemoRng::seeded(3);
        let series = multi_series_walk(&mut rng, &["a", "b", "c"], 20);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|(_, walk)| walk.len() == 20));
        assert_ne!(series[0].1, series[1].1);
    }

    #[test]
    fn test_histogram_bins_conserve_samples() {
        let mut rng = DemoRng::seeded(11);
        let counts = histogram_bins(&mut rng, 500, 20);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts.iter().sum::<usize>(), 500);
        // The central buckets should dominate the tails for a normal draw.
        assert!(counts[9] + counts[10] > counts[0] + counts[19]);
    }

    #[test]
    fn test_scatter_centers_on_the_city() {
        let mut rng = DemoRng::seeded(5);
        let center = Coordinate::new(37.76, -122.4);
        let points = scatter_around(&mut rng, center, 0.02, 200);

        assert_eq!(points.len(), 200);
        let mean_lat = points.iter().map(|p| p.latitude).sum::<f64>() / 200.0;
        let mean_lon = points.iter().map(|p| p.longitude).sum::<f64>() / 200.0;
        assert!((mean_lat - center.latitude).abs() < 0.01);
        assert!((mean_lon - center.longitude).abs() < 0.01);
    }
}
