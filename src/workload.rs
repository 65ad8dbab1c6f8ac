//! Random workload generation.
//!
//! Produces process sets with uniformly drawn arrival, burst, and priority
//! values. Pass a seeded RNG for reproducible runs.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::ProcessRecord;

/// Parameters for a random process set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from this range.
    pub arrival: RangeInclusive<i64>,
    /// Burst times are drawn from this range.
    pub burst: RangeInclusive<i64>,
    /// Priorities are drawn from this range.
    pub priority: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// `count` processes arriving in `0..=20` with bursts `1..=10` and
    /// priorities `1..=5`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: 0..=20,
            burst: 1..=10,
            priority: 1..=5,
        }
    }

    /// Sets the arrival range. The lower bound is clamped to 0.
    pub fn with_arrival(mut self, range: RangeInclusive<i64>) -> Self {
        let (lo, hi) = range.into_inner();
        self.arrival = lo.max(0)..=hi.max(0);
        self
    }

    /// Sets the burst range. The lower bound is clamped to 1.
    pub fn with_burst(mut self, range: RangeInclusive<i64>) -> Self {
        let (lo, hi) = range.into_inner();
        self.burst = lo.max(1)..=hi.max(1);
        self
    }

    /// Sets the priority range. The lower bound is clamped to 1.
    pub fn with_priority(mut self, range: RangeInclusive<i32>) -> Self {
        let (lo, hi) = range.into_inner();
        self.priority = lo.max(1)..=hi.max(1);
        self
    }

    /// Draws a process set with ids `1..=count`.
    ///
    /// An empty range (lower bound above upper) yields its lower bound.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessRecord> {
        let draws: Vec<_> = (0..self.count)
            .map(|_| {
                (
                    draw(rng, &self.arrival),
                    draw(rng, &self.burst),
                    draw(rng, &self.priority),
                )
            })
            .collect();
        ProcessRecord::numbered(draws)
    }
}

fn draw<R, T>(rng: &mut R, range: &RangeInclusive<T>) -> T
where
    R: Rng,
    T: Copy + PartialOrd + rand::distr::uniform::SampleUniform,
{
    if range.start() > range.end() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_processes_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let ps = WorkloadGenerator::new(50).generate(&mut rng);
        assert_eq!(ps.len(), 50);
        assert!(validate_processes(&ps).is_ok());
        assert!(ps.iter().all(|p| (0..=20).contains(&p.arrival_time)));
        assert!(ps.iter().all(|p| (1..=10).contains(&p.burst_time)));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = WorkloadGenerator::new(10);
        let a = generator.generate(&mut StdRng::seed_from_u64(42));
        let b = generator.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_are_clamped() {
        let generator = WorkloadGenerator::new(5)
            .with_arrival(-5..=-1)
            .with_burst(0..=0)
            .with_priority(-2..=3);
        assert_eq!(generator.arrival, 0..=0);
        assert_eq!(generator.burst, 1..=1);
        assert_eq!(generator.priority, 1..=3);

        let ps = generator.generate(&mut StdRng::seed_from_u64(1));
        assert!(validate_processes(&ps).is_ok());
    }

    #[test]
    fn test_inverted_range_uses_lower_bound() {
        let generator = WorkloadGenerator::new(3).with_burst(9..=4);
        let ps = generator.generate(&mut StdRng::seed_from_u64(3));
        assert!(ps.iter().all(|p| p.burst_time == 9));
    }
}
