/// Small deterministic LCG, enough for layout jitter and drift noise.
/// Seeded from the clock at runtime; tests pass a fixed seed.
#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
	pub fn new(seed: u64) -> Self {
		Self(seed | 1)
	}

	/// Uniform in [0, 1).
	pub fn next_f64(&mut self) -> f64 {
		self.0 = self
			.0
			.wrapping_mul(6364136223846793005)
			.wrapping_add(1442695040888963407);
		(self.0 >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Uniform in [-half, half).
	pub fn jitter(&mut self, half: f64) -> f64 {
		(self.next_f64() - 0.5) * 2.0 * half
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stays_in_unit_interval() {
		let mut rng = Lcg::new(7);
		for _ in 0..1000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn jitter_is_bounded() {
		let mut rng = Lcg::new(42);
		for _ in 0..1000 {
			assert!(rng.jitter(4.0).abs() < 4.0);
		}
	}

	#[test]
	fn same_seed_same_sequence() {
		let (mut a, mut b) = (Lcg::new(9), Lcg::new(9));
		for _ in 0..10 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}
}
