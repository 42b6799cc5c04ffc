//! Linear scales mapping interest weight to pixel sizes.

/// Map `v` from `domain` to `range` linearly (no clamping).
pub fn linear(domain: (f64, f64), range: (f64, f64), v: f64) -> f64 {
	let t = (v - domain.0) / (domain.1 - domain.0);
	range.0 + t * (range.1 - range.0)
}

/// Node radius for a weight in 1..=4.
pub fn radius(weight: u32) -> f64 {
	linear((1.0, 4.0), (6.0, 14.0), weight as f64)
}

/// Label font size for a weight in 1..=4.
pub fn font_size(weight: u32) -> f64 {
	linear((1.0, 4.0), (9.0, 15.0), weight as f64)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn radius_endpoints() {
		assert_eq!(radius(1), 6.0);
		assert_eq!(radius(4), 14.0);
	}

	#[test]
	fn font_endpoints() {
		assert_eq!(font_size(1), 9.0);
		assert_eq!(font_size(4), 15.0);
	}

	#[test]
	fn interpolates_between() {
		assert!((radius(2) - (6.0 + 8.0 / 3.0)).abs() < 1e-9);
	}
}
