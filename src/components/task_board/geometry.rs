//! Minimal 2D geometry shared by layout, drag tracking and particles.
//!
//! Coordinates are canvas pixels with y growing downwards.

/// A point or offset on the canvas.
pub use glam::DVec2 as Vec2;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Width.
	pub w: f64,
	/// Height.
	pub h: f64,
}

impl Rect {
	/// Rectangle with top-left corner `(x, y)` and size `w` by `h`.
	pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
		Self { x, y, w, h }
	}

	/// Top-left corner.
	pub fn origin(&self) -> Vec2 {
		Vec2::new(self.x, self.y)
	}

	/// Exclusive right edge.
	pub fn right(&self) -> f64 {
		self.x + self.w
	}

	/// Exclusive bottom edge.
	pub fn bottom(&self) -> f64 {
		self.y + self.h
	}

	/// Half-open containment: the left/top edges are inside, right/bottom are not.
	pub fn contains(&self, p: Vec2) -> bool {
		p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn contains_is_half_open() {
		let r = Rect::new(0.0, 0.0, 100.0, 100.0);
		assert!(r.contains(Vec2::new(0.0, 0.0)));
		assert!(r.contains(Vec2::new(50.0, 99.9)));
		assert!(!r.contains(Vec2::new(100.0, 50.0)));
		assert!(!r.contains(Vec2::new(50.0, 100.0)));
		assert!(!r.contains(Vec2::new(-0.1, 10.0)));
	}

	#[test]
	fn vector_arithmetic() {
		let mut a = Vec2::new(1.0, 2.0);
		a += Vec2::new(0.5, -1.0);
		assert_eq!(a, Vec2::new(1.5, 1.0));
		assert_eq!(a - Vec2::new(1.5, 1.0), Vec2::ZERO);
		assert_eq!(Rect::new(3.0, 4.0, 1.0, 1.0).origin(), Vec2::new(3.0, 4.0));
	}
}
