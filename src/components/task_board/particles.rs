//! Transient particle bursts shown when a task is dropped.
//!
//! Each [`ParticleSystem`] owns the live particles of one [`Archetype`]. A
//! spawn replaces the whole live set, so at most one burst per system is ever
//! on screen. Gravity, movement and rotation jitter are applied once per tick
//! regardless of the elapsed time; only lifetime decay uses `dt`. Bursts
//! therefore fall faster at higher frame rates, and tests pin that behavior.

use std::ops::RangeInclusive;

use super::geometry::Vec2;
use super::theme::{Color, confetti_palette};

/// Remaining lifetime at or below which a particle counts as expired. Absorbs
/// the rounding left over when frame times that sum to the full lifetime are
/// subtracted one by one.
const EXPIRY_EPSILON: f64 = 1e-9;

/// A single simulated burst element.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Canvas position.
	pub position: Vec2,
	/// Pixels moved per tick.
	pub velocity: Vec2,
	/// Degrees.
	pub rotation: f64,
	/// Edge length for confetti, font size for glyphs.
	pub size: f64,
	/// Seconds remaining.
	pub lifetime: f64,
	/// Confetti only.
	pub color: Option<Color>,
}

/// Fixed configuration of a burst type.
#[derive(Clone, Debug)]
pub struct Archetype {
	pub count: usize,
	pub lifetime: f64,
	pub velocity_x: RangeInclusive<f64>,
	pub velocity_y: RangeInclusive<f64>,
	pub size: RangeInclusive<f64>,
	pub rotation: RangeInclusive<f64>,
	/// Downward acceleration added to the velocity every tick.
	pub gravity: f64,
	/// Maximum rotation change per tick, in degrees.
	pub spin_jitter: f64,
	pub palette: Option<Vec<Color>>,
}

impl Archetype {
	/// Colored squares raining down from a completed task.
	pub fn confetti() -> Self {
		Self {
			count: 30,
			lifetime: 1.4,
			velocity_x: -2.0..=2.0,
			velocity_y: -3.0..=-1.0,
			size: 6.0..=12.0,
			rotation: 0.0..=360.0,
			gravity: 0.1,
			spin_jitter: 2.0,
			palette: Some(confetti_palette()),
		}
	}

	/// Smiley glyphs bouncing off a task that was picked up.
	pub fn glyph() -> Self {
		Self {
			count: 20,
			lifetime: 1.2,
			velocity_x: -2.0..=2.0,
			velocity_y: -4.0..=-1.0,
			size: 18.0..=32.0,
			rotation: 0.0..=360.0,
			gravity: 0.15,
			spin_jitter: 5.0,
			palette: None,
		}
	}
}

/// Uniform sample from an inclusive range.
fn sample(rng: &mut fastrand::Rng, range: &RangeInclusive<f64>) -> f64 {
	range.start() + (range.end() - range.start()) * rng.f64()
}

/// Owns and advances the live particles of one archetype.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
	archetype: Archetype,
	particles: Vec<Particle>,
}

impl ParticleSystem {
	/// Panics on a malformed archetype (no particles, no lifetime, or an
	/// empty palette); those are configuration bugs with no runtime recovery.
	pub fn new(archetype: Archetype) -> Self {
		assert!(archetype.count > 0, "particle archetype must spawn at least one particle");
		assert!(archetype.lifetime > 0.0, "particle archetype needs a positive lifetime");
		if let Some(palette) = &archetype.palette {
			assert!(!palette.is_empty(), "particle palette must not be empty");
		}

		Self {
			particles: Vec::with_capacity(archetype.count),
			archetype,
		}
	}

	/// Configuration this system spawns from.
	pub fn archetype(&self) -> &Archetype {
		&self.archetype
	}

	/// Replace every live particle with a fresh burst at `origin`.
	pub fn spawn(&mut self, origin: Vec2, rng: &mut fastrand::Rng) {
		let a = &self.archetype;
		self.particles.clear();

		for _ in 0..a.count {
			let velocity = Vec2::new(sample(rng, &a.velocity_x), sample(rng, &a.velocity_y));
			let color = a
				.palette
				.as_ref()
				.map(|palette| palette[rng.usize(..palette.len())]);

			self.particles.push(Particle {
				position: origin,
				velocity,
				rotation: sample(rng, &a.rotation),
				size: sample(rng, &a.size),
				lifetime: a.lifetime,
				color,
			});
		}
	}

	/// Advance one tick and prune expired particles.
	///
	/// Returns `true` while any particle is still live.
	pub fn tick(&mut self, dt: f64, rng: &mut fastrand::Rng) -> bool {
		let gravity = Vec2::new(0.0, self.archetype.gravity);
		let jitter = self.archetype.spin_jitter;

		for p in &mut self.particles {
			p.velocity += gravity;
			p.position += p.velocity;
			p.rotation += sample(rng, &(-jitter..=jitter));
			p.lifetime -= dt;
		}
		self.particles.retain(|p| p.lifetime > EXPIRY_EPSILON);

		self.is_live()
	}

	/// Live particles for rendering. Cloning the iterator restarts it.
	pub fn snapshot(&self) -> impl ExactSizeIterator<Item = &Particle> + Clone + '_ {
		self.particles.iter()
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether any particle is live.
	pub fn is_live(&self) -> bool {
		!self.particles.is_empty()
	}

	/// Remaining life as a fraction of the archetype lifetime, for fading.
	pub fn fade(&self, particle: &Particle) -> f64 {
		(particle.lifetime / self.archetype.lifetime).clamp(0.0, 1.0)
	}
}
