//! Which burst a resolved drop triggers.

use super::types::TaskStatus;

/// The particle systems a drop can spawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
	/// Falling colored squares.
	Confetti,
	/// Floating smiley glyphs.
	Glyph,
}

/// Lookup table from drop zone to burst. Zones without a rule spawn nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectPolicy {
	rules: Vec<(TaskStatus, EffectKind)>,
}

impl Default for EffectPolicy {
	fn default() -> Self {
		Self::empty()
			.with_rule(TaskStatus::Done, EffectKind::Confetti)
			.with_rule(TaskStatus::WorkingOn, EffectKind::Glyph)
	}
}

impl EffectPolicy {
	/// A table that never spawns anything.
	pub fn empty() -> Self {
		Self { rules: Vec::new() }
	}

	/// Add or replace the rule for `zone`.
	pub fn with_rule(mut self, zone: TaskStatus, effect: EffectKind) -> Self {
		self.rules.retain(|(z, _)| *z != zone);
		self.rules.push((zone, effect));
		self
	}

	/// Burst for a drop on `zone`, if it has a rule.
	pub fn dispatch(&self, zone: &TaskStatus) -> Option<EffectKind> {
		self.rules
			.iter()
			.find(|(z, _)| z == zone)
			.map(|(_, effect)| *effect)
	}
}
