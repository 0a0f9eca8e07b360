//! Drag-and-drop tracking with per-frame drop zones.
//!
//! The controller is either idle or holding exactly one item. Drop zones are
//! rebuilt on every layout pass: the host calls [`DragController::clear_drop_zones`]
//! and then registers each zone once. Resolution checks zones in registration
//! order, so when zones overlap the earliest registered one wins.

use super::geometry::{Rect, Vec2};

/// The item currently held, with what the host needs to draw its preview.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggedItem<I> {
	pub item: I,
	pub label: String,
	/// Pointer position relative to the item's top-left corner at pickup.
	pub offset: Vec2,
}

/// Result of releasing a held item.
#[derive(Clone, Debug, PartialEq)]
pub struct DropOutcome<I, Z> {
	pub item: I,
	/// The zone under the pointer, if any.
	pub zone: Option<Z>,
	pub position: Vec2,
}

/// Tracks a single dragged item and resolves where it lands.
#[derive(Clone, Debug)]
pub struct DragController<I, Z> {
	dragged: Option<DraggedItem<I>>,
	drop_zones: Vec<(Z, Rect)>,
}

impl<I, Z> Default for DragController<I, Z> {
	fn default() -> Self {
		Self {
			dragged: None,
			drop_zones: Vec::new(),
		}
	}
}

impl<I, Z: PartialEq> DragController<I, Z> {
	pub fn is_dragging(&self) -> bool {
		self.dragged.is_some()
	}

	pub fn dragged(&self) -> Option<&DraggedItem<I>> {
		self.dragged.as_ref()
	}

	/// Pick up `item`. Replaces anything already held.
	pub fn begin(&mut self, item: I, label: impl Into<String>, pointer: Vec2, item_origin: Vec2) {
		self.dragged = Some(DraggedItem {
			item,
			label: label.into(),
			offset: pointer - item_origin,
		});
	}

	/// Forget the held item without resolving a drop.
	pub fn cancel(&mut self) -> Option<I> {
		self.dragged.take().map(|d| d.item)
	}

	/// Top-left corner of the floating preview for a pointer position.
	pub fn preview_origin(&self, pointer: Vec2) -> Option<Vec2> {
		self.dragged.as_ref().map(|d| pointer - d.offset)
	}

	pub fn clear_drop_zones(&mut self) {
		self.drop_zones.clear();
	}

	/// Register a zone for this frame. Registering an existing identifier
	/// again overwrites its rectangle in place.
	pub fn register_drop_zone(&mut self, id: Z, rect: Rect) {
		match self.drop_zones.iter_mut().find(|(zone, _)| *zone == id) {
			Some((_, existing)) => *existing = rect,
			None => self.drop_zones.push((id, rect)),
		}
	}

	pub fn drop_zones(&self) -> impl Iterator<Item = (&Z, &Rect)> + '_ {
		self.drop_zones.iter().map(|(zone, rect)| (zone, rect))
	}

	/// First registered zone containing `pointer`.
	pub fn resolve_drop(&self, pointer: Vec2) -> Option<&Z> {
		self.drop_zones
			.iter()
			.find(|(_, rect)| rect.contains(pointer))
			.map(|(zone, _)| zone)
	}

	/// End the drag. Always returns to idle, whether or not a zone matched.
	///
	/// Returns `None` when nothing was being dragged.
	pub fn release(&mut self, pointer: Vec2) -> Option<DropOutcome<I, Z>>
	where
		Z: Clone,
	{
		let dragged = self.dragged.take()?;
		Some(DropOutcome {
			item: dragged.item,
			zone: self.resolve_drop(pointer).cloned(),
			position: pointer,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	type Controller = DragController<u32, &'static str>;

	fn zones() -> Controller {
		let mut drag = Controller::default();
		drag.register_drop_zone("A", Rect::new(0.0, 0.0, 100.0, 100.0));
		drag.register_drop_zone("B", Rect::new(100.0, 0.0, 100.0, 100.0));
		drag
	}

	#[test]
	fn begin_captures_offset() {
		let mut drag = zones();
		assert!(!drag.is_dragging());
		drag.begin(7, "Write docs", Vec2::new(15.0, 12.0), Vec2::new(10.0, 10.0));

		let held = drag.dragged().unwrap();
		assert_eq!(held.item, 7);
		assert_eq!(held.label, "Write docs");
		assert_eq!(held.offset, Vec2::new(5.0, 2.0));
		assert_eq!(drag.preview_origin(Vec2::new(40.0, 40.0)), Some(Vec2::new(35.0, 38.0)));
	}

	#[test]
	fn release_resolves_matching_zone() {
		let mut drag = zones();
		drag.begin(1, "t", Vec2::ZERO, Vec2::ZERO);

		let outcome = drag.release(Vec2::new(150.0, 50.0)).unwrap();
		assert_eq!(outcome.zone, Some("B"));
		assert_eq!(outcome.item, 1);
		assert_eq!(outcome.position, Vec2::new(150.0, 50.0));
		assert!(!drag.is_dragging());
	}

	#[test]
	fn release_outside_every_zone_still_ends_drag() {
		let mut drag = zones();
		drag.begin(1, "t", Vec2::ZERO, Vec2::ZERO);

		let outcome = drag.release(Vec2::new(500.0, 500.0)).unwrap();
		assert_eq!(outcome.zone, None);
		assert!(!drag.is_dragging());
		assert!(drag.release(Vec2::new(50.0, 50.0)).is_none());
	}

	#[test]
	fn reregistering_overwrites_in_place() {
		let mut drag = zones();
		drag.register_drop_zone("A", Rect::new(300.0, 0.0, 10.0, 10.0));

		assert_eq!(drag.drop_zones().count(), 2);
		assert_eq!(drag.resolve_drop(Vec2::new(50.0, 50.0)), None);
		assert_eq!(drag.resolve_drop(Vec2::new(305.0, 5.0)), Some(&"A"));
		assert_eq!(drag.drop_zones().next().map(|(z, _)| *z), Some("A"));
	}

	#[test]
	fn overlapping_zones_resolve_in_registration_order() {
		let mut drag = Controller::default();
		drag.register_drop_zone("first", Rect::new(0.0, 0.0, 100.0, 100.0));
		drag.register_drop_zone("second", Rect::new(50.0, 50.0, 100.0, 100.0));
		assert_eq!(drag.resolve_drop(Vec2::new(75.0, 75.0)), Some(&"first"));
	}

	#[test]
	fn clearing_zones_drops_stale_rects() {
		let mut drag = zones();
		drag.clear_drop_zones();
		assert_eq!(drag.resolve_drop(Vec2::new(50.0, 50.0)), None);
	}

	#[test]
	fn cancel_returns_held_item() {
		let mut drag = zones();
		drag.begin(3, "t", Vec2::ZERO, Vec2::ZERO);
		assert_eq!(drag.cancel(), Some(3));
		assert_eq!(drag.cancel(), None);
	}
}
