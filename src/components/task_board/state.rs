//! Board state and the boundary the canvas host drives.
//!
//! `BoardState` owns everything that changes at runtime: the board itself,
//! the drag controller, both particle systems and the random source. The host
//! calls, in order each frame, [`BoardState::layout_pass`], whatever pointer
//! handlers fired, and [`BoardState::tick`], then renders from the read-only
//! accessors. A drop spawns its burst immediately, but the burst only starts
//! moving on the following tick.

use log::{debug, info};

use super::drag::{DragController, DraggedItem};
use super::effects::{EffectKind, EffectPolicy};
use super::geometry::{Rect, Vec2};
use super::layout::{BoardLayout, Hit, LayoutMetrics};
use super::particles::{Archetype, Particle, ParticleSystem};
use super::types::{BoardData, TaskKey, TaskStatus};

/// Runtime state of one task board.
pub struct BoardState {
	board: BoardData,
	layout: BoardLayout,
	metrics: LayoutMetrics,
	drag: DragController<TaskKey, TaskStatus>,
	confetti: ParticleSystem,
	glyphs: ParticleSystem,
	policy: EffectPolicy,
	rng: fastrand::Rng,
	focused: Option<usize>,
	pointer: Vec2,
	scroll: f64,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
}

impl BoardState {
	/// Board with default metrics and effect rules. `seed` drives every burst.
	pub fn new(board: BoardData, width: f64, height: f64, seed: u64) -> Self {
		Self::with_config(
			board,
			width,
			height,
			seed,
			LayoutMetrics::default(),
			EffectPolicy::default(),
		)
	}

	/// Board with custom layout metrics and effect rules.
	pub fn with_config(
		board: BoardData,
		width: f64,
		height: f64,
		seed: u64,
		metrics: LayoutMetrics,
		policy: EffectPolicy,
	) -> Self {
		let mut state = Self {
			focused: (!board.categories.is_empty()).then_some(0),
			board,
			layout: BoardLayout::default(),
			metrics,
			drag: DragController::default(),
			confetti: ParticleSystem::new(Archetype::confetti()),
			glyphs: ParticleSystem::new(Archetype::glyph()),
			policy,
			rng: fastrand::Rng::with_seed(seed),
			pointer: Vec2::ZERO,
			scroll: 0.0,
			width,
			height,
		};
		state.layout_pass();
		state
	}

	/// Recompute rectangles and re-register this frame's drop zones.
	pub fn layout_pass(&mut self) {
		self.layout = BoardLayout::compute(
			&self.board,
			self.width,
			self.height,
			self.scroll,
			&self.metrics,
		);
		let max_scroll = self.layout.max_scroll();
		if self.scroll > max_scroll {
			self.scroll = max_scroll;
			self.layout = BoardLayout::compute(
				&self.board,
				self.width,
				self.height,
				self.scroll,
				&self.metrics,
			);
		}

		self.drag.clear_drop_zones();
		for (status, rect) in &self.layout.columns {
			self.drag.register_drop_zone(*status, *rect);
		}
	}

	/// Register (or overwrite) a drop zone for the current frame.
	pub fn register_drop_zone(&mut self, zone: TaskStatus, rect: Rect) {
		self.drag.register_drop_zone(zone, rect);
	}

	/// Handle a primary button press. `clicks` is the browser's click count,
	/// so a value of 2 on a category header toggles it open or closed.
	///
	/// Returns `true` when anything visible changed.
	pub fn on_pointer_down(&mut self, pos: Vec2, clicks: u32) -> bool {
		self.pointer = pos;
		let Some(hit) = self.layout.hit(pos) else {
			return false;
		};

		match hit {
			Hit::RemoveTask(key) => {
				let Some(task) = self.board.remove_task(key) else {
					return false;
				};
				info!("task-board: removed task {:?}", task.description);
				self.drag.cancel();
			}
			Hit::RemoveCategory(index) => {
				let Some(category) = self.board.remove_category(index) else {
					return false;
				};
				info!("task-board: removed category {:?}", category.name);
				self.drag.cancel();
				self.focused = match self.focused {
					Some(f) if f == index => None,
					Some(f) if f > index => Some(f - 1),
					other => other,
				};
			}
			Hit::Header(index) => {
				self.focused = Some(index);
				if clicks >= 2 {
					if let Some(expanded) = self.board.toggle_expanded(index) {
						debug!("task-board: category {index} expanded={expanded}");
					}
				}
			}
			Hit::Task { key, rect } => {
				let Some(task) = self.board.task(key) else {
					return false;
				};
				debug!("task-board: dragging {:?}", task.description);
				self.drag
					.begin(key, task.description.clone(), pos, rect.origin());
				return true;
			}
		}

		self.layout_pass();
		true
	}

	/// Track the pointer. Returns `true` while a drag preview needs redrawing.
	pub fn on_pointer_move(&mut self, pos: Vec2) -> bool {
		self.pointer = pos;
		self.drag.is_dragging()
	}

	/// Finish a drag. The held task moves to the status column under the
	/// pointer; a drop outside every column leaves it untouched.
	///
	/// Returns the burst that was spawned, if any.
	pub fn on_pointer_release(&mut self, pos: Vec2) -> Option<EffectKind> {
		self.pointer = pos;
		let outcome = self.drag.release(pos)?;
		let Some(zone) = outcome.zone else {
			debug!("task-board: drop outside any column");
			return None;
		};
		let task = self.board.task_mut(outcome.item)?;
		task.status = zone;
		info!("task-board: {:?} -> {}", task.description, zone.title());

		let effect = self.policy.dispatch(&zone);
		if let Some(effect) = effect {
			self.spawn(effect, outcome.position);
		}
		self.layout_pass();
		effect
	}

	/// Pointer left the canvas: abandon any drag.
	pub fn on_pointer_leave(&mut self) {
		if let Some(key) = self.drag.cancel() {
			debug!("task-board: drag of {key:?} cancelled");
		}
	}

	/// Start a burst at `origin`, replacing whatever that system was showing.
	pub fn spawn(&mut self, effect: EffectKind, origin: Vec2) {
		let system = match effect {
			EffectKind::Confetti => &mut self.confetti,
			EffectKind::Glyph => &mut self.glyphs,
		};
		system.spawn(origin, &mut self.rng);
		debug!("task-board: {effect:?} burst of {} at {origin:?}", system.len());
	}

	/// Advance every particle system by `dt` seconds. Returns whether any
	/// particle is still live.
	pub fn tick(&mut self, dt: f64) -> bool {
		let confetti = self.confetti.tick(dt, &mut self.rng);
		let glyphs = self.glyphs.tick(dt, &mut self.rng);
		confetti || glyphs
	}

	/// Whether any burst is still on screen.
	pub fn needs_continuous_redraw(&self) -> bool {
		self.confetti.is_live() || self.glyphs.is_live()
	}

	/// Whether a task is held.
	pub fn is_dragging(&self) -> bool {
		self.drag.is_dragging()
	}

	/// The held task, if any.
	pub fn dragged(&self) -> Option<&DraggedItem<TaskKey>> {
		self.drag.dragged()
	}

	/// Description of the held task.
	pub fn dragged_item_label(&self) -> Option<&str> {
		self.drag.dragged().map(|d| d.label.as_str())
	}

	/// Where the floating preview of the dragged task is drawn.
	pub fn drag_preview_origin(&self) -> Option<Vec2> {
		self.drag.preview_origin(self.pointer)
	}

	/// Column currently under the dragged task.
	pub fn hovered_zone(&self) -> Option<TaskStatus> {
		if !self.drag.is_dragging() {
			return None;
		}
		self.drag.resolve_drop(self.pointer).copied()
	}

	/// The particle system behind `effect`.
	pub fn particles(&self, effect: EffectKind) -> &ParticleSystem {
		match effect {
			EffectKind::Confetti => &self.confetti,
			EffectKind::Glyph => &self.glyphs,
		}
	}

	/// Live particles of `effect`, for rendering.
	pub fn particle_snapshot(
		&self,
		effect: EffectKind,
	) -> impl ExactSizeIterator<Item = &Particle> + Clone + '_ {
		self.particles(effect).snapshot()
	}

	/// Add a category and focus it.
	pub fn add_category(&mut self, name: &str) -> bool {
		let Some(index) = self.board.add_category(name) else {
			return false;
		};
		info!("task-board: added category {:?}", self.board.categories[index].name);
		self.focused = Some(index);
		self.layout_pass();
		true
	}

	/// Add a task to the focused category, expanding it so the task is visible.
	pub fn add_task_to_focused(&mut self, description: &str) -> bool {
		let Some(index) = self.focused else {
			return false;
		};
		let Some(key) = self.board.add_task(index, description) else {
			return false;
		};
		self.board.categories[key.category].is_expanded = true;
		info!(
			"task-board: added task to {:?}",
			self.board.categories[key.category].name
		);
		self.layout_pass();
		true
	}

	/// Scroll the task area, clamped to the content height.
	pub fn scroll_by(&mut self, dy: f64) {
		self.scroll = (self.scroll + dy).clamp(0.0, self.layout.max_scroll());
		self.layout_pass();
	}

	/// Canvas size changed.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.layout_pass();
	}

	/// Current board contents.
	pub fn board(&self) -> &BoardData {
		&self.board
	}

	/// Rectangles from the last layout pass.
	pub fn layout(&self) -> &BoardLayout {
		&self.layout
	}

	/// Drop zones registered for the current frame, in registration order.
	pub fn drop_zones(&self) -> impl Iterator<Item = (&TaskStatus, &Rect)> + '_ {
		self.drag.drop_zones()
	}

	/// Card rectangle of a task from the last layout pass. Collapsed or
	/// scrolled-out tasks have none.
	pub fn task_rect(&self, key: TaskKey) -> Option<Rect> {
		self.layout.task_slot(key).map(|slot| slot.rect)
	}

	/// Layout constants in use.
	pub fn metrics(&self) -> &LayoutMetrics {
		&self.metrics
	}

	/// Category that receives new tasks.
	pub fn focused(&self) -> Option<usize> {
		self.focused
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::task_board::types::{Category, Task};

	fn board() -> BoardData {
		BoardData {
			categories: vec![Category {
				name: "Release".into(),
				is_expanded: true,
				tasks: vec![
					Task {
						description: "Write changelog".into(),
						status: TaskStatus::NotDone,
					},
					Task {
						description: "Tag build".into(),
						status: TaskStatus::NotDone,
					},
				],
			}],
		}
	}

	fn state() -> BoardState {
		BoardState::new(board(), 620.0, 400.0, 42)
	}

	const FIRST: TaskKey = TaskKey {
		category: 0,
		task: 0,
	};

	fn grab(state: &mut BoardState, key: TaskKey) -> Vec2 {
		let rect = state.task_rect(key).unwrap();
		let pos = rect.origin() + Vec2::new(10.0, 10.0);
		assert!(state.on_pointer_down(pos, 1));
		pos
	}

	fn column_center(state: &BoardState, status: TaskStatus) -> Vec2 {
		let (_, rect) = state
			.layout()
			.columns
			.iter()
			.find(|(s, _)| *s == status)
			.unwrap();
		Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0)
	}

	#[test]
	fn layout_pass_registers_three_zones() {
		let state = state();
		assert_eq!(state.drop_zones().count(), 3);
	}

	#[test]
	fn drop_on_done_spawns_confetti() {
		let mut state = state();
		state.drag.clear_drop_zones();
		state.register_drop_zone(TaskStatus::Done, Rect::new(0.0, 0.0, 100.0, 100.0));

		grab(&mut state, FIRST);
		assert!(state.is_dragging());
		assert_eq!(state.dragged_item_label(), Some("Write changelog"));

		let effect = state.on_pointer_release(Vec2::new(50.0, 50.0));
		assert_eq!(effect, Some(EffectKind::Confetti));
		assert!(!state.is_dragging());
		assert_eq!(state.board().task(FIRST).unwrap().status, TaskStatus::Done);

		let confetti: Vec<_> = state.particle_snapshot(EffectKind::Confetti).collect();
		assert_eq!(confetti.len(), 30);
		assert!(confetti.iter().all(|p| p.lifetime == 1.4));
		assert!(confetti.iter().all(|p| p.position == Vec2::new(50.0, 50.0)));
		assert_eq!(state.particle_snapshot(EffectKind::Glyph).len(), 0);
		assert!(state.needs_continuous_redraw());
	}

	#[test]
	fn confetti_is_gone_after_its_lifetime() {
		let mut state = state();
		grab(&mut state, FIRST);
		let done = column_center(&state, TaskStatus::Done);
		state.on_pointer_release(done);

		assert!(state.tick(0.7));
		assert!(!state.tick(0.7));
		assert_eq!(state.particles(EffectKind::Confetti).len(), 0);
		assert!(!state.needs_continuous_redraw());
	}

	#[test]
	fn drop_on_working_on_spawns_glyphs() {
		let mut state = state();
		grab(&mut state, FIRST);
		let working = column_center(&state, TaskStatus::WorkingOn);

		assert_eq!(state.on_pointer_release(working), Some(EffectKind::Glyph));
		assert_eq!(
			state.board().task(FIRST).unwrap().status,
			TaskStatus::WorkingOn
		);
		assert_eq!(state.particles(EffectKind::Glyph).len(), 20);
		assert_eq!(state.particles(EffectKind::Confetti).len(), 0);
	}

	#[test]
	fn drop_on_not_done_changes_status_without_burst() {
		let mut state = state();
		state.board.task_mut(FIRST).unwrap().status = TaskStatus::Done;
		state.layout_pass();

		grab(&mut state, FIRST);
		let not_done = column_center(&state, TaskStatus::NotDone);
		assert_eq!(state.on_pointer_release(not_done), None);
		assert_eq!(state.board().task(FIRST).unwrap().status, TaskStatus::NotDone);
		assert!(!state.needs_continuous_redraw());
	}

	#[test]
	fn drop_outside_columns_leaves_task_alone() {
		let mut state = state();
		grab(&mut state, FIRST);

		assert_eq!(state.on_pointer_release(Vec2::new(300.0, 10.0)), None);
		assert!(!state.is_dragging());
		assert_eq!(state.board().task(FIRST).unwrap().status, TaskStatus::NotDone);
		assert!(!state.needs_continuous_redraw());
	}

	#[test]
	fn release_without_drag_is_ignored() {
		let mut state = state();
		let done = column_center(&state, TaskStatus::Done);
		assert_eq!(state.on_pointer_release(done), None);
	}

	#[test]
	fn preview_follows_pointer_with_offset() {
		let mut state = state();
		assert!(!state.on_pointer_move(Vec2::new(20.0, 20.0)));
		grab(&mut state, FIRST);

		assert!(state.on_pointer_move(Vec2::new(500.0, 300.0)));
		assert_eq!(
			state.drag_preview_origin(),
			Some(Vec2::new(490.0, 290.0))
		);
		assert_eq!(state.dragged().unwrap().offset, Vec2::new(10.0, 10.0));
		assert_eq!(state.hovered_zone(), Some(TaskStatus::Done));

		state.on_pointer_leave();
		assert!(!state.is_dragging());
		assert_eq!(state.hovered_zone(), None);
	}

	#[test]
	fn header_double_click_toggles_expansion() {
		let mut state = state();
		let header = state.layout().headers[0].rect.origin() + Vec2::new(5.0, 5.0);

		assert!(state.on_pointer_down(header, 1));
		assert!(state.board().categories[0].is_expanded);
		assert!(state.on_pointer_down(header, 2));
		assert!(!state.board().categories[0].is_expanded);
		assert!(state.layout().tasks.is_empty());
	}

	#[test]
	fn remove_buttons_delete() {
		let mut state = state();
		let remove = state.layout().tasks[0].remove.origin() + Vec2::new(2.0, 2.0);
		assert!(state.on_pointer_down(remove, 1));
		assert!(!state.is_dragging());
		assert_eq!(state.board().categories[0].tasks.len(), 1);
		assert_eq!(
			state.board().categories[0].tasks[0].description,
			"Tag build"
		);

		let remove = state.layout().headers[0].remove.origin() + Vec2::new(2.0, 2.0);
		assert!(state.on_pointer_down(remove, 1));
		assert!(state.board().categories.is_empty());
		assert_eq!(state.focused(), None);
	}

	#[test]
	fn adding_tasks_targets_focused_category() {
		let mut state = BoardState::new(BoardData::default(), 620.0, 400.0, 1);
		assert!(!state.add_task_to_focused("orphan"));
		assert!(!state.add_category("  "));
		assert!(state.add_category("Ops"));
		assert_eq!(state.focused(), Some(0));

		assert!(state.add_task_to_focused("Rotate keys"));
		assert!(state.board().categories[0].is_expanded);
		assert_eq!(state.layout().tasks.len(), 1);
	}

	#[test]
	fn scroll_is_clamped_to_content() {
		let mut state = state();
		state.scroll_by(500.0);
		assert_eq!(state.scroll, 0.0);

		state.resize(620.0, 120.0);
		state.scroll_by(500.0);
		assert_eq!(state.scroll, state.layout().max_scroll());
		assert!(state.scroll > 0.0);
		state.scroll_by(-1000.0);
		assert_eq!(state.scroll, 0.0);
	}

	#[test]
	fn custom_policy_changes_bursts() {
		let policy = EffectPolicy::empty().with_rule(TaskStatus::NotDone, EffectKind::Glyph);
		let mut state = BoardState::with_config(
			board(),
			620.0,
			400.0,
			3,
			LayoutMetrics::default(),
			policy,
		);
		grab(&mut state, FIRST);
		let done = column_center(&state, TaskStatus::Done);
		assert_eq!(state.on_pointer_release(done), None);
		assert_eq!(state.board().task(FIRST).unwrap().status, TaskStatus::Done);
	}

	#[test]
	fn ticking_without_particles_is_safe() {
		let mut state = state();
		assert!(!state.tick(0.016));
	}
}
