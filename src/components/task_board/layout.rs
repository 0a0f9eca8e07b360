//! Per-frame board layout and hit testing.
//!
//! The canvas is split into a toolbar band and three equal status columns
//! underneath it. Categories stack vertically across all three columns: a
//! full-width header row, then (when expanded) each task placed in the column
//! of its status. Everything below the column titles scrolls; the toolbar and
//! titles stay put.

use super::geometry::{Rect, Vec2};
use super::types::{BoardData, TaskKey, TaskStatus};

/// Fixed sizes used by the layout, in canvas pixels.
#[derive(Clone, Debug)]
pub struct LayoutMetrics {
	/// Space reserved at the top for the add category/task form.
	pub toolbar_height: f64,
	pub column_title_height: f64,
	pub header_height: f64,
	pub task_height: f64,
	pub row_gap: f64,
	pub padding: f64,
	/// Inset of a task card inside its column.
	pub task_inset: f64,
	pub remove_size: f64,
}

impl Default for LayoutMetrics {
	fn default() -> Self {
		Self {
			toolbar_height: 48.0,
			column_title_height: 26.0,
			header_height: 28.0,
			task_height: 26.0,
			row_gap: 6.0,
			padding: 10.0,
			task_inset: 4.0,
			remove_size: 16.0,
		}
	}
}

/// A category header row.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderSlot {
	pub category: usize,
	pub rect: Rect,
	pub remove: Rect,
}

/// A task card.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskSlot {
	pub key: TaskKey,
	pub rect: Rect,
	pub remove: Rect,
}

/// What a pointer position lands on.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
	RemoveTask(TaskKey),
	RemoveCategory(usize),
	Task { key: TaskKey, rect: Rect },
	Header(usize),
}

/// Rectangles for one frame.
#[derive(Clone, Debug, Default)]
pub struct BoardLayout {
	/// Full-height status columns below the toolbar. These are the drop zones.
	pub columns: Vec<(TaskStatus, Rect)>,
	/// Scrolling region below the column titles.
	pub content: Rect,
	pub headers: Vec<HeaderSlot>,
	pub tasks: Vec<TaskSlot>,
	/// Unscrolled height of all categories.
	pub content_height: f64,
}

fn remove_button(row: &Rect, size: f64) -> Rect {
	Rect::new(
		row.right() - size - 6.0,
		row.y + (row.h - size) / 2.0,
		size,
		size,
	)
}

impl BoardLayout {
	pub fn compute(
		board: &BoardData,
		width: f64,
		height: f64,
		scroll: f64,
		m: &LayoutMetrics,
	) -> Self {
		let column_width = ((width - 2.0 * m.padding) / 3.0).max(0.0);
		let columns_height = (height - m.toolbar_height).max(0.0);
		let columns = TaskStatus::ALL
			.iter()
			.enumerate()
			.map(|(i, &status)| {
				let x = m.padding + i as f64 * column_width;
				(status, Rect::new(x, m.toolbar_height, column_width, columns_height))
			})
			.collect::<Vec<_>>();

		let content_top = m.toolbar_height + m.column_title_height;
		let content = Rect::new(0.0, content_top, width, (height - content_top).max(0.0));

		let start = content_top + m.padding;
		let mut y = start - scroll;
		let mut headers = Vec::with_capacity(board.categories.len());
		let mut tasks = Vec::new();

		for (index, category) in board.categories.iter().enumerate() {
			let rect = Rect::new(m.padding, y, width - 2.0 * m.padding, m.header_height);
			headers.push(HeaderSlot {
				category: index,
				rect,
				remove: remove_button(&rect, m.remove_size),
			});
			y += m.header_height + m.row_gap;

			if !category.is_expanded {
				continue;
			}

			let mut bottom = y;
			for (status, column) in &columns {
				let mut ty = y;
				for (key, _) in board.tasks_with_status(index, *status) {
					let rect = Rect::new(
						column.x + m.task_inset,
						ty,
						column.w - 2.0 * m.task_inset,
						m.task_height,
					);
					tasks.push(TaskSlot {
						key,
						rect,
						remove: remove_button(&rect, m.remove_size),
					});
					ty += m.task_height + m.row_gap;
				}
				bottom = bottom.max(ty);
			}
			y = bottom + m.row_gap;
		}

		Self {
			columns,
			content,
			headers,
			tasks,
			content_height: y + scroll - start,
		}
	}

	/// Largest scroll offset that still shows the last category.
	pub fn max_scroll(&self) -> f64 {
		(self.content_height - self.content.h).max(0.0)
	}

	pub fn task_slot(&self, key: TaskKey) -> Option<&TaskSlot> {
		self.tasks.iter().find(|slot| slot.key == key)
	}

	/// Remove buttons take priority over the rows they sit on. Points outside
	/// the scrolling region never hit anything.
	pub fn hit(&self, p: Vec2) -> Option<Hit> {
		if !self.content.contains(p) {
			return None;
		}
		if let Some(slot) = self.tasks.iter().find(|s| s.remove.contains(p)) {
			return Some(Hit::RemoveTask(slot.key));
		}
		if let Some(slot) = self.headers.iter().find(|s| s.remove.contains(p)) {
			return Some(Hit::RemoveCategory(slot.category));
		}
		if let Some(slot) = self.tasks.iter().find(|s| s.rect.contains(p)) {
			return Some(Hit::Task {
				key: slot.key,
				rect: slot.rect,
			});
		}
		self.headers
			.iter()
			.find(|s| s.rect.contains(p))
			.map(|s| Hit::Header(s.category))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::task_board::types::{Category, Task};

	fn board() -> BoardData {
		let task = |d: &str, status| Task {
			description: d.into(),
			status,
		};
		BoardData {
			categories: vec![
				Category {
					name: "Art".into(),
					is_expanded: true,
					tasks: vec![
						task("Sketch", TaskStatus::NotDone),
						task("Ink", TaskStatus::NotDone),
						task("Color", TaskStatus::Done),
					],
				},
				Category {
					name: "Code".into(),
					is_expanded: false,
					tasks: vec![task("Hidden", TaskStatus::NotDone)],
				},
			],
		}
	}

	fn layout() -> BoardLayout {
		BoardLayout::compute(&board(), 620.0, 400.0, 0.0, &LayoutMetrics::default())
	}

	#[test]
	fn three_equal_columns_below_toolbar() {
		let layout = layout();
		let statuses: Vec<_> = layout.columns.iter().map(|(s, _)| *s).collect();
		assert_eq!(statuses, TaskStatus::ALL.to_vec());
		for (_, rect) in &layout.columns {
			assert_eq!(rect.w, 200.0);
			assert_eq!(rect.y, 48.0);
			assert_eq!(rect.bottom(), 400.0);
		}
		assert_eq!(layout.columns[2].1.x, 410.0);
	}

	#[test]
	fn collapsed_categories_hide_tasks() {
		let layout = layout();
		assert_eq!(layout.headers.len(), 2);
		assert_eq!(layout.tasks.len(), 3);
		assert!(layout.tasks.iter().all(|t| t.key.category == 0));
	}

	#[test]
	fn tasks_stack_within_their_status_column() {
		let layout = layout();
		let sketch = layout.task_slot(TaskKey { category: 0, task: 0 }).unwrap();
		let ink = layout.task_slot(TaskKey { category: 0, task: 1 }).unwrap();
		let color = layout.task_slot(TaskKey { category: 0, task: 2 }).unwrap();

		assert_eq!(sketch.rect.x, ink.rect.x);
		assert_eq!(ink.rect.y, sketch.rect.y + 26.0 + 6.0);
		assert_eq!(color.rect.y, sketch.rect.y);
		assert!(layout.columns[2].1.contains(color.rect.origin()));

		// Second header sits below the taller column.
		assert_eq!(layout.headers[1].rect.y, ink.rect.bottom() + 6.0 + 6.0);
	}

	#[test]
	fn hit_priorities() {
		let layout = layout();
		let slot = &layout.tasks[0];
		let remove = slot.remove.origin() + Vec2::new(1.0, 1.0);
		let body = slot.rect.origin() + Vec2::new(2.0, 2.0);
		let header = layout.headers[1].rect.origin() + Vec2::new(5.0, 5.0);
		let header_remove = layout.headers[1].remove.origin() + Vec2::new(1.0, 1.0);

		assert_eq!(layout.hit(remove), Some(Hit::RemoveTask(slot.key)));
		assert_eq!(
			layout.hit(body),
			Some(Hit::Task {
				key: slot.key,
				rect: slot.rect
			})
		);
		assert_eq!(layout.hit(header), Some(Hit::Header(1)));
		assert_eq!(layout.hit(header_remove), Some(Hit::RemoveCategory(1)));
		assert_eq!(layout.hit(Vec2::new(5.0, 5.0)), None);
	}

	#[test]
	fn scrolling_shifts_rows_and_bounds_offset() {
		let m = LayoutMetrics::default();
		let still = layout();
		let scrolled = BoardLayout::compute(&board(), 620.0, 400.0, 20.0, &m);
		assert_eq!(scrolled.headers[0].rect.y, still.headers[0].rect.y - 20.0);
		assert_eq!(scrolled.content_height, still.content_height);

		let short = BoardLayout::compute(&board(), 620.0, 2000.0, 0.0, &m);
		assert_eq!(short.max_scroll(), 0.0);
		let tiny = BoardLayout::compute(&board(), 620.0, 100.0, 0.0, &m);
		assert!(tiny.max_scroll() > 0.0);
	}
}
