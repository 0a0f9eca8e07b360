//! Board data structures: categories of tasks with a three-valued status.

use serde::Deserialize;

/// Progress of a task. Also the identifier of each status column drop zone.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
	/// Not started.
	#[default]
	NotDone,
	/// In progress.
	WorkingOn,
	/// Finished.
	Done,
}

impl TaskStatus {
	/// Column order, left to right.
	pub const ALL: [TaskStatus; 3] = [TaskStatus::NotDone, TaskStatus::WorkingOn, TaskStatus::Done];

	/// Column heading.
	pub fn title(self) -> &'static str {
		match self {
			TaskStatus::NotDone => "Not Done",
			TaskStatus::WorkingOn => "Working On",
			TaskStatus::Done => "Done",
		}
	}
}

/// A single to-do entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Task {
	/// Text shown on the card.
	pub description: String,
	/// Column the task sits in.
	#[serde(default)]
	pub status: TaskStatus,
}

/// A named group of tasks.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Category {
	/// Header text.
	pub name: String,
	/// Tasks in insertion order.
	#[serde(default)]
	pub tasks: Vec<Task>,
	/// Collapsed categories only show their header.
	#[serde(default)]
	pub is_expanded: bool,
}

/// Stable address of a task inside a [`BoardData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskKey {
	/// Index into [`BoardData::categories`].
	pub category: usize,
	/// Index into that category's tasks.
	pub task: usize,
}

/// Complete board: an ordered list of categories.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct BoardData {
	/// Categories in display order.
	#[serde(default)]
	pub categories: Vec<Category>,
}

impl BoardData {
	/// Appends a collapsed category. Blank names are ignored.
	pub fn add_category(&mut self, name: &str) -> Option<usize> {
		let name = name.trim();
		if name.is_empty() {
			return None;
		}
		self.categories.push(Category {
			name: name.to_string(),
			tasks: Vec::new(),
			is_expanded: false,
		});
		Some(self.categories.len() - 1)
	}

	/// Removes a category with all its tasks.
	pub fn remove_category(&mut self, index: usize) -> Option<Category> {
		(index < self.categories.len()).then(|| self.categories.remove(index))
	}

	/// Flips expansion and returns the new state.
	pub fn toggle_expanded(&mut self, index: usize) -> Option<bool> {
		let category = self.categories.get_mut(index)?;
		category.is_expanded = !category.is_expanded;
		Some(category.is_expanded)
	}

	/// Appends a `NotDone` task. Blank descriptions are ignored.
	pub fn add_task(&mut self, category: usize, description: &str) -> Option<TaskKey> {
		let description = description.trim();
		if description.is_empty() {
			return None;
		}
		let tasks = &mut self.categories.get_mut(category)?.tasks;
		tasks.push(Task {
			description: description.to_string(),
			status: TaskStatus::NotDone,
		});
		Some(TaskKey {
			category,
			task: tasks.len() - 1,
		})
	}

	/// Removes one task. Later tasks in the category shift down.
	pub fn remove_task(&mut self, key: TaskKey) -> Option<Task> {
		let tasks = &mut self.categories.get_mut(key.category)?.tasks;
		(key.task < tasks.len()).then(|| tasks.remove(key.task))
	}

	/// Task at `key`, if it exists.
	pub fn task(&self, key: TaskKey) -> Option<&Task> {
		self.categories.get(key.category)?.tasks.get(key.task)
	}

	/// Mutable task at `key`, if it exists.
	pub fn task_mut(&mut self, key: TaskKey) -> Option<&mut Task> {
		self.categories.get_mut(key.category)?.tasks.get_mut(key.task)
	}

	/// Tasks of one category in a given status, in stored order.
	pub fn tasks_with_status(
		&self,
		category: usize,
		status: TaskStatus,
	) -> impl Iterator<Item = (TaskKey, &Task)> + '_ {
		self.categories
			.get(category)
			.into_iter()
			.flat_map(|c| c.tasks.iter().enumerate())
			.filter(move |(_, t)| t.status == status)
			.map(move |(task, t)| (TaskKey { category, task }, t))
	}
}
