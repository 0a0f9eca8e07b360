//! task-board-bursts: a canvas to-do board with celebratory particle bursts.
//!
//! This crate provides a WASM-based task board where tasks are dragged between
//! status columns. Finishing a task rains confetti; starting one pops smileys.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::task_board::{
	BoardData, BoardState, Category, EffectKind, Particle, Rect, Task, TaskBoardCanvas, TaskKey,
	TaskStatus, Theme, Vec2,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("task-board: logging initialized");
}

fn board_script() -> Option<HtmlScriptElement> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("board-data")?;
	element.dyn_into().ok()
}

/// Parse board JSON, logging and discarding anything malformed.
fn parse_board_data(json_text: &str) -> Option<BoardData> {
	match serde_json::from_str::<BoardData>(json_text) {
		Ok(data) => {
			info!(
				"task-board: loaded {} categories, {} tasks",
				data.categories.len(),
				data.categories.iter().map(|c| c.tasks.len()).sum::<usize>()
			);
			Some(data)
		}
		Err(e) => {
			warn!("task-board: failed to parse board data: {}", e);
			None
		}
	}
}

/// Load the initial board from a script element with id="board-data".
/// Expected format: JSON with { categories: [{ name, is_expanded, tasks: [{ description, status }] }] }
fn load_board_data() -> Option<BoardData> {
	let json_text = board_script()?.text().ok()?;
	parse_board_data(&json_text)
}

/// Theme named by the `data-theme` attribute of the board script, if any.
fn load_theme() -> Theme {
	let Some(name) = board_script().and_then(|s| s.get_attribute("data-theme")) else {
		return Theme::default();
	};
	Theme::from_name(&name).unwrap_or_else(|| {
		warn!("task-board: unknown theme {:?}, using default", name);
		Theme::default()
	})
}

/// Main application component.
/// Loads the board from the DOM and renders it full screen.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let board = load_board_data().unwrap_or_default();
	let board_signal = Signal::derive(move || board.clone());
	let theme = load_theme();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Task Board" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-board">
			<TaskBoardCanvas data=board_signal fullscreen=true theme=theme />
		</div>
	}
}
