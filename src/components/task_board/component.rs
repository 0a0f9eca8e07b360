//! Leptos component wrapping the task board canvas.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers for dragging tasks, toggling categories and scrolling. An animation
//! loop runs via `requestAnimationFrame`: each frame re-runs the layout pass,
//! ticks the particle bursts with the measured frame time, and repaints when
//! something changed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::geometry::Vec2;
use super::render;
use super::state::BoardState;
use super::theme::Theme;
use super::types::BoardData;

/// Bundles board state with its visual configuration.
struct BoardContext {
	state: BoardState,
	theme: Theme,
	/// Input arrived since the last paint.
	dirty: bool,
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Vec2 {
	let rect = canvas.get_bounding_client_rect();
	Vec2::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders an interactive task board on a canvas element.
///
/// Pass the board via the reactive `data` signal. The component sizes itself
/// to its parent container by default; set `fullscreen = true` to fill the
/// viewport and resize automatically with the window. Explicit `width`/`height`
/// override automatic sizing. `seed` pins the particle randomness.
#[component]
pub fn TaskBoardCanvas(
	#[prop(into)] data: Signal<BoardData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = None)] seed: Option<u64>,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BoardContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("task-board: no window, canvas stays blank");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("task-board: 2d canvas context unavailable");
			return;
		};

		let seed = seed.unwrap_or_else(|| js_sys::Date::now() as u64);
		info!("task-board: {}x{} canvas, theme {}, seed {}", w, h, theme.name, seed);
		*context_init.borrow_mut() = Some(BoardContext {
			state: BoardState::new(data.get(), w, h, seed),
			theme: theme.clone(),
			dirty: true,
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
					c.dirty = true;
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let performance = window.performance();
		let mut last_frame: Option<f64> = None;
		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = performance.as_ref().map(|p| p.now()).unwrap_or_else(js_sys::Date::now);
			let dt = last_frame.map(|last| (now - last) / 1000.0).unwrap_or(0.0);
			last_frame = Some(now);

			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.layout_pass();
				let was_live = c.state.needs_continuous_redraw();
				c.state.tick(dt);
				if c.dirty || was_live || c.state.is_dragging() {
					render::render(&c.state, &ctx, &c.theme);
					c.dirty = false;
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let pos = pointer_position(&canvas, &ev);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if c.state.on_pointer_down(pos, ev.detail().max(1) as u32) {
				c.dirty = true;
				ev.prevent_default();
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let pos = pointer_position(&canvas, &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.on_pointer_move(pos) {
				c.dirty = true;
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let pos = pointer_position(&canvas, &ev);

		if let Some(ref mut c) = *context_mu.borrow_mut() {
			if c.state.is_dragging() {
				c.state.on_pointer_release(pos);
				c.dirty = true;
			}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.on_pointer_leave();
			c.dirty = true;
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.state.scroll_by(ev.delta_y());
			c.dirty = true;
		}
	};

	let category_name = RwSignal::new(String::new());
	let task_description = RwSignal::new(String::new());

	let context_cat = context.clone();
	let on_add_category = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_cat.borrow_mut() {
			if c.state.add_category(&category_name.get_untracked()) {
				category_name.set(String::new());
				c.dirty = true;
			}
		}
	};

	let context_task = context.clone();
	let on_add_task = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_task.borrow_mut() {
			if c.state.add_task_to_focused(&task_description.get_untracked()) {
				task_description.set(String::new());
				c.dirty = true;
			}
		}
	};

	view! {
		<div class="task-board" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="task-board-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: default;"
			/>
			<div
				class="task-board-toolbar"
				style="position: absolute; top: 10px; left: 10px; display: flex; gap: 6px;"
			>
				<input
					type="text"
					placeholder="New category"
					prop:value=move || category_name.get()
					on:input=move |ev| category_name.set(event_target_value(&ev))
				/>
				<button on:click=on_add_category>"Add Category"</button>
				<input
					type="text"
					placeholder="New task for selected category"
					prop:value=move || task_description.get()
					on:input=move |ev| task_description.set(event_target_value(&ev))
				/>
				<button on:click=on_add_task>"Add Task"</button>
			</div>
		</div>
	}
}
