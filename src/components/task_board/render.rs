//! Canvas rendering for the task board.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background, toolbar band and status columns (with the drop target highlight)
//! 2. Category headers and task cards, clipped to the scrolling region
//! 3. Floating drag preview
//! 4. Confetti, then glyph bursts on top of everything

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::effects::EffectKind;
use super::geometry::Rect;
use super::layout::{HeaderSlot, TaskSlot};
use super::particles::ParticleSystem;
use super::state::BoardState;
use super::theme::{Color, Theme};

/// Renders the complete board to the canvas.
pub fn render(state: &BoardState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);
	draw_columns(state, ctx, theme);

	let content = state.layout().content;
	ctx.save();
	ctx.begin_path();
	ctx.rect(content.x, content.y, content.w, content.h);
	ctx.clip();
	for header in &state.layout().headers {
		draw_header(state, ctx, theme, header);
	}
	for slot in &state.layout().tasks {
		draw_task(state, ctx, theme, slot);
	}
	ctx.restore();

	draw_drag_preview(state, ctx, theme);
	draw_confetti(ctx, state.particles(EffectKind::Confetti));
	draw_glyphs(ctx, theme, state.particles(EffectKind::Glyph));
}

fn fill(ctx: &CanvasRenderingContext2d, rect: &Rect, color: Color) {
	ctx.set_fill_style_str(&color.to_css());
	ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
}

fn draw_background(state: &BoardState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	fill(
		ctx,
		&Rect::new(0.0, 0.0, state.width, state.height),
		theme.background.color,
	);
	fill(
		ctx,
		&Rect::new(0.0, 0.0, state.width, state.metrics().toolbar_height),
		theme.background.toolbar,
	);
}

fn draw_columns(state: &BoardState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.column;
	let hovered = state.hovered_zone();
	let title_height = state.metrics().column_title_height;

	for (status, rect) in &state.layout().columns {
		let inner = Rect::new(rect.x + 2.0, rect.y, rect.w - 4.0, rect.h);
		if hovered == Some(*status) {
			fill(ctx, &inner, style.drop_highlight);

			ctx.set_stroke_style_str(&style.title_color.with_alpha(0.5).to_css());
			ctx.set_line_width(1.5);
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(style.dash.0),
				&JsValue::from_f64(style.dash.1),
			));
			ctx.stroke_rect(inner.x, inner.y, inner.w, inner.h);
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		} else {
			fill(ctx, &inner, style.fill);
		}

		ctx.set_fill_style_str(&style.title_color.to_css());
		ctx.set_font(&style.title_font);
		ctx.set_text_align("left");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(status.title(), inner.x + 6.0, rect.y + title_height / 2.0);
	}
}

fn draw_header(
	state: &BoardState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	header: &HeaderSlot,
) {
	let Some(category) = state.board().categories.get(header.category) else {
		return;
	};
	let style = &theme.card;
	let color = if state.focused() == Some(header.category) {
		style.header_focused
	} else {
		style.header_fill
	};
	fill(ctx, &header.rect, color);

	let arrow = if category.is_expanded { "\u{25BE}" } else { "\u{25B8}" };
	ctx.set_fill_style_str(&style.header_text.to_css());
	ctx.set_font(&style.header_font);
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	let label = format!("{arrow} {} ({})", category.name, category.tasks.len());
	let _ = ctx.fill_text_with_max_width(
		&label,
		header.rect.x + 8.0,
		header.rect.y + header.rect.h / 2.0,
		(header.remove.x - header.rect.x - 16.0).max(0.0),
	);

	draw_remove_button(ctx, theme, &header.remove);
}

fn draw_task(state: &BoardState, ctx: &CanvasRenderingContext2d, theme: &Theme, slot: &TaskSlot) {
	let Some(task) = state.board().task(slot.key) else {
		return;
	};
	let style = &theme.card;
	let held = state.dragged().is_some_and(|d| d.item == slot.key);

	ctx.set_global_alpha(if held { 0.4 } else { 1.0 });
	let card = if held {
		style.task_fill.lighten(0.2)
	} else {
		style.task_fill
	};
	fill(ctx, &slot.rect, card);

	ctx.set_fill_style_str(&style.task_text.to_css());
	ctx.set_font(&style.task_font);
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text_with_max_width(
		&task.description,
		slot.rect.x + 8.0,
		slot.rect.y + slot.rect.h / 2.0,
		(slot.remove.x - slot.rect.x - 12.0).max(0.0),
	);

	draw_remove_button(ctx, theme, &slot.remove);
	ctx.set_global_alpha(1.0);
}

fn draw_remove_button(ctx: &CanvasRenderingContext2d, theme: &Theme, rect: &Rect) {
	let inset = rect.w * 0.3;
	ctx.set_stroke_style_str(&theme.card.remove_color.to_css());
	ctx.set_line_width(2.0);
	ctx.begin_path();
	ctx.move_to(rect.x + inset, rect.y + inset);
	ctx.line_to(rect.right() - inset, rect.bottom() - inset);
	ctx.move_to(rect.right() - inset, rect.y + inset);
	ctx.line_to(rect.x + inset, rect.bottom() - inset);
	ctx.stroke();
}

fn draw_drag_preview(state: &BoardState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let (Some(origin), Some(label)) = (state.drag_preview_origin(), state.dragged_item_label())
	else {
		return;
	};
	let style = &theme.preview;
	let rect = Rect::new(origin.x, origin.y, style.width, style.height);
	fill(ctx, &rect, style.fill);

	ctx.set_fill_style_str(&style.text.to_css());
	ctx.set_font(&theme.card.task_font);
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text_with_max_width(label, rect.x + 8.0, rect.y + rect.h / 2.0, rect.w - 16.0);
}

fn draw_confetti(ctx: &CanvasRenderingContext2d, confetti: &ParticleSystem) {
	for p in confetti.snapshot() {
		let Some(color) = p.color else {
			continue;
		};
		ctx.save();
		let _ = ctx.translate(p.position.x, p.position.y);
		let _ = ctx.rotate(p.rotation.to_radians());
		ctx.set_fill_style_str(&color.to_css());
		ctx.fill_rect(0.0, 0.0, p.size, p.size);
		ctx.restore();
	}
}

fn draw_glyphs(ctx: &CanvasRenderingContext2d, theme: &Theme, glyphs: &ParticleSystem) {
	let style = &theme.glyph;
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for p in glyphs.snapshot() {
		ctx.save();
		let _ = ctx.translate(p.position.x, p.position.y);
		let _ = ctx.rotate(p.rotation.to_radians());
		ctx.set_fill_style_str(&style.color.with_alpha(glyphs.fade(p)).to_css());
		ctx.set_font(&format!("{}px {}", p.size.round(), style.font_family));
		let _ = ctx.fill_text(style.glyph, 0.0, 0.0);
		ctx.restore();
	}
}
