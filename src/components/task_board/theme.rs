//! Visual theming for the task board.
//!
//! Provides the color type shared with the particle engine, the bright
//! confetti palette, and the board's style configuration.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The eight bright confetti colors.
pub fn confetti_palette() -> Vec<Color> {
	vec![
		Color::rgb(255, 0, 0),   // Red
		Color::rgb(255, 235, 4), // Yellow
		Color::rgb(0, 0, 255),   // Blue
		Color::rgb(0, 255, 0),   // Green
		Color::rgb(0, 255, 255), // Cyan
		Color::rgb(255, 0, 255), // Magenta
		Color::rgb(255, 128, 0), // Orange
		Color::rgb(255, 0, 128), // Pink
	]
}

/// Background and toolbar colors.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	pub toolbar: Color,
}

/// Status column style.
#[derive(Clone, Debug)]
pub struct ColumnStyle {
	pub fill: Color,
	/// Fill used for the column under the pointer while dragging
	pub drop_highlight: Color,
	pub title_color: Color,
	pub title_font: String,
	/// Dash pattern (dash, gap) for the drop target outline
	pub dash: (f64, f64),
}

/// Category header and task card style.
#[derive(Clone, Debug)]
pub struct CardStyle {
	pub header_fill: Color,
	pub header_focused: Color,
	pub header_text: Color,
	pub header_font: String,
	pub task_fill: Color,
	pub task_text: Color,
	pub task_font: String,
	pub remove_color: Color,
}

/// Floating drag preview style.
#[derive(Clone, Debug)]
pub struct PreviewStyle {
	pub fill: Color,
	pub text: Color,
	pub width: f64,
	pub height: f64,
}

/// Glyph burst rendering.
#[derive(Clone, Debug)]
pub struct GlyphStyle {
	pub glyph: &'static str,
	pub color: Color,
	pub font_family: &'static str,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Name accepted by [`Theme::from_name`].
	pub name: &'static str,
	/// Canvas and toolbar backdrop.
	pub background: BackgroundStyle,
	/// Status columns.
	pub column: ColumnStyle,
	/// Category headers and task cards.
	pub card: CardStyle,
	/// Floating preview of the dragged task.
	pub preview: PreviewStyle,
	/// Glyph burst appearance.
	pub glyph: GlyphStyle,
}

impl Theme {
	/// Dark board (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				toolbar: Color::rgb(30, 35, 42),
			},
			column: ColumnStyle {
				fill: Color::rgba(255, 255, 255, 0.03),
				drop_highlight: Color::rgba(140, 160, 180, 0.12),
				title_color: Color::rgb(200, 210, 220),
				title_font: "bold 13px sans-serif".into(),
				dash: (6.0, 4.0),
			},
			card: CardStyle {
				header_fill: Color::rgb(45, 52, 62),
				header_focused: Color::rgb(60, 72, 88),
				header_text: Color::rgb(230, 235, 240),
				header_font: "bold 13px sans-serif".into(),
				task_fill: Color::rgb(38, 44, 52),
				task_text: Color::rgb(215, 220, 225),
				task_font: "12px sans-serif".into(),
				remove_color: Color::rgb(200, 90, 90),
			},
			preview: PreviewStyle {
				fill: Color::rgba(70, 80, 95, 0.9),
				text: Color::rgb(255, 255, 255),
				width: 200.0,
				height: 25.0,
			},
			glyph: GlyphStyle {
				glyph: "\u{263A}",
				color: Color::rgb(255, 255, 0),
				font_family: "sans-serif",
			},
		}
	}

	/// Light board for bright rooms
	pub fn paper() -> Self {
		let mut theme = Self::default_theme();
		theme.name = "paper";
		theme.background = BackgroundStyle {
			color: Color::rgb(244, 241, 234),
			toolbar: Color::rgb(230, 226, 216),
		};
		theme.column.fill = Color::rgba(0, 0, 0, 0.03);
		theme.column.drop_highlight = Color::rgba(90, 110, 140, 0.15);
		theme.column.title_color = Color::rgb(60, 60, 70);
		theme.card.header_fill = Color::rgb(220, 214, 200);
		theme.card.header_focused = Color::rgb(205, 196, 176);
		theme.card.header_text = Color::rgb(40, 40, 45);
		theme.card.task_fill = Color::rgb(255, 253, 248);
		theme.card.task_text = Color::rgb(50, 50, 55);
		theme.preview.fill = Color::rgba(60, 60, 70, 0.85);
		theme.glyph.color = Color::rgb(230, 180, 0);
		theme
	}

	/// Look up a built-in theme by its name.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_theme()),
			"paper" => Some(Self::paper()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
