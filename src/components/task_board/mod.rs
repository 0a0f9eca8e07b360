//! Task board with drag-and-drop status changes and particle bursts.
//!
//! Renders a categorized to-do board on an HTML canvas with:
//! - Three status columns (Not Done, Working On, Done) that act as drop zones
//! - Dragging task cards between columns, with a floating preview
//! - Confetti when a task lands in Done, smiley glyphs when it lands in Working On
//! - Collapsible categories, remove buttons and wheel scrolling
//!
//! The particle engine, drag controller and effect policy have no browser
//! dependency and can be driven directly through [`BoardState`].
//!
//! # Example
//!
//! ```ignore
//! use task_board_bursts::{BoardData, TaskBoardCanvas};
//!
//! let data: BoardData = serde_json::from_str(r#"{ "categories": [] }"#)?;
//! view! { <TaskBoardCanvas data=Signal::derive(move || data.clone()) fullscreen=true /> }
//! ```

mod component;
mod drag;
mod effects;
mod geometry;
mod layout;
mod particles;
mod render;
mod state;
mod theme;
mod types;

pub use component::TaskBoardCanvas;
pub use effects::{EffectKind, EffectPolicy};
pub use geometry::{Rect, Vec2};
pub use particles::{Particle, ParticleSystem};
pub use state::BoardState;
pub use theme::Theme;
pub use types::{BoardData, Category, Task, TaskKey, TaskStatus};
