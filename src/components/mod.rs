//! UI components.

pub mod task_board;
