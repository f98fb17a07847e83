//! UI Components
//!
//! Leptos components for the board.

mod board_column;
mod delete_task_button;
mod error_banner;
mod search_bar;
mod task_card;
mod task_modal;

pub use board_column::BoardColumn;
pub use delete_task_button::DeleteTaskButton;
pub use error_banner::ErrorBanner;
pub use search_bar::SearchBar;
pub use task_card::TaskCard;
pub use task_modal::TaskModal;
