//! UI Components
//!
//! Reusable Leptos components.

mod board_toolbar;
mod dashboard;
mod delete_confirm_button;
mod login_page;
mod navbar;
mod signup_page;
mod task_card;
mod task_column;
mod task_modal;
mod toast_stack;

pub use board_toolbar::BoardToolbar;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use navbar::Navbar;
pub use signup_page::SignupPage;
pub use task_card::TaskCard;
pub use task_column::TaskColumn;
pub use task_modal::{ModalMode, TaskModal};
pub use toast_stack::ToastStack;
