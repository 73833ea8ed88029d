//! UI Components
//!
//! Leptos components for the grocery list.

mod delete_button;
mod grocery_form;
mod grocery_list;
mod grocery_row;

pub use delete_button::DeleteButton;
pub use grocery_form::GroceryForm;
pub use grocery_list::GroceryList;
pub use grocery_row::GroceryRow;
