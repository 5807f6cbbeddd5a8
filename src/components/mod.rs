//! UI Components
//!
//! Leptos components for the food listing page.

mod filter_bar;
mod food_card;
mod food_list;
mod search_bar;

pub use filter_bar::FilterBar;
pub use food_card::FoodCardView;
pub use food_list::FoodList;
pub use search_bar::SearchBar;
