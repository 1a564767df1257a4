// Components module - reusable UI building blocks
//
// Shell components are rendered in every layout:
// - Title bar: App name, API endpoint, request spinner
// - Category bar: Category filter chips
// - Status bar: Trip counts, theme, key hints
//
// Panels own their scroll/selection state and implement the traits in
// `tui::traits`: trips list, detail view, system logs.

pub mod category_bar;
pub mod detail_panel;
pub mod formatters;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod trips_panel;

pub use toast::Toast;
