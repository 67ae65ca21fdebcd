pub mod lookup_view;
pub mod result_card;
pub mod search_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use lookup_view::{LOADING_LABEL, LookupView, LookupViewProps, TITLE};
pub use result_card::{ResultCard, ResultCardProps};
pub use search_bar::{BUTTON_LABEL, PLACEHOLDER, SearchBar, SearchBarProps};
