// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;
pub mod textarea;

// Simple primitive wrappers
pub mod label;
pub mod separator;
pub mod switch;

// Compound primitive wrappers
pub mod tabs;

// Overlay/popup wrappers
pub mod alert_dialog;
pub mod dialog;
pub mod dropdown_menu;

// Navigation & complex
pub mod navbar;

// Special
pub mod avatar;
pub mod toast;

// Depends on button and separator styling
pub mod sidebar;

// Re-exports for convenience
pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use switch::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
