// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;
pub mod textarea;

// Simple primitive wrappers
pub mod label;
pub mod progress;
pub mod separator;

// Compound primitive wrappers
pub mod tabs;

// Overlay/popup wrappers
pub mod alert_dialog;
pub mod dialog;

// Navigation & special
pub mod navbar;
pub mod toast;

// Depends on nothing else in the kit, but pages pair it with navbar
pub mod sidebar;

// Re-exports for convenience
pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use progress::*;
pub use search_bar::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
