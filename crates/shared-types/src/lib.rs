pub mod config;
pub mod error;
pub mod models;
pub mod requests;
pub mod session;

// Dashboard domain modules (canonical locations for all marketplace types)
pub mod customer;
pub mod fallback;
pub mod listing;
pub mod order;
pub mod overview;
pub mod product;
pub mod settings;
pub mod vendor;

pub use config::*;
pub use error::*;
pub use models::*;
pub use requests::*;
pub use session::*;

// Re-export all domain types
pub use customer::*;
pub use fallback::*;
pub use listing::*;
pub use order::*;
pub use overview::*;
pub use product::*;
pub use settings::*;
pub use vendor::*;
