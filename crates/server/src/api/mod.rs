#[cfg(feature = "server")]
pub(crate) mod auth;

mod session;
pub use session::*;

mod overview;
pub use overview::*;

mod customer;
pub use customer::*;

mod vendor;
pub use vendor::*;

mod product;
pub use product::*;

mod order;
pub use order::*;

mod settings;
pub use settings::*;
