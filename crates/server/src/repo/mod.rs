pub mod account;
pub mod admin;
pub mod customer;
pub mod order;
pub mod overview;
pub mod product;
pub mod refresh_token;
pub mod settings;
pub mod vendor;
