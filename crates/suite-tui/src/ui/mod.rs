pub mod app;
mod footer;
mod header;
mod menu;
pub mod page;
