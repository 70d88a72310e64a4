mod context;

pub mod pages;
pub mod search;
pub mod show;
pub mod theme;
pub mod view;

pub use context::HandlerContext;
