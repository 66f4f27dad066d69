pub mod api;
pub mod components;
pub mod page;
pub mod pagination;
pub mod rate_limiter;
pub mod sort;
pub mod state;
pub mod view_model;
