pub mod limit;
pub mod view;
