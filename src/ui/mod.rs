pub mod components;
pub mod context;
pub mod json;
pub mod terminal;
pub mod theme;
pub mod views;
