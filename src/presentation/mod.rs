// Presentation layer - Thin terminal surface over the application core
pub mod input;
pub mod screen;
pub mod ui;
