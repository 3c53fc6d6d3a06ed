// Domain layer - Data shapes shared with the backend contract
pub mod dashboard;
pub mod logs;
pub mod settings;
pub mod view;
