// Application layer - Panels, routing and remote-call orchestration
pub mod controller;
pub mod dashboard_panel;
pub mod gateway;
pub mod log_panel;
pub mod notifier;
pub mod settings_editor;
pub mod view_router;
