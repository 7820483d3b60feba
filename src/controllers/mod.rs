pub mod auth_controller;
pub mod call_controller;
pub mod code_controller;
pub mod stats_controller;
pub mod user_controller;
