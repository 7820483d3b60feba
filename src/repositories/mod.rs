pub mod call_repository;
pub mod code_repository;
pub mod user_repository;
