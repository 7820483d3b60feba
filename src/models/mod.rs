//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean
//! al schema PostgreSQL, más los tipos derivados del dominio.

pub mod call;
pub mod codes;
pub mod stats;
pub mod user;
pub mod vehicle;
