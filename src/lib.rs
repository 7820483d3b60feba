//! Backend de registro de llamadas para conductores de MDA
//!
//! Los conductores registran llamadas (tipo, hora, lugar, vehículo), ven
//! estadísticas por ventana de tiempo y los administradores gestionan
//! usuarios y códigos de referencia.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
