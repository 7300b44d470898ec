//! Depot - minimal file drop server
//!
//! Core library for the connection loop, request parsing and routing.

pub mod config;
pub mod http;
pub mod server;
