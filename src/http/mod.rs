//! HTTP protocol handling.
//!
//! This module implements the small HTTP/1.1 subset the server speaks:
//!
//! - **`connection`**: per-connection task (one read, one response, close)
//! - **`parser`**: positional request-line/header parser
//! - **`request`**: parsed request representation
//! - **`response`**: status codes and response wire assembly
//! - **`router`**: maps (method, path) to one of the fixed route behaviors
//! - **`files`**: file read and upload handlers backing the `/files/` routes
//! - **`writer`**: writes serialized responses to the client
//!
//! Control flow for each connection:
//!
//! ```text
//! read buffer -> parser -> router -> writer -> close
//! ```
//!
//! Connections are never kept alive; every request gets a fresh TCP
//! connection and exactly one response (or, for one unrouted method/path
//! combination, none at all).

pub mod connection;
pub mod files;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
