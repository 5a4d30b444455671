//! Bus route tracker server.
//!
//! A web application that answers: "which routes take me to this
//! destination, and when does the first bus leave?"

pub mod auth;
pub mod cache;
pub mod domain;
pub mod favorites;
pub mod feed;
pub mod web;
