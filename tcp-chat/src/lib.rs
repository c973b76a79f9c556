//! Line based multi-user chat over TCP.
//!
//! Every connection feeds its lines through the translator into a single
//! broker task, which owns the sessions, accounts and logins and writes
//! replies back into each connection's outbound queue.

pub mod broker;
pub mod chat_service;
mod codec;
mod commands;
pub mod config;
mod connection;
pub mod errors;
mod handlers;
mod http;
pub mod message;
pub mod models;
pub mod server;
pub mod stores;
pub mod translator;
