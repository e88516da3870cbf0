//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **db_handler**: reqwest client for the DB Handler HTTP API.
//!
//! Adapters are thin translators between transport representations and the
//! port types. They contain no business logic.

pub mod db_handler;
