//! Orrery core: turns a UTC instant and static planet / city catalogs
//! into display values for a globe and a set of planet cards.

pub mod age;
pub mod catalog;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod light_time;
pub mod local_time;
pub mod projection;
pub mod rotation;
pub mod snapshot;
pub mod types;
