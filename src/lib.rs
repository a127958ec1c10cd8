pub mod config;
pub mod guard;
pub mod host;
pub mod protocol;
pub mod rng;
pub mod session;
pub mod state;
pub mod ticker;
pub mod types;
pub mod view;
pub mod words;
