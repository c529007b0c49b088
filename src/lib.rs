//! Coursework exercises: a positional singly-linked list and the small
//! console programs (movie list, shopping cart, playlist) built around it.

pub mod cart;
pub mod config;
pub mod error;
pub mod linked_list;
pub mod logging;
pub mod menu;
pub mod movies;
pub mod playlist;

pub use config::Config;
pub use error::{AppError, ListError};
pub use linked_list::PositionalList;
