//! A developer portfolio with two faces: a scrolling page and a small
//! walkable town whose residents present the same content.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod content;
pub mod entity;
pub mod game;
pub mod relay;
pub mod ui;

mod app;
pub use app::{AppMode, PortfolioApp};
