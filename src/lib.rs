//! Learn & Play - terminal mini-games for young learners
//!
//! This library provides:
//! - Snake simulation (game module)
//! - Letter, number and colour matching rounds (rounds module)
//! - Session results and the sink that receives them (session module)
//! - XP, badges and their JSON persistence (progress module)
//! - TUI rendering, input mapping and the interactive modes

pub mod config;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod progress;
pub mod render;
pub mod rounds;
pub mod session;
