//! Roomplan Kernel: the world model of the room-planning puzzle.
//!
//! # API Surface
//!
//! The kernel exposes three entry points:
//!
//! - [`model::compile::compile_map`] -- build the initial `WorldState` from a map description
//! - [`transition::successors::generate_successors`] -- enumerate every legal one-step action
//! - [`model::goal::GoalSpecV1::resolve`] -- turn a named goal into a matchable `GoalPattern`
//!
//! # Module Dependency Direction
//!
//! `model` ← `transition`, `model` ← `identity`
//!
//! One-way only. `model` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod identity;
pub mod model;
pub mod transition;
