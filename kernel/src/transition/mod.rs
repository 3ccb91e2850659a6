//! Transition function: which actions are legal from a state, what they cost,
//! and what state they lead to.

pub mod action;
pub mod cost;
pub mod successors;
