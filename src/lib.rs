//! # Pellet Chase
//!
//! Decision-making agents for a budgeted maze-chase simulation. The
//! interesting agents run stochastic local search over fixed-length action
//! sequences: a hill climber that perturbs one retained plan, and a genetic
//! algorithm with rank-based selection, uniform crossover, and point
//! mutation over a small population of plans.
//!
//! ## Modules
//!
//! - [`sim`] — `Simulation` facade trait the agents search against
//! - [`ai`] — Agent trait, sequence rollout, search and baseline agents
//! - [`game`] — A small self-contained maze game implementing the facade
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod sim;
