//! Discrete Particle Swarm Optimization for the TSP.
//!
//! Each particle holds a current tour and its personal best (pbest). A
//! velocity is a list of swap operators: the sequence turning pbest into the
//! current tour (each applied with probability `alfa`), followed by the
//! sequence turning gbest into it (probability `beta`). Velocities are
//! rebuilt every iteration; only pbest and gbest carry memory.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: swarm size, iterations, `alfa`/`beta`
//! - [`PsoRunner`]: executes the iteration loop
//! - [`Swarm`], [`Particle`], [`GlobalBest`]: swarm state
//! - [`SwapOperator`], [`swap_sequence`], [`apply_velocity`]: velocity algebra
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Wang et al. (2003), "Particle Swarm Optimization for Traveling Salesman Problem"

mod config;
mod particle;
mod runner;
mod swarm;

pub use config::PsoConfig;
pub use particle::{apply_velocity, swap_sequence, Particle, SwapOperator};
pub use runner::{PsoResult, PsoRunner};
pub use swarm::{GlobalBest, Swarm};
