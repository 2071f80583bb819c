//! # System Lifecycle
//!
//! [`KitchenSystem`] creates the three actors, starts them with their context and shuts them
//! down by dropping its clients.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for Product { type Context = (); }
//! impl ActorEntity for Recipe  { type Context = (); }
//! impl ActorEntity for Menu    { type Context = (RecipeClient, ProductClient); }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. Drop all clients held by the system.
//! 2. The menu actor's channel closes; it exits and drops its context clients.
//! 3. The recipe and catalog channels then close and those actors exit.
//! 4. `shutdown` awaits each task and reports a panicked actor as an error.
//!
//! The dependency graph is acyclic, so channel closure is enough.
//!
//! ## Tracing
//!
//! Call [`setup_tracing`] once at startup; the level comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info recetario --backup recetario.json
//! RUST_LOG=debug recetario --backup recetario.json   # request payloads and snapshots
//! ```

pub mod kitchen_system;

pub use kitchen_system::*;
pub use resource_actor::tracing::setup_tracing;
