//! # Resource Actor
//!
//! Building blocks for keeping typed resources (catalog products, recipes, menus) in
//! isolated Tokio tasks and talking to them through typed clients.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the resource's data and its hooks.
//! 2. **Runtime** ([`ResourceActor`]): owns the store, processes one request at a time.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async requests.
//!
//! Business rules live in the entity; the actor only routes Create / Get / Update /
//! Delete / Action / List / Restore requests to it.
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`actor.run(context)`), not when it is
//! built. A menu actor can therefore receive the recipe and catalog clients as its context
//! and call them from `handle_action`, while all three actors are constructed independently.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests are handled sequentially within an actor, so stores need no locks.
//! - Actors exit when every client clone has been dropped.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations, which isolates an
//! actor from the actors in its context.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
