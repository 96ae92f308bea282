//! # Payloads, Effects, and State
//!
//! Carro lets a component describe its whole reactive surface as one
//! structured [`Payload`] instead of a series of separate host calls. There are
//! four pieces:
//!
//! - [`use_carro`] — normalizes a payload into a [`Carro`] record.
//! - [`register_effects`] — hands each declared effect to the host, in order.
//! - [`use_state`] — a host slot that accepts partial (shallow-merge) updates.
//! - [`create_component_hook`] — turns a payload function into a hook.
//!
//! Everything is forwarded to a [`Host`], which owns storage and scheduling.
//! [`Instance`] is a small reference host; any other runtime can implement the
//! trait.
//!
//! ## Payloads
//!
//! ```rust
//! use carro_core::*;
//!
//! let instance = Instance::new();
//! let carro = instance.render(|host| {
//!     let mut initial = StateMap::new();
//!     initial.insert("count".into(), 0.into());
//!     let (state, _set_state) = use_state(host, initial);
//!     use_carro(host, Payload::new().state(state))
//! });
//!
//! assert_eq!(carro.state["count"], 0);
//! assert!(carro.events.is_empty());
//! ```
//!
//! Omitted fields become empty mappings. With
//! [`CarroConfig::strict`] and [`use_carro_with`] they are rejected instead.
//!
//! ## Effects and cleanup
//!
//! Effects are `(dependencies, body)` pairs. The host runs a body when its
//! dependency list changed since the previous render; an empty list runs once.
//!
//! ```rust
//! use carro_core::*;
//!
//! let instance = Instance::new();
//! for _ in 0..3 {
//!     instance.render(|host| {
//!         use_carro(
//!             host,
//!             Payload::new().effect_with_cleanup(deps![], || {
//!                 log::info!("mounted");
//!                 on_unmount(|| log::info!("unmounted"))
//!             }),
//!         )
//!     });
//! }
//! instance.unmount();
//! ```
//!
//! ## Partial state updates
//!
//! [`SetState::set`] merges onto the latest value. [`MergeMode::Nested`]
//! reproduces the older convention that stored the partial under
//! [`NESTED_UPDATE_KEY`] instead.

pub mod config;
pub mod deps;
pub mod effects;
pub mod error;
pub mod factory;
pub mod host;
pub mod normalize;
pub mod payload;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod state;

pub use config::*;
pub use deps::*;
pub use effects::*;
pub use error::*;
pub use factory::*;
pub use host::*;
pub use normalize::*;
pub use payload::*;
pub use runtime::*;
pub use signal::*;
pub use state::*;
