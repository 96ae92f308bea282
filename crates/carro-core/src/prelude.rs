pub use crate::config::{CarroConfig, MergeMode};
pub use crate::deps;
pub use crate::deps::Deps;
pub use crate::effects::{Dispose, Effect, EffectFn, on_unmount, register_effects};
pub use crate::error::CarroError;
pub use crate::factory::{create_component_hook, create_component_hook_with};
pub use crate::host::Host;
pub use crate::normalize::{use_carro, use_carro_with};
pub use crate::payload::{
    Carro, Computed, EventHandler, Events, Method, Methods, Mutation, Mutations, Payload,
    StateMap,
};
pub use crate::runtime::Instance;
pub use crate::scope::Scope;
pub use crate::signal::{Signal, signal};
pub use crate::state::{NESTED_UPDATE_KEY, SetState, use_state, use_state_with};
