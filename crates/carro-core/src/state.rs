use std::rc::Rc;

use serde_json::Value;

use crate::{CarroConfig, Host, MergeMode, Signal, StateMap};

/// Key a partial update is stored under in [`MergeMode::Nested`].
pub const NESTED_UPDATE_KEY: &str = "newState";

/// Updater half of [`use_state`]. Cheap to clone; all clones write the same slot.
#[derive(Clone)]
pub struct SetState {
    slot: Signal<StateMap>,
    mode: MergeMode,
}

impl SetState {
    /// Shallow-merges `partial` onto the latest committed value and replaces the slot.
    ///
    /// The base is the slot as it is now, not the value returned by the render
    /// that created this setter, so several calls between renders all apply.
    pub fn set(&self, partial: StateMap) {
        let mut next = self.slot.get();
        merge_into(&mut next, partial, self.mode);
        log::debug!("SetState::set: {} keys after merge", next.len());
        self.slot.set(next);
    }

    /// Like [`set`](Self::set), with the partial computed from the latest value.
    pub fn update(&self, f: impl FnOnce(&StateMap) -> StateMap) {
        let partial = self.slot.with(f);
        self.set(partial);
    }

    pub fn mode(&self) -> MergeMode {
        self.mode
    }

    /// Boxed form, for storing in a [`Mutations`](crate::Mutations) map.
    pub fn into_mutation(self) -> Rc<dyn Fn(Value)> {
        Rc::new(move |v| match v {
            Value::Object(partial) => self.set(partial),
            other => log::warn!("SetState: ignoring non-object partial {other}"),
        })
    }
}

pub fn merge_into(target: &mut StateMap, partial: StateMap, mode: MergeMode) {
    match mode {
        MergeMode::Spread => target.extend(partial),
        MergeMode::Nested => {
            target.insert(NESTED_UPDATE_KEY.to_string(), Value::Object(partial));
        }
    }
}

/// Stateful value with partial updates, in [`MergeMode::Spread`].
pub fn use_state<H: Host>(host: &H, initial: StateMap) -> (StateMap, SetState) {
    use_state_with(host, &CarroConfig::default(), initial)
}

/// Stateful value with partial updates, merging per `config.merge_mode`.
///
/// `initial` is only used the first time this call position is reached.
pub fn use_state_with<H: Host>(
    host: &H,
    config: &CarroConfig,
    initial: StateMap,
) -> (StateMap, SetState) {
    let slot = host.get_or_create_value(move || initial);
    let value = slot.get();
    (
        value,
        SetState {
            slot,
            mode: config.merge_mode,
        },
    )
}
