use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::{Deps, Dispose, Effect};

/// String-keyed mapping of arbitrary values. Default shape of `state` and `computed`.
pub type StateMap = serde_json::Map<String, Value>;
pub type Computed = StateMap;

pub type EventHandler = Rc<dyn Fn(&Value)>;
pub type Method = Rc<dyn Fn(&[Value]) -> Value>;
pub type Mutation = Rc<dyn Fn(Value)>;

pub type Events = BTreeMap<String, EventHandler>;
pub type Methods = BTreeMap<String, Method>;
pub type Mutations = BTreeMap<String, Mutation>;

/// Caller-built description of a component's reactive surface.
///
/// Every field is optional here; the normalizer fills in `Default::default()`
/// (an empty mapping for the default shapes) or rejects the payload in strict
/// mode. Any of the mapping types can be swapped for a caller struct that
/// implements `Default`.
pub struct Payload<
    C = Computed,
    Ev = Events,
    M = Methods,
    Mu = Mutations,
    S = StateMap,
> {
    pub computed: Option<C>,
    pub effects: Option<Vec<Effect>>,
    pub events: Option<Ev>,
    pub methods: Option<M>,
    pub mutations: Option<Mu>,
    pub state: Option<S>,
}

impl<C, Ev, M, Mu, S> Default for Payload<C, Ev, M, Mu, S> {
    fn default() -> Self {
        Self {
            computed: None,
            effects: None,
            events: None,
            methods: None,
            mutations: None,
            state: None,
        }
    }
}

impl<C, Ev, M, Mu, S> Clone for Payload<C, Ev, M, Mu, S>
where
    C: Clone,
    Ev: Clone,
    M: Clone,
    Mu: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            computed: self.computed.clone(),
            effects: self.effects.clone(),
            events: self.events.clone(),
            methods: self.methods.clone(),
            mutations: self.mutations.clone(),
            state: self.state.clone(),
        }
    }
}

impl Payload {
    /// Empty payload with the default dynamic shapes. For caller-defined field
    /// types use `Payload::<..>::default()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, Ev, M, Mu, S> Payload<C, Ev, M, Mu, S> {
    pub fn computed(mut self, computed: C) -> Self {
        self.computed = Some(computed);
        self
    }

    pub fn effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = Some(effects);
        self
    }

    /// Appends one effect; declaration order is registration order.
    pub fn effect(mut self, dependencies: Deps, effect: impl Fn() + 'static) -> Self {
        self.effects
            .get_or_insert_with(Vec::new)
            .push(Effect::new(dependencies, effect));
        self
    }

    pub fn effect_with_cleanup(
        mut self,
        dependencies: Deps,
        effect: impl Fn() -> Dispose + 'static,
    ) -> Self {
        self.effects
            .get_or_insert_with(Vec::new)
            .push(Effect::with_cleanup(dependencies, effect));
        self
    }

    pub fn events(mut self, events: Ev) -> Self {
        self.events = Some(events);
        self
    }

    pub fn methods(mut self, methods: M) -> Self {
        self.methods = Some(methods);
        self
    }

    pub fn mutations(mut self, mutations: Mu) -> Self {
        self.mutations = Some(mutations);
        self
    }

    pub fn state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }
}

/// Normalized record: every field present, effects already handed to the host.
///
/// `Debug` and `PartialEq` only apply when every field type has them. The
/// default `Events`, `Methods` and `Mutations` maps hold `Rc<dyn Fn>` and have
/// neither, so compare their fields one by one or use caller-defined types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Carro<
    C = Computed,
    Ev = Events,
    M = Methods,
    Mu = Mutations,
    S = StateMap,
> {
    pub computed: C,
    pub events: Ev,
    pub methods: M,
    pub mutations: Mu,
    pub state: S,
}

