use crate::{Deps, EffectFn, Signal};

/// The reactivity primitives this crate forwards to.
///
/// A host owns scheduling and storage for one component instance. Carro only
/// calls these two methods, in the order the caller declared things, once per
/// render.
pub trait Host {
    /// Associates `effect` with `dependencies`. The host decides, by comparing
    /// against the previous render's list, whether and when to run it.
    fn register_effect(&self, effect: EffectFn, dependencies: Deps);

    /// Returns the instance's persistent slot for this call position, creating
    /// it with `init` on first use. Writes replace the whole value.
    fn get_or_create_value<T: Clone + 'static>(&self, init: impl FnOnce() -> T) -> Signal<T>;
}
