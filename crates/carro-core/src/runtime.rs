use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scope::Scope;
use crate::{Deps, Dispose, EffectFn, Host, Signal};

/// Positional value slots (sequential composition only).
#[derive(Default)]
struct Composer {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
}

struct EffectSlot {
    deps: Deps,
    cleanup: Option<Dispose>,
}

/// Reference [`Host`]: one component instance.
///
/// - Values are positional: the Nth `get_or_create_value` call of a render
///   always returns the Nth slot.
/// - Effects registered during [`render`](Instance::render) are committed after
///   the render closure returns, in registration order. An effect runs when it
///   is new or its dependency list differs from the previous render's list at
///   the same position; the previous cleanup runs first.
/// - [`unmount`](Instance::unmount) runs every outstanding cleanup once.
#[derive(Clone)]
pub struct Instance {
    inner: Rc<InstanceInner>,
}

struct InstanceInner {
    composer: RefCell<Composer>,
    effects: Rc<RefCell<Vec<EffectSlot>>>,
    pending: RefCell<Vec<(EffectFn, Deps)>>,
    dirty: Rc<Cell<bool>>,
    renders: Cell<u64>,
    scope: Scope,
}

impl Instance {
    pub fn new() -> Self {
        Self::with_scope(Scope::new())
    }

    fn with_scope(scope: Scope) -> Self {
        let effects: Rc<RefCell<Vec<EffectSlot>>> = Rc::default();
        scope.add_disposer({
            let effects = effects.clone();
            move || {
                let slots = std::mem::take(&mut *effects.borrow_mut());
                for slot in slots {
                    if let Some(d) = slot.cleanup {
                        d.run();
                    }
                }
            }
        });

        Self {
            inner: Rc::new(InstanceInner {
                composer: RefCell::new(Composer::default()),
                effects,
                pending: RefCell::new(Vec::new()),
                dirty: Rc::new(Cell::new(false)),
                renders: Cell::new(0),
                scope,
            }),
        }
    }

    /// Instance whose cleanups run when this one unmounts.
    pub fn child(&self) -> Instance {
        Self::with_scope(self.inner.scope.child())
    }

    /// Runs one render pass followed by the effect commit.
    pub fn render<R>(&self, f: impl FnOnce(&Instance) -> R) -> R {
        self.begin();
        let out = f(self);
        self.commit();
        out
    }

    /// True once a value slot was written since the last render began.
    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.get()
    }

    pub fn render_count(&self) -> u64 {
        self.inner.renders.get()
    }

    pub fn is_unmounted(&self) -> bool {
        self.inner.scope.is_disposed()
    }

    pub fn unmount(&self) {
        log::debug!("Instance::unmount after {} renders", self.render_count());
        self.inner.scope.dispose();
    }

    fn begin(&self) {
        self.inner.composer.borrow_mut().cursor = 0;
        self.inner.pending.borrow_mut().clear();
        self.inner.dirty.set(false);
        self.inner.renders.set(self.inner.renders.get() + 1);
    }

    fn commit(&self) {
        let pending = std::mem::take(&mut *self.inner.pending.borrow_mut());
        if self.is_unmounted() {
            log::warn!(
                "Instance: render after unmount; dropping {} effects",
                pending.len()
            );
            return;
        }

        let count = pending.len();
        {
            let known = self.inner.effects.borrow().len();
            if self.render_count() > 1 && known != count {
                log::warn!(
                    "Instance: effect count changed from {known} to {count}. \
                     Effects are positional; declare them unconditionally."
                );
            }
        }

        for (index, (effect, deps)) in pending.into_iter().enumerate() {
            let previous = {
                let mut effects = self.inner.effects.borrow_mut();
                match effects.get_mut(index) {
                    Some(slot) if slot.deps == deps => continue,
                    Some(slot) => {
                        slot.deps = deps;
                        slot.cleanup.take()
                    }
                    None => {
                        effects.push(EffectSlot {
                            deps,
                            cleanup: None,
                        });
                        None
                    }
                }
            };

            if let Some(d) = previous {
                d.run();
            }
            log::debug!("Instance: running effect #{index}");
            // No borrows held: bodies may write state.
            let cleanup = effect();
            if let Some(slot) = self.inner.effects.borrow_mut().get_mut(index) {
                slot.cleanup = cleanup;
            }
        }

        let stale = {
            let mut effects = self.inner.effects.borrow_mut();
            if effects.len() > count {
                effects.split_off(count)
            } else {
                Vec::new()
            }
        };
        for slot in stale {
            if let Some(d) = slot.cleanup {
                d.run();
            }
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Instance {
    fn register_effect(&self, effect: EffectFn, dependencies: Deps) {
        self.inner.pending.borrow_mut().push((effect, dependencies));
    }

    fn get_or_create_value<T: Clone + 'static>(&self, init: impl FnOnce() -> T) -> Signal<T> {
        let cursor = {
            let mut c = self.inner.composer.borrow_mut();
            let cursor = c.cursor;
            c.cursor += 1;

            if let Some(existing) = c.slots.get(cursor) {
                if let Some(sig) = existing.downcast_ref::<Signal<T>>() {
                    return sig.clone();
                }
                log::warn!(
                    "get_or_create_value: slot {} type changed; replacing. \
                     Slots are positional; avoid calling hooks conditionally.",
                    cursor
                );
            }
            cursor
        };

        // `init` runs without the composer borrowed.
        let sig = Signal::new(init());
        let dirty = self.inner.dirty.clone();
        sig.subscribe(move |_| dirty.set(true));

        let mut c = self.inner.composer.borrow_mut();
        if cursor < c.slots.len() {
            c.slots[cursor] = Box::new(sig.clone());
        } else {
            c.slots.push(Box::new(sig.clone()));
        }
        sig
    }
}
