use std::cell::RefCell;
use std::rc::Rc;

use crate::{Deps, Host};

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }
}

/// Helper to return a cleanup from an effect body.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

/// Effect body. A returned `Dispose` runs before the next invocation and on unmount.
pub type EffectFn = Rc<dyn Fn() -> Option<Dispose>>;

/// One `(dependencies, effect)` pair of a payload.
#[derive(Clone)]
pub struct Effect {
    pub dependencies: Deps,
    pub effect: EffectFn,
}

impl Effect {
    pub fn new(dependencies: Deps, effect: impl Fn() + 'static) -> Self {
        Self {
            dependencies,
            effect: Rc::new(move || {
                effect();
                None
            }),
        }
    }

    pub fn with_cleanup(dependencies: Deps, effect: impl Fn() -> Dispose + 'static) -> Self {
        Self {
            dependencies,
            effect: Rc::new(move || Some(effect())),
        }
    }
}

/// Registers every effect with the host, in order. Bodies are shared, not copied;
/// whether and when they run is up to the host.
pub fn register_effects<H: Host>(host: &H, effects: &[Effect]) {
    for (i, Effect {
        dependencies,
        effect,
    }) in effects.iter().enumerate()
    {
        log::trace!(
            "register_effects: #{i} with {} dependencies",
            dependencies.len()
        );
        host.register_effect(effect.clone(), dependencies.clone());
    }
}
