//! Dependency lists for effect registration.
//!
//! A [`Deps`] is an ordered list of arbitrary comparable values. Hosts compare
//! the list from one render with the list from the previous render to decide
//! whether an effect body should run again; this crate never does.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// A single dependency: any `PartialEq + Debug` value, compared by value.
pub trait DepValue: 'static {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn DepValue) -> bool;
    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: PartialEq + fmt::Debug + 'static> DepValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DepValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Default)]
pub struct Deps(SmallVec<[Rc<dyn DepValue>; 4]>);

impl Deps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dep: impl DepValue) -> Self {
        self.push(dep);
        self
    }

    pub fn push(&mut self, dep: impl DepValue) {
        self.0.push(Rc::new(dep));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Deps {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| a.dyn_eq(&**b))
    }
}

impl fmt::Debug for Deps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Item<'a>(&'a dyn DepValue);
        impl fmt::Debug for Item<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.dyn_fmt(f)
            }
        }
        f.debug_list()
            .entries(self.0.iter().map(|d| Item(d.as_ref())))
            .finish()
    }
}

/// Builds a [`Deps`] list: `deps![]`, `deps![count, name.clone()]`.
#[macro_export]
macro_rules! deps {
    () => {
        $crate::deps::Deps::new()
    };
    ($($dep:expr),+ $(,)?) => {
        $crate::deps::Deps::new()$(.with($dep))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_by_value_and_type() {
        assert_eq!(deps![1i32, "a"], deps![1i32, "a"]);
        assert_ne!(deps![1i32], deps![2i32]);
        // same digits, different type
        assert_ne!(deps![1i32], deps![1i64]);
        assert_ne!(deps![1i32], deps![1i32, 1i32]);
        assert_eq!(deps![], Deps::new());
    }

    #[test]
    fn debug_lists_values() {
        assert_eq!(format!("{:?}", deps![3u8, "x"]), "[3, \"x\"]");
    }
}
