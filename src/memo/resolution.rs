use std::fmt;
use std::hash::Hash;

/// Combines the values of required sub-states, in the order they were listed
pub type Combinator<V> = Box<dyn FnOnce(Vec<V>) -> V>;

/// A recursively defined problem the memo solvers can evaluate
///
/// Equality and hashing identify the problem; two equal states share one
/// cached value.
pub trait Solvable: Clone + Eq + Hash {
    /// Solved value
    type Value: Clone;

    /// Either the value itself or the sub-problems it is built from
    fn resolve(&self) -> Resolution<Self, Self::Value>;
}

/// Sub-problems a state depends on, and how to combine their values
pub struct Delegation<S, V> {
    required: Vec<S>,
    combine: Combinator<V>,
}

impl<S, V> Delegation<S, V> {
    /// Depend on `required`, combining their values with `combine`
    pub fn new<F>(required: Vec<S>, combine: F) -> Self
    where
        F: FnOnce(Vec<V>) -> V + 'static,
    {
        Self {
            required,
            combine: Box::new(combine),
        }
    }

    /// States whose values are needed
    pub fn required(&self) -> &[S] {
        &self.required
    }

    /// Produce the value from the required states' values
    ///
    /// `values` must hold one value per required state, in the same order.
    ///
    /// # Panics
    ///
    /// Delegations built by [`Resolution::forward`], [`Resolution::map`] and
    /// [`Resolution::combine`] panic when given fewer values than required
    /// states. The solvers always pass a full set.
    pub fn combine(self, values: Vec<V>) -> V {
        (self.combine)(values)
    }
}

impl<S: fmt::Debug, V> fmt::Debug for Delegation<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegation")
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// Outcome of resolving a single problem state
#[derive(Debug)]
pub enum Resolution<S, V> {
    /// The value is known without consulting other states
    Immediate(V),
    /// The value is derived from other states
    Delegate(Delegation<S, V>),
}

impl<S, V: 'static> Resolution<S, V> {
    /// Known value
    pub const fn immediate(value: V) -> Self {
        Self::Immediate(value)
    }

    /// Same value as `state`
    pub fn forward(state: S) -> Self {
        Self::map(state, |value| value)
    }

    /// Value of `state`, transformed
    pub fn map<F>(state: S, transform: F) -> Self
    where
        F: FnOnce(V) -> V + 'static,
    {
        Self::Delegate(Delegation::new(vec![state], move |values| {
            // A delegation over one state always receives exactly one value
            let mut values = values.into_iter();
            values.next().map_or_else(unreachable_value, transform)
        }))
    }

    /// Values of `a` and `b`, combined
    pub fn combine<F>(a: S, b: S, combine: F) -> Self
    where
        F: FnOnce(V, V) -> V + 'static,
    {
        Self::Delegate(Delegation::new(vec![a, b], move |values| {
            let mut values = values.into_iter();
            match (values.next(), values.next()) {
                (Some(first), Some(second)) => combine(first, second),
                _ => unreachable_value(),
            }
        }))
    }

    /// Values of every state in `states`, combined
    pub fn all<I, F>(states: I, combine: F) -> Self
    where
        I: IntoIterator<Item = S>,
        F: FnOnce(Vec<V>) -> V + 'static,
    {
        Self::Delegate(Delegation::new(states.into_iter().collect(), combine))
    }
}

fn unreachable_value<V>() -> V {
    unreachable!("solvers pass exactly one value per required state")
}
