//! Cooperative single-threaded executor for deferred units of work
//!
//! Scheduling pushes a unit onto a pending stack; draining pops and runs
//! units until the stack is empty. A running unit may schedule further
//! units, which run before anything scheduled earlier. Nothing runs on
//! another thread and nothing runs outside [`StackExecutor::drain`].

/// A deferred unit of work operating on shared context `C`
pub type Unit<'a, C> = Box<dyn FnOnce(&mut C, &mut StackExecutor<'a, C>) + 'a>;

/// LIFO queue of units drained synchronously by the caller
pub struct StackExecutor<'a, C> {
    pending: Vec<Unit<'a, C>>,
    executed: usize,
}

impl<C> Default for StackExecutor<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C> StackExecutor<'a, C> {
    /// Create an executor with nothing scheduled
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            executed: 0,
        }
    }

    /// Defer `unit` until the next drain
    pub fn schedule<F>(&mut self, unit: F)
    where
        F: FnOnce(&mut C, &mut Self) + 'a,
    {
        self.pending.push(Box::new(unit));
    }

    /// Run units, most recently scheduled first, until none remain
    ///
    /// Returns the number of units run by this call.
    pub fn drain(&mut self, context: &mut C) -> usize {
        let before = self.executed;
        while let Some(unit) = self.pending.pop() {
            self.executed += 1;
            unit(context, self);
        }
        self.executed - before
    }

    /// Number of units waiting to run
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total units run over the executor's lifetime
    pub const fn executed(&self) -> usize {
        self.executed
    }
}
