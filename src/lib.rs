/// A single optional callback slot.
///
/// Widgets own one of these per event they report. An empty slot is valid and
/// calling it does nothing.
pub struct Handler<T> {
    callback: Option<Box<dyn FnMut(T)>>,
}

impl<T> Handler<T> {
    pub const fn new() -> Self {
        Handler { callback: None }
    }
    pub fn set<F>(&mut self, f: F)
    where
        F: FnMut(T) + 'static,
    {
        self.callback = Some(Box::new(f));
    }
    pub fn clear(&mut self) {
        self.callback = None;
    }
    pub fn is_bound(&self) -> bool {
        self.callback.is_some()
    }
    /// Invokes the callback if one is bound. Returns whether it ran.
    pub fn call(&mut self, param: T) -> bool {
        if let Some(callback) = self.callback.as_mut() {
            callback(param);
            true
        } else {
            false
        }
    }
}

impl<T> Default for Handler<T> {
    fn default() -> Self {
        Handler::new()
    }
}

impl<T> std::fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Generates `set_handler`, `with_handler` and `clear_handler` for a type
/// holding a [`Handler`] in `$member`.
#[macro_export]
macro_rules! impl_handler_setters {
    ($type:ty, $member:ident, $param:ty) => {
        impl $type {
            pub fn set_handler<F>(&mut self, f: F)
            where
                F: FnMut($param) + 'static,
            {
                self.$member.set(f);
            }
            pub fn with_handler<F>(mut self, f: F) -> Self
            where
                F: FnMut($param) + 'static,
            {
                self.$member.set(f);
                self
            }
            pub fn clear_handler(&mut self) {
                self.$member.clear();
            }
            pub fn has_handler(&self) -> bool {
                self.$member.is_bound()
            }
        }
    };
}
