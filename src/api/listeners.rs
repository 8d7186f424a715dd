use std::fmt;

/// Single-slot selection callback.
///
/// Registering replaces the previous callback; there is no multicast. Firing
/// an empty slot drops the event.
pub struct SelectionListener<T> {
    callback: Option<Box<dyn FnMut(&[T])>>,
}

impl<T> SelectionListener<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { callback: None }
    }

    pub fn set(&mut self, callback: impl FnMut(&[T]) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear(&mut self) {
        self.callback = None;
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    pub fn notify(&mut self, selection: &[T]) {
        if let Some(callback) = self.callback.as_mut() {
            callback(selection);
        }
    }
}

impl<T> Default for SelectionListener<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SelectionListener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionListener")
            .field("is_set", &self.is_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::SelectionListener;

    #[test]
    fn empty_slot_drops_events() {
        let mut listener = SelectionListener::<u32>::new();
        assert!(!listener.is_set());
        listener.notify(&[1, 2, 3]);
    }

    #[test]
    fn last_registration_wins() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut listener = SelectionListener::<u32>::new();

        let first = Rc::clone(&hits);
        listener.set(move |selection| first.borrow_mut().push(("first", selection.len())));
        let second = Rc::clone(&hits);
        listener.set(move |selection| second.borrow_mut().push(("second", selection.len())));

        listener.notify(&[7, 8]);
        assert_eq!(hits.borrow().as_slice(), &[("second", 2)]);

        listener.clear();
        listener.notify(&[7]);
        assert_eq!(hits.borrow().len(), 1);
    }
}
