use countdown_core::Clearable;
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

/// Parent-owned handle to a mounted countdown widget.
///
/// The widget registers its clear action while mounted; calling
/// [`Clearable::clear_data`] with nothing mounted does nothing.
#[derive(Clone, Default)]
pub struct CountdownHandle {
    slot: Rc<RefCell<Option<Callback<()>>>>,
}

impl CountdownHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&self, clear: Callback<()>) {
        self.slot.replace(Some(clear));
    }

    pub(crate) fn unregister(&self) {
        self.slot.replace(None);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl PartialEq for CountdownHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl std::fmt::Debug for CountdownHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownHandle")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

impl Clearable for CountdownHandle {
    fn clear_data(&self) {
        let clear = self.slot.borrow().clone();
        match clear {
            Some(clear) => clear.emit(()),
            None => log::debug!("clear_data called with no countdown mounted"),
        }
    }
}
