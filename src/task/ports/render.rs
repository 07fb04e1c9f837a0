//! Render observer port.

use std::rc::Rc;

use crate::task::domain::TaskListView;

/// Receives a fresh view after every command so presentation can redraw.
pub trait RenderObserver {
    /// Redraws from `view`.
    fn render(&self, view: &TaskListView<'_>);
}

impl<T: RenderObserver + ?Sized> RenderObserver for Rc<T> {
    fn render(&self, view: &TaskListView<'_>) {
        (**self).render(view);
    }
}
