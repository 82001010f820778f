//! List view toolbar actions
//!
//! The onload hook registers inner buttons here; the host dispatches click
//! events back by label. Handlers are fire-and-forget and take no
//! arguments.

use crate::errors::ListViewError;

/// Click handler for a toolbar action
pub type ActionHandler = Box<dyn Fn() + Send>;

/// One registered inner button
pub struct ToolbarAction {
    label: String,
    handler: ActionHandler,
}

/// The list view's action bar
#[derive(Default)]
pub struct Toolbar {
    actions: Vec<ToolbarAction>,
}

impl Toolbar {
    /// Create an empty toolbar
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an inner button with the given label and click handler
    pub fn add_inner_button(
        &mut self,
        label: impl Into<String>,
        handler: impl Fn() + Send + 'static,
    ) {
        let label = label.into();
        log::debug!("toolbar: registering inner button '{}'", label);
        self.actions.push(ToolbarAction {
            label,
            handler: Box::new(handler),
        });
    }

    /// Labels of all registered actions, in registration order
    pub fn labels(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.label.as_str()).collect()
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are registered
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Invoke the handler bound to `label` exactly once
    pub fn click(&self, label: &str) -> Result<(), ListViewError> {
        let action = self
            .actions
            .iter()
            .find(|a| a.label == label)
            .ok_or_else(|| ListViewError::UnknownAction(label.to_string()))?;
        (action.handler)();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn click_invokes_handler_once_per_click() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);

        let mut toolbar = Toolbar::new();
        toolbar.add_inner_button("Sync Stores", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        toolbar.click("Sync Stores").unwrap();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        toolbar.click("Sync Stores").unwrap();
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn click_on_unknown_label_is_an_error() {
        let toolbar = Toolbar::new();
        let err = toolbar.click("Nope").unwrap_err();
        assert!(matches!(err, ListViewError::UnknownAction(_)));
    }
}
