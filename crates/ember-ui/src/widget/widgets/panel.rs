//! Generic child-holding widget.

use ember_ui_core::Signal;

use crate::error::ContainerError;
use crate::widget::base::WidgetBase;
use crate::widget::traits::{Container, Widget, WidgetRef};

/// A plain container widget holding an ordered list of children.
///
/// Panels can be locked, after which the child collection is read-only and
/// mutations fail with [`ContainerError::ReadOnly`].
///
/// # Signals
///
/// - `children_changed(())`: emitted when a child is added or removed
pub struct Panel {
    /// Widget base.
    base: WidgetBase,

    /// Child widgets, in order.
    children: Vec<WidgetRef>,

    /// Whether child mutations are currently rejected.
    locked: bool,

    /// Signal emitted when children are added or removed.
    pub children_changed: Signal<()>,
}

impl Panel {
    /// Create an empty, unlocked panel.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            children: Vec::new(),
            locked: false,
            children_changed: Signal::new(),
        }
    }

    /// Check if the panel rejects child mutations.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock or unlock the child collection.
    pub fn set_locked(&mut self, locked: bool) {
        if self.locked != locked {
            self.locked = locked;
            self.base.property_changed.emit("locked");
        }
    }

    /// Check whether a widget is among the children.
    pub fn contains(&self, child: &WidgetRef) -> bool {
        self.children.iter().any(|c| c.ptr_eq(child))
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Container for Panel {
    fn children(&self) -> Vec<WidgetRef> {
        self.children.clone()
    }

    fn is_read_only(&self) -> bool {
        self.locked
    }

    fn add_child(&mut self, child: WidgetRef) -> Result<(), ContainerError> {
        if self.locked {
            return Err(ContainerError::ReadOnly);
        }
        self.children.push(child);
        self.base.update();
        self.children_changed.emit(());
        Ok(())
    }

    fn remove_child(&mut self, child: &WidgetRef) -> Result<bool, ContainerError> {
        if self.locked {
            return Err(ContainerError::ReadOnly);
        }
        let before = self.children.len();
        self.children.retain(|c| !c.ptr_eq(child));
        let removed = self.children.len() != before;
        if removed {
            self.base.update();
            self.children_changed.emit(());
        }
        Ok(removed)
    }
}

static_assertions::assert_impl_all!(Panel: Send, Sync);
