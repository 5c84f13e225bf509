//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait implemented by every UI
//! element, the [`WidgetRef`] shared handle used wherever widgets are
//! stored by reference (content, containers), and the [`Container`]
//! capability contract for widgets holding a mutable child collection.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ContainerError;
use crate::paint::Rect;

use super::base::{WidgetBase, WidgetId};

/// The core trait for all widgets.
///
/// Implementors provide access to their [`WidgetBase`]; state accessors are
/// default-implemented on top of it. `as_any` enables downcasting through
/// [`WidgetRef`] for callers that need the concrete widget type back.
pub trait Widget: Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The widget as `Any`, for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Get the widget's unique ID.
    fn id(&self) -> WidgetId {
        self.widget_base().id()
    }

    /// Get the widget's geometry.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Request a repaint of the widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }
}

/// A shared, clonable handle to a widget.
///
/// Content values, containers, and resolved children all hold widgets
/// through `WidgetRef`. Cloning clones the handle; [`ptr_eq`](Self::ptr_eq)
/// compares handle identity, which is what the content pipeline and
/// container membership go by.
#[derive(Clone)]
pub struct WidgetRef {
    inner: Arc<RwLock<dyn Widget>>,
}

impl WidgetRef {
    /// Wrap a widget into a shared handle.
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self {
            inner: Arc::new(RwLock::new(widget)),
        }
    }

    /// Check whether two handles refer to the same widget instance.
    pub fn ptr_eq(&self, other: &WidgetRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The referenced widget's unique ID.
    pub fn id(&self) -> WidgetId {
        self.inner.read().widget_base().id()
    }

    /// Read the widget through a closure.
    pub fn with<R>(&self, f: impl FnOnce(&dyn Widget) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Mutate the widget through a closure.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut dyn Widget) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Read the widget downcast to a concrete type.
    ///
    /// Returns `None` if the widget is not a `T`.
    pub fn downcast<T: Widget + 'static, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.inner.read();
        guard.as_any().downcast_ref::<T>().map(f)
    }
}

impl fmt::Debug for WidgetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetRef").field("id", &self.id()).finish()
    }
}

/// Capability contract for widgets that hold a mutable collection of
/// children.
///
/// The child count is always derived from the collection - implementers
/// never store it separately.
pub trait Container: Widget {
    /// The current children, in order.
    fn children(&self) -> Vec<WidgetRef>;

    /// Whether the container currently rejects child mutations.
    fn is_read_only(&self) -> bool {
        false
    }

    /// Insert a child at the end of the collection.
    fn add_child(&mut self, child: WidgetRef) -> Result<(), ContainerError>;

    /// Remove a child if present, returning whether removal occurred.
    fn remove_child(&mut self, child: &WidgetRef) -> Result<bool, ContainerError>;

    /// Number of children, derived from the collection.
    fn child_count(&self) -> usize {
        self.children().len()
    }
}
