use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use super::context::{ContextInner, RenderContext};

/// Per-render-position state hook.
///
/// Reads the context's hook cursor as the slot index, seeds the slot with
/// `initial` on its first visit (later renders at that position ignore
/// `initial`), advances the cursor and returns the current value together
/// with a setter bound to that slot.
///
/// Slots are keyed by call position, not by name: every render pass of the
/// same tree must make the same `use_state` calls in the same order.
/// Calling hooks conditionally shifts later positions and silently hands
/// components the wrong state; if the slot's type no longer matches, the
/// downcast panics instead.
///
/// ```ignore
/// fn counter(ctx: &RenderContext, initial: Option<i64>) -> Result<Node, RenderError> {
///     let (count, set_count) = use_state(ctx, initial.unwrap_or(0));
///     el("button")
///         .attr("text", count)
///         .on_click(move || set_count.set(count + 1))
///         .build()
/// }
/// ```
pub fn use_state<T>(ctx: &RenderContext, initial: T) -> (T, StateSetter<T>)
where
    T: Clone + 'static,
{
    let (slot_index, slot) = {
        let mut inner = ctx.inner.borrow_mut();
        let slot_index = inner.hook_cursor;
        if slot_index == inner.hook_values.len() {
            log::trace!("use_state: seeding slot {slot_index}");
            inner
                .hook_values
                .push(Rc::new(RefCell::new(Box::new(initial) as Box<dyn Any>)));
        }
        inner.hook_cursor += 1;
        (slot_index, inner.hook_values[slot_index].clone())
    };

    let value = {
        let guard = slot.borrow();
        guard
            .downcast_ref::<T>()
            .unwrap_or_else(|| {
                panic!(
                    "state slot {slot_index} does not hold a {}; \
                     state hooks must run in the same order on every render",
                    std::any::type_name::<T>()
                )
            })
            .clone()
    };

    let setter = StateSetter {
        context: Rc::downgrade(&ctx.inner),
        slot: slot_index,
        _value: PhantomData,
    };
    (value, setter)
}

/// Handle to one hook slot: a weak context reference plus the slot index.
///
/// [`StateSetter::set`] overwrites the slot and immediately triggers a
/// full rerender. There is no equality short-circuit: setting the value a
/// slot already holds still rebuilds the whole tree.
///
/// Setters belong in event handlers. Calling `set` from inside a
/// component body re-enters the render pass and corrupts the hook
/// cursor; nothing guards against this.
pub struct StateSetter<T> {
    context: Weak<RefCell<ContextInner>>,
    slot: usize,
    _value: PhantomData<fn(T)>,
}

impl<T: 'static> StateSetter<T> {
    pub fn set(&self, value: T) {
        let Some(inner) = self.context.upgrade() else {
            log::warn!(
                "state setter for slot {} used after its render context was dropped",
                self.slot
            );
            return;
        };
        let slot = inner.borrow().hook_values[self.slot].clone();
        *slot.borrow_mut() = Box::new(value);

        let ctx = RenderContext::from_inner(inner);
        if let Err(err) = ctx.rerender() {
            log::error!("rerender after state update failed: {err}");
        }
    }

    /// Slot index this setter writes to.
    pub fn slot_index(&self) -> usize {
        self.slot
    }
}

// Manual impl: a setter is cloneable whether or not T is
impl<T> Clone for StateSetter<T> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            slot: self.slot,
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for StateSetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSetter").field("slot", &self.slot).finish()
    }
}
