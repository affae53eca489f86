use std::cell::{Cell, RefCell};

use maud::{Markup, Render};
use tracing::instrument;

/// Caches the markup of the last rendered props.
///
/// Rendering props equal to the previous ones returns the cached markup
/// without calling [`Render::render`] again.
pub struct Memo<P> {
    last: RefCell<Option<(P, Markup)>>,
    renders: Cell<usize>,
}

impl<P> Default for Memo<P> {
    fn default() -> Self {
        Self {
            last: RefCell::new(None),
            renders: Cell::new(0),
        }
    }
}

impl<P> Memo<P>
where
    P: Render + PartialEq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip_all)]
    pub fn render(&self, props: &P) -> Markup {
        if let Some((last_props, markup)) = self.last.borrow().as_ref() {
            if last_props == props {
                tracing::trace!("Props unchanged, reusing markup");
                return markup.clone();
            }
        }

        tracing::trace!("Props changed, rendering");
        let markup = props.render();
        self.renders.set(self.renders.get() + 1);
        *self.last.borrow_mut() = Some((props.clone(), markup.clone()));

        markup
    }

    /// How many times the props were actually rendered.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}
