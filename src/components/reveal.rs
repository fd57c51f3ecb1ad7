use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Class that tags a node for scroll-triggered reveal.
pub const ANIMATE_CLASS: &str = "animate-on-scroll";

// Any sliver of visibility triggers the reveal.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Visual state of one animatable node. Transitions one way only:
/// once revealed, a node never returns to hidden for the lifetime
/// of the mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn advance(self) -> Self {
        RevealState::Revealed
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Revealed => "reveal-visible",
        }
    }
}

/// Viewport watcher for one mounted section.
///
/// Built on mount, released on unmount. Holds the callback closure so the
/// observer can keep invoking it for as long as the registration lives.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    observed: Vec<Element>,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ScrollReveal {
    /// Registers every `.animate-on-scroll` node under `root` with a shared
    /// observer. Returns `None` when the host offers no usable observer or
    /// the subtree cannot be queried.
    pub fn mount(root: &Element) -> Option<Self> {
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        reveal(&entry.target());
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .ok()?;

        let nodes = root.query_selector_all(&format!(".{}", ANIMATE_CLASS)).ok()?;
        let mut observed = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    observer.observe(&element);
                    observed.push(element);
                }
            }
        }

        Some(ScrollReveal {
            observer,
            observed,
            _on_intersect: on_intersect,
        })
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Releases every registration taken at mount.
    pub fn unmount(self) {
        for element in &self.observed {
            self.observer.unobserve(element);
        }
        self.observer.disconnect();
    }
}

// Idempotent class swap; calling this on an already revealed node changes
// nothing, so repeated observer callbacks are harmless.
fn reveal(target: &Element) {
    let next = RevealState::Hidden.advance();
    let classes = target.class_list();
    let _ = classes.remove_1(RevealState::Hidden.class());
    let _ = classes.add_1(next.class());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_advances_to_revealed() {
        assert_eq!(RevealState::Hidden.advance(), RevealState::Revealed);
    }

    #[test]
    fn revealed_is_terminal() {
        assert_eq!(RevealState::Revealed.advance(), RevealState::Revealed);
        assert_eq!(
            RevealState::Revealed.advance().advance(),
            RevealState::Revealed
        );
    }

    #[test]
    fn states_map_to_distinct_classes() {
        assert_eq!(RevealState::Hidden.class(), "reveal-hidden");
        assert_eq!(RevealState::Revealed.class(), "reveal-visible");
        assert_ne!(RevealState::Hidden.class(), RevealState::Revealed.class());
    }
}
