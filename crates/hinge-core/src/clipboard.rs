//! Process-wide single-slot clipboard.
//!
//! Explicitly owned rather than a free-standing global. The UI sees it only
//! through the closure adapters installed by [`register_clipboard`]. The
//! whole program is single-threaded and the UI invokes the adapters
//! synchronously, so `Rc<RefCell<..>>` suffices; no locking.

use std::cell::RefCell;
use std::rc::Rc;

use hinge_types::ui::UiIo;

/// Single-slot UTF-8 text storage. Last write wins; an unset clipboard
/// reads as the empty string.
#[derive(Debug, Default)]
pub struct Clipboard {
    text: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Install get/set adapters over a shared clipboard slot into the UI.
pub fn register_clipboard(ui: &mut impl UiIo, clipboard: &Rc<RefCell<Clipboard>>) {
    let get = {
        let slot = Rc::clone(clipboard);
        Box::new(move || slot.borrow().get().to_owned())
    };
    let set = {
        let slot = Rc::clone(clipboard);
        Box::new(move |text: &str| slot.borrow_mut().set(text))
    };
    ui.register_clipboard(get, set);
}
