use crate::core::{Point, Store};
use crate::input;
use crate::overlay::Overlay;
use gloo_events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Window-level move/release listeners for one drag. Dropping it removes
/// them.
pub struct DragSubscription {
    _listeners: [EventListener; 4],
}

impl DragSubscription {
    fn acquire(w: &DragWiring) -> Option<Self> {
        let window = web::window()?;

        let on_mouse_move = {
            let w = w.clone();
            EventListener::new(&window, "mousemove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                    w.move_to(input::mouse_client_point(ev));
                }
            })
        };
        let on_touch_move = {
            let w = w.clone();
            EventListener::new_with_options(
                &window,
                "touchmove",
                EventListenerOptions::enable_prevent_default(),
                move |ev| {
                    if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
                        if let Some(p) = input::touch_client_point(ev) {
                            ev.prevent_default();
                            w.move_to(p);
                        }
                    }
                },
            )
        };
        let on_mouse_up = {
            let w = w.clone();
            EventListener::new(&window, "mouseup", move |_| w.release())
        };
        let on_touch_end = {
            let w = w.clone();
            EventListener::new(&window, "touchend", move |_| w.release())
        };

        Some(Self {
            _listeners: [on_mouse_move, on_touch_move, on_mouse_up, on_touch_end],
        })
    }
}

#[derive(Clone)]
pub struct DragWiring {
    store: Rc<RefCell<Store>>,
    image: web::HtmlImageElement,
    subscription: Rc<RefCell<Option<DragSubscription>>>,
}

impl DragWiring {
    fn begin(&self, index: usize) {
        self.store.borrow_mut().begin_drag(index);
        let next = DragSubscription::acquire(self);
        if next.is_none() {
            log::warn!("[drag] no window to listen on");
        }
        // Called from a handle listener, so the old window listeners are not
        // running and can go right away.
        let previous = self.subscription.replace(next);
        drop(previous);
        log::debug!("[drag] begin on landmark {}", index);
    }

    fn move_to(&self, client: Point) {
        let origin = input::image_origin(&self.image);
        self.store.borrow_mut().drag_to(client, origin);
    }

    fn release(&self) {
        self.store.borrow_mut().end_drag();
        if let Some(sub) = self.subscription.borrow_mut().take() {
            // We are inside one of its callbacks; drop after it returns.
            spawn_local(async move { drop(sub) });
        }
    }

    /// End any drag and drop its listeners, e.g. when the page goes away.
    pub fn teardown(&self) {
        self.release();
    }
}

/// Start a drag when a handle is pressed with the mouse or a finger.
pub fn wire_drag_handlers(store: Rc<RefCell<Store>>, overlay: &Overlay) -> DragWiring {
    let wiring = DragWiring {
        store,
        image: overlay.image().clone(),
        subscription: Rc::new(RefCell::new(None)),
    };
    for (i, handle) in overlay.handles().iter().enumerate() {
        for event in ["mousedown", "touchstart"] {
            let w = wiring.clone();
            EventListener::new_with_options(
                handle,
                event,
                EventListenerOptions::enable_prevent_default(),
                move |ev| {
                    ev.prevent_default();
                    w.begin(i);
                },
            )
            .forget();
        }
    }
    wiring
}
