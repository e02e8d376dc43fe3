use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs `callback` once the window has stopped resizing for `delay_ms`.
///
/// Each resize event cancels the pending timeout and schedules a new one.
/// Returns `None` outside a browser window. The listener is removed when the
/// returned value is dropped, so keep it alive in the owning effect:
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = on_resize_settled(move || redraw(), Config::RESIZE_DEBOUNCE_MS);
///     move || drop(listener)
/// });
/// ```
pub fn on_resize_settled<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping a Timeout cancels it
        pending.borrow_mut().take();

        let callback = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || callback()));
    }))
}
