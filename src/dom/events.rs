// ============================================================================
// EVENT HANDLING - Listeners globales y delegados (solo wasm32)
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - closure.forget() mantiene vivo el closure durante toda la sesión.
// - Estos listeners solo deben registrarse UNA VEZ (ver host::web).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::error::HostError;

fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), HostError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|e| HostError::dom("addEventListener", e))?;
    closure.forget();
    Ok(())
}

/// Listener sobre `window` (p.ej. popstate)
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), HostError>
where
    F: FnMut(Event) + 'static,
{
    let window = crate::dom::window().ok_or(HostError::NoDocument)?;
    listen(&window, event_type, handler)
}

/// Listener sobre un elemento (delegación de eventos)
pub fn on_element_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), HostError>
where
    F: FnMut(Event) + 'static,
{
    listen(element, event_type, handler)
}
