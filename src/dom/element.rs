// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM (solo wasm32)
// ============================================================================

use web_sys::{Document, Element, Node, Window};

use crate::error::HostError;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(document: &Document, tag: &str) -> Result<Element, HostError> {
    document
        .create_element(tag)
        .map_err(|e| HostError::dom("createElement", e))
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), HostError> {
    element
        .set_attribute(name, value)
        .map_err(|e| HostError::dom("setAttribute", e))
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Node, child: &Node) -> Result<(), HostError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| HostError::dom("appendChild", e))
}
