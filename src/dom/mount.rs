// ============================================================================
// MOUNT - Materialización de `View` en nodos DOM reales (solo wasm32)
// ============================================================================

use web_sys::{Document, Element, Node};

use crate::dom::element::{append_child, create_element, document, set_attribute, set_inner_html};
use crate::dom::view::View;
use crate::error::HostError;

/// Construir un nodo desconectado a partir de la vista
pub fn build_node(document: &Document, view: &View) -> Result<Node, HostError> {
    match view {
        View::Empty => Ok(document.create_document_fragment().into()),
        View::Text(text) => Ok(document.create_text_node(text).into()),
        View::Fragment(children) => {
            let fragment: Node = document.create_document_fragment().into();
            for child in children {
                append_child(&fragment, &build_node(document, child)?)?;
            }
            Ok(fragment)
        }
        View::Element(el) => {
            let element = create_element(document, &el.tag)?;
            for (name, value) in &el.attrs {
                set_attribute(&element, name, value)?;
            }
            let node: Node = element.into();
            for child in &el.children {
                append_child(&node, &build_node(document, child)?)?;
            }
            Ok(node)
        }
    }
}

/// Reemplazar el contenido del punto de montaje.
/// El árbol completo se construye desconectado y se inserta en el mismo turno
/// del event loop, así el navegador nunca pinta un árbol parcial.
pub fn replace_children(root: &Element, view: &View) -> Result<(), HostError> {
    let document = document().ok_or(HostError::NoDocument)?;
    let node = build_node(&document, view)?;
    set_inner_html(root, "");
    append_child(root, &node)
}
