// ============================================================================
// VIEW BUILDER - Builder pattern para crear vistas fácilmente
// ============================================================================

use crate::dom::view::{ElementNode, View};

pub struct ViewBuilder {
    element: ElementNode,
}

impl ViewBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Self {
        Self {
            element: ElementNode::new(tag),
        }
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(mut self, class: &str) -> Self {
        self.element.set_attr("class", class);
        self
    }

    /// Agregar clase adicional (sin reemplazar)
    pub fn add_class(mut self, class: &str) -> Self {
        let classes = match self.element.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.element.set_attr("class", &classes);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.element.set_attr(name, value);
        self
    }

    /// Agregar nodo de texto
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.children.push(View::text(text));
        self
    }

    /// Agregar hijo (los vacíos se descartan)
    pub fn child(mut self, child: impl Into<View>) -> Self {
        let child = child.into();
        if !child.is_empty() {
            self.element.children.push(child);
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = View>) -> Self {
        children.into_iter().fold(self, |builder, child| builder.child(child))
    }

    /// Construir y retornar la vista
    pub fn build(self) -> View {
        View::Element(self.element)
    }
}
