// ============================================================================
// VIEW - Árbol de salida renderizada (independiente del DOM real)
// ============================================================================
// Las páginas construyen `View`s; el host decide cómo materializarlas
// (DOM real en wasm32, memoria en tests).
// ============================================================================

use std::fmt::Write;

/// Nodo de salida renderizada
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Empty,
    Text(String),
    Element(ElementNode),
    Fragment(Vec<View>),
}

/// Elemento HTML con atributos ordenados
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<View>,
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Obtener atributo
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Establecer atributo (reemplaza si ya existe)
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl View {
    pub fn text(text: impl Into<String>) -> Self {
        View::Text(text.into())
    }

    /// Fragmento sin nodos vacíos
    pub fn fragment(children: impl IntoIterator<Item = View>) -> Self {
        let children: Vec<View> = children.into_iter().filter(|c| !c.is_empty()).collect();
        if children.is_empty() {
            View::Empty
        } else {
            View::Fragment(children)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            View::Empty => true,
            View::Fragment(children) => children.iter().all(View::is_empty),
            _ => false,
        }
    }

    /// Texto visible concatenado (equivalente a `textContent`)
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Empty => {}
            View::Text(text) => out.push_str(text),
            View::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            View::Fragment(children) => children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Todos los elementos con el tag dado, en orden de documento
    pub fn find_all(&self, tag: &str) -> Vec<&ElementNode> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a ElementNode>) {
        match self {
            View::Element(el) => {
                if el.tag == tag {
                    found.push(el);
                }
                el.children.iter().for_each(|c| c.collect_tag(tag, found));
            }
            View::Fragment(children) => children.iter().for_each(|c| c.collect_tag(tag, found)),
            View::Empty | View::Text(_) => {}
        }
    }

    /// Serializar a HTML escapado
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            View::Empty => {}
            View::Text(text) => escape_into(text, false, out),
            View::Fragment(children) => children.iter().for_each(|c| c.write_html(out)),
            View::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {}=\"", name);
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&el.tag.as_str()) {
                    return;
                }
                el.children.iter().for_each(|c| c.write_html(out));
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

impl From<ElementNode> for View {
    fn from(el: ElementNode) -> Self {
        View::Element(el)
    }
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::text(text)
    }
}

impl From<String> for View {
    fn from(text: String) -> Self {
        View::Text(text)
    }
}

fn escape_into(input: &str, attribute: bool, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
