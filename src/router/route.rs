// ============================================================================
// ROUTE TREE - Declaración de rutas y árbol inmutable pre-resuelto
// ============================================================================
// `RouteSpec` es la declaración estática (anidada) que escribe la app.
// `declare_routes` la valida una sola vez al arrancar y produce un `RouteTree`:
// un arena de nodos con las tablas de búsqueda de hijos ya resueltas, de modo
// que el matcher nunca recorre listas de hermanos.
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::View;
use crate::error::RouteSpecError;
use crate::router::render::RenderContext;

/// Callback de renderizado de una ruta
pub type Content = Rc<dyn Fn(RenderContext<'_>) -> View>;

pub const ROOT_PATH: &str = "/";
pub const CATCH_ALL: &str = "*";

#[derive(Clone)]
enum SpecKind {
    Path(String),
    Index,
}

/// Declaración de una ruta (entrada de `declare_routes`)
#[derive(Clone)]
pub struct RouteSpec {
    kind: SpecKind,
    content: Option<Content>,
    children: Vec<RouteSpec>,
}

impl RouteSpec {
    /// Ruta raíz `/`
    pub fn root() -> Self {
        Self::path(ROOT_PATH)
    }

    /// Segmento literal (`orders`) o parámetro (`:id`)
    pub fn path(path: &str) -> Self {
        Self {
            kind: SpecKind::Path(path.to_string()),
            content: None,
            children: Vec::new(),
        }
    }

    /// Ruta índice: se renderiza cuando el padre coincide exactamente
    pub fn index() -> Self {
        Self {
            kind: SpecKind::Index,
            content: None,
            children: Vec::new(),
        }
    }

    /// Hoja catch-all bajo la raíz (`*`)
    pub fn catch_all() -> Self {
        Self::path(CATCH_ALL)
    }

    pub fn content<F>(mut self, render: F) -> Self
    where
        F: Fn(RenderContext<'_>) -> View + 'static,
    {
        self.content = Some(Rc::new(render));
        self
    }

    pub fn child(mut self, child: RouteSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RouteSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Segmento de un nodo ya validado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Root,
    Literal(String),
    Param(String),
    Index,
    CatchAll,
}

impl Segment {
    /// Segmento tal como se declaró (`/`, `orders`, `:id`, `*`; vacío para índices)
    pub fn as_declared(&self) -> String {
        match self {
            Segment::Root => ROOT_PATH.to_string(),
            Segment::Literal(name) => name.clone(),
            Segment::Param(name) => format!(":{}", name),
            Segment::Index => String::new(),
            Segment::CatchAll => CATCH_ALL.to_string(),
        }
    }
}

/// Segmento de un hijo (la raíz nunca aparece bajo otro nodo)
#[derive(Clone)]
enum ChildSegment {
    Literal(String),
    Param(String),
    Index,
    CatchAll,
}

impl ChildSegment {
    fn parse(raw: &str) -> Option<ChildSegment> {
        if raw.is_empty() || raw.contains('/') {
            return None;
        }
        if raw == CATCH_ALL {
            return Some(ChildSegment::CatchAll);
        }
        match raw.strip_prefix(':') {
            Some("") => None,
            Some(name) => Some(ChildSegment::Param(name.to_string())),
            None => Some(ChildSegment::Literal(raw.to_string())),
        }
    }
}

impl From<ChildSegment> for Segment {
    fn from(child: ChildSegment) -> Self {
        match child {
            ChildSegment::Literal(name) => Segment::Literal(name),
            ChildSegment::Param(name) => Segment::Param(name),
            ChildSegment::Index => Segment::Index,
            ChildSegment::CatchAll => Segment::CatchAll,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

pub struct RouteNode {
    segment: Segment,
    content: Option<Content>,
    children: Vec<NodeId>,
    /// Path declarado completo, p.ej. `/orders/:id`
    label: String,
}

impl RouteNode {
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn path_segment(&self) -> String {
        self.segment.as_declared()
    }

    pub fn is_index(&self) -> bool {
        self.segment == Segment::Index
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("label", &self.label)
            .field("segment", &self.segment)
            .field("has_content", &self.content.is_some())
            .field("children", &self.children)
            .finish()
    }
}

#[derive(Debug, Default)]
struct ChildLookup {
    literals: HashMap<String, NodeId>,
    param: Option<NodeId>,
    index: Option<NodeId>,
    catch_all: Option<NodeId>,
}

/// Árbol de rutas inmutable
#[derive(Debug)]
pub struct RouteTree {
    nodes: Vec<RouteNode>,
    lookups: Vec<ChildLookup>,
}

impl RouteTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &RouteNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn literal_child(&self, id: NodeId, segment: &str) -> Option<NodeId> {
        self.lookups[id.0].literals.get(segment).copied()
    }

    pub fn param_child(&self, id: NodeId) -> Option<NodeId> {
        self.lookups[id.0].param
    }

    pub fn index_child(&self, id: NodeId) -> Option<NodeId> {
        self.lookups[id.0].index
    }

    pub fn catch_all_child(&self, id: NodeId) -> Option<NodeId> {
        self.lookups[id.0].catch_all
    }

    /// Buscar un nodo por su path declarado (`/orders/:id`)
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.label == label).map(NodeId)
    }

    fn push(&mut self, segment: Segment, content: Option<Content>, label: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(RouteNode {
            segment,
            content,
            children: Vec::new(),
            label,
        });
        self.lookups.push(ChildLookup::default());
        id
    }

    /// `scope`: nombres de parámetros ya capturados entre la raíz y `parent`
    fn insert_children(
        &mut self,
        parent: NodeId,
        specs: Vec<RouteSpec>,
        scope: &[String],
    ) -> Result<(), RouteSpecError> {
        for spec in specs {
            let parent_label = self.node(parent).label.clone();
            let child = match &spec.kind {
                SpecKind::Index => ChildSegment::Index,
                SpecKind::Path(raw) => ChildSegment::parse(raw).ok_or_else(|| RouteSpecError::InvalidSegment {
                    parent: parent_label.clone(),
                    segment: raw.clone(),
                })?,
            };
            let segment = Segment::from(child.clone());
            let label = child_label(&parent_label, &segment);

            if spec.content.is_none() && spec.children.is_empty() {
                return Err(RouteSpecError::EmptyRoute(label));
            }

            let id = NodeId(self.nodes.len());
            let under_root = parent == self.root();
            let lookup = &mut self.lookups[parent.0];
            let mut child_scope = scope.to_vec();
            match &child {
                ChildSegment::Index => {
                    if lookup.index.is_some() {
                        return Err(RouteSpecError::DuplicateIndex { parent: parent_label });
                    }
                    if !spec.children.is_empty() {
                        return Err(RouteSpecError::IndexWithChildren { parent: parent_label });
                    }
                    lookup.index = Some(id);
                }
                ChildSegment::Literal(name) => {
                    if lookup.literals.insert(name.clone(), id).is_some() {
                        return Err(RouteSpecError::DuplicateSegment {
                            parent: parent_label,
                            segment: name.clone(),
                        });
                    }
                }
                ChildSegment::Param(name) => {
                    if scope.contains(name) {
                        return Err(RouteSpecError::DuplicateParamName {
                            route: label,
                            name: name.clone(),
                        });
                    }
                    if let Some(existing) = lookup.param {
                        return Err(RouteSpecError::AmbiguousParameter {
                            parent: parent_label,
                            first: self.nodes[existing.0].segment.as_declared(),
                            second: format!(":{}", name),
                        });
                    }
                    lookup.param = Some(id);
                    child_scope.push(name.clone());
                }
                ChildSegment::CatchAll => {
                    if !under_root || !spec.children.is_empty() || lookup.catch_all.is_some() {
                        return Err(RouteSpecError::MisplacedCatchAll { parent: parent_label });
                    }
                    lookup.catch_all = Some(id);
                }
            }

            let id = self.push(segment, spec.content, label);
            self.nodes[parent.0].children.push(id);
            self.insert_children(id, spec.children, &child_scope)?;
        }
        Ok(())
    }
}

fn child_label(parent: &str, segment: &Segment) -> String {
    match segment {
        Segment::Index => format!("{} (index)", parent),
        _ if parent == ROOT_PATH => format!("/{}", segment.as_declared()),
        _ => format!("{}/{}", parent, segment.as_declared()),
    }
}

/// Validar la declaración y construir el árbol. Se llama una sola vez al arrancar.
pub fn declare_routes(spec: RouteSpec) -> Result<RouteTree, RouteSpecError> {
    match &spec.kind {
        SpecKind::Path(path) if path == ROOT_PATH => {}
        SpecKind::Path(path) => return Err(RouteSpecError::InvalidRoot(path.clone())),
        SpecKind::Index => return Err(RouteSpecError::InvalidRoot("(index)".to_string())),
    }
    if spec.content.is_none() && spec.children.is_empty() {
        return Err(RouteSpecError::EmptyRoute(ROOT_PATH.to_string()));
    }

    let mut tree = RouteTree {
        nodes: Vec::new(),
        lookups: Vec::new(),
    };
    let root = tree.push(Segment::Root, spec.content, ROOT_PATH.to_string());
    tree.insert_children(root, spec.children, &[])?;

    log::debug!("🌳 [ROUTER] Árbol de rutas declarado: {} nodos", tree.len());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(_ctx: RenderContext<'_>) -> View {
        View::text("page")
    }

    #[test]
    fn builds_tree_with_lookups() {
        let tree = declare_routes(
            RouteSpec::root().content(page).children([
                RouteSpec::index().content(page),
                RouteSpec::path("orders")
                    .content(page)
                    .children([RouteSpec::path("new").content(page), RouteSpec::path(":id").content(page)]),
            ]),
        )
        .unwrap();

        assert_eq!(tree.len(), 5);
        let root = tree.root();
        assert_eq!(tree.node(root).path_segment(), "/");
        let index = tree.index_child(root).unwrap();
        assert!(tree.node(index).is_index());
        let orders = tree.literal_child(root, "orders").unwrap();
        assert_eq!(tree.node(orders).label(), "/orders");
        let id = tree.param_child(orders).unwrap();
        assert_eq!(tree.node(id).segment(), &Segment::Param("id".into()));
        assert_eq!(tree.node(id).label(), "/orders/:id");
        assert_eq!(tree.find("/orders/new"), tree.literal_child(orders, "new"));
        assert_eq!(tree.node(orders).children().len(), 2);
    }

    #[test]
    fn rejects_two_index_siblings() {
        let err = declare_routes(
            RouteSpec::root()
                .content(page)
                .children([RouteSpec::index().content(page), RouteSpec::index().content(page)]),
        )
        .unwrap_err();
        assert_eq!(err, RouteSpecError::DuplicateIndex { parent: "/".into() });
    }

    #[test]
    fn rejects_node_without_content_or_children() {
        let err = declare_routes(RouteSpec::root().child(RouteSpec::path("orders"))).unwrap_err();
        assert_eq!(err, RouteSpecError::EmptyRoute("/orders".into()));

        let err = declare_routes(RouteSpec::root()).unwrap_err();
        assert_eq!(err, RouteSpecError::EmptyRoute("/".into()));
    }

    #[test]
    fn layout_without_content_is_allowed() {
        let tree = declare_routes(
            RouteSpec::root().child(RouteSpec::path("orders").child(RouteSpec::path(":id").content(page))),
        )
        .unwrap();
        let orders = tree.literal_child(tree.root(), "orders").unwrap();
        assert!(tree.node(orders).content().is_none());
    }

    #[test]
    fn rejects_bad_root_and_segments() {
        let err = declare_routes(RouteSpec::path("orders").content(page)).unwrap_err();
        assert_eq!(err, RouteSpecError::InvalidRoot("orders".into()));

        for bad in ["", ":", "orders/new", "/orders"] {
            let err = declare_routes(RouteSpec::root().child(RouteSpec::path(bad).content(page))).unwrap_err();
            assert!(matches!(err, RouteSpecError::InvalidSegment { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn rejects_duplicate_literal_and_ambiguous_params() {
        let err = declare_routes(
            RouteSpec::root()
                .children([RouteSpec::path("orders").content(page), RouteSpec::path("orders").content(page)]),
        )
        .unwrap_err();
        assert!(matches!(err, RouteSpecError::DuplicateSegment { .. }));

        let err = declare_routes(
            RouteSpec::root().child(
                RouteSpec::path("orders")
                    .children([RouteSpec::path(":id").content(page), RouteSpec::path(":slug").content(page)]),
            ),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RouteSpecError::AmbiguousParameter {
                parent: "/orders".into(),
                first: ":id".into(),
                second: ":slug".into(),
            }
        );
    }

    #[test]
    fn rejects_repeated_param_name_on_one_branch() {
        let err = declare_routes(
            RouteSpec::root().child(
                RouteSpec::path(":id").child(RouteSpec::path("items").child(RouteSpec::path(":id").content(page))),
            ),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RouteSpecError::DuplicateParamName {
                route: "/:id/items/:id".into(),
                name: "id".into(),
            }
        );

        // el mismo nombre en ramas distintas no choca
        let tree = declare_routes(RouteSpec::root().children([
            RouteSpec::path("orders").child(RouteSpec::path(":id").content(page)),
            RouteSpec::path("drivers").child(RouteSpec::path(":id").content(page)),
        ]))
        .unwrap();
        assert!(tree.find("/drivers/:id").is_some());
    }

    #[test]
    fn index_routes_are_leaves() {
        let err = declare_routes(
            RouteSpec::root().child(RouteSpec::index().content(page).child(RouteSpec::path("x").content(page))),
        )
        .unwrap_err();
        assert_eq!(err, RouteSpecError::IndexWithChildren { parent: "/".into() });
    }

    #[test]
    fn catch_all_only_under_root() {
        assert!(declare_routes(RouteSpec::root().child(RouteSpec::catch_all().content(page))).is_ok());

        let err = declare_routes(
            RouteSpec::root().child(RouteSpec::path("orders").child(RouteSpec::catch_all().content(page))),
        )
        .unwrap_err();
        assert_eq!(err, RouteSpecError::MisplacedCatchAll { parent: "/orders".into() });
    }
}
