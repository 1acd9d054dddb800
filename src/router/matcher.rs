// ============================================================================
// MATCHER - Path pedido -> cadena de nodos raíz..hoja + parámetros
// ============================================================================
// Por nivel se prefiere: (a) hijo literal, (b) hijo `:param`, (c) con los
// segmentos agotados, el hijo índice (no consume segmento).
// Literal siempre gana a parámetro. El recorrido es greedy: sin backtracking.
// ============================================================================

use std::collections::BTreeMap;

use crate::error::NoMatch;
use crate::router::route::{NodeId, RouteTree, Segment, CATCH_ALL, ROOT_PATH};

/// Parámetros capturados (`:id` -> "123")
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Params {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut params = Params::default();
        for (name, value) in pairs {
            params.insert(name, value);
        }
        params
    }
}

/// Un eslabón de la cadena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub node: NodeId,
    /// Capturas hasta este nodo inclusive (nunca las de descendientes)
    pub params: Params,
    /// Parte del path consumida hasta este nodo, p.ej. `/orders`
    pub pathname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub chain: Vec<RouteMatch>,
    pub params: Params,
}

impl MatchResult {
    pub fn nodes(&self) -> Vec<NodeId> {
        self.chain.iter().map(|m| m.node).collect()
    }

    pub fn leaf(&self) -> Option<&RouteMatch> {
        self.chain.last()
    }
}

/// Quita query string y fragmento
fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Segmentos no vacíos del path
pub fn path_segments(path: &str) -> Vec<&str> {
    strip_query(path).split('/').filter(|s| !s.is_empty()).collect()
}

/// Forma canónica: `/a/b`, sin query, sin barras repetidas ni finales
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path_segments(path).join("/"))
}

pub fn join_path(base: &str, segment: &str) -> String {
    if base == ROOT_PATH {
        format!("/{}", segment)
    } else {
        format!("{}/{}", base, segment)
    }
}

pub fn match_path(tree: &RouteTree, requested_path: &str) -> Result<MatchResult, NoMatch> {
    let segments = path_segments(requested_path);
    let root = tree.root();

    let mut params = Params::default();
    let mut pathname = ROOT_PATH.to_string();
    let mut current = root;
    let mut chain = vec![RouteMatch {
        node: root,
        params: params.clone(),
        pathname: pathname.clone(),
    }];

    for segment in &segments {
        let next = match tree.literal_child(current, segment) {
            Some(literal) => literal,
            None => match tree.param_child(current) {
                Some(param) => {
                    if let Segment::Param(name) = tree.node(param).segment() {
                        params.insert(name, segment);
                    }
                    param
                }
                None => return catch_all(tree, &segments, requested_path),
            },
        };
        pathname = join_path(&pathname, segment);
        chain.push(RouteMatch {
            node: next,
            params: params.clone(),
            pathname: pathname.clone(),
        });
        current = next;
    }

    if let Some(index) = tree.index_child(current) {
        chain.push(RouteMatch {
            node: index,
            params: params.clone(),
            pathname,
        });
    }

    Ok(MatchResult { chain, params })
}

/// Fallback: hoja `*` declarada bajo la raíz, si existe
fn catch_all(tree: &RouteTree, segments: &[&str], requested_path: &str) -> Result<MatchResult, NoMatch> {
    let root = tree.root();
    let Some(leaf) = tree.catch_all_child(root) else {
        return Err(NoMatch {
            path: requested_path.to_string(),
        });
    };

    let mut params = Params::default();
    params.insert(CATCH_ALL, &segments.join("/"));
    let chain = vec![
        RouteMatch {
            node: root,
            params: Params::default(),
            pathname: ROOT_PATH.to_string(),
        },
        RouteMatch {
            node: leaf,
            params: params.clone(),
            pathname: format!("/{}", segments.join("/")),
        },
    ];
    Ok(MatchResult { chain, params })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::View;
    use crate::router::fixtures::{orders_tree, orders_tree_with_catch_all};
    use crate::router::route::{declare_routes, RouteSpec};

    fn labels(tree: &RouteTree, result: &MatchResult) -> Vec<String> {
        result
            .nodes()
            .into_iter()
            .map(|id| tree.node(id).label().to_string())
            .collect()
    }

    #[test]
    fn root_matches_with_index_child() {
        let tree = orders_tree();
        let result = match_path(&tree, "/").unwrap();
        assert_eq!(labels(&tree, &result), vec!["/", "/ (index)"]);
        assert!(result.params.is_empty());
    }

    #[test]
    fn root_without_index_matches_alone() {
        let tree = declare_routes(
            RouteSpec::root()
                .content(|_| View::text("shell"))
                .child(RouteSpec::path("orders").content(|_| View::text("orders"))),
        )
        .unwrap();
        let result = match_path(&tree, "/").unwrap();
        assert_eq!(result.nodes(), vec![tree.root()]);
        assert_eq!(result.leaf().map(|m| m.pathname.as_str()), Some("/"));
        assert!(result.params.is_empty());
    }

    #[test]
    fn empty_path_is_root() {
        let tree = orders_tree();
        assert_eq!(match_path(&tree, "").unwrap(), match_path(&tree, "/").unwrap());
    }

    #[test]
    fn parameter_is_captured_verbatim() {
        let tree = orders_tree();
        for raw in ["123", "abc-XYZ", "%20x", "über"] {
            let result = match_path(&tree, &format!("/orders/{}", raw)).unwrap();
            assert_eq!(result.params.get("id"), Some(raw));
            assert_eq!(labels(&tree, &result), vec!["/", "/orders", "/orders/:id"]);
        }
    }

    #[test]
    fn literal_outranks_parameter() {
        let tree = orders_tree();
        let result = match_path(&tree, "/orders/new").unwrap();
        assert_eq!(labels(&tree, &result), vec!["/", "/orders", "/orders/new"]);
        assert!(result.params.is_empty());
    }

    #[test]
    fn parent_without_index_ends_chain() {
        let tree = orders_tree();
        let result = match_path(&tree, "/orders").unwrap();
        assert_eq!(labels(&tree, &result), vec!["/", "/orders"]);
    }

    #[test]
    fn scoped_params_and_pathnames() {
        let tree = orders_tree();
        let result = match_path(&tree, "/orders/123").unwrap();
        assert_eq!(result.params, Params::from([("id", "123")]));
        assert!(result.chain[0].params.is_empty());
        assert!(result.chain[1].params.is_empty());
        assert_eq!(result.chain[2].params.get("id"), Some("123"));
        let pathnames: Vec<&str> = result.chain.iter().map(|m| m.pathname.as_str()).collect();
        assert_eq!(pathnames, vec!["/", "/orders", "/orders/123"]);
    }

    #[test]
    fn query_fragment_and_slashes_are_ignored() {
        let tree = orders_tree();
        let plain = match_path(&tree, "/orders/123").unwrap();
        for variant in ["/orders/123/", "//orders//123", "/orders/123?tab=items", "/orders/123#top"] {
            assert_eq!(match_path(&tree, variant).unwrap(), plain, "{}", variant);
        }
        assert_eq!(normalize_path("orders//123/?x=1"), "/orders/123");
    }

    #[test]
    fn unknown_path_is_no_match() {
        let tree = orders_tree();
        assert_eq!(
            match_path(&tree, "/unknown").unwrap_err(),
            NoMatch {
                path: "/unknown".into()
            }
        );
        // greedy: `new` no tiene hijos y no se reintenta con `:id`
        assert!(match_path(&tree, "/orders/new/extra").is_err());
        assert!(match_path(&tree, "/orders/123/extra").is_err());
    }

    #[test]
    fn catch_all_captures_whole_path() {
        let tree = orders_tree_with_catch_all();
        let result = match_path(&tree, "/orders/123/items").unwrap();
        assert_eq!(labels(&tree, &result), vec!["/", "/*"]);
        assert_eq!(result.params.get("*"), Some("orders/123/items"));
        assert_eq!(result.leaf().unwrap().pathname, "/orders/123/items");

        // las rutas declaradas siguen ganando
        let result = match_path(&tree, "/orders/7").unwrap();
        assert_eq!(result.params.get("id"), Some("7"));
    }
}
