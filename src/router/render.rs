// ============================================================================
// LAYOUT RENDERER - Cadena raíz..hoja -> una sola `View` anidada
// ============================================================================
// Se recorre de la hoja hacia la raíz: cada padre recibe en su slot (outlet)
// la salida ya completa del hijo. La hoja recibe un slot vacío.
// ============================================================================

use crate::dom::View;
use crate::router::link;
use crate::router::matcher::{MatchResult, Params};
use crate::router::route::RouteTree;

/// Contexto que recibe cada ruta al renderizarse
pub struct RenderContext<'a> {
    params: &'a Params,
    pathname: &'a str,
    location: &'a str,
    outlet: Option<View>,
}

impl<'a> RenderContext<'a> {
    /// Parámetro capturado por esta ruta o sus ancestros
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name)
    }

    /// Path consumido hasta esta ruta (base de los links relativos)
    pub fn pathname(&self) -> &'a str {
        self.pathname
    }

    /// Path actual completo
    pub fn location(&self) -> &'a str {
        self.location
    }

    pub fn has_outlet(&self) -> bool {
        self.outlet.is_some()
    }

    /// Salida del hijo; vacía en la hoja
    pub fn outlet(&mut self) -> View {
        self.outlet.take().unwrap_or_default()
    }

    /// Resolver un destino relativo a esta ruta
    pub fn resolve(&self, to: &str) -> String {
        link::resolve(self.pathname, to)
    }
}

pub fn render(tree: &RouteTree, matched: &MatchResult, location: &str) -> View {
    matched
        .chain
        .iter()
        .rev()
        .fold(None, |outlet: Option<View>, step| {
            let ctx = RenderContext {
                params: &step.params,
                pathname: &step.pathname,
                location,
                outlet,
            };
            let view = match tree.node(step.node).content() {
                Some(content) => content(ctx),
                // layout sin contenido: deja pasar al hijo
                None => ctx.outlet.unwrap_or_default(),
            };
            Some(view)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::fixtures::orders_tree;
    use crate::router::matcher::match_path;
    use crate::router::route::{declare_routes, RouteSpec};

    fn render_path(path: &str) -> View {
        let tree = orders_tree();
        let matched = match_path(&tree, path).unwrap();
        render(&tree, &matched, path)
    }

    #[test]
    fn order_detail_nests_inside_orders_and_layout() {
        let view = render_path("/orders/123");
        assert!(view.text_content().contains("Order: 123"));
        assert_eq!(
            view.to_html(),
            "<div class=\"layout\"><div class=\"orders\" data-id=\"-\"><h1>Orders</h1>\
             <section>Order: 123</section></div></div>"
        );
    }

    #[test]
    fn ancestors_do_not_see_descendant_params() {
        let view = render_path("/orders/abc");
        let orders = view.find_all("div").into_iter().find(|d| d.has_class("orders")).unwrap();
        assert_eq!(orders.attr("data-id"), Some("-"));
    }

    #[test]
    fn leaf_gets_empty_outlet() {
        let view = render_path("/orders");
        assert_eq!(
            view.to_html(),
            "<div class=\"layout\"><div class=\"orders\" data-id=\"-\"><h1>Orders</h1></div></div>"
        );
    }

    #[test]
    fn index_child_fills_root_slot() {
        assert_eq!(render_path("/").to_html(), "<div class=\"layout\"><p>Home</p></div>");
    }

    #[test]
    fn layout_without_content_passes_child_through() {
        let tree = declare_routes(
            RouteSpec::root().child(
                RouteSpec::path("orders").child(
                    RouteSpec::path(":id").content(|ctx| {
                        View::text(format!("{} @ {}", ctx.param("id").unwrap_or("?"), ctx.pathname()))
                    }),
                ),
            ),
        )
        .unwrap();
        let matched = match_path(&tree, "/orders/9").unwrap();
        assert_eq!(render(&tree, &matched, "/orders/9"), View::text("9 @ /orders/9"));
    }

    #[test]
    fn context_exposes_location_and_relative_resolution() {
        let tree = declare_routes(RouteSpec::root().child(RouteSpec::path("orders").content(
            |ctx| View::text(format!("{}|{}|{}", ctx.location(), ctx.resolve("123"), ctx.has_outlet())),
        )))
        .unwrap();
        let matched = match_path(&tree, "/orders?page=2").unwrap();
        assert_eq!(
            render(&tree, &matched, "/orders?page=2").text_content(),
            "/orders?page=2|/orders/123|false"
        );
    }
}
