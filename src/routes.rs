// ============================================================================
// APP ROUTES - Declaración estática del árbol de rutas de la aplicación
// ============================================================================
//   /                 App (layout con outlet)
//   ├── (index)       Home
//   ├── orders        Orders (con su propio outlet)
//   │   └── :id       OrderDetail
//   └── *             NotFound (solo con NOT_FOUND_PAGE=true)
// ============================================================================

use crate::config::AppConfig;
use crate::error::RouteSpecError;
use crate::router::{declare_routes, RouteSpec, RouteTree};
use crate::views::{render_app, render_home, render_not_found, render_order_detail, render_orders};

pub fn app_routes(config: &AppConfig) -> Result<RouteTree, RouteSpecError> {
    let app_name = config.app_name.clone();
    let mut root = RouteSpec::root()
        .content(move |ctx| render_app(ctx, &app_name))
        .children([
            RouteSpec::index().content(render_home),
            RouteSpec::path("orders")
                .content(render_orders)
                .child(RouteSpec::path(":id").content(render_order_detail)),
        ]);
    if config.not_found_page {
        root = root.child(RouteSpec::catch_all().content(render_not_found));
    }
    declare_routes(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::View;
    use crate::host::{MemoryHistory, MemorySurface};
    use crate::router::{NavOutcome, Navigator};

    fn navigator(config: &AppConfig, path: &str) -> Navigator<MemoryHistory, MemorySurface> {
        let nav = Navigator::new(app_routes(config).unwrap(), MemoryHistory::new(path), MemorySurface::new());
        nav.start().unwrap();
        nav
    }

    fn view(nav: &Navigator<MemoryHistory, MemorySurface>) -> View {
        nav.surface().view().cloned().unwrap_or_default()
    }

    fn active_links(view: &View) -> Vec<String> {
        view.find_all("a")
            .into_iter()
            .filter(|a| a.has_class("active"))
            .map(|a| a.attr("href").unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn declares_original_route_shape() {
        let tree = app_routes(&AppConfig::default()).unwrap();
        assert_eq!(tree.len(), 4);
        assert!(tree.find("/orders/:id").is_some());
        assert!(tree.catch_all_child(tree.root()).is_none());
    }

    #[test]
    fn home_renders_inside_layout_with_home_active() {
        let nav = navigator(&AppConfig::default(), "/");
        let view = view(&nav);
        let text = view.text_content();
        assert!(text.contains("Home"));
        assert!(text.contains("Gana Laundry"));
        assert!(text.contains('©'));
        assert_eq!(active_links(&view), vec!["/"]);
        assert_eq!(view.find_all("main").len(), 1);
    }

    #[test]
    fn orders_page_links_to_order_relative_to_itself() {
        let nav = navigator(&AppConfig::default(), "/orders");
        let view = view(&nav);
        assert_eq!(active_links(&view), vec!["/orders"]);
        let order_link = view
            .find_all("a")
            .into_iter()
            .find(|a| a.attr("data-link").is_some() && a.attr("href") == Some("/orders/123"))
            .map(|a| View::Element(a.clone()).text_content());
        assert_eq!(order_link.as_deref(), Some("View order #123"));
    }

    #[test]
    fn order_detail_keeps_orders_active_and_shows_id() {
        let nav = navigator(&AppConfig::default(), "/");
        assert_eq!(nav.navigate("/orders/123").unwrap(), NavOutcome::Rendered);
        let view = view(&nav);
        assert!(view.text_content().contains("Order: 123"));
        assert!(view.text_content().contains("Orders"));
        assert_eq!(active_links(&view), vec!["/orders"]);
        let code = view.find_all("code");
        assert_eq!(code.len(), 1);
        assert_eq!(View::Element(code[0].clone()).text_content(), "123");
    }

    #[test]
    fn unknown_path_without_catch_all_keeps_home() {
        let nav = navigator(&AppConfig::default(), "/");
        let before = nav.surface().html();
        assert_eq!(nav.navigate("/unknown").unwrap(), NavOutcome::Retained);
        assert_eq!(nav.surface().html(), before);
    }

    #[test]
    fn not_found_page_when_enabled() {
        let config = AppConfig {
            not_found_page: true,
            ..AppConfig::default()
        };
        let nav = navigator(&config, "/");
        assert_eq!(nav.navigate("/laundry/bags").unwrap(), NavOutcome::Rendered);
        let text = view(&nav).text_content();
        assert!(text.contains("Page not found"));
        assert!(text.contains("/laundry/bags"));
        // el layout raíz sigue envolviendo la página
        assert!(text.contains("Gana Laundry"));
    }

    #[test]
    fn app_name_comes_from_config() {
        let config = AppConfig {
            app_name: "Gana Test".to_string(),
            ..AppConfig::default()
        };
        let nav = navigator(&config, "/");
        assert!(view(&nav).text_content().contains("Gana Test"));
    }
}
