// ============================================================================
// LINKS - Resolución de destinos y estado activo de NavLink
// ============================================================================

use crate::dom::{View, ViewBuilder};
use crate::router::matcher::{normalize_path, path_segments};
use crate::router::render::RenderContext;

/// Atributo que marca un `<a>` como navegación interna (lo intercepta el host)
pub const LINK_ATTR: &str = "data-link";
pub const ACTIVE_CLASS: &str = "active";

fn split_suffix(to: &str) -> (&str, &str) {
    let at = to.find(['?', '#']).unwrap_or(to.len());
    to.split_at(at)
}

/// Resolver `to` contra `base`.
/// Absoluto si empieza por `/`; si no, se une a `base`. `.` y `..` se colapsan
/// sin subir nunca por encima de la raíz. Query y fragmento se conservan.
pub fn resolve(base: &str, to: &str) -> String {
    let (path, suffix) = split_suffix(to);
    let mut stack: Vec<&str> = if path.starts_with('/') {
        Vec::new()
    } else {
        path_segments(base)
    };
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    format!("/{}{}", stack.join("/"), suffix)
}

/// ¿Está `target` activo para `location`?
/// Con `end` exige coincidencia exacta; sin `end` basta con ser prefijo por segmentos.
pub fn is_active(location: &str, target: &str, end: bool) -> bool {
    let location = normalize_path(location);
    let target = normalize_path(target);
    if location == target {
        return true;
    }
    if end {
        return false;
    }
    target == "/" || location.starts_with(&format!("{}/", target))
}

/// `<a href data-link>` con destino relativo a la ruta actual
pub fn link(ctx: &RenderContext<'_>, to: &str, label: &str, class: &str) -> View {
    ViewBuilder::new("a")
        .attr("href", &ctx.resolve(to))
        .attr(LINK_ATTR, "")
        .class(class)
        .text(label)
        .build()
}

/// Link con clase `active` y `aria-current="page"` cuando coincide
pub fn nav_link(ctx: &RenderContext<'_>, to: &str, label: &str, end: bool, class: &str) -> View {
    let href = ctx.resolve(to);
    let builder = ViewBuilder::new("a")
        .attr("href", &href)
        .attr(LINK_ATTR, "")
        .class(class);
    let builder = if is_active(ctx.location(), &href, end) {
        builder.add_class(ACTIVE_CLASS).attr("aria-current", "page")
    } else {
        builder
    };
    builder.text(label).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_and_absolute_targets() {
        assert_eq!(resolve("/orders", "123"), "/orders/123");
        assert_eq!(resolve("/orders/", "./123"), "/orders/123");
        assert_eq!(resolve("/orders/123", ".."), "/orders");
        assert_eq!(resolve("/orders", "../../.."), "/");
        assert_eq!(resolve("/orders/123", "/"), "/");
        assert_eq!(resolve("/orders", "/orders/9?tab=items"), "/orders/9?tab=items");
        assert_eq!(resolve("/", "orders#top"), "/orders#top");
        assert_eq!(resolve("/orders", ""), "/orders");
    }

    #[test]
    fn end_requires_exact_match() {
        assert!(is_active("/", "/", true));
        assert!(!is_active("/orders", "/", true));
        assert!(is_active("/orders", "/", false));
    }

    #[test]
    fn prefix_match_respects_segment_boundaries() {
        assert!(is_active("/orders/123", "/orders", false));
        assert!(is_active("/orders/", "/orders", false));
        assert!(!is_active("/orders-archive", "/orders", false));
        assert!(!is_active("/orders/123", "/orders", true));
    }
}
