use crate::dom::{View, ViewBuilder};
use crate::router::{link, RenderContext};

/// Hoja catch-all (solo si `NOT_FOUND_PAGE=true`)
pub fn render_not_found(ctx: RenderContext<'_>) -> View {
    let missing = format!("/{}", ctx.param("*").unwrap_or_default());
    ViewBuilder::new("section")
        .class("p-6")
        .child(
            ViewBuilder::new("h1")
                .class("text-2xl font-semibold mb-4")
                .text("Page not found")
                .build(),
        )
        .child(
            ViewBuilder::new("p")
                .text("Nothing lives at ")
                .child(ViewBuilder::new("code").text(missing).build())
                .build(),
        )
        .child(link(&ctx, "/", "Back home", "text-teal-600 underline"))
        .build()
}
