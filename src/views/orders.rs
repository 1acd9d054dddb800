// ============================================================================
// ORDERS VIEWS - Lista (con outlet) y detalle `/orders/:id`
// ============================================================================

use crate::dom::{View, ViewBuilder};
use crate::router::{link, RenderContext};

pub fn render_orders(mut ctx: RenderContext<'_>) -> View {
    View::fragment([
        ViewBuilder::new("h1")
            .class("text-2xl font-semibold mb-4")
            .text("Orders")
            .build(),
        // Link relativo: se resuelve contra /orders
        link(&ctx, "123", "View order #123", "text-teal-600 underline hover:text-teal-800"),
        // Aquí se monta OrderDetail cuando la URL es /orders/:id
        ctx.outlet(),
    ])
}

pub fn render_order_detail(ctx: RenderContext<'_>) -> View {
    let id = ctx.param("id").unwrap_or_default();
    ViewBuilder::new("section")
        .class("mt-6 p-4 border rounded bg-white shadow")
        .child(
            ViewBuilder::new("h2")
                .class("font-medium text-lg")
                .text(format!("Order: {}", id))
                .build(),
        )
        .child(
            ViewBuilder::new("p")
                .text("Here you’d fetch and display details for order ")
                .child(ViewBuilder::new("code").text(id).build())
                .text(".")
                .build(),
        )
        .build()
}
