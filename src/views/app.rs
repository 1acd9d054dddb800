// ============================================================================
// APP VIEW - Layout raíz: header con navegación, main con outlet, footer
// ============================================================================

use chrono::{Datelike, Utc};

use crate::dom::{View, ViewBuilder};
use crate::router::{nav_link, RenderContext};

const NAV_LINK_CLASS: &str = "hover:text-teal-300";

pub fn render_app(mut ctx: RenderContext<'_>, app_name: &str) -> View {
    let header = ViewBuilder::new("header")
        .class("bg-gray-900 text-white px-4 py-3 shadow-md")
        .child(
            ViewBuilder::new("nav")
                .class("flex gap-6")
                // `end`: Home solo activo en "/" exacto
                .child(nav_link(&ctx, "/", "Home", true, NAV_LINK_CLASS))
                .child(nav_link(&ctx, "/orders", "Orders", false, NAV_LINK_CLASS))
                .build(),
        )
        .build();

    let main = ViewBuilder::new("main")
        .class("flex-1 p-6 bg-gray-50")
        .child(ctx.outlet())
        .build();

    let footer = ViewBuilder::new("footer")
        .class("bg-gray-900 text-gray-400 text-center py-2 text-sm")
        .text(format!("© {} {}", Utc::now().year(), app_name))
        .build();

    ViewBuilder::new("div")
        .class("min-h-screen flex flex-col")
        .child(header)
        .child(main)
        .child(footer)
        .build()
}
