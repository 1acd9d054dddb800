use crate::dom::{View, ViewBuilder};
use crate::router::RenderContext;

pub fn render_home(_ctx: RenderContext<'_>) -> View {
    ViewBuilder::new("section")
        .child(
            ViewBuilder::new("h1")
                .class("text-2xl font-semibold mb-4")
                .text("Home")
                .build(),
        )
        .child(ViewBuilder::new("p").text("Welcome! Pick a section from the menu.").build())
        .build()
}
