//! The classic two-counter demo: a root component producing two counters
//! with independent state slots, driven by programmatic clicks. Run with
//! `RUST_LOG=debug` to watch the rerenders.

use refract::prelude::*;

fn app(ctx: &RenderContext) -> Result<Node, RenderError> {
    el("div")
        .child({
            let ctx = ctx.clone();
            move || counter(&ctx, Some(1))
        })
        .child({
            let ctx = ctx.clone();
            move || counter(&ctx, Some(5))
        })
        .build()
}

fn counter(ctx: &RenderContext, initial: Option<i64>) -> Result<Node, RenderError> {
    let (count, set_count) = use_state(ctx, initial.unwrap_or(0));
    el("div")
        .attr("style", "display: flex")
        .child(
            el("button")
                .attr("text", "-")
                .attr("aria-label", "decrement")
                .on_click({
                    let set_count = set_count.clone();
                    move || set_count.set(count - 1)
                })
                .build()?,
        )
        .child(el("h1").attr("text", count).build()?)
        .child(
            el("button")
                .attr("text", "+")
                .attr("aria-label", "increment")
                .on_click(move || set_count.set(count + 1))
                .build()?,
        )
        .build()
}

/// Click the button with the given aria-label inside counter `index`.
fn click(body: &Node, index: usize, label: &str) {
    let counter = body
        .child(0)
        .and_then(|root| root.child(index))
        .expect("counter not rendered");
    let button = counter
        .children()
        .into_iter()
        .find(|node| node.attribute("aria-label") == Some(AttrValue::from(label)))
        .expect("button not rendered");
    button.click();
}

fn main() -> Result<(), RenderError> {
    let _ = env_logger::try_init();

    let body = create_element("body")?;
    let ctx = RenderContext::new();
    ctx.mount(&body, app)?;
    println!("initial:            {body}");

    click(&body, 0, "increment");
    println!("first counter  '+': {body}");

    click(&body, 1, "decrement");
    println!("second counter '-': {body}");

    Ok(())
}
