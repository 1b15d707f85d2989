use yew::prelude::*;
use yew::LocalServerRenderer;

#[derive(Properties, PartialEq)]
struct InnerProps {
    html: Html,
}

#[function_component(Inner)]
fn inner(props: &InnerProps) -> Html {
    props.html.clone()
}

/// Server-renders `html` to a string so composers can be checked without a
/// browser.
pub fn render(html: Html) -> String {
    let renderer = LocalServerRenderer::<Inner>::with_props(InnerProps { html }).hydratable(false);
    futures::executor::block_on(renderer.render())
}
