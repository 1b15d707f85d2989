use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title("Page not found | SealDesk".to_string());
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"We couldn't find the page you were looking for."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to the homepage"}
            </Link<Route>>
        </div>
    }
}
