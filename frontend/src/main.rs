use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod aggregate;
mod router;
#[cfg(test)]
mod testing;
mod content {
    pub mod api;
    pub mod error;
    pub mod image;
    pub mod models;
    pub mod slug;
}
mod components {
    pub mod form;
    pub mod layout;
    pub mod ui_state;
}
mod pages {
    pub mod affiliate;
    pub mod blog;
    pub mod gallery;
    pub mod not_found;
    pub mod sales;
    pub mod team;
}

use content::api::PageKey;
use pages::{
    affiliate::Affiliates,
    blog::Blog,
    gallery::Gallery,
    not_found::NotFound,
    sales::Sales,
    team::Team,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/gallery")]
    Gallery,
    #[at("/gallery/:slug")]
    GalleryPage { slug: String },
    #[at("/lp/:slug")]
    Sales { slug: String },
    #[at("/team")]
    Team,
    #[at("/affiliates")]
    Affiliates,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Sales slug="home" page_key={PageKey::Home} /> }
        },
        Route::Blog => {
            info!("Rendering Blog listing");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <Blog slug={Some(slug)} /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery index");
            html! { <Gallery /> }
        },
        Route::GalleryPage { slug } => {
            info!("Rendering Gallery {}", slug);
            html! { <Gallery slug={Some(slug)} /> }
        },
        Route::Sales { slug } => {
            info!("Rendering Sales page {}", slug);
            html! { <Sales {slug} /> }
        },
        Route::Team => {
            info!("Rendering Team page");
            html! { <Team /> }
        },
        Route::Affiliates => {
            info!("Rendering Affiliates page");
            html! { <Affiliates /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > config::NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"SealDesk"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Gallery} classes="nav-link">
                            {"Gallery"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Team} classes="nav-link">
                            {"Team"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Affiliates} classes="nav-cta">
                            {"Become an affiliate"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application, content from {}", config::get_cms_url());
    yew::Renderer::<App>::new().render();
}
