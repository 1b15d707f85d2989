use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::aggregate::{use_aggregate, LoadState};
use crate::components::layout::{page_content, EmptyState, PageShell};
use crate::components::ui_state::Carousel;
use crate::content::api::{self, PageKey};
use crate::content::error::FetchError;
use crate::content::image::image_url;
use crate::content::models::{GalleryImage, GalleryPage, GallerySummary, PageConfig};
use crate::router::{use_scroll_to_top, CollectionView};
use crate::Route;

pub enum GalleryModel {
    Index {
        config: PageConfig,
        galleries: Vec<GallerySummary>,
    },
    Page {
        config: PageConfig,
        gallery: GalleryPage,
    },
}

async fn load_gallery(view: CollectionView) -> Result<GalleryModel, FetchError> {
    match view {
        CollectionView::Listing => {
            let (config, galleries) =
                futures::try_join!(api::page_config(PageKey::Gallery), api::galleries())?;
            Ok(GalleryModel::Index { config, galleries })
        }
        CollectionView::Detail(slug) => {
            let (config, gallery) =
                futures::try_join!(api::page_config(PageKey::Gallery), api::gallery(&slug))?;
            Ok(GalleryModel::Page { config, gallery })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    #[prop_or_default]
    pub slug: Option<String>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let view = CollectionView::from_slug(props.slug.as_deref());
    use_scroll_to_top(view.clone());
    let data = use_aggregate(view, load_gallery);

    let title = match data.state() {
        LoadState::Ready(GalleryModel::Page { gallery, .. }) => format!("{} | SealDesk", gallery.title),
        _ => "Gallery | SealDesk".to_string(),
    };
    use_title(title);

    let content = gallery_content(data.state(), &data.retry);

    html! {
        <div class="gallery-page">
            {content}
            <style>{GALLERY_CSS}</style>
        </div>
    }
}

fn gallery_content(state: &LoadState<GalleryModel>, on_retry: &Callback<()>) -> Html {
    page_content(state, on_retry, |model| match model {
        GalleryModel::Index { config, galleries } => html! {
            <PageShell config={config.clone()}>
                <GalleryIndex galleries={galleries.clone()} />
            </PageShell>
        },
        GalleryModel::Page { config, gallery } => html! {
            <PageShell config={config.clone()}>
                <section class="gallery-header">
                    <h1>{&gallery.title}</h1>
                    if let Some(description) = &gallery.description {
                        <p>{description}</p>
                    }
                </section>
                <ImageGrid images={gallery.images.clone()} />
            </PageShell>
        },
    })
}

#[derive(Properties, PartialEq)]
pub struct GalleryIndexProps {
    pub galleries: Vec<GallerySummary>,
}

#[function_component(GalleryIndex)]
pub fn gallery_index(props: &GalleryIndexProps) -> Html {
    if props.galleries.is_empty() {
        return html! { <EmptyState message="No galleries have been published yet." /> };
    }
    html! {
        <section class="gallery-index">
            { for props.galleries.iter().map(|gallery| html! {
                <Link<Route> to={Route::GalleryPage { slug: gallery.slug() }} classes="gallery-card">
                    if let Some(cover) = &gallery.cover_image {
                        <img src={image_url(cover)} alt={gallery.title.clone()} loading="lazy" />
                    }
                    <h2>{&gallery.title}</h2>
                    if let Some(count) = gallery.image_count {
                        <span class="gallery-count">{format!("{} photos", count)}</span>
                    }
                </Link<Route>>
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageGridProps {
    pub images: Vec<GalleryImage>,
}

/// Thumbnail grid with a lightbox. The lightbox is a toggle plus a wrapping
/// carousel position.
#[function_component(ImageGrid)]
pub fn image_grid(props: &ImageGridProps) -> Html {
    let count = props.images.len();
    let lightbox_open = use_state(|| false);
    let carousel = use_state(|| Carousel::new(count));

    // Gallery swapped under us: start from the first image again.
    {
        let carousel = carousel.clone();
        let lightbox_open = lightbox_open.clone();
        use_effect_with_deps(
            move |count| {
                carousel.set(Carousel::new(*count));
                lightbox_open.set(false);
                || ()
            },
            count,
        );
    }

    // Arrow keys and escape while the lightbox is up.
    {
        let deps = (*lightbox_open, *carousel);
        let carousel = carousel.clone();
        let lightbox_open = lightbox_open.clone();
        use_effect_with_deps(
            move |(open, _position): &(bool, Carousel)| {
                let listener = if *open {
                    web_sys::window().map(|window| {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            match e.key().as_str() {
                                "ArrowRight" => carousel.set(carousel.next()),
                                "ArrowLeft" => carousel.set(carousel.prev()),
                                "Escape" => lightbox_open.set(false),
                                _ => {}
                            }
                        });
                        let _ = window.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        (window, callback)
                    })
                } else {
                    None
                };
                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            deps,
        );
    }

    if props.images.is_empty() {
        return html! { <EmptyState message="This gallery has no photos yet." /> };
    }

    let open_at = |index: usize| {
        let carousel = carousel.clone();
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_: MouseEvent| {
            gloo_console::log!("Lightbox opened at image", (index + 1).to_string());
            carousel.set(Carousel::at(index, count));
            lightbox_open.set(true);
        })
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };
    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let close = {
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_: MouseEvent| lightbox_open.set(false))
    };

    let lightbox = match (*lightbox_open, props.images.get(carousel.index())) {
        (true, Some(image)) => html! {
            <Lightbox image={image.clone()} position={*carousel}
                on_prev={prev} on_next={next} on_close={close} />
        },
        _ => html! {},
    };

    html! {
        <>
            <section class="image-grid">
                { for props.images.iter().enumerate().map(|(index, image)| html! {
                    <button class="image-thumb" onclick={open_at(index)}>
                        <img src={image_url(&image.src)} alt={image.alt.clone().unwrap_or_default()} loading="lazy" />
                    </button>
                }) }
            </section>
            {lightbox}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: GalleryImage,
    pub position: Carousel,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let image = &props.image;
    html! {
        <div class="lightbox" role="dialog">
            <button class="lightbox-close" aria-label="Close" onclick={props.on_close.clone()}>{"×"}</button>
            <button class="lightbox-prev" aria-label="Previous" onclick={props.on_prev.clone()}>{"‹"}</button>
            <figure>
                <img src={image_url(&image.src)} alt={image.alt.clone().unwrap_or_default()} />
                if let Some(caption) = &image.caption {
                    <figcaption>{caption}</figcaption>
                }
                <span class="lightbox-position">
                    {format!("{} / {}", props.position.index() + 1, props.position.len())}
                </span>
            </figure>
            <button class="lightbox-next" aria-label="Next" onclick={props.on_next.clone()}>{"›"}</button>
        </div>
    }
}

const GALLERY_CSS: &str = r#"
.gallery-page {
    padding-top: 74px;
    min-height: 100vh;
}
.gallery-header {
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
    text-align: center;
}
.gallery-index,
.image-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1rem;
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem;
}
.gallery-card {
    display: block;
    color: inherit;
    text-decoration: none;
    border-radius: 12px;
    overflow: hidden;
    background: #ffffff;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
}
.gallery-card img,
.image-thumb img {
    width: 100%;
    height: 200px;
    object-fit: cover;
    display: block;
}
.gallery-card h2 {
    font-size: 1.2rem;
    padding: 1rem 1rem 0;
}
.gallery-count {
    display: block;
    padding: 0 1rem 1rem;
    color: #8a93a5;
}
.image-thumb {
    border: none;
    padding: 0;
    cursor: zoom-in;
    background: none;
}
.lightbox {
    position: fixed;
    inset: 0;
    background: rgba(10, 14, 22, 0.92);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}
.lightbox figure {
    max-width: 80vw;
    text-align: center;
    color: #ffffff;
}
.lightbox img {
    max-width: 100%;
    max-height: 75vh;
}
.lightbox button {
    background: none;
    border: none;
    color: #ffffff;
    font-size: 3rem;
    cursor: pointer;
    padding: 1rem;
}
.lightbox-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
}
.lightbox-position {
    display: block;
    margin-top: 0.5rem;
    opacity: 0.7;
}
"#;
