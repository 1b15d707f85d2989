use yew::prelude::*;
use yew_router::prelude::*;

use crate::aggregate::LoadState;
use crate::content::image::image_url;
use crate::content::models::{Footer, Hero, NavLink, PageConfig};
use crate::router::{resolve_link, LinkTarget};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CmsLinkProps {
    pub link: NavLink,
    #[prop_or_default]
    pub class: Classes,
}

/// A CMS link: router link for our own pages, plain anchor otherwise.
#[function_component(CmsLink)]
pub fn cms_link(props: &CmsLinkProps) -> Html {
    match resolve_link(&props.link.href) {
        LinkTarget::Internal(route) => html! {
            <Link<Route> to={route} classes={props.class.clone()}>
                {&props.link.label}
            </Link<Route>>
        },
        LinkTarget::External(href) => {
            let new_tab = href.starts_with("http") || href.starts_with("//");
            html! {
                <a class={props.class.clone()} {href}
                    target={new_tab.then_some("_blank")}
                    rel={new_tab.then_some("noopener noreferrer")}>
                    {&props.link.label}
                </a>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: Hero,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let style = hero
        .image
        .as_deref()
        .map(|image| format!("background-image: url('{}');", image_url(image)));

    html! {
        <section class="page-hero" {style}>
            <h1>{&hero.title}</h1>
            if let Some(subtitle) = &hero.subtitle {
                <p class="hero-subtitle">{subtitle}</p>
            }
            if let Some(cta) = &hero.cta {
                <CmsLink link={cta.clone()} class="hero-cta" />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub links: Vec<NavLink>,
}

#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    if props.links.is_empty() {
        return html! {};
    }
    html! {
        <nav class="section-nav">
            { for props.links.iter().map(|link| html! {
                <CmsLink link={link.clone()} class="section-nav-link" />
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub footer: Footer,
}

#[function_component(PageFooter)]
pub fn page_footer(props: &FooterProps) -> Html {
    let footer = &props.footer;
    html! {
        <footer class="page-footer">
            if let Some(text) = &footer.text {
                <p class="footer-text">{text}</p>
            }
            if !footer.links.is_empty() {
                <div class="footer-links">
                    { for footer.links.iter().map(|link| html! {
                        <CmsLink link={link.clone()} class="footer-link" />
                    }) }
                </div>
            }
            if let Some(copyright) = &footer.copyright {
                <p class="footer-copyright">{copyright}</p>
            }
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub config: PageConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Hero, section links and footer around a page body. Each part is left out
/// when the CMS has nothing for it.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    let config = &props.config;
    html! {
        <div class="page">
            if let Some(hero) = &config.hero {
                <HeroSection hero={hero.clone()} />
            }
            <SectionNav links={config.navigation.clone()} />
            <main class="page-body">
                { for props.children.iter() }
            </main>
            if let Some(footer) = &config.footer {
                <PageFooter footer={footer.clone()} />
            }
        </div>
    }
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <div class="page-loading" aria-busy="true">
            <span class="loading-spinner"></span>
            <span>{"Loading..."}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

/// Takes over the content area when a page's data could not be loaded.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let navigator = use_navigator();
    let retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };
    let back = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.back(),
        None => {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    });

    html! {
        <div class="error-panel" role="alert">
            <h2>{"Something went wrong"}</h2>
            <p class="error-message">{&props.message}</p>
            <div class="error-actions">
                <button class="error-retry" onclick={retry}>{"Try again"}</button>
                <button class="error-back" onclick={back}>{"Back"}</button>
            </div>
        </div>
    }
}

/// The content area for a page load: spinner, error panel, or whatever
/// `ready` composes from the view model.
pub fn page_content<T>(
    state: &LoadState<T>,
    on_retry: &Callback<()>,
    ready: impl FnOnce(&T) -> Html,
) -> Html {
    match state {
        LoadState::Loading => html! { <LoadingIndicator /> },
        LoadState::Error(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={on_retry.clone()} />
        },
        LoadState::Ready(model) => ready(model),
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <p>{&props.message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    fn in_router(html: Html) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! { <Router {history}>{html}</Router> }
    }

    #[test]
    fn shell_omits_missing_sections() {
        let html = render(in_router(html! {
            <PageShell config={PageConfig::default()}>
                <p>{"body"}</p>
            </PageShell>
        }));
        assert!(html.contains("body"));
        assert!(!html.contains("page-hero"));
        assert!(!html.contains("section-nav"));
        assert!(!html.contains("page-footer"));
    }

    #[test]
    fn shell_renders_present_sections() {
        let config = PageConfig {
            hero: Some(Hero {
                title: "Notarize anything, anywhere".into(),
                subtitle: None,
                image: None,
                cta: None,
            }),
            navigation: vec![NavLink { label: "Pricing".into(), href: "#pricing".into() }],
            footer: Some(Footer { text: None, links: vec![], copyright: Some("© SealDesk".into()) }),
        };
        let html = render(in_router(html! { <PageShell {config} /> }));
        assert!(html.contains("Notarize anything, anywhere"));
        assert!(!html.contains("hero-subtitle"));
        assert!(html.contains("section-nav"));
        assert!(html.contains("© SealDesk"));
        assert!(!html.contains("footer-links"));
    }

    #[test]
    fn internal_links_use_router_paths() {
        let link = NavLink { label: "Our team".into(), href: "/team".into() };
        let html = render(in_router(html! { <CmsLink {link} /> }));
        assert!(html.contains(r#"href="/team""#));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn error_panel_offers_retry_and_back() {
        let html = render(in_router(html! {
            <ErrorPanel message="Could not reach the content service: offline" on_retry={Callback::noop()} />
        }));
        assert!(html.contains("Could not reach the content service: offline"));
        assert!(html.contains("error-retry"));
        assert!(html.contains("Try again"));
        assert!(html.contains("error-back"));
    }

    #[test]
    fn failed_load_replaces_the_page() {
        let state: LoadState<PageConfig> = LoadState::Error("The content service answered 500 for /api/team-members".into());
        let html = render(in_router(page_content(&state, &Callback::noop(), |config| html! {
            <PageShell config={config.clone()} />
        })));
        assert!(html.contains("error-panel"));
        assert!(html.contains("answered 500"));
        assert!(!html.contains("page-body"));
        assert!(!html.contains("page-loading"));
    }

    #[test]
    fn content_follows_load_state() {
        let loading = render(page_content(&LoadState::<PageConfig>::Loading, &Callback::noop(), |_| html! {}));
        assert!(loading.contains("page-loading"));
        assert!(!loading.contains("error-panel"));

        let ready = render(in_router(page_content(
            &LoadState::Ready(PageConfig::default()),
            &Callback::noop(),
            |config| html! { <PageShell config={config.clone()} /> },
        )));
        assert!(ready.contains("page-body"));
        assert!(!ready.contains("error-panel"));
    }

    #[test]
    fn loading_and_empty_states_differ() {
        let loading = render(html! { <LoadingIndicator /> });
        let empty = render(html! { <EmptyState message="No posts yet" /> });
        assert!(loading.contains("page-loading"));
        assert!(empty.contains("empty-state"));
        assert!(!empty.contains("page-loading"));
    }
}
