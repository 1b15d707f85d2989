use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::aggregate::{use_aggregate, LoadState};
use crate::components::form::FormPanel;
use crate::components::layout::{page_content, CmsLink, PageShell};
use crate::components::ui_state::{Accordion, Carousel};
use crate::content::api::{self, PageKey};
use crate::content::error::FetchError;
use crate::content::image::image_url;
use crate::content::models::{
    CallToAction, FaqSection, FeatureSection, FormDefinition, NavLink, PageConfig, PricingSection,
    SalesPage, TestimonialSection,
};
use crate::router::use_scroll_to_top;

/// Testimonials move on by themselves this often.
const TESTIMONIAL_ROTATE_MS: u32 = 8_000;

pub struct SalesModel {
    config: PageConfig,
    page: SalesPage,
}

async fn load_sales((page_key, slug): (PageKey, String)) -> Result<SalesModel, FetchError> {
    let (config, page) = futures::try_join!(api::page_config(page_key), api::sales_page(&slug))?;
    Ok(SalesModel { config, page })
}

#[derive(Properties, PartialEq)]
pub struct SalesProps {
    pub slug: String,
    #[prop_or(PageKey::Sales)]
    pub page_key: PageKey,
}

/// Landing pages under `/lp/:slug`. The home page is the `home` sales page.
#[function_component(Sales)]
pub fn sales(props: &SalesProps) -> Html {
    use_scroll_to_top(props.slug.clone());
    let data = use_aggregate((props.page_key, props.slug.clone()), load_sales);

    let title = match data.state() {
        LoadState::Ready(model) => format!("{} | SealDesk", model.page.title),
        _ => "SealDesk".to_string(),
    };
    use_title(title);

    let content = page_content(data.state(), &data.retry, |SalesModel { config, page }| html! {
        <PageShell config={config.clone()}>
            <SalesBody page={page.clone()} />
        </PageShell>
    });

    html! {
        <div class="sales-page">
            {content}
            <style>{SALES_CSS}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SalesBodyProps {
    pub page: SalesPage,
}

#[function_component(SalesBody)]
pub fn sales_body(props: &SalesBodyProps) -> Html {
    let page = &props.page;
    html! {
        <>
            if let Some(intro) = &page.intro {
                <section class="sales-intro">
                    <p>{intro}</p>
                </section>
            }
            if let Some(features) = &page.features {
                <Features section={features.clone()} />
            }
            if let Some(testimonials) = &page.testimonials {
                <Testimonials section={testimonials.clone()} />
            }
            if let Some(pricing) = &page.pricing {
                <Pricing section={pricing.clone()} />
            }
            if let Some(faq) = &page.faq {
                <Faq section={faq.clone()} />
            }
            <CtaBlock cta={page.cta.clone()} form={page.form.clone()} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub section: FeatureSection,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let section = &props.section;
    if section.items.is_empty() {
        return html! {};
    }
    html! {
        <section class="features" id="features">
            if let Some(heading) = &section.heading {
                <h2>{heading}</h2>
            }
            <div class="features-grid">
                { for section.items.iter().map(|feature| html! {
                    <div class="feature-item">
                        if let Some(icon) = &feature.icon {
                            <img class="feature-icon" src={image_url(icon)} alt="" />
                        }
                        <h3>{&feature.title}</h3>
                        <p>{&feature.text}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub section: TestimonialSection,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let count = props.section.items.len();
    let carousel = use_state(|| Carousel::new(count));
    // The section can be swapped for one with fewer quotes.
    let position = Carousel::at(carousel.index(), count);

    // Auto-advance; the interval is dropped (and stopped) on cleanup.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |(count, position): &(usize, Carousel)| {
                let position = *position;
                let interval = (*count > 1).then(|| {
                    Interval::new(TESTIMONIAL_ROTATE_MS, move || carousel.set(position.next()))
                });
                move || drop(interval)
            },
            (count, position),
        );
    }

    let Some(current) = props.section.items.get(position.index()) else {
        return html! {};
    };

    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(position.next()))
    };
    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(position.prev()))
    };

    html! {
        <section class="testimonials" id="testimonials">
            if let Some(heading) = &props.section.heading {
                <h2>{heading}</h2>
            }
            <div class="testimonial-carousel">
                if count > 1 {
                    <button class="carousel-prev" aria-label="Previous" onclick={prev}>{"‹"}</button>
                }
                <blockquote class="testimonial">
                    if let Some(photo) = &current.photo {
                        <img class="testimonial-photo" src={image_url(photo)} alt={current.name.clone()} />
                    }
                    <p>{&current.quote}</p>
                    <cite>
                        {&current.name}
                        if let Some(company) = &current.company {
                            {", "}{company}
                        }
                    </cite>
                </blockquote>
                if count > 1 {
                    <button class="carousel-next" aria-label="Next" onclick={next}>{"›"}</button>
                }
            </div>
            if count > 1 {
                <div class="carousel-indicators">
                    { for (0..count).map(|index| {
                        let select = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.set(Carousel::at(index, count)))
                        };
                        html! {
                            <button
                                class={classes!("carousel-dot", (index == position.index()).then_some("active"))}
                                aria-label={format!("Show testimonial {}", index + 1)}
                                onclick={select}
                            />
                        }
                    }) }
                </div>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub section: PricingSection,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let section = &props.section;
    if section.plans.is_empty() {
        return html! {};
    }
    html! {
        <section class="pricing" id="pricing">
            if let Some(heading) = &section.heading {
                <h2>{heading}</h2>
            }
            <div class="pricing-grid">
                { for section.plans.iter().map(|plan| html! {
                    <div class={classes!("pricing-card", plan.highlighted.then_some("highlighted"))}>
                        <h3>{&plan.name}</h3>
                        <div class="price">
                            {&plan.price}
                            if let Some(period) = &plan.period {
                                <span class="period">{format!(" / {}", period)}</span>
                            }
                        </div>
                        <ul>
                            { for plan.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub section: FaqSection,
}

/// Question list where at most one answer is expanded.
#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);
    let section = &props.section;
    if section.items.is_empty() {
        return html! {};
    }

    html! {
        <section class="faq-section" id="faq">
            if let Some(heading) = &section.heading {
                <h2>{heading}</h2>
            }
            { for section.items.iter().enumerate().map(|(index, entry)| {
                let is_open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.set(accordion.toggle(index));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then_some("open"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{&entry.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        if is_open {
                            <div class="faq-answer">
                                <p>{&entry.answer}</p>
                            </div>
                        }
                    </div>
                }
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub cta: Option<CallToAction>,
    pub form: Option<FormDefinition>,
}

/// Closing call to action. With both a CTA and a form the form opens from the
/// CTA button. A form on its own is shown inline, and a CTA on its own links
/// to its `href` (no button when it has none).
#[function_component(CtaBlock)]
pub fn cta_block(props: &CtaProps) -> Html {
    let action = match (&props.cta, &props.form) {
        (None, None) => return html! {},
        (Some(cta), Some(form)) => html! {
            <FormPanel definition={form.clone()} trigger_label={cta.button_label.clone()} />
        },
        (None, Some(form)) => html! { <FormPanel definition={form.clone()} /> },
        (Some(cta), None) => match &cta.href {
            Some(href) => {
                let link = NavLink { label: cta.button_label.clone(), href: href.clone() };
                html! { <CmsLink {link} class={classes!("hero-cta")} /> }
            }
            None => html! {},
        },
    };

    html! {
        <section class="footer-cta" id="contact">
            if let Some(cta) = &props.cta {
                <h2>{&cta.heading}</h2>
                if let Some(text) = &cta.text {
                    <p class="subtitle">{text}</p>
                }
            }
            {action}
        </section>
    }
}

const SALES_CSS: &str = r#"
.sales-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #1d2433;
}
.sales-intro {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 2rem 1rem;
    font-size: 1.2rem;
    text-align: center;
}
.features,
.testimonials,
.pricing,
.faq-section,
.footer-cta {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 2rem;
    text-align: center;
}
.features-grid,
.pricing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
    margin-top: 2rem;
}
.feature-item,
.pricing-card {
    background: #ffffff;
    border-radius: 12px;
    padding: 2rem;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
}
.feature-icon {
    width: 48px;
    height: 48px;
}
.pricing-card.highlighted {
    border: 2px solid #163f78;
}
.price {
    font-size: 2rem;
    font-weight: 700;
}
.period {
    font-size: 1rem;
    font-weight: 400;
    color: #8a93a5;
}
.testimonial-carousel {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}
.testimonial {
    max-width: 640px;
    font-size: 1.2rem;
    animation: fadeIn 0.5s ease-in-out;
}
.testimonial-photo {
    width: 72px;
    height: 72px;
    border-radius: 50%;
}
.carousel-prev,
.carousel-next {
    background: none;
    border: none;
    font-size: 2.5rem;
    cursor: pointer;
}
.carousel-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: none;
    margin: 0 4px;
    background: #c8d2e3;
    cursor: pointer;
}
.carousel-dot.active {
    background: #163f78;
}
.faq-section {
    text-align: left;
    max-width: 800px;
}
.faq-item {
    border-bottom: 1px solid rgba(22, 63, 120, 0.12);
}
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    background: none;
    border: none;
    padding: 1.2rem 0;
    font-size: 1.1rem;
    cursor: pointer;
    text-align: left;
}
.faq-answer {
    padding-bottom: 1rem;
    color: #5b6475;
}
.hero-cta {
    background: #163f78;
    color: #ffffff;
    border: none;
    border-radius: 8px;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    cursor: pointer;
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    fn page(json: &str) -> SalesPage {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn absent_sections_are_left_out() {
        let page = page(r#"{"id": 1, "title": "Remote online notarization"}"#);
        let html = render(html! { <SalesBody {page} /> });
        for class in ["features", "testimonials", "pricing", "faq-section", "footer-cta", "sales-intro"] {
            assert!(!html.contains(class), "unexpected {class}");
        }
    }

    #[test]
    fn faq_starts_fully_collapsed() {
        let page = page(
            r#"{"id": 1, "title": "t", "faq": {"items": [
                {"question": "Do I need ID?", "answer": "Yes, government issued."},
                {"question": "How long?", "answer": "About 15 minutes."}
            ]}}"#,
        );
        let html = render(html! { <SalesBody {page} /> });
        assert!(html.contains("Do I need ID?"));
        assert!(html.contains("How long?"));
        assert!(!html.contains("faq-answer"));
    }

    #[test]
    fn testimonials_show_the_first_quote() {
        let page = page(
            r#"{"id": 1, "title": "t", "testimonials": {"items": [
                {"quote": "Fast and friendly.", "name": "Ada"},
                {"quote": "Came to my office.", "name": "Alan", "company": "Turing Ltd"}
            ]}}"#,
        );
        let html = render(html! { <SalesBody {page} /> });
        assert!(html.contains("Fast and friendly."));
        assert!(!html.contains("Came to my office."));
        assert_eq!(html.matches("carousel-dot").count(), 2);
    }

    #[test]
    fn cta_form_starts_behind_its_button() {
        let page = page(
            r#"{"id": 1, "title": "t",
                "cta": {"heading": "Ready to sign?", "button_label": "Book a notary"},
                "form": {"id": "lead", "fields": [{"id": "name", "label": "Name", "kind": "text", "required": true}]}}"#,
        );
        let html = render(html! { <SalesBody {page} /> });
        assert!(html.contains("Ready to sign?"));
        assert!(html.contains("Book a notary"));
        assert!(!html.contains("form-panel"));
    }

    #[test]
    fn form_without_cta_is_shown_inline() {
        let page = page(
            r#"{"id": 1, "title": "t",
                "form": {"id": "lead", "submit_label": "Request a call", "fields": [{"id": "phone", "label": "Phone", "kind": "tel"}]}}"#,
        );
        let html = render(html! { <SalesBody {page} /> });
        assert!(html.contains("footer-cta"));
        assert!(html.contains("form-panel"));
        assert!(html.contains("Request a call"));
        assert!(!html.contains("modal-backdrop"));
    }

    #[test]
    fn cta_without_form_links_to_its_target() {
        let page = page(
            r#"{"id": 1, "title": "t",
                "cta": {"heading": "Questions?", "button_label": "Meet the team", "href": "/team"}}"#,
        );
        let history = AnyHistory::from(MemoryHistory::new());
        let html = render(html! {
            <Router {history}>
                <SalesBody {page} />
            </Router>
        });
        assert!(html.contains("Questions?"));
        assert!(html.contains("Meet the team"));
        assert!(html.contains(r#"href="/team""#));
        assert!(!html.contains("form-panel"));
    }
}
