use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::aggregate::{use_aggregate, LoadState};
use crate::components::form::FormPanel;
use crate::components::layout::{page_content, PageShell};
use crate::content::api::{self, PageKey};
use crate::content::error::FetchError;
use crate::content::models::{AffiliatePage, PageConfig};
use crate::router::use_scroll_to_top;

async fn load_affiliates(_: ()) -> Result<(PageConfig, AffiliatePage), FetchError> {
    futures::try_join!(api::page_config(PageKey::Affiliates), api::affiliate_page())
}

#[function_component(Affiliates)]
pub fn affiliates() -> Html {
    use_title("Affiliate program | SealDesk".to_string());
    use_scroll_to_top(());
    let data = use_aggregate((), load_affiliates);

    let content = affiliate_content(data.state(), &data.retry);

    html! {
        <div class="affiliate-page">
            {content}
            <style>
                {r#"
                .affiliate-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .affiliate-body {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .benefits-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin: 2rem 0;
                }
                .benefit {
                    background: #f4f7fc;
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .commission {
                    text-align: center;
                    padding: 2rem;
                    border: 2px solid #163f78;
                    border-radius: 12px;
                    margin: 2rem 0;
                }
                .commission-rate {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #163f78;
                }
                "#}
            </style>
        </div>
    }
}

fn affiliate_content(state: &LoadState<(PageConfig, AffiliatePage)>, on_retry: &Callback<()>) -> Html {
    page_content(state, on_retry, |(config, page)| html! {
        <PageShell config={config.clone()}>
            <AffiliateBody page={page.clone()} />
        </PageShell>
    })
}

#[derive(Properties, PartialEq)]
pub struct AffiliateBodyProps {
    pub page: AffiliatePage,
}

#[function_component(AffiliateBody)]
pub fn affiliate_body(props: &AffiliateBodyProps) -> Html {
    let page = &props.page;
    html! {
        <section class="affiliate-body">
            <h1>{&page.title}</h1>
            if let Some(intro) = &page.intro {
                <p class="affiliate-intro">{intro}</p>
            }
            if !page.benefits.is_empty() {
                <div class="benefits-grid">
                    { for page.benefits.iter().map(|benefit| html! {
                        <div class="benefit">
                            <h3>{&benefit.title}</h3>
                            <p>{&benefit.text}</p>
                        </div>
                    }) }
                </div>
            }
            if let Some(commission) = &page.commission {
                <div class="commission">
                    <span class="commission-rate">{&commission.rate_label}</span>
                    if let Some(details) = &commission.details {
                        <p>{details}</p>
                    }
                </div>
            }
            if let Some(form) = &page.form {
                <FormPanel definition={form.clone()} />
            }
        </section>
    }
}
