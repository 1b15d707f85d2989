use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::aggregate::{use_aggregate, LoadState};
use crate::components::layout::{page_content, EmptyState, PageShell};
use crate::content::api::{self, PageKey};
use crate::content::error::FetchError;
use crate::content::image::image_url;
use crate::content::models::{PageConfig, TeamMember};
use crate::router::use_scroll_to_top;

async fn load_team(_: ()) -> Result<(PageConfig, Vec<TeamMember>), FetchError> {
    futures::try_join!(api::page_config(PageKey::Team), api::team_members())
}

#[function_component(Team)]
pub fn team() -> Html {
    use_title("Our team | SealDesk".to_string());
    use_scroll_to_top(());
    let data = use_aggregate((), load_team);

    let content = team_content(data.state(), &data.retry);

    html! {
        <div class="team-page">
            {content}
            <style>
                {r#"
                .team-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .team-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                }
                .team-photo {
                    width: 120px;
                    height: 120px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .team-role {
                    color: #8a93a5;
                }
                .team-links a {
                    margin: 0 0.4rem;
                    color: #163f78;
                }
                "#}
            </style>
        </div>
    }
}

fn team_content(state: &LoadState<(PageConfig, Vec<TeamMember>)>, on_retry: &Callback<()>) -> Html {
    page_content(state, on_retry, |(config, members)| html! {
        <PageShell config={config.clone()}>
            <TeamGrid members={members.clone()} />
        </PageShell>
    })
}

#[derive(Properties, PartialEq)]
pub struct TeamGridProps {
    pub members: Vec<TeamMember>,
}

#[function_component(TeamGrid)]
pub fn team_grid(props: &TeamGridProps) -> Html {
    if props.members.is_empty() {
        return html! { <EmptyState message="Our team page is being updated." /> };
    }
    html! {
        <section class="team-grid">
            { for props.members.iter().map(|member| html! {
                <div class="team-card" key={member.id}>
                    if let Some(photo) = &member.photo {
                        <img class="team-photo" src={image_url(photo)} alt={member.name.clone()} loading="lazy" />
                    }
                    <h3>{&member.name}</h3>
                    if let Some(role) = &member.role {
                        <p class="team-role">{role}</p>
                    }
                    if let Some(bio) = &member.bio {
                        <p class="team-bio">{bio}</p>
                    }
                    if !member.links.is_empty() {
                        <div class="team-links">
                            { for member.links.iter().map(|link| html! {
                                <a href={link.url.clone()} target="_blank" rel="noopener noreferrer">{&link.network}</a>
                            }) }
                        </div>
                    }
                </div>
            }) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn no_members_renders_empty_state() {
        let html = render(html! { <TeamGrid members={Vec::new()} /> });
        assert!(html.contains("empty-state"));
        assert!(!html.contains("team-grid"));
    }

    #[test]
    fn failed_load_shows_error_panel_instead_of_page() {
        let state = LoadState::Error("Could not reach the content service: offline".into());
        let html = render(team_content(&state, &Callback::noop()));
        assert!(html.contains("error-panel"));
        assert!(html.contains("offline"));
        assert!(!html.contains("page-body"));
        assert!(!html.contains("team-grid"));
    }

    #[test]
    fn member_without_photo_or_links() {
        let members: Vec<TeamMember> =
            serde_json::from_str(r#"[{"id": 1, "name": "Rosa Diaz", "role": "Lead notary"}]"#).unwrap();
        let html = render(html! { <TeamGrid {members} /> });
        assert!(html.contains("Rosa Diaz"));
        assert!(html.contains("Lead notary"));
        assert!(!html.contains("team-photo"));
        assert!(!html.contains("team-links"));
        assert!(!html.contains("team-bio"));
    }
}
