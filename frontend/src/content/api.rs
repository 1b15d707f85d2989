use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config;

use super::error::FetchError;
use super::models::{
    AffiliatePage, BlogPost, BlogPostSummary, Envelope, FormPayload, GalleryPage,
    GallerySummary, PageConfig, SalesPage, TeamMember,
};

/// Page keys the CMS keeps a `PageConfig` for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKey {
    Home,
    Blog,
    Gallery,
    Sales,
    Team,
    Affiliates,
}

impl PageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Blog => "blog",
            PageKey::Gallery => "gallery",
            PageKey::Sales => "sales",
            PageKey::Team => "team",
            PageKey::Affiliates => "affiliates",
        }
    }
}

fn slug_path(collection: &str, slug: &str) -> String {
    format!("/api/{}/{}", collection, urlencoding::encode(slug))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let url = format!("{}{}", config::get_cms_url(), path);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            path: path.to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(format!("{}: {}", path, e)))?;
    Ok(envelope.data)
}

pub async fn page_config(page: PageKey) -> Result<PageConfig, FetchError> {
    get_json(&format!("/api/page-config/{}", page.as_str())).await
}

pub async fn blog_posts() -> Result<Vec<BlogPostSummary>, FetchError> {
    get_json("/api/blog-posts").await
}

pub async fn blog_post(slug: &str) -> Result<BlogPost, FetchError> {
    get_json(&slug_path("blog-posts", slug)).await
}

pub async fn related_posts(slug: &str) -> Result<Vec<BlogPostSummary>, FetchError> {
    get_json(&format!("{}/related", slug_path("blog-posts", slug))).await
}

pub async fn galleries() -> Result<Vec<GallerySummary>, FetchError> {
    get_json("/api/galleries").await
}

pub async fn gallery(slug: &str) -> Result<GalleryPage, FetchError> {
    get_json(&slug_path("galleries", slug)).await
}

pub async fn sales_page(slug: &str) -> Result<SalesPage, FetchError> {
    get_json(&slug_path("sales-pages", slug)).await
}

pub async fn team_members() -> Result<Vec<TeamMember>, FetchError> {
    get_json("/api/team-members").await
}

pub async fn affiliate_page() -> Result<AffiliatePage, FetchError> {
    get_json("/api/affiliate-page").await
}

pub async fn submit_form(payload: &FormPayload) -> Result<(), FetchError> {
    let path = "/api/forms/submit";
    let response = Request::post(&format!("{}{}", config::get_cms_url(), path))
        .json(payload)
        .map_err(|e| FetchError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(FetchError::Status {
            status: response.status(),
            path: path.to_string(),
        })
    }
}
