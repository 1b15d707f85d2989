use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::aggregate::{use_aggregate, LoadState};
use crate::components::layout::{page_content, EmptyState, PageShell};
use crate::content::api::{self, PageKey};
use crate::content::error::FetchError;
use crate::content::image::image_url;
use crate::content::models::{Author, BlogPost, BlogPostSummary, ContentBlock, PageConfig};
use crate::router::{go_to, use_scroll_to_top, CollectionView};
use crate::Route;

pub enum BlogModel {
    Listing {
        config: PageConfig,
        posts: Vec<BlogPostSummary>,
    },
    Detail {
        config: PageConfig,
        post: BlogPost,
        related: Vec<BlogPostSummary>,
    },
}

async fn load_blog(view: CollectionView) -> Result<BlogModel, FetchError> {
    match view {
        CollectionView::Listing => {
            let (config, posts) =
                futures::try_join!(api::page_config(PageKey::Blog), api::blog_posts())?;
            Ok(BlogModel::Listing { config, posts })
        }
        CollectionView::Detail(slug) => {
            let (config, post, related) = futures::try_join!(
                api::page_config(PageKey::Blog),
                api::blog_post(&slug),
                api::related_posts(&slug),
            )?;
            Ok(BlogModel::Detail { config, post, related })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogProps {
    #[prop_or_default]
    pub slug: Option<String>,
}

/// `/blog` and `/blog/:slug`. The slug decides between the listing and a
/// single post; every change of it loads a fresh view model.
#[function_component(Blog)]
pub fn blog(props: &BlogProps) -> Html {
    let view = CollectionView::from_slug(props.slug.as_deref());
    use_scroll_to_top(view.clone());
    let data = use_aggregate(view, load_blog);

    let title = match data.state() {
        LoadState::Ready(BlogModel::Detail { post, .. }) => format!("{} | SealDesk", post.title),
        _ => "Blog | SealDesk".to_string(),
    };
    use_title(title);

    let content = blog_content(data.state(), &data.retry);

    html! {
        <div class="blog-page">
            {content}
            <style>{BLOG_CSS}</style>
        </div>
    }
}

fn blog_content(state: &LoadState<BlogModel>, on_retry: &Callback<()>) -> Html {
    page_content(state, on_retry, |model| match model {
        BlogModel::Listing { config, posts } => html! {
            <PageShell config={config.clone()}>
                <BlogList posts={posts.clone()} />
            </PageShell>
        },
        BlogModel::Detail { config, post, related } => html! {
            <PageShell config={config.clone()}>
                <BlogArticle post={post.clone()} />
                <RelatedPosts posts={related.clone()} />
            </PageShell>
        },
    })
}

#[derive(Properties, PartialEq)]
pub struct PostListProps {
    pub posts: Vec<BlogPostSummary>,
}

#[function_component(BlogList)]
pub fn blog_list(props: &PostListProps) -> Html {
    if props.posts.is_empty() {
        return html! { <EmptyState message="No articles yet. Check back soon." /> };
    }
    html! {
        <section class="blog-list-section">
            { for props.posts.iter().map(|post| html! {
                <PostCard key={post.id} post={post.clone()} />
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: BlogPostSummary,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let navigator = use_navigator();
    let post = &props.post;
    let route = Route::BlogPost { slug: post.slug() };

    let open = {
        let route = route.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                go_to(navigator, route.clone());
            }
        })
    };

    html! {
        <article class="blog-post-preview">
            <h2>
                <Link<Route> to={route}>{&post.title}</Link<Route>>
            </h2>
            <div class="blog-preview-body" onclick={open}>
                if let Some(cover) = &post.cover_image {
                    <img src={image_url(cover)} alt={post.title.clone()} loading="lazy" class="blog-preview-image" />
                }
                if let Some(excerpt) = &post.excerpt {
                    <p>{excerpt}</p>
                }
                if let Some(date) = post.published_label() {
                    <span class="blog-date">{date}</span>
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleProps {
    pub post: BlogPost,
}

#[function_component(BlogArticle)]
pub fn blog_article(props: &ArticleProps) -> Html {
    let post = &props.post;
    html! {
        <article class="blog-article">
            <header class="blog-article-header">
                <h1>{&post.title}</h1>
                if let Some(date) = post.published_label() {
                    <span class="blog-date">{date}</span>
                }
                if !post.tags.is_empty() {
                    <ul class="blog-tags">
                        { for post.tags.iter().map(|tag| html! { <li>{tag}</li> }) }
                    </ul>
                }
            </header>
            if let Some(cover) = &post.cover_image {
                <img src={image_url(cover)} alt={post.title.clone()} class="blog-image" />
            }
            <div class="blog-content">
                { for post.body.iter().map(content_block) }
            </div>
            if let Some(author) = &post.author {
                <AuthorCard author={author.clone()} />
            }
        </article>
    }
}

fn content_block(block: &ContentBlock) -> Html {
    match block {
        ContentBlock::Heading { level, text } => match *level {
            0..=2 => html! { <h2>{text}</h2> },
            3 => html! { <h3>{text}</h3> },
            _ => html! { <h4>{text}</h4> },
        },
        ContentBlock::Paragraph { text } => html! { <p>{text}</p> },
        ContentBlock::Image { src, alt, caption } => html! {
            <figure>
                <img src={image_url(src)} alt={alt.clone().unwrap_or_default()} loading="lazy" />
                if let Some(caption) = caption {
                    <figcaption>{caption}</figcaption>
                }
            </figure>
        },
        ContentBlock::Quote { text, cite } => html! {
            <blockquote>
                <p>{text}</p>
                if let Some(cite) = cite {
                    <cite>{cite}</cite>
                }
            </blockquote>
        },
        ContentBlock::List { ordered, items } => {
            let items = items.iter().map(|item| html! { <li>{item}</li> });
            if *ordered {
                html! { <ol>{ for items }</ol> }
            } else {
                html! { <ul>{ for items }</ul> }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthorProps {
    pub author: Author,
}

#[function_component(AuthorCard)]
pub fn author_card(props: &AuthorProps) -> Html {
    let author = &props.author;
    html! {
        <aside class="author-card">
            if let Some(avatar) = &author.avatar {
                <img class="author-avatar" src={image_url(avatar)} alt={author.name.clone()} />
            }
            <div>
                <strong>{&author.name}</strong>
                if let Some(role) = &author.role {
                    <span class="author-role">{role}</span>
                }
                if let Some(bio) = &author.bio {
                    <p>{bio}</p>
                }
            </div>
        </aside>
    }
}

#[function_component(RelatedPosts)]
pub fn related_posts(props: &PostListProps) -> Html {
    if props.posts.is_empty() {
        return html! {};
    }
    html! {
        <section class="related-posts">
            <h2>{"Keep reading"}</h2>
            <div class="related-grid">
                { for props.posts.iter().map(|post| html! {
                    <PostCard key={post.id} post={post.clone()} />
                }) }
            </div>
        </section>
    }
}

const BLOG_CSS: &str = r#"
.blog-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #1d2433;
}
.blog-list-section {
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem;
}
.blog-post-preview {
    background: #ffffff;
    border: 1px solid rgba(22, 63, 120, 0.12);
    border-radius: 12px;
    margin-bottom: 2rem;
    overflow: hidden;
    transition: all 0.3s ease;
}
.blog-post-preview:hover {
    border-color: rgba(22, 63, 120, 0.4);
    transform: translateY(-5px);
}
.blog-post-preview h2 {
    font-size: 1.6rem;
    padding: 1.5rem 1.5rem 0;
}
.blog-preview-body {
    cursor: pointer;
}
.blog-post-preview h2 a {
    color: inherit;
    text-decoration: none;
}
.blog-post-preview p {
    color: #5b6475;
    padding: 0 1.5rem;
}
.blog-preview-image,
.blog-image {
    width: 100%;
    height: auto;
    display: block;
}
.blog-date {
    display: block;
    padding: 0 1.5rem 1.5rem;
    color: #8a93a5;
    font-size: 0.9rem;
}
.blog-article {
    max-width: 760px;
    margin: 0 auto;
    padding: 2rem;
}
.blog-tags {
    display: flex;
    gap: 0.5rem;
    list-style: none;
    padding: 0;
}
.blog-tags li {
    background: #e8effa;
    border-radius: 999px;
    padding: 0.2rem 0.8rem;
    font-size: 0.8rem;
}
.blog-content blockquote {
    border-left: 4px solid #163f78;
    margin: 1.5rem 0;
    padding-left: 1rem;
    color: #3b4456;
}
.author-card {
    display: flex;
    gap: 1rem;
    margin-top: 3rem;
    padding: 1.5rem;
    border-radius: 12px;
    background: #f4f7fc;
}
.author-avatar {
    width: 64px;
    height: 64px;
    border-radius: 50%;
}
.author-role {
    display: block;
    color: #8a93a5;
}
.related-posts {
    max-width: 1000px;
    margin: 0 auto;
    padding: 2rem;
}
.related-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.5rem;
}
@media (max-width: 768px) {
    .blog-list-section,
    .blog-article {
        padding: 1rem;
    }
    .blog-post-preview h2 {
        font-size: 1.3rem;
    }
}
"#;

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

    fn summary(json: &str) -> BlogPostSummary {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_listing_renders_empty_state() {
        let html = render(in_router(html! { <BlogList posts={Vec::new()} /> }));
        assert!(html.contains("empty-state"));
        assert!(!html.contains("blog-list-section"));
        assert!(!html.contains("page-loading"));
    }

    #[test]
    fn listing_links_to_each_post() {
        let posts = vec![
            summary(r#"{"id": 1, "title": "Apostille Basics", "excerpt": "What it is."}"#),
            summary(r#"{"id": 2, "title": "Mobile notary", "slug": "mobile"}"#),
        ];
        let html = render(in_router(html! { <BlogList {posts} /> }));
        assert!(html.contains(r#"href="/blog/apostille-basics""#));
        assert!(html.contains(r#"href="/blog/mobile""#));
        assert!(html.contains("What it is."));
        assert!(!html.contains("empty-state"));
    }

    #[test]
    fn article_without_author_has_no_author_card() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id": 1, "title": "Signing day", "body": [{"type": "paragraph", "text": "Bring ID."}]}"#,
        )
        .unwrap();
        let html = render(html! { <BlogArticle {post} /> });
        assert!(html.contains("Bring ID."));
        assert!(!html.contains("author-card"));
        assert!(!html.contains("blog-tags"));
    }

    #[test]
    fn article_with_author_shows_only_known_fields() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id": 1, "title": "Signing day", "author": {"name": "Grace Hopper"}}"#,
        )
        .unwrap();
        let html = render(html! { <BlogArticle {post} /> });
        assert!(html.contains("author-card"));
        assert!(html.contains("Grace Hopper"));
        assert!(!html.contains("author-role"));
        assert!(!html.contains("author-avatar"));
    }

    #[test]
    fn failed_post_load_shows_error_panel() {
        let state = LoadState::Error("The content service answered 404 for /api/blog-posts/missing".into());
        let html = render(in_router(blog_content(&state, &Callback::noop())));
        assert!(html.contains("error-panel"));
        assert!(html.contains("/api/blog-posts/missing"));
        assert!(!html.contains("page-body"));
    }

    #[test]
    fn ready_listing_sits_inside_the_page_shell() {
        let state = LoadState::Ready(BlogModel::Listing {
            config: PageConfig::default(),
            posts: vec![summary(r#"{"id": 3, "title": "Remote notarization"}"#)],
        });
        let html = render(in_router(blog_content(&state, &Callback::noop())));
        assert!(html.contains("page-body"));
        assert!(html.contains("Remote notarization"));
        assert!(!html.contains("error-panel"));
    }

    #[test]
    fn no_related_posts_renders_nothing() {
        let html = render(in_router(html! { <RelatedPosts posts={Vec::new()} /> }));
        assert!(!html.contains("related-posts"));
    }
}
