use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slug::slugify;

/// Every CMS response wraps its payload in `{"data": ...}`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub cta: Option<NavLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Footer {
    pub text: Option<String>,
    #[serde(default)]
    pub links: Vec<NavLink>,
    pub copyright: Option<String>,
}

/// Structural configuration shared by every page: optional hero, in-page
/// section links and an optional footer.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PageConfig {
    pub hero: Option<Hero>,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
    pub footer: Option<Footer>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Author {
    pub name: String,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

fn published_label(published_at: Option<DateTime<Utc>>) -> Option<String> {
    published_at.map(|date| date.format("%B %-d, %Y").to_string())
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BlogPostSummary {
    pub id: u64,
    pub title: String,
    slug: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPostSummary {
    pub fn slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug.to_string(),
            _ => slugify(&self.title, self.id),
        }
    }

    pub fn published_label(&self) -> Option<String> {
        published_label(self.published_at)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Image {
        src: String,
        alt: Option<String>,
        caption: Option<String>,
    },
    Quote {
        text: String,
        cite: Option<String>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        items: Vec<String>,
    },
}

fn default_heading_level() -> u8 {
    2
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub cover_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub body: Vec<ContentBlock>,
}

impl BlogPost {
    pub fn published_label(&self) -> Option<String> {
        published_label(self.published_at)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GallerySummary {
    pub id: u64,
    pub title: String,
    slug: Option<String>,
    pub cover_image: Option<String>,
    pub image_count: Option<u32>,
}

impl GallerySummary {
    pub fn slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug.to_string(),
            _ => slugify(&self.title, self.id),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GalleryPage {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: String,
    pub text: String,
    pub icon: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureSection {
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<Feature>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub company: Option<String>,
    pub photo: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TestimonialSection {
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<Testimonial>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PricingSection {
    pub heading: Option<String>,
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqSection {
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<FaqEntry>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CallToAction {
    pub heading: String,
    pub text: Option<String>,
    pub button_label: String,
    /// Where the button goes when the page has no form to open.
    pub href: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SalesPage {
    pub id: u64,
    pub title: String,
    pub intro: Option<String>,
    pub features: Option<FeatureSection>,
    pub testimonials: Option<TestimonialSection>,
    pub pricing: Option<PricingSection>,
    pub faq: Option<FaqSection>,
    pub cta: Option<CallToAction>,
    pub form: Option<FormDefinition>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub network: String,
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub role: Option<String>,
    pub photo: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Benefit {
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Commission {
    pub rate_label: String,
    pub details: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AffiliatePage {
    pub title: String,
    pub intro: Option<String>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    pub commission: Option<Commission>,
    pub form: Option<FormDefinition>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    Select { options: Vec<String> },
    Checkboxes { options: Vec<String> },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FormField {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    pub placeholder: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FormDefinition {
    pub id: String,
    pub title: Option<String>,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    pub success_message: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

fn default_submit_label() -> String {
    "Send".to_string()
}

/// A single answer or the set of ticked options of a checkbox group.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Single(value) => value.trim().is_empty(),
            FieldValue::Many(values) => values.is_empty(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FieldEntry {
    pub field: String,
    pub value: FieldValue,
}

/// What the form endpoint receives: the form id and its answers in the order
/// the fields were defined.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FormPayload {
    pub form: String,
    pub fields: Vec<FieldEntry>,
}
