//! Report view model: turns a Plan into the header, tab strip and cards the
//! report shows. Pure formatting: nothing here changes or derives plan data
//! beyond joining lists for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::plan::Plan;
use crate::session::GeneratedPlan;

pub const BADGES: [&str; 2] = ["Policy Compliant", "GBP Ready"];

/// Report tabs, in display order. Weighting in the titles mirrors the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Links,
    Reputation,
    Content,
    Optimization,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Links, Tab::Reputation, Tab::Content, Tab::Optimization];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Links => "Links (70%)",
            Tab::Reputation => "Reputation (20%)",
            Tab::Content => "Content (10%)",
            Tab::Optimization => "GBP Optimization",
        }
    }

    /// Section heading used in the print document.
    pub fn print_heading(self) -> &'static str {
        match self {
            Tab::Links => "1. Local Link Building & Entity Authority (70%)",
            Tab::Reputation => "2. Reputation Management & Trust (20%)",
            Tab::Content => "3. Strategic Content Foundation (10%)",
            Tab::Optimization => "4. GBP Advanced Optimization",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportHeader {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabInfo {
    pub id: Tab,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub tab: Tab,
    pub title: &'static str,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

/// One renderable element inside a card.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Plain bullet items.
    List {
        label: Option<&'static str>,
        items: Vec<String>,
    },
    /// Ready-to-copy text such as templates and scripts; whitespace is significant.
    Snippets {
        label: Option<&'static str>,
        items: Vec<String>,
    },
    /// Short chips: categories, services, keywords.
    Tags {
        label: &'static str,
        items: Vec<String>,
    },
    Post {
        text: String,
        media_tip: String,
        keywords: String,
        cta: String,
    },
    Article {
        title: String,
        h2s: String,
        relevance: String,
    },
    Note {
        label: &'static str,
        text: String,
    },
}

/// Full report payload: header, tab strip and the active tab's content.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub submission_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub header: ReportHeader,
    pub tabs: Vec<TabInfo>,
    pub active: TabView,
}

pub fn render_header(plan: &Plan) -> ReportHeader {
    ReportHeader {
        title: plan.business_name.clone(),
        subtitle: format!("{} • {}", plan.category, plan.location),
        badges: BADGES.to_vec(),
    }
}

pub fn render_report(generated: &GeneratedPlan, active: Tab) -> ReportView {
    ReportView {
        submission_id: generated.submission_id,
        generated_at: generated.generated_at,
        header: render_header(&generated.plan),
        tabs: Tab::ALL
            .iter()
            .map(|&tab| TabInfo {
                id: tab,
                title: tab.title(),
                active: tab == active,
            })
            .collect(),
        active: render_tab(&generated.plan, active),
    }
}

pub fn render_tab(plan: &Plan, tab: Tab) -> TabView {
    let cards = match tab {
        Tab::Links => links_cards(plan),
        Tab::Reputation => reputation_cards(plan),
        Tab::Content => content_cards(plan),
        Tab::Optimization => optimization_cards(plan),
    };
    TabView {
        tab,
        title: tab.title(),
        cards,
    }
}

fn links_cards(plan: &Plan) -> Vec<Card> {
    let links = &plan.links;
    vec![
        Card {
            title: "Local Guest Post Targets",
            blocks: vec![Block::List {
                label: None,
                items: links.guest_post_opportunities.clone(),
            }],
        },
        Card {
            title: "Entity (PEN) Strategies",
            blocks: vec![Block::List {
                label: None,
                items: links.pen_link_suggestions.clone(),
            }],
        },
        Card {
            title: "Partnership Outreach Script",
            blocks: vec![Block::Snippets {
                label: Some("Ready-to-Use Outreach"),
                items: links.outreach_templates.clone(),
            }],
        },
    ]
}

fn reputation_cards(plan: &Plan) -> Vec<Card> {
    let reputation = &plan.reputation;
    vec![
        Card {
            title: "Review Request Templates",
            blocks: vec![Block::Snippets {
                label: None,
                items: reputation.review_request_templates.clone(),
            }],
        },
        Card {
            title: "Social Media Review Reposts",
            blocks: vec![Block::Snippets {
                label: None,
                items: reputation.social_media_repost_text.clone(),
            }],
        },
        Card {
            title: "Negative Response Handling",
            blocks: vec![Block::Snippets {
                label: None,
                items: reputation.negative_review_response_templates.clone(),
            }],
        },
        Card {
            title: "Building Local Trust",
            blocks: vec![Block::List {
                label: None,
                items: reputation.strategies.clone(),
            }],
        },
    ]
}

fn content_cards(plan: &Plan) -> Vec<Card> {
    let content = &plan.content;
    vec![
        Card {
            title: "Google Business Profile Posts",
            blocks: content
                .gbp_posts
                .iter()
                .map(|post| Block::Post {
                    text: post.text.clone(),
                    media_tip: post.suggested_media.clone(),
                    keywords: post.keywords.join(", "),
                    cta: post.cta.clone(),
                })
                .collect(),
        },
        Card {
            title: "Social Media Engagement",
            blocks: vec![Block::List {
                label: None,
                items: content.social_media_content.clone(),
            }],
        },
        Card {
            title: "Blog / Article Ideas",
            blocks: content
                .blog_ideas
                .iter()
                .map(|idea| Block::Article {
                    title: idea.title.clone(),
                    h2s: idea.h2s.join(" | "),
                    relevance: idea.relevance.clone(),
                })
                .collect(),
        },
        Card {
            title: "On-Page SEO Elements",
            blocks: vec![
                Block::Snippets {
                    label: Some("Title Tags"),
                    items: content.on_page_seo.title_tags.clone(),
                },
                Block::List {
                    label: Some("H2 Headings"),
                    items: content.on_page_seo.h2_headings.clone(),
                },
                Block::Snippets {
                    label: Some("Meta Descriptions"),
                    items: content.on_page_seo.meta_descriptions.clone(),
                },
            ],
        },
    ]
}

fn optimization_cards(plan: &Plan) -> Vec<Card> {
    let gbp = &plan.gbp_optimization;
    vec![
        Card {
            title: "GBP Categories & Services",
            blocks: vec![
                Block::Tags {
                    label: "Primary Categories",
                    items: gbp.categories.clone(),
                },
                Block::Tags {
                    label: "Additional Services",
                    items: gbp.services.clone(),
                },
            ],
        },
        Card {
            title: "Visual Content Optimization",
            blocks: vec![Block::List {
                label: None,
                items: gbp.photo_video_tips.clone(),
            }],
        },
        Card {
            title: "Post Strategy & Keywords",
            blocks: vec![
                Block::Note {
                    label: "Frequency",
                    text: gbp.posting_frequency.clone(),
                },
                Block::List {
                    label: Some("Monthly Content Calendar"),
                    items: gbp.post_ideas.clone(),
                },
                Block::Tags {
                    label: "Local Target Keywords",
                    items: gbp.keyword_suggestions.clone(),
                },
            ],
        },
    ]
}
