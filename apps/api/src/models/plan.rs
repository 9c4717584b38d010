use serde::{Deserialize, Serialize};

/// The structured Local SEO plan returned by the model for one submission.
///
/// Field names follow the JSON keys declared in the response schema, so the
/// same shape is used for parsing the model output and for the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "BusinessName")]
    pub business_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Reputation")]
    pub reputation: Reputation,
    #[serde(rename = "Content")]
    pub content: Content,
    #[serde(rename = "Links")]
    pub links: Links,
    #[serde(rename = "GBPOptimization")]
    pub gbp_optimization: GbpOptimization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    #[serde(rename = "ReviewRequestTemplates")]
    pub review_request_templates: Vec<String>,
    #[serde(rename = "NegativeReviewResponseTemplates")]
    pub negative_review_response_templates: Vec<String>,
    #[serde(rename = "SocialMediaRepostText")]
    pub social_media_repost_text: Vec<String>,
    #[serde(rename = "Strategies")]
    pub strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "GBPPosts")]
    pub gbp_posts: Vec<GbpPost>,
    #[serde(rename = "BlogIdeas")]
    pub blog_ideas: Vec<BlogIdea>,
    #[serde(rename = "OnPageSEO")]
    pub on_page_seo: OnPageSeo,
    #[serde(rename = "SocialMediaContent")]
    pub social_media_content: Vec<String>,
}

/// A ready-to-publish Google Business Profile post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbpPost {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "SuggestedMedia")]
    pub suggested_media: String,
    #[serde(rename = "Keywords")]
    pub keywords: Vec<String>,
    #[serde(rename = "CTA")]
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogIdea {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "H2s")]
    pub h2s: Vec<String>,
    #[serde(rename = "Relevance")]
    pub relevance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnPageSeo {
    #[serde(rename = "TitleTags")]
    pub title_tags: Vec<String>,
    #[serde(rename = "H2Headings")]
    pub h2_headings: Vec<String>,
    #[serde(rename = "MetaDescriptions")]
    pub meta_descriptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "GuestPostOpportunities")]
    pub guest_post_opportunities: Vec<String>,
    #[serde(rename = "OutreachTemplates")]
    pub outreach_templates: Vec<String>,
    /// Proximity, Entity and Niche link suggestions.
    #[serde(rename = "PENLinkSuggestions")]
    pub pen_link_suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbpOptimization {
    #[serde(rename = "Categories")]
    pub categories: Vec<String>,
    #[serde(rename = "Services")]
    pub services: Vec<String>,
    #[serde(rename = "PostIdeas")]
    pub post_ideas: Vec<String>,
    #[serde(rename = "PhotoVideoTips")]
    pub photo_video_tips: Vec<String>,
    #[serde(rename = "KeywordSuggestions")]
    pub keyword_suggestions: Vec<String>,
    #[serde(rename = "PostingFrequency")]
    pub posting_frequency: String,
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// A complete plan for the bakery used throughout the test suite.
    pub fn bakery_plan() -> Plan {
        Plan {
            business_name: "Blue Ribbon Bakery".to_string(),
            category: "Artisan Bakery".to_string(),
            location: "Brooklyn, NY".to_string(),
            reputation: Reputation {
                review_request_templates: strings(&[
                    "Thanks for visiting Blue Ribbon! Would you share your experience on Google?",
                ]),
                negative_review_response_templates: strings(&[
                    "We're sorry your sourdough wasn't up to standard. Please stop by and ask for the manager.",
                ]),
                social_media_repost_text: strings(&["Another happy morning at Blue Ribbon!"]),
                strategies: strings(&[
                    "Ask for reviews at pickup",
                    "Reply to every review within 48 hours",
                ]),
            },
            content: Content {
                gbp_posts: vec![GbpPost {
                    text: "Fresh croissants every morning in Park Slope.".to_string(),
                    suggested_media: "Close-up of laminated dough".to_string(),
                    keywords: strings(&["croissants brooklyn", "bakery park slope"]),
                    cta: "Order online".to_string(),
                }],
                blog_ideas: vec![BlogIdea {
                    title: "The Best Sourdough in Brooklyn".to_string(),
                    h2s: strings(&["Our Starter", "Baking Schedule"]),
                    relevance: "Targets high-intent local bread searches".to_string(),
                }],
                on_page_seo: OnPageSeo {
                    title_tags: strings(&["Artisan Bakery in Brooklyn, NY | Blue Ribbon"]),
                    h2_headings: strings(&["Fresh Bread Daily"]),
                    meta_descriptions: strings(&[
                        "Blue Ribbon Bakery bakes sourdough and pastries daily in Brooklyn.",
                    ]),
                },
                social_media_content: strings(&["Behind-the-scenes 5am bake reel"]),
            },
            links: Links {
                guest_post_opportunities: strings(&["Brooklyn Paper food column"]),
                outreach_templates: strings(&[
                    "Hi there,\nWe'd love to sponsor your next community event.",
                ]),
                pen_link_suggestions: strings(&["Park Slope Chamber of Commerce listing"]),
            },
            gbp_optimization: GbpOptimization {
                categories: strings(&["Bakery", "Pastry shop"]),
                services: strings(&["Custom cakes", "Wholesale bread"]),
                post_ideas: strings(&["Seasonal pie launch"]),
                photo_video_tips: strings(&["Shoot the morning display in natural light"]),
                keyword_suggestions: strings(&["bakery near me", "sourdough brooklyn"]),
                posting_frequency: "Twice weekly".to_string(),
            },
        }
    }

    pub fn bakery_plan_json() -> String {
        serde_json::to_string(&bakery_plan()).expect("fixture serializes")
    }
}
