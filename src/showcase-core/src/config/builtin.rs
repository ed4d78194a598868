use crate::card::MetricStyle;
use crate::config::page::{PageConfig, DEFAULT_WORKFLOW_NAME};
use crate::workflow::StickyNoteRule;
use std::path::PathBuf;

struct BuiltinPage {
    slug: &'static str,
    title: &'static str,
    subtitle: &'static str,
    descriptor: &'static str,
    default_name: &'static str,
    overview: Option<&'static str>,
    image: &'static str,
    features: &'static [&'static str],
    id_metric: MetricStyle,
    version_metric: MetricStyle,
}

const COMPACT: MetricStyle = MetricStyle {
    width: 8,
    ellipsis: true,
};

// Paths are relative to the showcase root. The email assistant keeps its
// assets next to the page sources, under `pages/`.
const BUILTIN_PAGES: &[BuiltinPage] = &[
    BuiltinPage {
        slug: "workflow-showcase",
        title: "AI Workflow Showcase",
        subtitle: "Discover Our Featured Automation Workflow",
        descriptor: "workflow.json",
        default_name: DEFAULT_WORKFLOW_NAME,
        overview: None,
        image: "streamlit_app/product_image.webp",
        features: &[],
        id_metric: COMPACT,
        version_metric: COMPACT,
    },
    BuiltinPage {
        slug: "ai-email-assistant",
        title: "AI Email Assistant",
        subtitle: "Gmail Auto-Response System 24/7",
        descriptor: "pages/streamlit_app/workflow_ai_email_assistant.json",
        default_name: "AI Email Assistant",
        overview: Some(
            "An intelligent automation system that manages customer emails, transfers calls, \
             and sends SMS messages automatically, around the clock.",
        ),
        image: "pages/streamlit_app/ai_email_assistant.png",
        features: &[
            "Automated AI email responses",
            "Smart classification & routing",
            "Gmail integration for seamless workflow",
            "24/7 customer communication",
            "Custom response templates",
            "Multi-channel (Email, SMS, Calls)",
            "Real-time notifications",
            "Analytics and performance reports",
        ],
        id_metric: MetricStyle::identifier(),
        version_metric: MetricStyle::version(),
    },
    BuiltinPage {
        slug: "government-grants",
        title: "Government Grants Finder",
        subtitle: "Grant Finder 24/7 - Instant Access, Secure Your Future",
        descriptor: "workflow_government_grants.json",
        default_name: "Government Grants Finder",
        overview: Some(
            "Continuously searches for relevant government grants and funding opportunities \
             and notifies you as soon as they appear.",
        ),
        image: "streamlit_app/government_grants.png",
        features: &[
            "Automated grant opportunity discovery",
            "Real-time monitoring of government databases",
            "Intelligent matching based on eligibility criteria",
            "Instant notifications for new grants",
            "Deadline tracking and reminders",
            "Application status monitoring",
            "Comprehensive grant database",
            "Customizable search filters and alerts",
        ],
        id_metric: MetricStyle::identifier(),
        version_metric: MetricStyle::version(),
    },
    BuiltinPage {
        slug: "ai-social-content",
        title: "AI Social Content Creation",
        subtitle: "Automate Prospects, Grow Your Business 24/7",
        descriptor: "workflow_ai_social_content.json",
        default_name: "AI Social Content Creation",
        overview: None,
        image: "ai_social_content.png",
        features: &[
            "AI-powered content generation",
            "Multi-platform posting automation",
            "Intelligent scheduling optimization",
            "Hashtag and keyword optimization",
            "Image and video content creation",
            "Engagement tracking and analytics",
            "Audience targeting and segmentation",
            "Content calendar management",
        ],
        id_metric: MetricStyle::identifier(),
        version_metric: MetricStyle::version(),
    },
    BuiltinPage {
        slug: "google-maps-leads",
        title: "Google Maps Local Leads",
        subtitle: "Uncover Prospects, Grow Your Business 24/7",
        descriptor: "workflow_google_maps_leads.json",
        default_name: "Google Maps Local Leads",
        overview: None,
        image: "streamlit_app/google_maps_leads.png",
        features: &[
            "Automated Google Maps scraping",
            "Location-based lead discovery",
            "Business contact information extraction",
            "Industry and category filtering",
            "Lead qualification and scoring",
            "CRM integration and export",
            "Duplicate detection and removal",
            "Real-time data enrichment",
        ],
        id_metric: MetricStyle::identifier(),
        version_metric: MetricStyle::version(),
    },
];

/// Pages used when no `showcase.json` is found.
pub fn pages() -> Vec<PageConfig> {
    BUILTIN_PAGES
        .iter()
        .map(|page| PageConfig {
            slug: page.slug.to_string(),
            title: page.title.to_string(),
            subtitle: Some(page.subtitle.to_string()),
            descriptor: PathBuf::from(page.descriptor),
            default_name: page.default_name.to_string(),
            overview: page.overview.map(str::to_string),
            image: Some(PathBuf::from(page.image)),
            features: page.features.iter().map(|f| f.to_string()).collect(),
            sticky_note: StickyNoteRule::Type,
            id_metric: page.id_metric,
            version_metric: page.version_metric,
        })
        .collect()
}
