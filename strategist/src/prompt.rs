//! Generation requests and the pure mapping from a request to the
//! instruction sent to the model.

use std::fmt;
use thiserror::Error;

/// The two kinds of content the strategist produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    BlogPost,
    Newsletter,
}

impl ContentType {
    pub const ALL: [Self; 2] = [Self::BlogPost, Self::Newsletter];

    /// Human-facing label, as shown in the form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BlogPost => "Blog Post",
            Self::Newsletter => "Newsletter",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered scale of how deep a blog post should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechnicalLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl TechnicalLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    fn lowercase(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Article preceding the lower-cased level in prose.
    fn article(self) -> &'static str {
        match self {
            Self::Beginner => "a",
            Self::Intermediate | Self::Advanced => "an",
        }
    }
}

/// Fixed set of newsletter sections offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterSection {
    FeaturedTechnicalContent,
    IndustryInsights,
    QuickTips,
    ResourceRoundup,
}

impl NewsletterSection {
    pub const ALL: [Self; 4] = [
        Self::FeaturedTechnicalContent,
        Self::IndustryInsights,
        Self::QuickTips,
        Self::ResourceRoundup,
    ];

    /// Sections preselected by the form.
    pub const DEFAULT: [Self; 2] = [Self::FeaturedTechnicalContent, Self::IndustryInsights];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FeaturedTechnicalContent => "Featured Technical Content",
            Self::IndustryInsights => "Industry Insights",
            Self::QuickTips => "Quick Tips",
            Self::ResourceRoundup => "Resource Roundup",
        }
    }
}

/// Type-specific options, keyed by content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOptions {
    BlogPost {
        level: TechnicalLevel,
        include_code: bool,
    },
    Newsletter {
        sections: Vec<NewsletterSection>,
    },
}

impl ContentOptions {
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::BlogPost { .. } => ContentType::BlogPost,
            Self::Newsletter { .. } => ContentType::Newsletter,
        }
    }
}

/// Warning shown when the generate action fires without a topic. No prompt
/// is built and no remote call is made.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please enter a topic first.")]
pub struct EmptyTopic;

/// One user-submitted (content type, topic, options) tuple. Constructed
/// fresh per generate action; not persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    topic: String,
    options: ContentOptions,
}

impl GenerationRequest {
    /// Build a request. The topic is required non-empty.
    pub fn new(topic: impl Into<String>, options: ContentOptions) -> Result<Self, EmptyTopic> {
        let topic = topic.into();
        if topic.is_empty() {
            return Err(EmptyTopic);
        }
        Ok(Self { topic, options })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.options.content_type()
    }

    /// Render the instruction sent to the model. Deterministic; the topic
    /// appears verbatim.
    #[must_use]
    pub fn prompt(&self) -> String {
        match &self.options {
            ContentOptions::BlogPost {
                level,
                include_code,
            } => {
                let mut prompt = format!(
                    "Create {article} {level} level technical blog post about {topic}.",
                    article = level.article(),
                    level = level.lowercase(),
                    topic = self.topic,
                );
                if *include_code {
                    prompt.push_str(" Include relevant code examples.");
                }
                prompt
            }
            ContentOptions::Newsletter { sections } => {
                let sections = sections
                    .iter()
                    .map(|section| section.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "Create a technical newsletter edition about {topic} with the following sections: {sections}.",
                    topic = self.topic,
                )
            }
        }
    }
}
