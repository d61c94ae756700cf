//! One-shot export of a generation result as a markdown artifact.

use crate::prompt::ContentType;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Mime type the artifact is offered with.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// Derive the artifact name from the content type and topic: lower-cased,
/// spaces replaced with underscores, `.md` extension.
#[must_use]
pub fn file_name(content_type: ContentType, topic: &str) -> String {
    format!("{}_{}.md", slug(content_type.label()), slug(topic))
}

fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "_")
}

/// Write the generated body into `dir`, returning the path written.
pub fn save(dir: &Path, file_name: &str, body: &str) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, body)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn file_name_normalizes_type_and_topic() {
        assert_eq!(
            file_name(ContentType::BlogPost, "My Topic"),
            "blog_post_my_topic.md"
        );
        assert_eq!(
            file_name(ContentType::Newsletter, "AI Ethics"),
            "newsletter_ai_ethics.md"
        );
    }

    #[test]
    fn file_name_lowercases_mixed_case_topics() {
        assert_eq!(
            file_name(ContentType::BlogPost, "Large Language Models"),
            "blog_post_large_language_models.md"
        );
    }

    #[test]
    fn save_writes_the_raw_body() {
        let dir = env::temp_dir().join(format!("strategist-export-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let path = save(&dir, "blog_post_demo.md", "# Demo\n\nbody").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Demo\n\nbody");
        fs::remove_dir_all(&dir).unwrap();
    }
}
