//! Chapter page rendering.
//!
//! The template is compiled once when the renderer is built; a renderer is
//! constructed at startup and shared read-only by every request.

use exercises_core::error::DomainError;
use minijinja::{Environment, context};
use tracing::debug;

use crate::domain::story::Chapter;

/// Name under which the chapter template is registered. The `.html` suffix
/// turns on HTML auto-escaping.
const CHAPTER_TEMPLATE_NAME: &str = "chapter.html";

/// The page used for every chapter: heading, paragraphs, then one link per
/// option pointing at `/{chapter}`.
pub const DEFAULT_CHAPTER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="UTF-8" />
        <title>Choose your own adventure</title>
    </head>
    <body>
        <h1>{{ chapter.title }}</h1>
        {%- for paragraph in chapter.paragraphs %}
        <p>{{ paragraph }}</p>
        {%- endfor %}
        <ul>
        {%- for option in chapter.options %}
            <li><a href="/{{ option.chapter }}">{{ option.text }}</a></li>
        {%- endfor %}
        </ul>
    </body>
</html>
"#;

/// Renders chapters into HTML pages.
#[derive(Debug)]
pub struct StoryRenderer {
    env: Environment<'static>,
}

impl StoryRenderer {
    /// Builds a renderer around [`DEFAULT_CHAPTER_TEMPLATE`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the template fails to compile.
    pub fn new() -> Result<Self, DomainError> {
        Self::with_template(DEFAULT_CHAPTER_TEMPLATE)
    }

    /// Builds a renderer around a custom chapter template. The template sees
    /// a single `chapter` variable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the template fails to compile.
    pub fn with_template(source: &'static str) -> Result<Self, DomainError> {
        let mut env = Environment::new();
        env.add_template(CHAPTER_TEMPLATE_NAME, source)
            .map_err(|e| DomainError::Infrastructure(format!("chapter template is invalid: {e}")))?;
        Ok(Self { env })
    }

    /// Renders one chapter.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if template execution fails.
    pub fn render(&self, chapter: &Chapter) -> Result<String, DomainError> {
        let template = self
            .env
            .get_template(CHAPTER_TEMPLATE_NAME)
            .map_err(|e| DomainError::Infrastructure(format!("chapter template missing: {e}")))?;

        let html = template
            .render(context! { chapter => chapter })
            .map_err(|e| DomainError::Infrastructure(format!("chapter render failed: {e}")))?;

        debug!(title = %chapter.title, bytes = html.len(), "rendered chapter");
        Ok(html)
    }
}
