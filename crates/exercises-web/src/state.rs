//! Shared application state.

use std::fs::File;
use std::sync::Arc;

use exercises_story::application::renderer::StoryRenderer;
use exercises_story::domain::story::Story;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::AppError;

/// How a request path selects the chapter to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterDispatch {
    /// Every path renders the `intro` chapter.
    IntroOnly,
    /// `/` renders `intro`; `/{chapter}` renders that chapter.
    FollowLinks,
}

impl ChapterDispatch {
    /// Chapter identifier for a request path, already percent-decoded.
    #[must_use]
    pub fn chapter_for(self, path: &str) -> &str {
        match self {
            Self::IntroOnly => Story::INTRO,
            Self::FollowLinks => match path.trim_matches('/') {
                "" => Story::INTRO,
                id => id,
            },
        }
    }
}

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The story, loaded once at startup.
    pub story: Arc<Story>,
    /// The chapter renderer, built once at startup.
    pub renderer: Arc<StoryRenderer>,
    /// Path-to-chapter mapping.
    pub dispatch: ChapterDispatch,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(story: Story, renderer: StoryRenderer, dispatch: ChapterDispatch) -> Self {
        Self {
            story: Arc::new(story),
            renderer: Arc::new(renderer),
            dispatch,
        }
    }

    /// Reads the story file and compiles the chapter template.
    ///
    /// # Errors
    ///
    /// Returns `AppError::StoryFile` if the file cannot be opened and
    /// `AppError::Story` if it cannot be decoded or the template is invalid.
    pub fn load(config: &ServerConfig) -> Result<Self, AppError> {
        let file = File::open(&config.file).map_err(|source| AppError::StoryFile {
            path: config.file.clone(),
            source,
        })?;
        let story = Story::from_reader(file)?;
        let renderer = StoryRenderer::new()?;

        info!(
            file = %config.file.display(),
            chapters = story.len(),
            dispatch = ?config.dispatch(),
            "loaded story"
        );
        Ok(Self::new(story, renderer, config.dispatch()))
    }
}
