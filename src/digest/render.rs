//! Template rendering for structured digests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment};

use super::ContentType;
use crate::clippings::Clipping;

/// Name of the built-in template.
pub const BUILTIN_TEMPLATE_NAME: &str = "digest.txt";

/// Plain-text template used when no template file is configured.
///
/// Available variables: `clippings` (list with `title`, `author`, `page`,
/// `when`, `highlight`) and `count`.
pub const BUILTIN_TEMPLATE: &str = "{% for clipping in clippings %}\
{{ clipping.highlight }}\n\
-- {{ clipping.title | trim }} ({{ clipping.author }}), page {{ clipping.page }}, added {{ clipping.when }}\
{% if not loop.last %}\n\n{% endif %}\
{% endfor %}";

/// Errors that can occur while rendering a digest.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to read template {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Turns a selection of clippings into digest text.
pub trait Renderer {
    /// Template name for display/logging.
    fn name(&self) -> &str;

    /// Kind of text this renderer produces.
    fn content_type(&self) -> ContentType;

    /// Render the selection.
    fn render(&self, clippings: &[Clipping]) -> Result<String, RenderError>;
}

/// Renders clippings through a Jinja template.
///
/// Templates whose name ends in `.html` or `.htm` are auto-escaped.
#[derive(Debug, Clone)]
pub struct JinjaRenderer {
    name: String,
    source: String,
}

impl JinjaRenderer {
    /// Create from a template name and its source.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The built-in plain-text template.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATE_NAME, BUILTIN_TEMPLATE)
    }

    /// Load a template file. The file name decides escaping.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = fs::read_to_string(path).map_err(|source| RenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| BUILTIN_TEMPLATE_NAME.to_string());
        Ok(Self::new(name, source))
    }
}

impl Default for JinjaRenderer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Renderer for JinjaRenderer {
    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> ContentType {
        ContentType::from_template_name(&self.name)
    }

    fn render(&self, clippings: &[Clipping]) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.add_template(&self.name, &self.source)?;
        let template = env.get_template(&self.name)?;
        let rendered = template.render(context! {
            clippings => clippings,
            count => clippings.len(),
        })?;
        Ok(rendered)
    }
}
