//! Page model and HTML rendering

use askama::Template;
use serde::Serialize;

use crate::env::EnvName;
use crate::runtime::RuntimeEnv;
use crate::theme::Theme;

const PAGE_ICON: &str = "🚀";

const DESCRIPTION: &str = "This is a tiny sample app used for CI/CD pipeline demos. \
     It changes style and title depending on the deployment environment.";

/// Everything the page displays, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub env: EnvName,
    pub theme: Theme,
    /// Uppercased environment name
    pub badge: String,
    /// Short build identifier
    pub build: String,
    pub secret_present: bool,
}

impl Page {
    /// Resolve the page from a captured runtime environment
    pub fn resolve(runtime: &RuntimeEnv) -> Self {
        let env = runtime.env();
        Self {
            env,
            theme: Theme::for_env(env),
            badge: env.as_str().to_uppercase(),
            build: runtime.build_tag(),
            secret_present: runtime.has_secret(),
        }
    }

    /// Build and environment caption
    pub fn caption(&self) -> String {
        format!("Build: {}  •  Environment: {}", self.build, self.env)
    }

    /// Secret indicator glyph
    pub fn secret_marker(&self) -> &'static str {
        if self.secret_present {
            "✅"
        } else {
            "❌"
        }
    }

    /// Render the full HTML document
    pub fn render_html(&self) -> Result<String, askama::Error> {
        PageTemplate {
            page: self,
            icon: PAGE_ICON,
            description: DESCRIPTION,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    page: &'a Page,
    icon: &'a str,
    description: &'a str,
}
