//! Tera template rendering.
//!
//! DESIGN
//! ======
//! Templates are loaded once at startup from `TEMPLATES_DIR`. Every render
//! gets the crate `version` in its context. Templates ending in `.html`
//! are autoescaped, so quote fields and frontmatter values are safe to
//! interpolate; rendered markdown goes through the `safe` filter.

use std::path::Path;

use tera::{Context, Tera};

use crate::quotes::Quote;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Load every `*.html` template below `dir`.
    pub fn load(dir: &Path) -> Result<Self, tera::Error> {
        let glob = dir.join("**").join("*.html");
        let tera = Tera::new(&glob.to_string_lossy())?;
        Ok(Self { tera })
    }

    /// Render `name` with `context` plus the crate version.
    ///
    /// `active` (the highlighted nav entry) defaults to none.
    pub fn render(&self, name: &str, context: &mut Context) -> Result<String, tera::Error> {
        context.insert("version", VERSION);
        if !context.contains_key("active") {
            context.insert("active", "");
        }
        self.tera.render(name, context)
    }

    /// Render the random-quote widget fragment.
    pub fn render_quote(&self, quote: &Quote) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("quote", quote);
        context.insert("link", &quote.link());
        self.render("quote.html", &mut context)
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
