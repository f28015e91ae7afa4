//! HTML pages rendered with Tera. Templates are compiled into the binary.

use tera::{Context, Tera};

use crate::models::{CityInfo, CityQuery};
use crate::{CityGuideError, Result};

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("result.html", include_str!("../../templates/result.html")),
];

pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| CityGuideError::render(format!("Failed to load templates: {e}")))?;
        Ok(Self { tera })
    }

    /// The empty lookup form
    pub fn index(&self) -> Result<String> {
        self.render("index.html", &Context::new())
    }

    /// The result page for one lookup
    pub fn result(&self, query: &CityQuery, info: &CityInfo) -> Result<String> {
        let mut context = Context::new();
        context.insert("city", &query.name);
        context.insert("landmarks", &info.landmarks);
        context.insert("activities", &info.activities);
        self.render("result.html", &context)
    }

    fn render(&self, template: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template, context)
            .map_err(|e| CityGuideError::render(format!("Failed to render {template}: {e}")))
    }
}
