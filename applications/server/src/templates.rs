//! HTML page templates
//!
//! Templates are plain HTML with `{{ name }}` placeholders. They are parsed
//! once at startup; a template that cannot be read or parsed stops the server
//! from starting. Values come from any `Serialize` page context and are
//! HTML-escaped on output.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Home page template file
pub const HOME_TEMPLATE: &str = "base.html";

/// Interactive query page template file
pub const GRAPHIQL_TEMPLATE: &str = "graphiql.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {name}: malformed placeholder at byte {offset}")]
    Syntax { name: String, offset: usize },

    #[error("template {0} is not loaded")]
    Unknown(String),

    #[error("template {name}: no value for placeholder `{key}`")]
    MissingValue { name: String, key: String },

    #[error("template context must be a flat object: {0}")]
    Context(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Placeholder(String),
}

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }

            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| TemplateError::Syntax {
                name: name.clone(),
                offset: consumed + open,
            })?;

            let key = after_open[..close].trim();
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(TemplateError::Syntax {
                    name,
                    offset: consumed + open,
                });
            }
            segments.push(Segment::Placeholder(key.to_string()));

            let advance = open + 2 + close + 2;
            consumed += advance;
            rest = &rest[advance..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholder keys in order of appearance
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(key) => Some(key.as_str()),
            Segment::Text(_) => None,
        })
    }

    fn render_with(&self, values: &Map<String, Value>) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(key) => {
                    let missing = || TemplateError::MissingValue {
                        name: self.name.clone(),
                        key: key.clone(),
                    };
                    match values.get(key).ok_or_else(missing)? {
                        Value::String(s) => push_escaped(&mut out, s),
                        Value::Number(n) => out.push_str(&n.to_string()),
                        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                        Value::Null => {}
                        Value::Array(_) | Value::Object(_) => return Err(missing()),
                    }
                }
            }
        }
        Ok(out)
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// All page templates, keyed by file name
#[derive(Debug, Clone, Default)]
pub struct Templates {
    templates: HashMap<String, Template>,
}

impl Templates {
    /// Load the home and GraphiQL templates from `dir`
    pub async fn load(dir: &Path) -> Result<Self, TemplateError> {
        let mut templates = Self::default();
        for name in [HOME_TEMPLATE, GRAPHIQL_TEMPLATE] {
            let path = dir.join(name);
            let source = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| TemplateError::Read {
                    path: path.clone(),
                    source,
                })?;
            templates.insert(Template::parse(name, &source)?);
            tracing::debug!("Loaded template {:?}", path);
        }
        Ok(templates)
    }

    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render `name` with the fields of `context`
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, TemplateError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| TemplateError::Unknown(name.to_string()))?;

        match serde_json::to_value(context).map_err(|e| TemplateError::Context(e.to_string()))? {
            Value::Object(values) => template.render_with(&values),
            other => Err(TemplateError::Context(format!("got {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct Page<'a> {
        title: &'a str,
    }

    fn single(source: &str) -> Templates {
        let mut templates = Templates::default();
        templates.insert(Template::parse("page.html", source).unwrap());
        templates
    }

    #[test]
    fn substitutes_placeholders() {
        let html = single("<title>{{ title }}</title><h1>{{title}}</h1>")
            .render("page.html", &Page { title: "Home" })
            .unwrap();
        assert_eq!(html, "<title>Home</title><h1>Home</h1>");
    }

    #[test]
    fn escapes_values() {
        let html = single("<title>{{ title }}</title>")
            .render("page.html", &Page { title: "<script>\"x\" & 'y'" })
            .unwrap();
        assert_eq!(
            html,
            "<title>&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;</title>"
        );
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let source = "<p>plain { braces } here</p>";
        let html = single(source).render("page.html", &Page { title: "x" }).unwrap();
        assert_eq!(html, source);
    }

    #[test]
    fn lists_placeholders() {
        let template = Template::parse("t", "{{ a }} and {{ b }}").unwrap();
        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn unterminated_placeholder_is_syntax_error() {
        let err = Template::parse("broken.html", "<p>{{ title</p>").unwrap_err();
        assert!(matches!(err, TemplateError::Syntax { offset: 3, .. }));
    }

    #[test]
    fn invalid_key_is_syntax_error() {
        assert!(Template::parse("t", "{{ not valid }}").is_err());
        assert!(Template::parse("t", "{{}}").is_err());
    }

    #[test]
    fn missing_value_is_render_error() {
        let err = single("{{ subtitle }}")
            .render("page.html", &Page { title: "x" })
            .unwrap_err();
        assert!(matches!(err, TemplateError::MissingValue { ref key, .. } if key == "subtitle"));
    }

    #[test]
    fn unknown_template_is_render_error() {
        let err = Templates::default()
            .render("nope.html", &Page { title: "x" })
            .unwrap_err();
        assert!(matches!(err, TemplateError::Unknown(_)));
    }

    #[tokio::test]
    async fn load_reads_both_templates() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(HOME_TEMPLATE), "home {{ title }}").unwrap();
        std::fs::write(dir.path().join(GRAPHIQL_TEMPLATE), "gql {{ title }}").unwrap();

        let templates = Templates::load(dir.path()).await.unwrap();
        assert!(templates.get(HOME_TEMPLATE).is_some());
        assert_eq!(
            templates.render(GRAPHIQL_TEMPLATE, &Page { title: "Q" }).unwrap(),
            "gql Q"
        );
    }

    #[tokio::test]
    async fn load_fails_when_a_template_is_missing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(HOME_TEMPLATE), "home").unwrap();

        let err = Templates::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, TemplateError::Read { .. }));
    }
}
