//! # Styled Templates
//!
//! Templates are minijinja sources; styles are named `console::Style` values
//! applied through the `style` filter:
//!
//! ```jinja
//! {{ resource.name | style("name") }} {{ resource.rating | style("star") }}
//! ```
//!
//! When color is off the filter returns the text unchanged. An unknown style
//! name is flagged inline with [`MISSING_STYLE_INDICATOR`] so typos show up
//! in output instead of silently rendering plain text.
//!
//! Block tags on their own line leave no trace in the output
//! (`trim_blocks` + `lstrip_blocks`). A block tag at the end of a content
//! line also eats that line's newline, so templates keep such tags mid-line.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout should get ANSI styling.
pub fn colors_enabled(no_color: bool) -> bool {
    !no_color && Term::stdout().features().colors_supported()
}

/// Holds a set of named templates sharing one theme, so templates can
/// `{% include %}` each other.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        Self { env }
    }

    pub fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<(), Error> {
        self.env.add_template(name, source)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}
