//! Display descriptors produced by the resolver.

use crate::display::catalog::Catalog;

/// What the renderer should show for one payment method.
///
/// Descriptors are recomputed per resolution and never stored; empty strings
/// mean "render nothing" for that slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDescriptor {
    /// Logo image URL; empty when the method has no logo.
    pub logo_url: String,
    /// Title label; empty when the logo alone identifies the method.
    pub title_text: String,
    pub subtitle: Subtitle,
    /// Render the Monero brand mark next to the title.
    pub show_monero_mark: bool,
}

impl DisplayDescriptor {
    pub fn new(logo_url: impl Into<String>, title_text: impl Into<String>) -> Self {
        Self {
            logo_url: logo_url.into(),
            title_text: title_text.into(),
            subtitle: Subtitle::None,
            show_monero_mark: false,
        }
    }

    pub fn with_subtitle(mut self, subtitle: Subtitle) -> Self {
        self.subtitle = subtitle;
        self
    }
}

/// Context handed to [`Subtitle::render`].
pub struct SubtitleContext<'a> {
    pub catalog: &'a dyn Catalog,
    /// Invoked with the offending catalog key when a dynamic subtitle falls
    /// back to its built-in text.
    pub on_error: Option<&'a dyn Fn(&str)>,
}

impl SubtitleContext<'_> {
    /// Translate `key`, reporting through `on_error` and returning `fallback`
    /// when the catalog has no entry.
    pub fn translate_or(&self, key: &str, fallback: &'static str) -> String {
        match self.catalog.translate(key) {
            Some(text) => text.into_owned(),
            None => {
                if let Some(on_error) = self.on_error {
                    on_error(key);
                }
                fallback.to_string()
            }
        }
    }
}

/// Subtitle slot of a descriptor.
///
/// Most methods have none; a few promotional ones carry fixed text or text
/// computed from the render context.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Subtitle {
    #[default]
    None,
    Static(&'static str),
    Dynamic(fn(&SubtitleContext<'_>) -> String),
}

impl Subtitle {
    /// Evaluate the subtitle for rendering. `None` means no subtitle row.
    pub fn render(&self, ctx: &SubtitleContext<'_>) -> Option<String> {
        match self {
            Subtitle::None => None,
            Subtitle::Static(text) => Some((*text).to_string()),
            Subtitle::Dynamic(f) => Some(f(ctx)),
        }
    }
}

impl std::fmt::Debug for Subtitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subtitle::None => write!(f, "None"),
            Subtitle::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Subtitle::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}
