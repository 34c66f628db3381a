//! Layout configuration: how one output is produced from the content.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Engine, FontSize, FontspecNumbers, Locale, Section, Template};
use crate::error::{Error, Result};

/// Default top and bottom margin.
pub const DEFAULT_VERTICAL_MARGIN: &str = "2.5cm";

/// Default left and right margin.
pub const DEFAULT_HORIZONTAL_MARGIN: &str = "1.5cm";

/// One output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub engine: Engine,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub sections: SectionsConfig,
    #[serde(default)]
    pub advanced: Advanced,
}

impl Layout {
    /// Create a layout for an engine with every other setting at its default.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            template: None,
            locale: LocaleConfig::default(),
            margins: Margins::default(),
            page: PageConfig::default(),
            typography: Typography::default(),
            sections: SectionsConfig::default(),
            advanced: Advanced::default(),
        }
    }

    /// Set the template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// Set the output language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale.language = Some(locale);
        self
    }

    /// Set a custom section order.
    pub fn with_order(mut self, order: Vec<Section>) -> Self {
        self.sections.order = order;
        self
    }

    /// Override the displayed title of a section.
    pub fn with_alias(mut self, section: Section, title: impl Into<String>) -> Self {
        self.sections.aliases.insert(section, title.into());
        self
    }

    /// Output language, English when unset.
    pub fn locale(&self) -> Locale {
        self.locale.language.unwrap_or(Locale::English)
    }

    /// The template to render with.
    ///
    /// Falls back to the engine default. A template from another engine is a
    /// configuration error and is never silently replaced.
    pub fn resolved_template(&self) -> Result<Option<Template>> {
        match self.template {
            Some(template) if template.engine() != self.engine => {
                Err(Error::UnsupportedTemplate {
                    engine: self.engine.to_string(),
                    template: template.to_string(),
                })
            }
            Some(template) => Ok(Some(template)),
            None => Ok(self.engine.default_template()),
        }
    }

    /// Whether page numbers are printed.
    pub fn show_page_numbers(&self) -> bool {
        self.page.show_page_numbers.unwrap_or(true)
    }

    /// Whether icons precede contact items.
    pub fn show_icons(&self) -> bool {
        self.advanced.show_icons.unwrap_or(true)
    }

    /// Base font size.
    pub fn font_size(&self) -> FontSize {
        self.typography.font_size.unwrap_or(FontSize::Medium)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Engine::Latex)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

/// Page margins as sized-unit strings such as `2.5cm`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl Margins {
    pub fn top(&self) -> &str {
        self.top.as_deref().unwrap_or(DEFAULT_VERTICAL_MARGIN)
    }

    pub fn bottom(&self) -> &str {
        self.bottom.as_deref().unwrap_or(DEFAULT_VERTICAL_MARGIN)
    }

    pub fn left(&self) -> &str {
        self.left.as_deref().unwrap_or(DEFAULT_HORIZONTAL_MARGIN)
    }

    pub fn right(&self) -> &str {
        self.right.as_deref().unwrap_or(DEFAULT_HORIZONTAL_MARGIN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_page_numbers: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
}

/// Section ordering and display-name overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionsConfig {
    #[serde(default)]
    pub order: Vec<Section>,
    #[serde(default)]
    pub aliases: BTreeMap<Section, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advanced {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_icons: Option<bool>,
    #[serde(default)]
    pub fontspec: Fontspec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fontspec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbers: Option<FontspecNumbers>,
}
