//! Image 组件 - 图片

use super::component::Renderable;
use super::config::ImageConfig;
use super::interaction::{ClickBinding, Clickable};
use crate::renderer::{format_class_attr, format_style, merge_style, StyleMap};
use once_cell::sync::Lazy;

static IMAGE_DEFAULT_STYLE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::from([
        ("max-width", "100%"),
        ("height", "auto"),
        ("background-size", "cover"),
        ("background-position", "center"),
        ("border-radius", "7px"),
    ])
});

/// Image - `<img>` 标签
pub struct Image {
    config: ImageConfig,
}

impl Image {
    pub fn new(source: &str) -> Self {
        Self::from_config(ImageConfig::new(source))
    }

    pub fn from_config(config: ImageConfig) -> Self {
        Self { config }
    }

    pub fn with_alt(mut self, alt: &str) -> Self {
        self.config.alt = alt.to_string();
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.config.style = style;
        self
    }

    pub fn with_default_style(mut self, default: bool) -> Self {
        self.config.default = default;
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.config.id = id.to_string();
        self
    }

    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.config.classes = classes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn source(&self) -> &str {
        &self.config.source
    }

    pub fn effective_style(&self) -> StyleMap {
        if self.config.default {
            merge_style(&IMAGE_DEFAULT_STYLE, &self.config.style)
        } else {
            self.config.style.clone()
        }
    }
}

impl Clickable for Image {
    fn click_binding_mut(&mut self) -> &mut ClickBinding {
        &mut self.config.click
    }
}

impl Renderable for Image {
    fn render(&mut self) -> String {
        self.config.click.prepare_scripts();
        let style_attr = format_style(&self.effective_style());
        let class_attr = format_class_attr(&self.config.classes);
        format!(
            "<img id=\"{}\" src=\"{}\" alt=\"{}\" style=\"{}\" class=\"{}\" onclick=\"{}\">",
            self.config.id,
            self.config.source,
            self.config.alt,
            style_attr,
            class_attr,
            self.config.click.onclick_attr()
        )
    }

    fn scripts(&self) -> &[String] {
        &self.config.click.js
    }

    fn type_name(&self) -> &'static str {
        "Image"
    }
}
