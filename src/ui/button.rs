//! Button 组件 - 可点击按钮
//!
//! 默认样式：
//! - 蓝底白字、圆角、阴影
//! - 设置了 alignment 时追加绝对定位

use super::alignment::Alignment;
use super::component::Renderable;
use super::config::ButtonConfig;
use super::interaction::{ClickBinding, Clickable};
use crate::renderer::{format_class_attr, format_style, merge_style, render_element, StyleMap};
use once_cell::sync::Lazy;

static BUTTON_DEFAULT_STYLE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::from([
        ("background-color", "#2196f3"),
        ("color", "white"),
        ("padding", "10px 15px"),
        ("border", "none"),
        ("border-radius", "4px"),
        ("cursor", "pointer"),
        ("box-shadow", "0px 2px 5px rgba(0, 0, 0, 0.2)"),
        ("transition", "background-color 0.3s ease"),
    ])
});

/// Button - 按钮组件
pub struct Button {
    config: ButtonConfig,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Self::from_config(ButtonConfig::new(label))
    }

    pub fn from_config(config: ButtonConfig) -> Self {
        Self { config }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.config.alignment = Some(alignment);
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

    pub fn label(&self) -> &str {
        &self.config.text
    }

    pub fn effective_style(&self) -> StyleMap {
        if !self.config.default {
            return self.config.style.clone();
        }
        let defaults = match self.config.alignment {
            Some(alignment) => merge_style(&BUTTON_DEFAULT_STYLE, &alignment.default_style()),
            None => BUTTON_DEFAULT_STYLE.clone(),
        };
        merge_style(&defaults, &self.config.style)
    }
}

impl Clickable for Button {
    fn click_binding_mut(&mut self) -> &mut ClickBinding {
        &mut self.config.click
    }
}

impl Renderable for Button {
    fn render(&mut self) -> String {
        self.config.click.prepare_scripts();
        let class_attr = format_class_attr(&self.config.classes);
        let style_attr = format_style(&self.effective_style());
        render_element(
            "button",
            &self.config.id,
            &class_attr,
            &style_attr,
            &self.config.click.onclick_attr(),
            &self.config.text,
        )
    }

    fn scripts(&self) -> &[String] {
        &self.config.click.js
    }

    fn type_name(&self) -> &'static str {
        "Button"
    }
}
