//! Center 组件 - 单个子组件水平居中

use super::component::{Node, Renderable};
use super::config::CenterConfig;
use super::interaction::{ClickBinding, Clickable};
use crate::renderer::{format_class_attr, format_style, merge_style, render_element, StyleMap};
use once_cell::sync::Lazy;

static CENTER_DEFAULT_STYLE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::from([("display", "flex"), ("justify-content", "center")])
});

/// Center - 只包含一个子组件
pub struct Center {
    node: Node,
    config: CenterConfig,
}

impl Center {
    pub fn new(child: Box<dyn Renderable>) -> Self {
        Self::from_config(child, CenterConfig::default())
    }

    pub fn from_config(child: Box<dyn Renderable>, config: CenterConfig) -> Self {
        Self { node: Node::new(vec![child]), config }
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

    pub fn effective_style(&self) -> StyleMap {
        if self.config.default {
            merge_style(&CENTER_DEFAULT_STYLE, &self.config.style)
        } else {
            self.config.style.clone()
        }
    }
}

impl Clickable for Center {
    fn click_binding_mut(&mut self) -> &mut ClickBinding {
        &mut self.config.click
    }
}

impl Renderable for Center {
    fn render(&mut self) -> String {
        self.config.click.prepare_scripts();
        let class_attr = format_class_attr(&self.config.classes);
        let style_attr = format_style(&self.effective_style());
        let inner = self.node.render();
        render_element(
            "div",
            &self.config.id,
            &class_attr,
            &style_attr,
            &self.config.click.onclick_attr(),
            &inner,
        )
    }

    fn children(&self) -> &[Box<dyn Renderable>] {
        self.node.children()
    }

    fn scripts(&self) -> &[String] {
        &self.config.click.js
    }

    fn type_name(&self) -> &'static str {
        "Center"
    }
}
