//! Column 组件 - Flex 布局容器

use super::component::{Node, Renderable};
use super::config::ColumnConfig;
use super::interaction::{ClickBinding, Clickable};
use super::layout::{FlexAlign, FlexDirection};
use crate::renderer::{format_class_attr, format_style, merge_style, render_element, StyleMap};

/// Column - Flex 布局容器，方向和对齐可配置
pub struct Column {
    node: Node,
    config: ColumnConfig,
}

impl Column {
    pub fn new(children: Vec<Box<dyn Renderable>>) -> Self {
        Self::from_config(children, ColumnConfig::default())
    }

    pub fn from_config(children: Vec<Box<dyn Renderable>>, config: ColumnConfig) -> Self {
        Self { node: Node::new(children), config }
    }

    pub fn row(children: Vec<Box<dyn Renderable>>) -> Self {
        Self::new(children).with_direction(FlexDirection::Row)
    }

    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.config.direction = direction;
        self
    }

    /// justify-content
    pub fn with_horizontal(mut self, align: FlexAlign) -> Self {
        self.config.horizontal = align;
        self
    }

    /// align-items
    pub fn with_vertical(mut self, align: FlexAlign) -> Self {
        self.config.vertical = align;
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

    pub fn add_child(&mut self, child: Box<dyn Renderable>) {
        self.node.push(child);
    }

    pub fn effective_style(&self) -> StyleMap {
        if !self.config.default {
            return self.config.style.clone();
        }
        let defaults = StyleMap::new()
            .with("display", "flex")
            .with("flex-direction", self.config.direction.as_css())
            .with("justify-content", self.config.horizontal.as_css())
            .with("align-items", self.config.vertical.as_css())
            .with("flex-wrap", "wrap");
        merge_style(&defaults, &self.config.style)
    }
}

impl Clickable for Column {
    fn click_binding_mut(&mut self) -> &mut ClickBinding {
        &mut self.config.click
    }
}

impl Renderable for Column {
    fn render(&mut self) -> String {
        self.config.click.prepare_scripts();
        let style_attr = format_style(&self.effective_style());
        let class_attr = format_class_attr(&self.config.classes);
        let inner = self.node.render_children();
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
        "Column"
    }
}
