//! Page 组件 - 全屏滚动吸附的页面区块

use super::component::{Node, Renderable};
use super::config::PageConfig;
use super::interaction::{ClickBinding, Clickable};
use crate::renderer::{format_class_attr, format_style, merge_style, render_element, StyleMap};
use once_cell::sync::Lazy;

static PAGE_DEFAULT_STYLE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::from([
        ("scroll-snap-align", "start"),
        ("overflow", "hidden"),
        ("scroll-snap-type", "y mandatory"),
        ("scroll-behavior", "smooth"),
        ("transition", "transform 0.5s ease-in-out"),
        // 占满视口
        ("min-height", "100vh"),
        ("width", "100vw"),
        ("background-size", "cover"),
        ("background-position", "center"),
    ])
});

/// Page - 占满视口的滚动吸附容器
pub struct Page {
    node: Node,
    config: PageConfig,
}

impl Page {
    pub fn new(children: Vec<Box<dyn Renderable>>) -> Self {
        Self::from_config(children, PageConfig::default())
    }

    pub fn from_config(children: Vec<Box<dyn Renderable>>, config: PageConfig) -> Self {
        Self { node: Node::new(children), config }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.config.style = style;
        self
    }

    pub fn with_default_css(mut self, default_css: bool) -> Self {
        self.config.default_css = default_css;
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
        if self.config.default_css {
            merge_style(&PAGE_DEFAULT_STYLE, &self.config.style)
        } else {
            self.config.style.clone()
        }
    }
}

impl Clickable for Page {
    fn click_binding_mut(&mut self) -> &mut ClickBinding {
        &mut self.config.click
    }
}

impl Renderable for Page {
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
        "Page"
    }
}
