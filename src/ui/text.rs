//! Text 组件 - 文本显示

use super::component::Renderable;
use super::config::TextConfig;
use super::interaction::{ClickBinding, Clickable};
use crate::renderer::{format_class_attr, format_style_compact, merge_style, StyleMap};

const FONT_FAMILY: &str = r"&quot;Lato&quot;, &quot;Corbel&quot;, &quot;Avenir&quot;, &quot;Lucida Grande&quot;, &quot;Lucida Sans&quot;, sans-serif";

/// Text - 行内文本，内容原样输出（不转义）
pub struct Text {
    config: TextConfig,
}

impl Text {
    pub fn new(content: &str) -> Self {
        Self::from_config(TextConfig::new(content))
    }

    pub fn from_config(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn with_font_size(mut self, size: &str) -> Self {
        self.config.font_size = size.to_string();
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.config.style = style;
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

    pub fn content(&self) -> &str {
        &self.config.text
    }

    /// 默认样式始终合并，调用方样式覆盖同名属性
    pub fn effective_style(&self) -> StyleMap {
        let defaults = StyleMap::new()
            .with("font-size", self.config.font_size.as_str())
            .with("line-height", "1.5em")
            .with("font-family", FONT_FAMILY);
        merge_style(&defaults, &self.config.style)
    }
}

impl Clickable for Text {
    fn click_binding_mut(&mut self) -> &mut ClickBinding {
        &mut self.config.click
    }
}

impl Renderable for Text {
    fn render(&mut self) -> String {
        self.config.click.prepare_scripts();
        let style = format_style_compact(&self.effective_style());
        let class_attr = format_class_attr(&self.config.classes);
        // 没有点击处理时不输出 onclick
        let onclick = match self.config.click.handler() {
            Some(_) => format!(" onclick=\"{}\"", self.config.click.onclick_attr()),
            None => String::new(),
        };
        format!(
            "<span id=\"{}\" class=\"{}\" style=\"{}\"{}>{}</span>",
            self.config.id, class_attr, style, onclick, self.config.text
        )
    }

    fn scripts(&self) -> &[String] {
        &self.config.click.js
    }

    fn type_name(&self) -> &'static str {
        "Text"
    }
}
