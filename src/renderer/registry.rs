//! 组件注册表 - 根据 JSON 描述构建组件树
//!
//! 节点格式：`{"type": "column", ...配置字段, "children": [...]}`，
//! Center 使用 `"child": {...}`。

use crate::ui::{
    Button, ButtonConfig, Center, CenterConfig, Column, ColumnConfig, ComponentTree, Image,
    ImageConfig, Page, PageConfig, Renderable, Text, TextConfig,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use thiserror::Error;

/// 构建组件树时的错误
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid widget description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("widget description has no \"type\" field")]
    MissingType,

    #[error("unknown widget type: {0}")]
    UnknownType(String),

    #[error("center widget requires a \"child\" object")]
    MissingChild,

    #[error("\"children\" must be an array")]
    InvalidChildren,
}

/// 组件构建函数
pub type WidgetBuilder = fn(&WidgetRegistry, &JsonValue) -> Result<Box<dyn Renderable>, BuildError>;

/// 组件注册表
pub struct WidgetRegistry {
    builders: HashMap<String, WidgetBuilder>,
}

impl WidgetRegistry {
    /// 注册内置组件
    pub fn new() -> Self {
        let mut registry = Self { builders: HashMap::new() };
        registry.register("text", build_text);
        registry.register("image", build_image);
        registry.register("button", build_button);
        registry.register("column", build_column);
        registry.register("center", build_center);
        registry.register("page", build_page);
        registry
    }

    /// 注册（或覆盖）一个类型名
    pub fn register(&mut self, tag: &str, builder: WidgetBuilder) {
        self.builders.insert(tag.to_string(), builder);
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.builders.contains_key(tag)
    }

    /// 根据 `type` 字段构建组件
    pub fn build(&self, value: &JsonValue) -> Result<Box<dyn Renderable>, BuildError> {
        let tag = value
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or(BuildError::MissingType)?;
        let builder = self
            .builders
            .get(tag)
            .ok_or_else(|| BuildError::UnknownType(tag.to_string()))?;
        tracing::trace!(tag, "building widget");
        builder(self, value)
    }

    pub fn build_str(&self, json: &str) -> Result<Box<dyn Renderable>, BuildError> {
        let value: JsonValue = serde_json::from_str(json)?;
        self.build(&value)
    }

    pub fn build_tree(&self, value: &JsonValue) -> Result<ComponentTree, BuildError> {
        Ok(ComponentTree::with_root(self.build(value)?))
    }

    /// 构建 `children` 数组，缺省或 null 视为空
    pub fn build_children(&self, value: &JsonValue) -> Result<Vec<Box<dyn Renderable>>, BuildError> {
        match value.get("children") {
            None | Some(JsonValue::Null) => Ok(Vec::new()),
            Some(JsonValue::Array(items)) => items.iter().map(|item| self.build(item)).collect(),
            Some(_) => Err(BuildError::InvalidChildren),
        }
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn build_text(_: &WidgetRegistry, value: &JsonValue) -> Result<Box<dyn Renderable>, BuildError> {
    Ok(Box::new(Text::from_config(TextConfig::deserialize(value)?)))
}

fn build_image(_: &WidgetRegistry, value: &JsonValue) -> Result<Box<dyn Renderable>, BuildError> {
    Ok(Box::new(Image::from_config(ImageConfig::deserialize(value)?)))
}

fn build_button(_: &WidgetRegistry, value: &JsonValue) -> Result<Box<dyn Renderable>, BuildError> {
    Ok(Box::new(Button::from_config(ButtonConfig::deserialize(value)?)))
}

fn build_column(registry: &WidgetRegistry, value: &JsonValue) -> Result<Box<dyn Renderable>, BuildError> {
    let config = ColumnConfig::deserialize(value)?;
    let children = registry.build_children(value)?;
    Ok(Box::new(Column::from_config(children, config)))
}

fn build_center(registry: &WidgetRegistry, value: &JsonValue) -> Result<Box<dyn Renderable>, BuildError> {
    let config = CenterConfig::deserialize(value)?;
    let child = match value.get("child") {
        Some(child) if child.is_object() => registry.build(child)?,
        _ => return Err(BuildError::MissingChild),
    };
    Ok(Box::new(Center::from_config(child, config)))
}

fn build_page(registry: &WidgetRegistry, value: &JsonValue) -> Result<Box<dyn Renderable>, BuildError> {
    let config = PageConfig::deserialize(value)?;
    let children = registry.build_children(value)?;
    Ok(Box::new(Page::from_config(children, config)))
}
