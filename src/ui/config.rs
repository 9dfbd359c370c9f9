//! 组件配置结构体
//!
//! 每个组件的全部构造参数，可直接从 JSON 反序列化。
//! 缺省字段在反序列化时解析为空容器或文档中的默认值。

use super::alignment::Alignment;
use super::interaction::ClickBinding;
use super::layout::{FlexAlign, FlexDirection};
use crate::renderer::{ClassList, StyleMap};
use serde::Deserialize;

fn default_true() -> bool { true }
fn default_font_size() -> String { "1.0rem".to_string() }
fn default_horizontal() -> FlexAlign { FlexAlign::Center }
fn default_vertical() -> FlexAlign { FlexAlign::Start }

/// Text 配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextConfig {
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default)]
    pub style: StyleMap,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub classes: ClassList,
    #[serde(flatten)]
    pub click: ClickBinding,
}

impl TextConfig {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font_size: default_font_size(),
            style: StyleMap::new(),
            id: String::new(),
            classes: ClassList::new(),
            click: ClickBinding::default(),
        }
    }
}

/// Image 配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageConfig {
    pub source: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub style: StyleMap,
    #[serde(default = "default_true")]
    pub default: bool,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub classes: ClassList,
    #[serde(flatten)]
    pub click: ClickBinding,
}

impl ImageConfig {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            alt: String::new(),
            style: StyleMap::new(),
            default: true,
            id: String::new(),
            classes: ClassList::new(),
            click: ClickBinding::default(),
        }
    }
}

/// Button 配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ButtonConfig {
    pub text: String,
    #[serde(default = "default_true")]
    pub default: bool,
    /// 贴边定位，仅在 `default` 为 true 时生效
    #[serde(default)]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub classes: ClassList,
    #[serde(default)]
    pub style: StyleMap,
    #[serde(flatten)]
    pub click: ClickBinding,
}

impl ButtonConfig {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            default: true,
            alignment: None,
            id: String::new(),
            classes: ClassList::new(),
            style: StyleMap::new(),
            click: ClickBinding::default(),
        }
    }
}

/// Column 配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnConfig {
    #[serde(default)]
    pub direction: FlexDirection,
    /// justify-content
    #[serde(default = "default_horizontal")]
    pub horizontal: FlexAlign,
    /// align-items
    #[serde(default = "default_vertical")]
    pub vertical: FlexAlign,
    #[serde(default)]
    pub style: StyleMap,
    #[serde(default = "default_true")]
    pub default: bool,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub classes: ClassList,
    #[serde(flatten)]
    pub click: ClickBinding,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Column,
            horizontal: default_horizontal(),
            vertical: default_vertical(),
            style: StyleMap::new(),
            default: true,
            id: String::new(),
            classes: ClassList::new(),
            click: ClickBinding::default(),
        }
    }
}

/// Center 配置（子组件单独传入）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CenterConfig {
    #[serde(default = "default_true")]
    pub default: bool,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub classes: ClassList,
    #[serde(default)]
    pub style: StyleMap,
    #[serde(flatten)]
    pub click: ClickBinding,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            default: true,
            id: String::new(),
            classes: ClassList::new(),
            style: StyleMap::new(),
            click: ClickBinding::default(),
        }
    }
}

/// Page 配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub style: StyleMap,
    #[serde(default = "default_true", alias = "default")]
    pub default_css: bool,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub classes: ClassList,
    #[serde(flatten)]
    pub click: ClickBinding,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            style: StyleMap::new(),
            default_css: true,
            id: String::new(),
            classes: ClassList::new(),
            click: ClickBinding::default(),
        }
    }
}
