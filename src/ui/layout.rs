//! 布局关键字 - Flexbox 方向与对齐

use serde::Deserialize;
use std::fmt;

/// Flex 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

/// Flex 对齐，用于 justify-content / align-items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FlexAlign {
    #[serde(rename = "flex-start", alias = "start")]
    Start,
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "flex-end", alias = "end")]
    End,
    #[serde(rename = "space-between")]
    SpaceBetween,
    #[serde(rename = "space-around")]
    SpaceAround,
    #[serde(rename = "space-evenly")]
    SpaceEvenly,
    #[serde(rename = "stretch")]
    Stretch,
    #[serde(rename = "baseline")]
    Baseline,
}

impl FlexAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
            FlexAlign::SpaceBetween => "space-between",
            FlexAlign::SpaceAround => "space-around",
            FlexAlign::SpaceEvenly => "space-evenly",
            FlexAlign::Stretch => "stretch",
            FlexAlign::Baseline => "baseline",
        }
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl fmt::Display for FlexAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
