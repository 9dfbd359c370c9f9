//! 按钮贴边对齐

use crate::renderer::StyleMap;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// 绝对定位贴边方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("unknown alignment: {0}")]
    Unknown(String),
}

impl Alignment {
    pub fn side(&self) -> &'static str {
        match self {
            Alignment::Top => "top",
            Alignment::Bottom => "bottom",
            Alignment::Left => "left",
            Alignment::Right => "right",
        }
    }

    /// `position: absolute` 加对应边的 `0px`
    pub fn default_style(&self) -> StyleMap {
        StyleMap::from([("position", "absolute"), (self.side(), "0px")])
    }
}

impl FromStr for Alignment {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Alignment::Top),
            "bottom" => Ok(Alignment::Bottom),
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            _ => Err(AlignmentError::Unknown(s.to_string())),
        }
    }
}
