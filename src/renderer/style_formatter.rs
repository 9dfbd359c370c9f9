//! 内联样式 - StyleMap 合并与序列化
//!
//! 键和值原样输出，不做任何转义或校验（受信输入）。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 有序样式表：CSS 属性名 -> 值，按插入顺序迭代
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// 设置属性，已存在的键保留原位置，只覆盖值
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for StyleMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// 右偏合并：先放默认值，再用调用方的值覆盖
///
/// 迭代顺序为 `defaults` 的键，然后是 `overrides` 中新增的键。
pub fn merge_style(defaults: &StyleMap, overrides: &StyleMap) -> StyleMap {
    let mut merged = defaults.clone();
    for (key, value) in overrides.iter() {
        merged.insert(key, value);
    }
    merged
}

/// 序列化为 `k1: v1; k2: v2`
pub fn format_style(style: &StyleMap) -> String {
    join_declarations(style, ": ")
}

/// 紧凑写法 `k1:v1; k2:v2`，Text 组件使用
pub fn format_style_compact(style: &StyleMap) -> String {
    join_declarations(style, ":")
}

fn join_declarations(style: &StyleMap, colon: &str) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}{}{}", key, colon, value))
        .collect::<Vec<_>>()
        .join("; ")
}
