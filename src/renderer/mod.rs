//! HTML 渲染器 - 样式/类名序列化与组件树构建
//!
//! 输出的属性值全部原样拼接，不做 HTML 转义（受信输入）。

mod style_formatter;
mod class_formatter;
pub mod registry;

pub use style_formatter::{StyleMap, merge_style, format_style, format_style_compact};
pub use class_formatter::{ClassList, format_class_attr};
pub use registry::{WidgetRegistry, BuildError};

/// 输出 `<tag id class style onclick>inner</tag>`，属性顺序固定，空值也输出
pub fn render_element(tag: &str, id: &str, class_attr: &str, style_attr: &str, onclick: &str, inner: &str) -> String {
    format!(
        "<{tag} id=\"{id}\" class=\"{class_attr}\" style=\"{style_attr}\" onclick=\"{onclick}\">{inner}</{tag}>"
    )
}
