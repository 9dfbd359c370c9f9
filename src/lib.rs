//! butterflask - 声明式组件渲染库
//! 将组件树渲染为 HTML 片段、内联 CSS 和 AJAX 点击回调脚本
//!
//! # 受信输入
//!
//! 文本内容、样式值、类名、onclick 处理函数和请求脚本片段都原样拼接进
//! HTML/CSS/JS 输出，没有任何转义或校验。只能传入受信的字符串，
//! 用户可控的数据必须由调用方先行转义。

// UI 组件系统
pub mod ui;

// 客户端脚本生成
pub mod js;

// 样式序列化与组件注册表
pub mod renderer;

pub use ui::{
    Alignment, Button, Center, ClickBinding, Clickable, Column, ComponentTree, FlexAlign,
    FlexDirection, Image, Node, Page, Renderable, Text,
};
pub use js::{generate_js_code, RequestSpec};
pub use renderer::{
    format_class_attr, format_style, merge_style, BuildError, ClassList, StyleMap, WidgetRegistry,
};

// 单元测试
#[cfg(test)]
mod tests;
