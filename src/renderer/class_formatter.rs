//! class 属性序列化

/// 类名列表，保留顺序，不去重也不过滤空串
pub type ClassList = Vec<String>;

/// 以单个空格拼接类名
pub fn format_class_attr(classes: &[String]) -> String {
    classes.join(" ")
}
