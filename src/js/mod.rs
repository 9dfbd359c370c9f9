//! 客户端脚本生成

mod ajax;

pub use ajax::{RequestSpec, generate_js_code};
