//! 点击交互 - onclick 属性与 AJAX 脚本绑定
//!
//! 所有组件共用同一套点击逻辑：
//! - `on_click` 存在时输出 `event.preventDefault(); {on_click}`
//! - 脚本列表非空且配置了路由时，每次渲染追加一段生成的请求函数

use crate::js::{generate_js_code, RequestSpec};
use serde::Deserialize;

/// 组件的点击绑定
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClickBinding {
    #[serde(default)]
    pub on_click: Option<String>,
    /// 附加脚本，渲染时生成的函数也追加到这里
    #[serde(default)]
    pub js: Vec<String>,
    #[serde(flatten)]
    pub request: RequestSpec,
}

impl ClickBinding {
    /// 点击处理函数，空串视为未设置
    pub fn handler(&self) -> Option<&str> {
        self.on_click.as_deref().filter(|h| !h.is_empty())
    }

    /// onclick 属性值，没有处理函数时为空串
    pub fn onclick_attr(&self) -> String {
        match self.handler() {
            Some(handler) => format!("event.preventDefault(); {}", handler),
            None => String::new(),
        }
    }

    /// 渲染时调用，不做去重：重复渲染会重复追加
    pub fn prepare_scripts(&mut self) {
        if self.js.is_empty() {
            return;
        }
        if !self.request.has_route() {
            tracing::debug!(func = %self.request.func_name, "script list present but no route, skipping generation");
            return;
        }
        tracing::debug!(
            func = %self.request.func_name,
            route = self.request.route.as_deref().unwrap_or_default(),
            "generating client request script"
        );
        let code = generate_js_code(&self.request);
        self.js.push(code);
    }
}

/// 可点击组件的公共构建方法
pub trait Clickable: Sized {
    fn click_binding_mut(&mut self) -> &mut ClickBinding;

    /// 点击时执行的 JS（受信输入，原样输出）
    fn on_click(mut self, handler: &str) -> Self {
        self.click_binding_mut().on_click = Some(handler.to_string());
        self
    }

    fn with_script(mut self, script: &str) -> Self {
        self.click_binding_mut().js.push(script.to_string());
        self
    }

    fn with_request(mut self, request: RequestSpec) -> Self {
        self.click_binding_mut().request = request;
        self
    }
}
