//! AJAX 脚本生成 - 根据请求描述生成点击回调函数
//!
//! 所有字段原样插入生成的 JS 中，不做任何校验或转义。
//! 调用方必须保证片段是受信的脚本文本。

use serde::Deserialize;

/// 客户端异步请求描述
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestSpec {
    /// 生成的 JS 函数名
    pub func_name: String,
    pub method: String,
    /// 未配置（或为空）时不生成脚本
    pub route: Option<String>,
    pub request_data: String,
    pub data_type: String,
    pub content_type: String,
    pub before_send: String,
    pub on_success: String,
    pub on_error: String,
    pub on_completed: String,
}

impl Default for RequestSpec {
    fn default() -> Self {
        Self {
            func_name: String::new(),
            method: "POST".to_string(),
            route: None,
            request_data: String::new(),
            data_type: "json".to_string(),
            content_type: "application/json".to_string(),
            before_send: String::new(),
            on_success: String::new(),
            on_error: String::new(),
            on_completed: String::new(),
        }
    }
}

impl RequestSpec {
    pub fn new(func_name: &str, route: &str) -> Self {
        Self {
            func_name: func_name.to_string(),
            route: Some(route.to_string()),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn with_data(mut self, request_data: &str) -> Self {
        self.request_data = request_data.to_string();
        self
    }

    pub fn with_data_type(mut self, data_type: &str) -> Self {
        self.data_type = data_type.to_string();
        self
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub fn before_send(mut self, code: &str) -> Self {
        self.before_send = code.to_string();
        self
    }

    pub fn on_success(mut self, code: &str) -> Self {
        self.on_success = code.to_string();
        self
    }

    pub fn on_error(mut self, code: &str) -> Self {
        self.on_error = code.to_string();
        self
    }

    pub fn on_completed(mut self, code: &str) -> Self {
        self.on_completed = code.to_string();
        self
    }

    /// 路由存在且非空
    pub fn has_route(&self) -> bool {
        self.route.as_deref().is_some_and(|r| !r.is_empty())
    }
}

/// 生成 `function {func_name}(event)`，内部发起 `$.ajax` 请求
pub fn generate_js_code(spec: &RequestSpec) -> String {
    format!(
        r#"
        function {func_name}(event) {{
            $.ajax({{
                type: '{method}',
                url: '{route}',
                data: '{request_data}',
                dataType: '{data_type}',
                contentType: '{content_type}',
                beforeSend: function(xhr) {{
                    {before_send}
                }},
                success: function(response) {{
                    {on_success}
                }},
                error: function(xhr, status, error) {{
                    console.log(error);
                    {on_error}
                }},
                complete: function() {{
                    {on_completed}
                }}
            }});
        }}
    "#,
        func_name = spec.func_name,
        method = spec.method,
        route = spec.route.as_deref().unwrap_or_default(),
        request_data = spec.request_data,
        data_type = spec.data_type,
        content_type = spec.content_type,
        before_send = spec.before_send,
        on_success = spec.on_success,
        on_error = spec.on_error,
        on_completed = spec.on_completed,
    )
}
