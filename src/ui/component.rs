//! 组件基础定义

/// 组件 trait
///
/// 渲染是一次性的字符串拼接。`render` 需要 `&mut self`，
/// 因为带请求配置的组件会在渲染时向自己的脚本列表追加生成的 JS。
pub trait Renderable {
    /// 渲染为 HTML 片段
    fn render(&mut self) -> String;

    /// 获取子组件
    fn children(&self) -> &[Box<dyn Renderable>] {
        &[]
    }

    /// 组件持有的脚本（包括渲染时生成的）
    fn scripts(&self) -> &[String] {
        &[]
    }

    /// 组件类型名
    fn type_name(&self) -> &'static str {
        "Node"
    }
}

/// 基础节点 - 持有有序子组件，渲染时直接拼接，不包裹任何标签
#[derive(Default)]
pub struct Node {
    children: Vec<Box<dyn Renderable>>,
}

impl Node {
    pub fn new(children: Vec<Box<dyn Renderable>>) -> Self {
        Self { children }
    }

    /// `None` 视为空列表
    pub fn from_optional(children: Option<Vec<Box<dyn Renderable>>>) -> Self {
        Self::new(children.unwrap_or_default())
    }

    pub fn push(&mut self, child: Box<dyn Renderable>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// 按顺序拼接子组件的渲染结果
    pub fn render_children(&mut self) -> String {
        self.children.iter_mut().map(|child| child.render()).collect()
    }
}

impl Renderable for Node {
    fn render(&mut self) -> String {
        self.render_children()
    }

    fn children(&self) -> &[Box<dyn Renderable>] {
        &self.children
    }
}

/// 组件树
#[derive(Default)]
pub struct ComponentTree {
    root: Option<Box<dyn Renderable>>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: Box<dyn Renderable>) -> Self {
        Self { root: Some(root) }
    }

    pub fn set_root(&mut self, root: Box<dyn Renderable>) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&dyn Renderable> {
        self.root.as_deref()
    }

    /// 渲染整个组件树，没有根节点时返回空串
    pub fn render(&mut self) -> String {
        match &mut self.root {
            Some(root) => root.render(),
            None => String::new(),
        }
    }

    /// 深度优先收集所有组件的脚本（先父后子）
    pub fn collect_scripts(&self) -> Vec<String> {
        let mut scripts = Vec::new();
        if let Some(root) = &self.root {
            Self::collect_from(root.as_ref(), &mut scripts);
        }
        scripts
    }

    fn collect_from(component: &dyn Renderable, out: &mut Vec<String>) {
        out.extend(component.scripts().iter().cloned());
        for child in component.children() {
            Self::collect_from(child.as_ref(), out);
        }
    }
}
