//! 组件单元测试
//! 测试各组件的默认样式合并与 HTML 输出

use crate::js::RequestSpec;
use crate::renderer::StyleMap;
use crate::ui::*;
use std::str::FromStr;

const TEXT_DEFAULT_STYLE: &str = "font-size:1.0rem; line-height:1.5em; font-family:&quot;Lato&quot;, &quot;Corbel&quot;, &quot;Avenir&quot;, &quot;Lucida Grande&quot;, &quot;Lucida Sans&quot;, sans-serif";

const BUTTON_DEFAULT_STYLE: &str = "background-color: #2196f3; color: white; padding: 10px 15px; border: none; border-radius: 4px; cursor: pointer; box-shadow: 0px 2px 5px rgba(0, 0, 0, 0.2); transition: background-color 0.3s ease";

/// 测试 Text 默认输出
#[test]
fn test_text_render_default() {
    let mut text = Text::new("hi");
    assert_eq!(
        text.render(),
        format!("<span id=\"\" class=\"\" style=\"{}\">hi</span>", TEXT_DEFAULT_STYLE)
    );
}

/// 测试 Text 自定义字号与样式覆盖
#[test]
fn test_text_style_override() {
    let mut text = Text::new("Title")
        .with_font_size("2rem")
        .with_style(StyleMap::from([("line-height", "1"), ("color", "red")]))
        .with_id("title")
        .with_classes(&["big", "bold"]);

    let html = text.render();
    assert!(html.starts_with("<span id=\"title\" class=\"big bold\" style=\"font-size:2rem; line-height:1; font-family:"));
    assert!(html.ends_with("sans-serif; color:red\">Title</span>"));
}

/// 测试 Text 点击处理
#[test]
fn test_text_on_click() {
    let mut text = Text::new("hi").on_click("hello()");
    let html = text.render();
    assert!(html.contains("\" onclick=\"event.preventDefault(); hello()\">hi</span>"));
}

/// 测试空处理函数视为未设置
#[test]
fn test_empty_on_click_is_ignored() {
    let mut button = Button::new("x").with_default_style(false).on_click("");
    assert_eq!(button.render(), "<button id=\"\" class=\"\" style=\"\" onclick=\"\">x</button>");

    let mut text = Text::new("x").on_click("");
    assert_eq!(text.render(), Text::new("x").render());
    assert!(!text.render().contains("onclick"));

    let mut image = crate::renderer::WidgetRegistry::new()
        .build(&serde_json::json!({"type": "image", "source": "/a", "default": false, "on_click": ""}))
        .unwrap();
    assert!(image.render().ends_with("onclick=\"\">"));
}

/// 测试访问器
#[test]
fn test_widget_accessors() {
    assert_eq!(Text::new("hello").content(), "hello");
    assert_eq!(Image::new("/a.png").source(), "/a.png");
    assert_eq!(Button::new("Go").label(), "Go");
}

/// 测试布局关键字 Display
#[test]
fn test_layout_keyword_display() {
    assert_eq!(FlexDirection::ColumnReverse.to_string(), "column-reverse");
    assert_eq!(FlexAlign::SpaceEvenly.to_string(), "space-evenly");
    assert_eq!(format!("{}", FlexAlign::Start), "flex-start");
}

/// 测试 Text 内容不转义
#[test]
fn test_text_content_passthrough() {
    let mut text = Text::new("<b>&amp;</b>");
    assert!(text.render().contains("><b>&amp;</b></span>"));
}

/// 测试 Image 默认输出
#[test]
fn test_image_render_default() {
    let mut image = Image::new("/logo.png").with_alt("Logo").with_id("logo");
    assert_eq!(
        image.render(),
        "<img id=\"logo\" src=\"/logo.png\" alt=\"Logo\" style=\"max-width: 100%; height: auto; background-size: cover; background-position: center; border-radius: 7px\" class=\"\" onclick=\"\">"
    );
}

/// 测试 Image 关闭默认样式
#[test]
fn test_image_without_default_style() {
    let mut image = Image::new("/a.png")
        .with_default_style(false)
        .with_style(StyleMap::from([("width", "10px")]))
        .with_classes(&["thumb"]);
    assert_eq!(
        image.render(),
        "<img id=\"\" src=\"/a.png\" alt=\"\" style=\"width: 10px\" class=\"thumb\" onclick=\"\">"
    );
}

/// 测试 Button 默认输出
#[test]
fn test_button_render_default() {
    let mut button = Button::new("Submit");
    assert_eq!(
        button.render(),
        format!("<button id=\"\" class=\"\" style=\"{}\" onclick=\"\">Submit</button>", BUTTON_DEFAULT_STYLE)
    );
}

/// 测试 Button 只保留调用方样式
#[test]
fn test_button_without_default_style() {
    let mut button = Button::new("Go")
        .with_default_style(false)
        .with_style(StyleMap::from([("color", "red")]))
        .on_click("go()");
    assert_eq!(
        button.render(),
        "<button id=\"\" class=\"\" style=\"color: red\" onclick=\"event.preventDefault(); go()\">Go</button>"
    );
}

/// 测试 Button 样式覆盖保留默认键顺序
#[test]
fn test_button_style_override() {
    let button = Button::new("Go").with_style(StyleMap::from([("color", "black"), ("margin", "4px")]));
    let style = button.effective_style();
    let keys: Vec<&str> = style.keys().collect();
    assert_eq!(keys[1], "color");
    assert_eq!(style.get("color"), Some("black"));
    assert_eq!(keys.last(), Some(&"margin"));
}

/// 测试四种贴边方式
#[test]
fn test_button_alignment_styles() {
    for (alignment, side) in [
        (Alignment::Top, "top"),
        (Alignment::Bottom, "bottom"),
        (Alignment::Left, "left"),
        (Alignment::Right, "right"),
    ] {
        let button = Button::new("x").with_alignment(alignment);
        let style = button.effective_style();
        assert_eq!(style.get("position"), Some("absolute"));
        assert_eq!(style.get(side), Some("0px"));
        assert_eq!(style.len(), 10);
    }
}

/// 测试贴边样式拼在默认样式之后
#[test]
fn test_button_alignment_render() {
    let mut button = Button::new("x").with_alignment(Alignment::Right);
    let html = button.render();
    assert!(html.contains(&format!("style=\"{}; position: absolute; right: 0px\"", BUTTON_DEFAULT_STYLE)));
}

/// 测试关闭默认样式时忽略贴边
#[test]
fn test_button_alignment_requires_default() {
    let button = Button::new("x").with_alignment(Alignment::Top).with_default_style(false);
    assert!(button.effective_style().is_empty());
}

/// 测试调用方样式覆盖贴边样式
#[test]
fn test_button_alignment_override() {
    let button = Button::new("x")
        .with_alignment(Alignment::Bottom)
        .with_style(StyleMap::from([("position", "fixed")]));
    assert_eq!(button.effective_style().get("position"), Some("fixed"));
}

/// 测试对齐字符串解析
#[test]
fn test_alignment_from_str() {
    assert_eq!(Alignment::from_str("Left"), Ok(Alignment::Left));
    assert_eq!(Alignment::from_str(" bottom "), Ok(Alignment::Bottom));
    assert_eq!(
        Alignment::from_str("middle"),
        Err(AlignmentError::Unknown("middle".to_string()))
    );
}

/// 测试 Column 默认输出
#[test]
fn test_column_render_default() {
    let mut column = Column::new(vec![]);
    assert_eq!(
        column.render(),
        "<div id=\"\" class=\"\" style=\"display: flex; flex-direction: column; justify-content: center; align-items: flex-start; flex-wrap: wrap\" onclick=\"\"></div>"
    );
}

/// 测试 Column 方向与对齐
#[test]
fn test_column_direction_and_alignment() {
    let column = Column::row(vec![])
        .with_horizontal(FlexAlign::SpaceBetween)
        .with_vertical(FlexAlign::Center);
    let style = column.effective_style();
    assert_eq!(style.get("flex-direction"), Some("row"));
    assert_eq!(style.get("justify-content"), Some("space-between"));
    assert_eq!(style.get("align-items"), Some("center"));
}

/// 测试容器按顺序拼接子组件
#[test]
fn test_container_renders_children_in_order() {
    let mut column = Column::new(vec![
        Box::new(Text::new("a")),
        Box::new(Button::new("b")),
    ])
    .with_default_style(false)
    .with_id("col");

    let expected = format!(
        "<div id=\"col\" class=\"\" style=\"\" onclick=\"\">{}{}</div>",
        Text::new("a").render(),
        Button::new("b").render()
    );
    assert_eq!(column.render(), expected);
    assert_eq!(column.children().len(), 2);
}

/// 测试 add_child
#[test]
fn test_column_add_child() {
    let mut column = Column::new(vec![]).with_default_style(false);
    column.add_child(Box::new(Text::new("late")));
    assert!(column.render().contains(">late</span></div>"));
}

/// 测试 Center 输出
#[test]
fn test_center_render() {
    let mut center = Center::new(Box::new(Image::new("/x.png").with_default_style(false)));
    assert_eq!(
        center.render(),
        "<div id=\"\" class=\"\" style=\"display: flex; justify-content: center\" onclick=\"\"><img id=\"\" src=\"/x.png\" alt=\"\" style=\"\" class=\"\" onclick=\"\"></div>"
    );
    assert_eq!(center.children().len(), 1);
}

/// 测试 Center 样式覆盖
#[test]
fn test_center_style_override() {
    let center = Center::new(Box::new(Text::new("x")))
        .with_style(StyleMap::from([("justify-content", "flex-end")]));
    assert_eq!(center.effective_style().get("justify-content"), Some("flex-end"));
}

/// 测试 Page 默认样式
#[test]
fn test_page_default_style() {
    let page = Page::new(vec![]);
    let style = page.effective_style();
    assert_eq!(style.len(), 9);
    assert_eq!(style.get("min-height"), Some("100vh"));
    assert_eq!(style.get("scroll-snap-type"), Some("y mandatory"));
    assert_eq!(style.keys().next(), Some("scroll-snap-align"));
}

/// 测试 Page 关闭默认样式
#[test]
fn test_page_without_default_css() {
    let mut page = Page::new(vec![Box::new(Text::new("x"))])
        .with_default_css(false)
        .with_classes(&["section", "dark"])
        .on_click("next()");
    let html = page.render();
    assert!(html.starts_with("<div id=\"\" class=\"section dark\" style=\"\" onclick=\"event.preventDefault(); next()\"><span"));
    assert!(html.ends_with("</span></div>"));
}

/// 测试嵌套容器深度优先渲染
#[test]
fn test_nested_render() {
    let mut page = Page::new(vec![Box::new(
        Column::new(vec![Box::new(Center::new(Box::new(Text::new("deep"))))]).with_id("inner"),
    )])
    .with_id("outer");

    let html = page.render();
    let outer = html.find("id=\"outer\"").unwrap();
    let inner = html.find("id=\"inner\"").unwrap();
    let deep = html.find(">deep<").unwrap();
    assert!(outer < inner && inner < deep);
    assert!(html.ends_with("</span></div></div></div>"));
}

/// 测试基础节点只拼接子组件
#[test]
fn test_node_render_concatenates() {
    let mut node = Node::new(vec![Box::new(Text::new("a")), Box::new(Text::new("b"))]);
    let expected = format!("{}{}", Text::new("a").render(), Text::new("b").render());
    assert_eq!(node.render(), expected);
    assert_eq!(node.len(), 2);

    let mut empty = Node::from_optional(None);
    assert!(empty.is_empty());
    assert_eq!(empty.render(), "");
}

/// 测试组件树渲染与脚本收集
#[test]
fn test_component_tree_collect_scripts() {
    let page = Page::new(vec![
        Box::new(
            Button::new("save")
                .with_script("// button")
                .with_request(RequestSpec::new("save", "/save")),
        ),
        Box::new(Column::new(vec![Box::new(Image::new("/a.png").with_script("// image"))])),
    ])
    .with_script("// page");

    let mut tree = ComponentTree::with_root(Box::new(page));
    let html = tree.render();
    assert!(html.starts_with("<div"));

    let scripts = tree.collect_scripts();
    assert_eq!(scripts.len(), 4);
    assert_eq!(scripts[0], "// page");
    assert_eq!(scripts[1], "// button");
    assert!(scripts[2].contains("function save(event)"));
    assert_eq!(scripts[3], "// image");
}

/// 测试空组件树
#[test]
fn test_empty_component_tree() {
    let mut tree = ComponentTree::new();
    assert!(tree.root().is_none());
    assert_eq!(tree.render(), "");
    assert!(tree.collect_scripts().is_empty());

    tree.set_root(Box::new(Text::new("x").with_script("// root")));
    assert_eq!(tree.root().map(|r| r.type_name()), Some("Text"));
    assert_eq!(tree.collect_scripts(), vec!["// root".to_string()]);
}

/// 测试类型名
#[test]
fn test_type_names() {
    assert_eq!(Text::new("x").type_name(), "Text");
    assert_eq!(Image::new("x").type_name(), "Image");
    assert_eq!(Button::new("x").type_name(), "Button");
    assert_eq!(Column::new(vec![]).type_name(), "Column");
    assert_eq!(Center::new(Box::new(Text::new("x"))).type_name(), "Center");
    assert_eq!(Page::new(vec![]).type_name(), "Page");
    assert_eq!(Node::default().type_name(), "Node");
}
