//! UI 组件系统

mod component;
mod text;
mod image;
mod button;
mod column;
mod center;
mod page;
mod layout;
mod alignment;
pub mod config;
pub mod interaction;

pub use component::{Renderable, Node, ComponentTree};
pub use text::Text;
pub use image::Image;
pub use button::Button;
pub use column::Column;
pub use center::Center;
pub use page::Page;
pub use layout::{FlexDirection, FlexAlign};
pub use alignment::{Alignment, AlignmentError};
pub use config::{TextConfig, ImageConfig, ButtonConfig, ColumnConfig, CenterConfig, PageConfig};
pub use interaction::{ClickBinding, Clickable};
