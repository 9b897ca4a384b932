//! 页面组件
//!
//! 每个带动效的元素都挂 `data-folio` 标记，标识取自 `folio_runtime::sections`
//! 里的常量；内联样式直接取 [`PageView::style`](folio_runtime::PageView::style)。

mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod navigation;
mod preloader;
mod projects;
mod toast;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::Icon;
pub use navigation::Navigation;
pub use preloader::Preloader;
pub use projects::Projects;
pub use toast::ToastLayer;

use folio_runtime::ElementId;

/// 第 `index` 个子元素的标识
fn child_id(parent: &str, index: usize) -> String {
    ElementId::new(parent).child(index).as_str().to_string()
}
