//! UI 模块（演示宿主）
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有已挂载的控件与宿主侧绑定字段
//! - View (view/): 纯函数，渲染容器里的元素与宿主状态
//! - Intent (actions.rs): 按键转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::{App, AppMode};
pub use view::render;
