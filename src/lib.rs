//! fader：绑定单个数值字段的滑块控件
//!
//! 库部分实现控件与宿主之间的生命周期契约
//! （挂载、刷新、拉取输出、卸载），核心是刷新时的值协调策略：
//! 外部值何时可以覆盖本地缓存，何时本地编辑说了算。
//! 二进制部分是一个 ratatui 演示宿主，完整走一遍
//! 输入 → 通知 → 拉取输出 → 回推刷新 的闭环。

pub mod control;
pub mod host;
pub mod logger;
pub mod models;
pub mod storage;
pub mod ui;

// Re-export for convenience
pub use control::SliderControl;
pub use host::{Container, Context, Control};
pub use models::{SliderConfig, SliderOutputs};
