//! App 状态定义 (Model)
//!
//! 演示宿主的全部状态：已挂载的控件、容器、宿主侧数据模型里的绑定字段

use crate::control::SliderControl;
use crate::host::{Container, Context, Control, Element, NotifyReceiver, notify_channel};
use crate::models::{SessionState, SliderConfig, SliderOutputs};

/// 应用状态
pub struct App {
    pub control: SliderControl,
    pub container: Container,
    /// 宿主侧数据模型里的绑定字段
    pub bound_field: Option<i64>,
    /// 最近一次拉取的输出
    pub outputs: SliderOutputs,
    pub notify_rx: NotifyReceiver,
    pub config: SliderConfig,
    pub mode: AppMode,
    pub input_buffer: String,
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    /// 正在输入新的绑定值
    BindingInput,
}

impl App {
    /// 创建应用并挂载控件
    pub fn new(config: SliderConfig, session: &SessionState) -> Self {
        let mut control = SliderControl::new(config.bounds());
        let mut container = Container::new();
        let (tx, rx) = notify_channel();

        let bound_field = config.initial;
        control.init(
            &Self::context_of(bound_field),
            tx,
            Some(session),
            &mut container,
        );

        Self {
            control,
            container,
            bound_field,
            outputs: SliderOutputs::default(),
            notify_rx: rx,
            config,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            message: None,
        }
    }

    /// 按宿主字段构造刷新上下文
    pub fn context_of(field: Option<i64>) -> Context {
        match field {
            Some(value) => Context::bound(value),
            None => Context::unbound(),
        }
    }

    /// 控件当前显示的值（读容器里的范围元素）
    pub fn shown_value(&self) -> i64 {
        self.container
            .children()
            .find_map(|element| match element {
                Element::Range { value, .. } => Some(*value),
                _ => None,
            })
            .unwrap_or_default()
    }
}
