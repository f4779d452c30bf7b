//! 宿主边界
//!
//! 控件与宿主之间只有一份生命周期契约，没有线协议：
//! 宿主按需调用 init / update_view / get_outputs / destroy，
//! 控件通过零参数的「输出就绪」消息反向通知宿主再来拉取。

use std::sync::mpsc;

use uuid::Uuid;

use crate::models::SessionState;

/// 刷新上下文：携带唯一一个绑定参数的原始值
#[derive(Debug, Clone, Default)]
pub struct Context {
    bound: Option<String>,
}

impl Context {
    /// 绑定了具体数值
    pub fn bound(value: i64) -> Self {
        Self {
            bound: Some(value.to_string()),
        }
    }

    /// 字段尚未绑定
    pub fn unbound() -> Self {
        Self { bound: None }
    }

    /// 原始字符串形式（宿主侧不保证格式良好）
    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            bound: Some(raw.into()),
        }
    }

    pub fn bound_param(&self) -> Option<&str> {
        self.bound.as_deref()
    }
}

/// 「输出就绪」信号，不带载荷——宿主收到后自行调用 `get_outputs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputReady;

/// 通知通道发送端（控件持有）
pub type NotifySender = mpsc::Sender<OutputReady>;

/// 通知通道接收端（宿主轮询）
pub type NotifyReceiver = mpsc::Receiver<OutputReady>;

/// 建立一条通知通道
pub fn notify_channel() -> (NotifySender, NotifyReceiver) {
    mpsc::channel()
}

/// 已挂载元素的唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// 渲染面上的元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// 原生范围控件，自身约束取值范围
    Range { min: i64, max: i64, value: i64 },
    /// 文本标签
    Label { text: String },
}

/// 宿主提供的容器，按文档顺序保留子元素
#[derive(Debug, Default)]
pub struct Container {
    children: Vec<(ElementId, Element)>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加元素，返回其标识
    pub fn append(&mut self, element: Element) -> ElementId {
        let id = ElementId::new();
        self.children.push((id, element));
        id
    }

    /// 摘除元素
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.children.iter().position(|(eid, _)| *eid == id)?;
        Some(self.children.remove(pos).1)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.children
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, element)| element)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, element)| element)
    }

    /// 按文档顺序遍历子元素
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().map(|(_, element)| element)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// 控件生命周期契约
///
/// 状态机：未初始化 --init--> 已挂载 --update_view/用户输入--> 已挂载
/// --destroy--> 已卸载。宿主保证所有调用在单线程上严格串行，
/// 且每次 init 恰好对应一次 destroy。
pub trait Control {
    type Outputs;

    /// 一次性挂载：创建元素并放入容器
    fn init(
        &mut self,
        ctx: &Context,
        notify: NotifySender,
        session: Option<&SessionState>,
        container: &mut Container,
    );

    /// 宿主驱动的刷新，可调用任意次
    fn update_view(&mut self, ctx: &Context, container: &mut Container);

    /// 无副作用地拉取输出
    fn get_outputs(&self) -> Self::Outputs;

    /// 一次性卸载：从容器摘除自己的元素
    fn destroy(&mut self, container: &mut Container);
}
