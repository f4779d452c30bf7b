//! 滑块控件（协调视图）
//!
//! 桥接宿主生命周期与用户交互：用户输入写入存储并通知宿主，
//! 宿主刷新则按协调策略决定外部值能否覆盖本地缓存。
//! 策略核心：本地编辑一直有效，直到缓存被显式重置。

use tracing::{debug, trace, warn};

use crate::host::{Container, Context, Control, Element, ElementId, NotifySender, OutputReady};
use crate::models::{
    BOUND_DEFAULT, Binding, BoundStore, Bounds, SessionState, SliderOutputs, parse_value,
};

/// 绑定单个数值字段的滑块控件
pub struct SliderControl {
    store: BoundStore,
    notify: Option<NotifySender>,
    range_id: Option<ElementId>,
    label_id: Option<ElementId>,
}

impl SliderControl {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            store: BoundStore::new(bounds),
            notify: None,
            range_id: None,
            label_id: None,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.store.bounds()
    }

    /// 当前绑定状态（演示宿主的状态面板用）
    pub fn binding(&self) -> Binding {
        self.store.binding()
    }

    fn label_text(value: i64) -> String {
        format!("Value : {value}")
    }

    // ============ 用户输入路径 ============

    /// 把滑块拖到某个位置
    ///
    /// 原生控件自行约束范围：拖出边界时停在边界值。
    pub fn drag_to(&mut self, requested: i64, container: &mut Container) {
        let value = self.store.bounds().clamp(requested);
        self.handle_input(&value.to_string(), container);
    }

    /// 输入事件监听器本体
    ///
    /// 原生控件保证送来的是范围内的数字字符串，但契约仍要求校验；
    /// 校验失败只记日志并保持原值，绝不向宿主抛错。
    pub fn handle_input(&mut self, raw: &str, container: &mut Container) {
        let value = match parse_value(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(raw, error = %e, "输入无法解析，忽略");
                return;
            }
        };
        if let Err(e) = self.store.set(Binding::UserEdited(value)) {
            warn!(value, error = %e, "输入越界，保持原值");
            return;
        }
        trace!(value, "用户输入已写入存储");
        self.sync_view(container);

        if let Some(notify) = &self.notify
            && notify.send(OutputReady).is_err()
        {
            warn!("宿主已不再监听输出通知");
        }
    }

    // ============ 渲染同步 ============

    /// 幂等地把控件与标签刷成存储当前值，重复调用无害
    fn sync_view(&self, container: &mut Container) {
        let value = self.store.value();
        if let Some(id) = self.range_id
            && let Some(Element::Range { value: shown, .. }) = container.get_mut(id)
        {
            *shown = value;
        }
        if let Some(id) = self.label_id
            && let Some(Element::Label { text }) = container.get_mut(id)
        {
            *text = Self::label_text(value);
        }
    }
}

impl Control for SliderControl {
    type Outputs = SliderOutputs;

    fn init(
        &mut self,
        ctx: &Context,
        notify: NotifySender,
        session: Option<&SessionState>,
        container: &mut Container,
    ) {
        self.notify = Some(notify);
        if let Some(session) = session {
            debug!(runs = session.runs, "收到会话记录（核心逻辑不使用）");
        }

        // 初始外部值只写入显示，不进入存储；格式不良回落到默认值，
        // 越界时由自约束控件停在边界
        let bounds = self.store.bounds();
        let shown = bounds.clamp(
            ctx.bound_param()
                .and_then(|raw| parse_value(raw).ok())
                .unwrap_or(BOUND_DEFAULT),
        );

        // 文档顺序：先控件，后标签
        self.range_id = Some(container.append(Element::Range {
            min: bounds.min,
            max: bounds.max,
            value: shown,
        }));
        self.label_id = Some(container.append(Element::Label {
            text: Self::label_text(shown),
        }));
        debug!(shown, "控件已挂载");
    }

    /// 协调策略：决定外部值与本地缓存谁说了算
    fn update_view(&mut self, ctx: &Context, container: &mut Container) {
        match ctx.bound_param().and_then(|raw| parse_value(raw).ok()) {
            Some(external) => {
                if !self.store.binding().is_unset() {
                    // 本地值优先：这次刷新视为过期，不触碰存储与已挂载元素
                    debug!(external, "存在本地值，忽略过期刷新");
                    return;
                }
                // 既有宿主约定：绑定值在未编辑状态下同样不被采纳，只重申初始态。
                // 外部重绑定因此永远无法进入控件；该行为被刻意保留，调用方需知晓。
                debug!(external, "外部值未被采纳，重申初始态");
                self.store.reset();
            }
            None => {
                // 绑定缺失（或格式不良）永远不等于某个具体缓存值，回落到默认值
                trace!("绑定缺失，采纳默认值");
                if let Err(e) = self.store.set(Binding::HostAdopted(BOUND_DEFAULT)) {
                    warn!(error = %e, "默认值越界，保持原值");
                }
            }
        }
        self.sync_view(container);
    }

    fn get_outputs(&self) -> SliderOutputs {
        SliderOutputs {
            value: self.store.value(),
        }
    }

    fn destroy(&mut self, container: &mut Container) {
        if let Some(id) = self.range_id.take() {
            container.remove(id);
        }
        if let Some(id) = self.label_id.take() {
            container.remove(id);
        }
        self.notify = None;
        debug!("控件已卸载");
    }
}
