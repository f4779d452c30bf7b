//! 业务逻辑处理 (Update/Dispatch)
//!
//! 演示宿主的核心分发逻辑：把 Action 翻译成对控件生命周期的调用，
//! 并在每次分发后排空通知通道、走完 拉取输出 → 写回字段 → 回推刷新 的闭环

use super::actions::Action;
use super::state::{App, AppMode};
use crate::host::Control;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::SliderDecrease => self.nudge(-self.config.step),
            Action::SliderIncrease => self.nudge(self.config.step),

            Action::StartBindInput => self.start_bind_input(),
            Action::Unbind => self.unbind(),
            Action::Refresh => self.refresh(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.submit_bind_input(),

            Action::Input(c) => {
                let leading_minus = c == '-' && self.input_buffer.is_empty();
                if self.mode == AppMode::BindingInput && (c.is_ascii_digit() || leading_minus) {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if self.mode == AppMode::BindingInput {
                    self.input_buffer.pop();
                }
            }
        }
        self.pump_notifications();
        false
    }

    // ============ 滑块交互 ============

    /// 模拟一次拖动：从当前显示位置步进，极端步进量饱和而不溢出
    fn nudge(&mut self, delta: i64) {
        let target = self.shown_value().saturating_add(delta);
        self.control.drag_to(target, &mut self.container);
    }

    // ============ 宿主侧操作 ============

    /// 开始输入新的绑定值
    fn start_bind_input(&mut self) {
        self.mode = AppMode::BindingInput;
        self.input_buffer.clear();
        self.message = Some("输入新的绑定值，Enter 提交".to_string());
    }

    /// 提交绑定值并触发刷新
    fn submit_bind_input(&mut self) {
        if self.mode != AppMode::BindingInput {
            return;
        }
        match self.input_buffer.parse::<i64>() {
            Ok(value) => {
                self.bound_field = Some(value);
                self.refresh();
                self.message = Some(format!("宿主已重绑定为 {value} 并推送刷新"));
            }
            Err(_) => {
                self.message = Some("绑定值无效，已取消".to_string());
            }
        }
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
    }

    /// 清除宿主侧绑定并刷新
    fn unbind(&mut self) {
        self.bound_field = None;
        self.refresh();
        self.message = Some("宿主已清除绑定".to_string());
    }

    /// 宿主推送一次刷新
    fn refresh(&mut self) {
        let ctx = Self::context_of(self.bound_field);
        self.control.update_view(&ctx, &mut self.container);
    }

    // ============ 输出回路 ============

    /// 排空通知通道：每个通知拉取一次输出，写回宿主字段并回推刷新
    ///
    /// 回推的刷新携带刚提交的值，守卫规则会保住本地编辑——
    /// 这正是宿主与控件之间完整的一圈交互。
    pub fn pump_notifications(&mut self) {
        while self.notify_rx.try_recv().is_ok() {
            self.outputs = self.control.get_outputs();
            self.bound_field = Some(self.outputs.value);
            self.refresh();
            self.message = Some(format!("输出 {} 已提交给宿主", self.outputs.value));
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = None;
    }

    /// 卸载控件（退出前调用一次）
    pub fn teardown(&mut self) {
        self.control.destroy(&mut self.container);
    }
}
