use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 未绑定时的默认值
pub const BOUND_DEFAULT: i64 = 0;

/// 取值范围（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// 把值夹进区间；区间颠倒时一律停在 min
    pub fn clamp(&self, value: i64) -> i64 {
        if self.min > self.max {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: 0, max: 200 }
    }
}

/// 绑定值的显式三态
///
/// 来源信息直接编码在状态里：`UserEdited(0)` 与 `Unset` 是两回事，
/// 不再用 "0" 字符串哨兵去猜测值是不是用户改出来的。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// 本会话尚未发生过本地编辑
    Unset,
    /// 用户拖动控件产生的值（编辑为 0 也算编辑过）
    UserEdited(i64),
    /// 宿主侧绑定缺失时采纳的默认值
    HostAdopted(i64),
}

impl Binding {
    /// 当前标量值，`Unset` 映射为默认值
    pub fn value(&self) -> i64 {
        match self {
            Binding::Unset => BOUND_DEFAULT,
            Binding::UserEdited(v) | Binding::HostAdopted(v) => *v,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Binding::Unset)
    }
}

/// 值写入错误（仅在控件内部流转，从不跨宿主边界抛出）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("无法解析为整数: {raw:?}")]
    Malformed { raw: String },

    #[error("{value} 超出取值范围 [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// 把原始字符串按整数规则解析（控件输入路径统一走这里）
pub fn parse_value(raw: &str) -> Result<i64, ValueError> {
    raw.trim().parse::<i64>().map_err(|_| ValueError::Malformed {
        raw: raw.to_string(),
    })
}

/// 绑定值存储
///
/// 控件当前认定为正确的唯一值，独立于任何渲染。
/// 写入只做范围校验，不做隐式截断——要不要截断由调用方决定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundStore {
    binding: Binding,
    bounds: Bounds,
}

impl BoundStore {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            binding: Binding::Unset,
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    /// 当前标量值，无副作用
    pub fn value(&self) -> i64 {
        self.binding.value()
    }

    /// 写入新状态；越界时返回 `OutOfRange` 并保持原状态不变
    pub fn set(&mut self, binding: Binding) -> Result<(), ValueError> {
        let value = binding.value();
        if !self.bounds.contains(value) {
            return Err(ValueError::OutOfRange {
                value,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        self.binding = binding;
        Ok(())
    }

    /// 回到初始未编辑状态
    pub fn reset(&mut self) {
        self.binding = Binding::Unset;
    }
}

/// 输出记录（宿主收到通知后通过 `get_outputs` 拉取）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SliderOutputs {
    pub value: i64,
}

/// TOML 配置结构（仅演示宿主使用，库本身的默认范围固定为 [0, 200]）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: i64,
    pub max: i64,
    /// 方向键每次步进量
    pub step: i64,
    /// 宿主侧绑定字段的初始值（缺省表示未绑定）
    pub initial: Option<i64>,
}

impl SliderConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.min,
            max: self.max,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        let bounds = Bounds::default();
        Self {
            min: bounds.min,
            max: bounds.max,
            step: 1,
            initial: None,
        }
    }
}

/// 会话记录
///
/// 宿主在 `init` 时传入的那份字典；核心逻辑不读它，
/// 演示宿主只用来记录挂载时间和启动次数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub last_mounted: DateTime<Local>,
    pub runs: u32,
}

impl SessionState {
    /// 记一次新的挂载
    pub fn touch(&mut self) {
        self.last_mounted = Local::now();
        self.runs += 1;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            last_mounted: Local::now(),
            runs: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_value_mapping() {
        assert_eq!(Binding::Unset.value(), 0);
        assert_eq!(Binding::UserEdited(75).value(), 75);
        assert_eq!(Binding::HostAdopted(0).value(), 0);
        assert!(Binding::Unset.is_unset());
        assert!(!Binding::UserEdited(0).is_unset());
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds { min: 0, max: 200 };
        assert_eq!(bounds.clamp(999), 200);
        assert_eq!(bounds.clamp(-5), 0);
        assert_eq!(bounds.clamp(75), 75);

        // 颠倒的区间不会触发断言，统一停在 min
        let inverted = Bounds { min: 100, max: 0 };
        assert_eq!(inverted.clamp(50), 100);
    }

    #[test]
    fn test_store_rejects_out_of_range() {
        let mut store = BoundStore::new(Bounds::default());
        let err = store.set(Binding::UserEdited(201)).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                value: 201,
                min: 0,
                max: 200
            }
        );
        // 失败的写入不触碰原状态
        assert_eq!(store.binding(), Binding::Unset);
        assert_eq!(store.value(), 0);
    }

    #[test]
    fn test_store_set_and_reset() {
        let mut store = BoundStore::new(Bounds::default());
        store.set(Binding::UserEdited(123)).unwrap();
        assert_eq!(store.value(), 123);

        store.reset();
        assert!(store.binding().is_unset());
        assert_eq!(store.value(), 0);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("57"), Ok(57));
        assert_eq!(parse_value(" 40 "), Ok(40));
        assert!(matches!(
            parse_value("abc"),
            Err(ValueError::Malformed { .. })
        ));
        assert!(matches!(parse_value(""), Err(ValueError::Malformed { .. })));
    }

    #[test]
    fn test_config_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.bounds(), Bounds { min: 0, max: 200 });
        assert_eq!(config.step, 1);
        assert_eq!(config.initial, None);
    }
}
