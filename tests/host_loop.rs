//! 演示宿主闭环的集成测试
//!
//! 从按键一路走到控件生命周期调用，验证
//! 输入 → 通知 → 拉取输出 → 回推刷新 的完整一圈。

use crossterm::event::KeyCode;
use fader::host::Control;
use fader::models::{Binding, SessionState, SliderConfig};
use fader::ui::{App, handle_key_event};

fn new_app(initial: Option<i64>) -> App {
    let config = SliderConfig {
        initial,
        ..SliderConfig::default()
    };
    App::new(config, &SessionState::default())
}

#[test]
fn edit_then_rebind_keeps_local_value() {
    let mut app = new_app(Some(40));
    // 挂载时控件显示初始外部值
    assert_eq!(app.shown_value(), 40);

    // 向右拖三步：输出逐次提交回宿主字段
    for _ in 0..3 {
        handle_key_event(&mut app, KeyCode::Right).unwrap();
    }
    assert_eq!(app.shown_value(), 43);
    assert_eq!(app.outputs.value, 43);
    assert_eq!(app.bound_field, Some(43));

    // 宿主重绑定为 57 并推送刷新：本地编辑胜出
    for key in [
        KeyCode::Char('b'),
        KeyCode::Char('5'),
        KeyCode::Char('7'),
        KeyCode::Enter,
    ] {
        handle_key_event(&mut app, key).unwrap();
    }
    assert_eq!(app.bound_field, Some(57));
    assert_eq!(app.shown_value(), 43);
    assert_eq!(app.control.get_outputs().value, 43);
}

#[test]
fn fresh_widget_never_adopts_bound_value() {
    let mut app = new_app(Some(40));

    // 推送一次携带绑定值的刷新：显示被刷回存储值 0，外部值并未被采纳
    handle_key_event(&mut app, KeyCode::Char('r')).unwrap();
    assert_eq!(app.shown_value(), 0);
    assert_eq!(app.control.binding(), Binding::Unset);
    assert_eq!(app.control.get_outputs().value, 0);
}

#[test]
fn unbind_then_quit() {
    let mut app = new_app(None);
    handle_key_event(&mut app, KeyCode::Right).unwrap();

    // 清除绑定：缺失分支采纳默认值，冲掉本地编辑
    handle_key_event(&mut app, KeyCode::Char('u')).unwrap();
    assert_eq!(app.bound_field, None);
    assert_eq!(app.control.binding(), Binding::HostAdopted(0));
    assert_eq!(app.shown_value(), 0);

    let quit = handle_key_event(&mut app, KeyCode::Char('q')).unwrap();
    assert!(quit);

    app.teardown();
    assert!(app.container.is_empty());
}
