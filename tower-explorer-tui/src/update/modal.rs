//! 弹窗更新逻辑

use crate::i18n::{fill, t};
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::Help) => handle_simple_modal(app, msg),
        Some(Modal::ScheduleViewing { .. }) => handle_schedule_viewing(app, msg),
        None => {}
    }
}

/// 处理只读弹窗（帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::ToggleFocus => {}
    }
}

/// 处理预约看房弹窗
fn handle_schedule_viewing(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ScheduleViewing {
        ref apartment_id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let apartment_id = apartment_id.clone();
                log::info!("Viewing requested for {apartment_id}");
                app.modal.close();
                app.set_status(fill(t().status.viewing_requested, apartment_id));
            } else {
                app.modal.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::test_app;

    fn app_with_schedule_dialog() -> App {
        let mut app = test_app();
        app.navigator.select_tower("tower-b").unwrap();
        app.navigator.select_floor(3).unwrap();
        app.navigator.select_apartment("apt-3-4").unwrap();
        let apartment = app.navigator.selected_apartment().unwrap().clone();
        app.modal.show_schedule_viewing(&apartment);
        app
    }

    #[test]
    fn confirm_records_request_in_status_bar() {
        let mut app = app_with_schedule_dialog();
        update(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert!(app.status_message.as_deref().unwrap().contains("apt-3-4"));
    }

    #[test]
    fn cancel_button_closes_without_request() {
        let mut app = app_with_schedule_dialog();
        update(&mut app, ModalMessage::ToggleFocus);
        update(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn toggle_focus_alternates() {
        let mut app = app_with_schedule_dialog();
        update(&mut app, ModalMessage::ToggleFocus);
        update(&mut app, ModalMessage::ToggleFocus);
        assert!(matches!(
            app.modal.active,
            Some(Modal::ScheduleViewing { focus: 1, .. })
        ));
    }

    #[test]
    fn help_closes_on_enter() {
        let mut app = test_app();
        app.modal.show_help();
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
    }
}
