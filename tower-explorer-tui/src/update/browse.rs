//! 卡片浏览更新逻辑

use tower_explorer_core::{ExplorerResult, ViewKind, ViewState};

use crate::i18n::{fill, t};
use crate::message::BrowseMessage;
use crate::model::{App, Cursor};

/// 处理浏览消息
pub fn update(app: &mut App, msg: BrowseMessage) {
    let len = app.item_count();
    let columns = app.page().columns();
    app.cursor.clamp(len);

    match msg {
        BrowseMessage::MoveLeft => app.cursor.move_left(),
        BrowseMessage::MoveRight => app.cursor.move_right(len),
        BrowseMessage::MoveUp => app.cursor.move_up(columns),
        BrowseMessage::MoveDown => app.cursor.move_down(len, columns),
        BrowseMessage::SelectFirst => app.cursor.first(),
        BrowseMessage::SelectLast => app.cursor.last(len),
        BrowseMessage::Confirm => open_selected(app),
    }
}

/// 打开光标下的卡片
fn open_selected(app: &mut App) {
    let index = app.cursor.selected;

    let result: ExplorerResult<()> = match app.navigator.kind() {
        ViewKind::TowerList => {
            let Some(tower) = app.navigator.towers().get(index) else {
                return;
            };
            app.navigator.select_tower(tower.id)
        }
        ViewKind::FloorList => {
            let Some(number) = app.navigator.floors().get(index).map(|floor| floor.number) else {
                return;
            };
            app.navigator.select_floor(number)
        }
        ViewKind::ApartmentGrid => {
            let Some(id) = app
                .navigator
                .selected_floor()
                .and_then(|floor| floor.apartments.get(index))
                .map(|apartment| apartment.id.clone())
            else {
                return;
            };
            app.navigator.select_apartment(&id)
        }
        ViewKind::ApartmentDetail => {
            // 详情页的 Enter 即“预约看房”按钮
            if let Some(apartment) = app.navigator.selected_apartment() {
                app.modal.show_schedule_viewing(apartment);
            }
            return;
        }
    };

    match result {
        Ok(()) => {
            app.cursor = Cursor::default();
            app.clear_status();
        }
        Err(e) => {
            log::warn!("Navigation rejected: {e}");
            app.set_status(fill(t().status.navigation_failed, e));
        }
    }
}

/// 返回上一级，光标落在刚离开的卡片上
pub fn back(app: &mut App) {
    let return_to = match app.navigator.state() {
        ViewState::TowerList => return,
        ViewState::FloorList { selection } => app
            .navigator
            .towers()
            .iter()
            .position(|tower| tower.id == selection.tower.id)
            .unwrap_or_default(),
        ViewState::ApartmentGrid { floor, .. } => *floor,
        ViewState::ApartmentDetail { apartment, .. } => *apartment,
    };

    if app.navigator.back() {
        app.cursor = Cursor::at(return_to);
        app.clear_status();
    }
}

#[cfg(test)]
mod tests {
    use tower_explorer_core::ViewKind;

    use super::*;
    use crate::model::test_support::test_app;
    use crate::model::{Modal, Page};

    fn press(app: &mut App, msg: BrowseMessage) {
        update(app, msg);
    }

    #[test]
    fn confirm_on_tower_opens_its_floors() {
        let mut app = test_app();
        press(&mut app, BrowseMessage::MoveRight);
        press(&mut app, BrowseMessage::Confirm);

        assert_eq!(app.page(), Page::Floors);
        assert_eq!(app.navigator.selected_tower().map(|t| t.id), Some("tower-b"));
        assert_eq!(app.item_count(), 12);
        assert_eq!(app.cursor.selected, 0);
    }

    #[test]
    fn drill_down_to_detail_and_back() {
        let mut app = test_app();
        // Tower A → 5 层（第一行第 5 个）
        press(&mut app, BrowseMessage::Confirm);
        for _ in 0..4 {
            press(&mut app, BrowseMessage::MoveRight);
        }
        press(&mut app, BrowseMessage::Confirm);
        assert_eq!(app.page(), Page::Apartments);
        assert_eq!(app.navigator.selected_floor().map(|f| f.number), Some(5));
        assert_eq!(app.item_count(), 4);

        let first = app.navigator.selected_floor().unwrap().apartments[0].clone();
        press(&mut app, BrowseMessage::Confirm);
        assert_eq!(app.page(), Page::ApartmentDetail);
        assert_eq!(app.navigator.selected_apartment(), Some(&first));

        back(&mut app);
        assert_eq!(app.page(), Page::Apartments);
        assert_eq!(app.navigator.selected_floor().map(|f| f.number), Some(5));
        assert_eq!(app.cursor.selected, 0);

        back(&mut app);
        assert_eq!(app.page(), Page::Floors);
        assert_eq!(app.cursor.selected, 4);

        back(&mut app);
        assert_eq!(app.page(), Page::Towers);
        assert_eq!(app.cursor.selected, 0);

        back(&mut app);
        assert_eq!(app.navigator.kind(), ViewKind::TowerList);
    }

    #[test]
    fn back_restores_cursor_on_previous_tower() {
        let mut app = test_app();
        press(&mut app, BrowseMessage::SelectLast);
        press(&mut app, BrowseMessage::Confirm);
        assert_eq!(app.navigator.selected_tower().map(|t| t.id), Some("tower-c"));

        back(&mut app);
        assert_eq!(app.cursor.selected, 2);
    }

    #[test]
    fn grid_moves_use_page_columns() {
        let mut app = test_app();
        app.navigator.select_tower("tower-c").unwrap();

        press(&mut app, BrowseMessage::MoveDown);
        assert_eq!(app.cursor.selected, 5);
        press(&mut app, BrowseMessage::SelectLast);
        assert_eq!(app.cursor.selected, 17);
        press(&mut app, BrowseMessage::MoveUp);
        assert_eq!(app.cursor.selected, 12);
    }

    #[test]
    fn confirm_on_detail_opens_schedule_dialog() {
        let mut app = test_app();
        app.navigator.select_tower("tower-a").unwrap();
        app.navigator.select_floor(2).unwrap();
        let id = app.navigator.selected_floor().unwrap().apartments[1].id.clone();
        app.navigator.select_apartment(&id).unwrap();

        press(&mut app, BrowseMessage::Confirm);
        match &app.modal.active {
            Some(Modal::ScheduleViewing { apartment_id, focus, .. }) => {
                assert_eq!(apartment_id, &id);
                assert_eq!(*focus, 1);
            }
            other => panic!("unexpected modal: {other:?}"),
        }
        assert_eq!(app.page(), Page::ApartmentDetail);
    }
}
