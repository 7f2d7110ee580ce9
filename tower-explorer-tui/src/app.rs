//! 应用主循环
//!
//! 每一轮：渲染 → 轮询输入（最多等待 100 ms）→ [`dispatch`]。
//! [`dispatch`] 不依赖终端，测试里可以直接用按键驱动整个应用。

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环，直到 `should_quit`
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| view::render(app, frame))?;

        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            dispatch(app, &event);
        }
    }

    log::info!("Main loop finished");
    Ok(())
}

/// 把一个输入事件交给 Event → Update 管线
pub fn dispatch(app: &mut App, event: &Event) {
    let msg = event::handle_event(event, app);
    update::update(app, msg);
}
