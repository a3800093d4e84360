//! # Host 层（Dioxus Web 前端）
//!
//! 作品页宿主：渲染静态分区，采集 DOM 事件并驱动 fx-runtime。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 分区排版与静态内容
//! - 事件采集（指针、定时器、滚动、元素挂载）
//! - 将 Runtime 的 EffectCommand 转换为样式/class 更新
//!
//! Host 层不包含效果判定逻辑，只负责执行 Runtime 发出的指令。

mod effects;
mod sections;

use dioxus::prelude::*;

use effects::{EffectsHost, FollowerIndicator};
use sections::{About, Contact, Footer, Hero, Navigation, Projects, Skills, Work};

const MAIN_CSS: &str = include_str!("../assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Portfolio" }
        style { {MAIN_CSS} }
        EffectsHost {
            FollowerIndicator {}
            Navigation {}
            Hero {}
            About {}
            Work {}
            Projects {}
            Skills {}
            Contact {}
            Footer {}
        }
    }
}
