//! # Effects 桥接模块
//!
//! 连接 fx-runtime 与 DOM 的桥接层。
//!
//! ## 设计说明
//!
//! 桥接层持有唯一的 [`EffectsEngine`] 实例，并为渲染侧维护一组镜像信号
//! （指示器位置、悬停形态、已入场集合）。DOM 事件统一转换为
//! [`EffectInput`] 送入引擎，引擎返回的 [`EffectCommand`] 只在此处执行。
//!
//! 组件通过 [`Reveal`] 与 [`Interactive`] 包装器接入效果系统：
//! 挂载时注册、卸载时注销，元素 ID 在挂载期间保持稳定。

use std::collections::HashSet;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use fx_runtime::{EffectCommand, EffectInput, EffectsEngine, ElementId, Vec2, Viewport};
use tracing::{debug, warn};

/// 导航进入收紧形态的滚动阈值（像素）
const NAV_SCROLL_THRESHOLD: f64 = 50.0;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// 分配页面内唯一的元素 ID
fn next_element_id() -> ElementId {
    ElementId::new(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
}

// ========== 桥接上下文 ==========

/// 效果桥接上下文
///
/// 由 [`EffectsHost`] 注入，页面任意组件可通过 `use_context` 获取。
/// 所有字段都是 `Signal`，整个结构可廉价复制进事件闭包。
#[derive(Clone, Copy)]
pub struct PageEffects {
    /// 效果引擎（唯一状态源）
    engine: Signal<EffectsEngine>,
    /// 指示器当前位置（渲染侧镜像）
    indicator: Signal<Vec2>,
    /// 指示器悬停形态（渲染侧镜像）
    hovering: Signal<bool>,
    /// 已入场元素集合（渲染侧镜像）
    revealed: Signal<HashSet<ElementId>>,
    /// 已挂载的入场元素节点，滚动时重新上报偏移
    reveal_nodes: Signal<Vec<(ElementId, Rc<MountedData>)>>,
    /// 滚动容器节点
    container: Signal<Option<Rc<MountedData>>>,
    /// 导航是否进入收紧形态
    scrolled: Signal<bool>,
}

impl PageEffects {
    /// 查询元素是否已入场
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.revealed.read().contains(&id)
    }

    /// 查询指示器是否处于悬停形态
    pub fn is_hovering(&self) -> bool {
        *self.hovering.read()
    }

    /// 查询导航是否进入收紧形态
    pub fn is_scrolled(&self) -> bool {
        *self.scrolled.read()
    }

    /// 读取指示器当前位置
    pub fn indicator_position(&self) -> Vec2 {
        *self.indicator.read()
    }

    /// 向引擎送入一条输入并执行返回的指令
    pub fn dispatch(mut self, input: EffectInput) {
        let commands = self.engine.write().dispatch(input);
        self.apply(commands);
    }

    /// 执行引擎发出的指令，更新渲染侧镜像
    fn apply(mut self, commands: Vec<EffectCommand>) {
        for command in commands {
            match command {
                EffectCommand::MoveIndicator { x, y } => {
                    self.indicator.set(Vec2::new(x, y));
                }
                EffectCommand::SetIndicatorHover { hovering } => {
                    self.hovering.set(hovering);
                }
                EffectCommand::Reveal { id } => {
                    self.revealed.write().insert(id);
                }
            }
        }
    }

    /// 注册交互元素（悬停会切换指示器形态）
    fn register_interactive(mut self, id: ElementId) {
        if let Err(err) = self.engine.write().register_interactive(id) {
            warn!("交互元素注册失败: {err}");
        }
    }

    /// 注销交互元素
    fn deregister_interactive(mut self, id: ElementId) {
        let commands = self.engine.write().deregister_interactive(id);
        self.apply(commands);
    }

    /// 注册入场元素：先查询几何，再提交引擎
    async fn register_reveal_node(mut self, id: ElementId, node: Rc<MountedData>) {
        let top = match node.get_client_rect().await {
            Ok(rect) => rect.origin.y,
            Err(err) => {
                warn!("入场元素几何查询失败，跳过注册: {err:?}");
                return;
            }
        };
        self.reveal_nodes.write().push((id, node));
        let result = self.engine.write().register_reveal(id, top);
        match result {
            Ok(commands) => self.apply(commands),
            Err(err) => warn!("入场元素注册失败: {err}"),
        }
    }

    /// 注销入场元素（入场锁存保留在引擎中）
    fn deregister_reveal(mut self, id: ElementId) {
        self.reveal_nodes
            .write()
            .retain(|(node_id, _)| *node_id != id);
        self.engine.write().deregister_reveal(id);
    }

    /// 容器挂载：记录视口并执行初始入场轮询
    async fn mount(mut self, node: Rc<MountedData>) {
        let viewport = match node.get_client_rect().await {
            Ok(rect) => Viewport::new(rect.size.width, rect.size.height),
            Err(err) => {
                warn!("视口几何查询失败，效果系统未挂载: {err:?}");
                return;
            }
        };
        self.container.set(Some(node));
        let commands = self.engine.write().attach(viewport);
        self.apply(commands);
        // 子元素可能先于容器挂载，补一次几何同步
        self.sync_geometry().await;
    }

    /// 容器卸载：引擎静默，指针状态归零
    fn unmount(mut self) {
        self.engine.write().detach();
        self.container.set(None);
    }

    /// 几何同步：逐个上报入场元素偏移，再上报视口触发轮询
    ///
    /// 每次滚动事件执行一轮异步几何查询，元素数量与查询次数成正比。
    async fn sync_geometry(mut self) {
        let Some(container) = self.container.read().clone() else {
            return;
        };
        let nodes: Vec<(ElementId, Rc<MountedData>)> = self.reveal_nodes.read().clone();
        for (id, node) in nodes {
            match node.get_client_rect().await {
                Ok(rect) => self.dispatch(EffectInput::offset(id, rect.origin.y)),
                Err(err) => debug!("元素 {id} 几何查询失败: {err:?}"),
            }
        }
        match container.get_client_rect().await {
            Ok(rect) => {
                self.dispatch(EffectInput::viewport(Viewport::new(
                    rect.size.width,
                    rect.size.height,
                )));
            }
            Err(err) => debug!("视口几何查询失败: {err:?}"),
        }
        if let Ok(offset) = container.get_scroll_offset().await {
            self.scrolled.set(offset.y > NAV_SCROLL_THRESHOLD);
        }
    }
}

// ========== 宿主组件 ==========

/// 效果宿主：注入桥接上下文，持有滚动容器与定时器
#[component]
pub fn EffectsHost(children: Element) -> Element {
    let engine = use_signal(EffectsEngine::with_defaults);
    let indicator = use_signal(Vec2::zero);
    let hovering = use_signal(|| false);
    let revealed = use_signal(HashSet::new);
    let reveal_nodes = use_signal(Vec::new);
    let container = use_signal(|| None);
    let scrolled = use_signal(|| false);
    let fx = use_context_provider(|| PageEffects {
        engine,
        indicator,
        hovering,
        revealed,
        reveal_nodes,
        container,
        scrolled,
    });

    // 定时器：宿主侧每个周期发一次 Tick，平滑推进由引擎完成。
    // 浏览器侧的 interval id 存放在 window 上：启动前清除残留的旧定时器
    // （重新挂载不叠加），卸载时由 use_drop 清除（不跨挂载泄漏）。
    use_future(move || async move {
        let interval_ms = fx.engine.read().config().follower.tick_interval_ms;
        let mut ticker = document::eval(&format!(
            "if (window.__fxTicker !== undefined) {{ clearInterval(window.__fxTicker); }}\n\
             window.__fxTicker = setInterval(() => {{ dioxus.send(0); }}, {interval_ms});"
        ));
        loop {
            if ticker.recv::<i32>().await.is_err() {
                break;
            }
            fx.dispatch(EffectInput::Tick);
        }
    });

    use_drop(move || {
        document::eval(
            "if (window.__fxTicker !== undefined) {\n\
                 clearInterval(window.__fxTicker);\n\
                 window.__fxTicker = undefined;\n\
             }",
        );
        fx.unmount();
    });

    rsx! {
        div {
            class: "app",
            onmounted: move |evt| {
                let node = evt.data();
                spawn(async move { fx.mount(node).await });
            },
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                fx.dispatch(EffectInput::pointer(point.x, point.y));
            },
            onscroll: move |_| {
                spawn(async move { fx.sync_geometry().await });
            },
            {children}
        }
    }
}

/// 入场包装器：渲染 `fade-in` 分区，入场后附加 `visible`
#[component]
pub fn Reveal(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let fx = use_context::<PageEffects>();
    let element_id = use_hook(next_element_id);
    use_drop(move || fx.deregister_reveal(element_id));

    let extra = class.unwrap_or_default();
    rsx! {
        section {
            id,
            class: "fade-in {extra}",
            class: if fx.is_revealed(element_id) { "visible" },
            onmounted: move |evt| {
                let node = evt.data();
                spawn(async move { fx.register_reveal_node(element_id, node).await });
            },
            {children}
        }
    }
}

/// 交互包装器：悬停进出会切换指示器形态
#[component]
pub fn Interactive(children: Element) -> Element {
    let fx = use_context::<PageEffects>();
    let element_id = use_hook(next_element_id);
    use_hook(move || fx.register_interactive(element_id));
    use_drop(move || fx.deregister_interactive(element_id));

    rsx! {
        span {
            class: "interactive",
            onmouseenter: move |_| fx.dispatch(EffectInput::hover_started(element_id)),
            onmouseleave: move |_| fx.dispatch(EffectInput::hover_ended(element_id)),
            {children}
        }
    }
}

/// 指针跟随指示器
#[component]
pub fn FollowerIndicator() -> Element {
    let fx = use_context::<PageEffects>();
    let position = fx.indicator_position();
    let x = position.x;
    let y = position.y;

    rsx! {
        div {
            class: "cursor-follower",
            class: if fx.is_hovering() { "hovering" },
            style: "transform: translate({x}px, {y}px);",
        }
    }
}
