use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::model::{
    DEFAULT_CLASS_PREFIX, DEFAULT_DRAG_HANDLE_THICKNESS, DEFAULT_DRAG_TOGGLE_DISTANCE,
    DrawerConfig, Edge, GeometrySnapshot, OpenRequest,
};
use crate::state::{DrawerEngine, GestureSurface, drag_handle_css, gesture_surface};
use crate::util::{clog, page_offset, touch_samples, touch_supported, viewport_size};

#[derive(Properties, PartialEq, Clone)]
pub struct DrawerProps {
    /// Main content.
    #[prop_or_default]
    pub children: Html,
    /// Sidebar content.
    #[prop_or_default]
    pub sidebar: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub sidebar_style: AttrValue,
    #[prop_or_default]
    pub content_style: AttrValue,
    #[prop_or_default]
    pub overlay_style: AttrValue,
    #[prop_or_default]
    pub drag_handle_style: AttrValue,
    #[prop_or(Edge::Left)]
    pub edge: Edge,
    #[prop_or(false)]
    pub docked: bool,
    #[prop_or(false)]
    pub open: bool,
    #[prop_or(true)]
    pub transitions: bool,
    #[prop_or(true)]
    pub touch: bool,
    #[prop_or(true)]
    pub enable_drag_handle: bool,
    #[prop_or(DEFAULT_DRAG_TOGGLE_DISTANCE)]
    pub drag_toggle_distance: f64,
    #[prop_or(DEFAULT_DRAG_HANDLE_THICKNESS)]
    pub drag_handle_thickness: f64,
    #[prop_or(AttrValue::Static(DEFAULT_CLASS_PREFIX))]
    pub class_prefix: AttrValue,
    /// Receives open/close requests from gestures and overlay clicks. The
    /// parent decides whether to honour them by updating `open`.
    #[prop_or_default]
    pub on_open_change: Callback<OpenRequest>,
}

impl DrawerProps {
    pub fn config(&self) -> DrawerConfig {
        DrawerConfig {
            edge: self.edge,
            touch: self.touch,
            transitions: self.transitions,
            drag_toggle_distance: self.drag_toggle_distance,
            drag_handle_thickness: self.drag_handle_thickness,
            enable_drag_handle: self.enable_drag_handle,
            docked: self.docked,
            open: self.open,
            class_prefix: self.class_prefix.to_string(),
        }
    }
}

const ROOT_CSS: &str = "position:absolute; top:0; left:0; right:0; bottom:0; overflow:hidden;";
const OVERLAY_CSS: &str = "position:fixed; top:0; left:0; right:0; bottom:0; z-index:1; background-color:rgba(0,0,0,0.3); transition:opacity .3s ease-out, visibility .3s ease-out;";
const CONTENT_CSS: &str = "position:absolute; top:0; left:0; right:0; bottom:0; overflow-y:auto; transition:left .3s ease-out, right .3s ease-out, top .3s ease-out, bottom .3s ease-out;";

fn sidebar_position_css(edge: Edge) -> &'static str {
    match edge {
        Edge::Left => "position:fixed; z-index:2; top:0; bottom:0; left:0; overflow-y:auto; transition:transform .3s ease-out;",
        Edge::Right => "position:fixed; z-index:2; top:0; bottom:0; right:0; overflow-y:auto; transition:transform .3s ease-out;",
        Edge::Top => "position:fixed; z-index:2; left:0; right:0; top:0; overflow-y:auto; transition:transform .3s ease-out;",
        Edge::Bottom => "position:fixed; z-index:2; left:0; right:0; bottom:0; overflow-y:auto; transition:transform .3s ease-out;",
    }
}

fn measure(sidebar: &NodeRef, drag_handle: &NodeRef) -> Option<GeometrySnapshot> {
    let el = sidebar.cast::<HtmlElement>()?;
    let (_, sidebar_top) = page_offset(&el);
    let drag_handle_top = drag_handle
        .cast::<HtmlElement>()
        .map(|h| page_offset(&h).1)
        .unwrap_or(0.0);
    let (viewport_width, viewport_height) = viewport_size();
    Some(GeometrySnapshot {
        sidebar_width: el.offset_width() as f64,
        sidebar_height: el.offset_height() as f64,
        sidebar_top,
        drag_handle_top,
        viewport_width,
        viewport_height,
    })
}

/// Deliver an overlay-click request on the next frame so the click that
/// closed the drawer can't land on whatever is under the overlay.
fn emit_next_frame(cb: Callback<OpenRequest>, request: OpenRequest) {
    let Some(win) = web_sys::window() else {
        cb.emit(request);
        return;
    };
    let f = Closure::once_into_js(move || cb.emit(request));
    if win.request_animation_frame(f.unchecked_ref()).is_err() {
        clog("drawer: requestAnimationFrame failed, overlay click dropped");
    }
}

#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    let engine = use_mut_ref(DrawerEngine::new);
    let redraw = use_force_update();
    let sidebar_ref = use_node_ref();
    let drag_handle_ref = use_node_ref();
    let touch_supported = use_memo((), |_| touch_supported());
    let config = props.config();

    // Re-measure after every render; the engine drops reports mid-gesture.
    {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let sidebar_ref = sidebar_ref.clone();
        let drag_handle_ref = drag_handle_ref.clone();
        use_effect(move || {
            if let Some(geometry) = measure(&sidebar_ref, &drag_handle_ref) {
                let changed = engine.borrow_mut().report_measured_size(geometry);
                if changed {
                    redraw.force_update();
                }
            }
            || ()
        });
    }

    let on_touch_start = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(sample) = touch_samples(&e.target_touches()).first().copied() {
                engine.borrow_mut().touch_start(sample);
                redraw.force_update();
            }
        })
    };
    let on_touch_move = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: TouchEvent| {
            if !engine.borrow().is_touching() {
                return;
            }
            engine.borrow_mut().touch_move(&touch_samples(&e.target_touches()));
            redraw.force_update();
        })
    };
    let on_touch_end = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        let cb = props.on_open_change.clone();
        Callback::from(move |_: TouchEvent| {
            if !engine.borrow().is_touching() {
                return;
            }
            let request = engine.borrow_mut().touch_end(&config);
            if let Some(request) = request {
                cb.emit(request);
            }
            redraw.force_update();
        })
    };
    let on_touch_cancel = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        let cb = props.on_open_change.clone();
        Callback::from(move |_: TouchEvent| {
            if !engine.borrow().is_touching() {
                return;
            }
            let request = engine.borrow_mut().touch_cancel(&config);
            if let Some(request) = request {
                cb.emit(request);
            }
            redraw.force_update();
        })
    };
    let on_scroll = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        Callback::from(move |_: Event| {
            let was_touching = engine.borrow().is_touching();
            engine.borrow_mut().scroll(&config);
            if was_touching && !engine.borrow().is_touching() {
                redraw.force_update();
            }
        })
    };
    let on_overlay_click = {
        let engine = engine.clone();
        let config = config.clone();
        let cb = props.on_open_change.clone();
        Callback::from(move |_: MouseEvent| {
            let request = engine.borrow().overlay_clicked(&config);
            if let Some(request) = request {
                emit_next_frame(cb.clone(), request);
            }
        })
    };

    let surface = gesture_surface(&config, *touch_supported);
    let (styles, root_classes) = {
        let eng = engine.borrow();
        (eng.compute_styles(&config), eng.root_classes(&config))
    };
    let prefix = config.class_prefix.clone();
    let on_root = surface == GestureSurface::Root;

    let drag_handle = if surface == GestureSurface::DragHandle {
        html! {
            <div
                class={format!("{}-draghandle", prefix)}
                style={format!("{} {}", drag_handle_css(&config), props.drag_handle_style)}
                ref={drag_handle_ref.clone()}
                ontouchstart={on_touch_start.clone()}
                ontouchmove={on_touch_move.clone()}
                ontouchend={on_touch_end.clone()}
                ontouchcancel={on_touch_cancel.clone()}
            />
        }
    } else {
        html! {}
    };

    html! {
        <div
            class={classes!(root_classes, props.class.clone())}
            style={format!("{} {}", ROOT_CSS, props.style)}
            ontouchstart={on_root.then(|| on_touch_start.clone())}
            ontouchmove={on_root.then(|| on_touch_move.clone())}
            ontouchend={on_root.then(|| on_touch_end.clone())}
            ontouchcancel={on_root.then(|| on_touch_cancel.clone())}
            onscroll={on_root.then(|| on_scroll.clone())}
        >
            <div
                class={format!("{}-sidebar", prefix)}
                style={format!("{} {} {}", sidebar_position_css(config.edge), props.sidebar_style, styles.sidebar_css())}
                ref={sidebar_ref}
            >
                { props.sidebar.clone() }
            </div>
            <div
                class={format!("{}-overlay", prefix)}
                style={format!("{} {} {}", OVERLAY_CSS, props.overlay_style, styles.overlay_css())}
                role="presentation"
                onclick={on_overlay_click}
            />
            <div
                class={format!("{}-content", prefix)}
                style={format!("{} {} {}", CONTENT_CSS, props.content_style, styles.content_css())}
            >
                { drag_handle }
                { props.children.clone() }
            </div>
        </div>
    }
}
