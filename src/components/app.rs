use super::drawer::Drawer;
use crate::model::{DrawerConfig, Edge, OpenRequest};
use crate::util::clog;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const STORAGE_KEY: &str = "drawer_demo_config";

fn load_config() -> Option<DrawerConfig> {
    let store = web_sys::window()?.local_storage().ok()??;
    let raw = store.get_item(STORAGE_KEY).ok()??;
    match DrawerConfig::from_json(&raw) {
        Ok(config) => Some(config),
        Err(e) => {
            clog(&format!("ignoring saved drawer config: {:#}", e));
            None
        }
    }
}

fn save_config(config: &DrawerConfig) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(s) = config.to_json() {
                let _ = store.set_item(STORAGE_KEY, &s);
            }
        }
    }
}

/// Demo page: a drawer with controls for every setting.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| load_config().unwrap_or_default());

    // Persist settings changes
    {
        let config = config.clone();
        use_effect_with((*config).clone(), move |_| {
            save_config(&config);
            || ()
        });
    }

    let update = {
        let config = config.clone();
        move |f: fn(&mut DrawerConfig)| {
            let config = config.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*config).clone();
                f(&mut next);
                config.set(next);
            })
        }
    };

    let on_open_change = {
        let config = config.clone();
        Callback::from(move |request: OpenRequest| {
            clog(&format!(
                "open change -> {} (overlay clicked: {})",
                request.open, request.reason.overlay_clicked
            ));
            let mut next = (*config).clone();
            next.open = request.open;
            config.set(next);
        })
    };
    let on_dock = update(|c| {
        c.docked = !c.docked;
        if !c.docked {
            c.open = false;
        }
    });
    let toggle_open = update(|c| c.open = !c.open);
    let toggle_touch = update(|c| c.touch = !c.touch);
    let toggle_transitions = update(|c| c.transitions = !c.transitions);
    let on_edge = {
        let config = config.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(edge) = Edge::parse(&input.value()) {
                let mut next = (*config).clone();
                next.edge = edge;
                config.set(next);
            }
        })
    };
    let on_distance = {
        let config = config.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                let mut next = (*config).clone();
                next.drag_toggle_distance = v;
                if next.validate().is_ok() {
                    config.set(next);
                }
            }
        })
    };

    let c = (*config).clone();
    let sidebar = html! {
        <div style="background:#161b22; color:#c9d1d9; padding:12px; min-width:200px; min-height:120px;">
            <h3 style="margin:0 0 8px 0; display:flex; justify-content:space-between; gap:8px;">
                {"Sidebar"}
                <button onclick={on_dock.clone()}>{ if c.docked { "Unpin" } else { "Pin" } }</button>
            </h3>
            <p style="margin:0;">{"Swipe from the edge to open, swipe back to close."}</p>
        </div>
    };

    html! {
        <Drawer
            sidebar={sidebar}
            edge={c.edge}
            docked={c.docked}
            open={c.open}
            touch={c.touch}
            transitions={c.transitions}
            drag_toggle_distance={c.drag_toggle_distance}
            drag_handle_thickness={c.drag_handle_thickness}
            on_open_change={on_open_change}
        >
            <div style="padding:16px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
                <h2 style="margin:0;">{"Drawer"}</h2>
                <div style="display:flex; gap:8px; flex-wrap:wrap;">
                    <button onclick={toggle_open}>{"Switch open"}</button>
                    <button onclick={on_dock}>{ if c.docked { "Undock" } else { "Dock" } }</button>
                </div>
                <label style="display:flex; align-items:center; gap:8px;">
                    <input type="checkbox" checked={c.touch} onclick={toggle_touch} />
                    <span>{"Touch gestures"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <input type="checkbox" checked={c.transitions} onclick={toggle_transitions} />
                    <span>{"Transitions"}</span>
                </label>
                <div style="display:flex; gap:10px;">
                    { for Edge::ALL.iter().map(|edge| html! {
                        <label style="display:flex; align-items:center; gap:4px;">
                            <input type="radio" name="edge" value={edge.as_str()}
                                checked={c.edge == *edge} onchange={on_edge.clone()} />
                            <span>{ edge.as_str() }</span>
                        </label>
                    }) }
                </div>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span>{"Drag toggle distance"}</span>
                    <input type="number" min="0" value={c.drag_toggle_distance.to_string()} onchange={on_distance} />
                </label>
            </div>
        </Drawer>
    }
}
