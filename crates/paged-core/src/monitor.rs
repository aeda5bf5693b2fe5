//! Scroll surface monitor
//!
//! Every panel's scrollable element gets the arbiter's four handlers and a
//! default style. Caller props for the same element are merged over them.

use serde_json::{json, Map, Value};

use crate::merge::{merge_props, PropValue, Props};
use crate::view::ScrollPagedView;

pub const ON_TOUCH_START: &str = "on_touch_start";
pub const ON_TOUCH_MOVE: &str = "on_touch_move";
pub const ON_TOUCH_END: &str = "on_touch_end";
pub const ON_SCROLL: &str = "on_scroll";

#[derive(Clone)]
pub struct ScrollViewMonitor {
    view: ScrollPagedView,
}

impl ScrollViewMonitor {
    pub fn new(view: ScrollPagedView) -> Self {
        Self { view }
    }

    /// Props for one panel's scroll surface, with `web_props` merged in
    pub fn props(&self, web_props: Props) -> Props {
        merge_props(self.surface_props(), web_props)
    }

    fn surface_props(&self) -> Props {
        let mut props = Props::new().with("style", PropValue::Style(surface_style()));
        for key in [ON_TOUCH_START, ON_TOUCH_MOVE, ON_TOUCH_END, ON_SCROLL] {
            let view = self.view.clone();
            props.insert(key, PropValue::handler(move |event| view.dispatch(event)));
        }
        props
    }
}

fn surface_style() -> Map<String, Value> {
    let mut style = Map::new();
    style.insert("flex".to_string(), json!(1));
    style.insert("overflow".to_string(), json!("scroll"));
    style.insert("position".to_string(), json!("relative"));
    style
}
