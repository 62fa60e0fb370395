//! View rendering for the plot widget.
//!
//! The payload is resolved once into an `ImagePayload`: `Missing` renders the
//! red "no data" placeholder, `Present` renders the bordered container with a
//! single `<img>`. Nothing in the container is keyed on the image source, so a
//! new `data.image` only patches `src` on the existing element.

use common::model::plot::ImagePayload;
use yew::prelude::*;

use super::helpers::{NO_DATA_MESSAGE, PLOT_ALT_TEXT};
use super::messages::Msg;
use super::PlotImageWidget;
use crate::components::plots::styles::{
    merge_classes, CONTAINER_CLASSES, FALLBACK_CLASSES, IMAGE_CLASSES,
};

pub fn view(ctx: &Context<PlotImageWidget>) -> Html {
    let props = ctx.props();
    let class_name = props.class_name.as_deref();

    match ImagePayload::from_data(props.data.as_ref()) {
        ImagePayload::Missing => html! {
            <div class={merge_classes(FALLBACK_CLASSES, class_name)}>
                { NO_DATA_MESSAGE }
            </div>
        },
        ImagePayload::Present(src) => html! {
            <div id={props.id.clone()} class={merge_classes(CONTAINER_CLASSES, class_name)}>
                <img
                    src={src}
                    alt={PLOT_ALT_TEXT}
                    class={IMAGE_CLASSES}
                    onerror={ctx.link().callback(Msg::LoadFailed)}
                />
            </div>
        },
    }
}
