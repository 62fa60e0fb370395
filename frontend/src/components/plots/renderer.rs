//! Renders a server component payload with the widget matching its `type` tag.

use common::model::plot::ComponentPayload;
use web_sys::Event;
use yew::{html, AttrValue, Callback, Component, Context, Html, Properties};

use super::matplotlib::PlotImageWidget;

#[derive(Properties, PartialEq)]
pub struct WidgetRendererProps {
    pub payload: ComponentPayload,
    #[prop_or_default]
    pub on_error: Option<Callback<Event>>,
}

pub struct WidgetRenderer;

impl Component for WidgetRenderer {
    type Message = ();
    type Properties = WidgetRendererProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WidgetRenderer
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let payload = &props.payload;

        if payload.is_matplotlib_plot() {
            html! {
                <PlotImageWidget
                    id={payload.id.clone().map(AttrValue::from)}
                    data={payload.data.clone()}
                    on_error={props.on_error.clone()}
                />
            }
        } else {
            log::warn!("No widget for component type '{}'", payload.component_type);
            html! {
                <div class="p-4 text-gray-500">
                    { format!("Unsupported component type: {}", payload.component_type) }
                </div>
            }
        }
    }
}
