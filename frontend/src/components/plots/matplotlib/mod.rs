//! Plot image widget: shows a server-rendered plot image (URL or data URI)
//! inside a bordered container.
//!
//! Responsibilities
//! - Re-export `PlotImageProps` and the `PlotImageWidget` component.
//! - Render either the "No plot data available" placeholder or the image.
//! - Turn the image's `error` event into a `Msg::LoadFailed`, which is logged
//!   and forwarded to the caller's `on_error` without re-rendering.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod view;

use helpers::report_load_failure;
pub use messages::Msg;
pub use props::PlotImageProps;

pub struct PlotImageWidget;

impl Component for PlotImageWidget {
    type Message = Msg;
    type Properties = PlotImageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlotImageWidget
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoadFailed(event) => {
                report_load_failure(event, ctx.props().on_error.as_ref());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(ctx)
    }
}
