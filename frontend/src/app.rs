use common::model::plot::ComponentPayload;
use web_sys::Event;
use yew::{html, AttrValue, Component, Context, Html, Properties};

use crate::components::plots::matplotlib::PlotImageWidget;
use crate::components::plots::renderer::WidgetRenderer;

/// Payloads as the server would emit them for a page with two plots, one of
/// which points at an image that does not exist.
const PAGE_PAYLOADS: &str = r#"[
    {
        "type": "matplotlib_plot",
        "id": "network-topology",
        "data": {"image": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg=="}
    },
    {
        "type": "matplotlib_plot",
        "id": "stale-plot",
        "data": {"image": "/plots/missing.png"}
    },
    {
        "type": "matplotlib_plot",
        "id": "empty-plot",
        "data": {}
    }
]"#;

pub enum Msg {
    PlotFailed(Event),
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// JSON array of component payloads to render.
    #[prop_or(AttrValue::Static(PAGE_PAYLOADS))]
    pub payloads_json: AttrValue,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            payloads_json: AttrValue::Static(PAGE_PAYLOADS),
        }
    }
}

/// Parses the page payloads. A malformed list is logged and yields no
/// payloads, which the page renders as a single "no data" widget.
fn load_payloads(json: &str) -> Vec<ComponentPayload> {
    ComponentPayload::parse_list(json).unwrap_or_else(|err| {
        log::warn!("Could not parse page payloads: {}", err);
        Vec::new()
    })
}

pub struct App {
    payloads: Vec<ComponentPayload>,
    failed_plots: usize,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            payloads: load_payloads(&ctx.props().payloads_json),
            failed_plots: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PlotFailed(event) => {
                log::debug!("Plot failed to load: {} event", event.type_());
                self.failed_plots += 1;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_error = ctx.link().callback(Msg::PlotFailed);

        html! {
            <div class="flex flex-col gap-4 p-4">
                if self.payloads.is_empty() {
                    <PlotImageWidget />
                }
                { for self.payloads.iter().map(|payload| html! {
                    <WidgetRenderer payload={payload.clone()} on_error={on_error.clone()} />
                }) }
                if self.failed_plots > 0 {
                    <p class="text-sm text-gray-500">
                        { format!("{} plot(s) could not be loaded.", self.failed_plots) }
                    </p>
                }
            </div>
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use log::Level;
    use yew::ServerRenderer;

    use crate::test_support::{entries_for, install_logger};

    async fn render(payloads_json: &'static str) -> String {
        ServerRenderer::<App>::with_props(move || AppProps {
            payloads_json: AttrValue::Static(payloads_json),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[test]
    fn malformed_payloads_are_logged_and_dropped() {
        install_logger();

        let payloads = load_payloads("{\"type\": broken-payload-list");

        assert!(payloads.is_empty());
        let entries = entries_for("Could not parse page payloads");
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|(level, _)| *level == Level::Warn));
    }

    #[test]
    fn default_page_payloads_parse() {
        let payloads = load_payloads(PAGE_PAYLOADS);

        assert_eq!(payloads.len(), 3);
        assert!(payloads.iter().all(ComponentPayload::is_matplotlib_plot));
    }

    #[tokio::test]
    async fn malformed_payloads_render_placeholder() {
        let html = render("[{not json").await;

        assert_eq!(html.matches("No plot data available").count(), 1);
        assert!(!html.contains("<img"));
    }

    #[tokio::test]
    async fn default_page_renders_every_payload() {
        let html = render(PAGE_PAYLOADS).await;

        assert_eq!(html.matches("<img").count(), 2);
        assert!(html.contains(r#"id="network-topology""#));
        assert!(html.contains(r#"src="/plots/missing.png""#));
        assert_eq!(html.matches("No plot data available").count(), 1);
    }
}
