//! Properties accepted by the `PlotImageWidget`.

use common::model::plot::PlotData;
use web_sys::Event;
use yew::prelude::*;

/// Properties for the `PlotImageWidget`.
///
/// All fields are optional; a widget mounted without `data` renders its
/// "no data" placeholder.
#[derive(Properties, PartialEq, Clone)]
pub struct PlotImageProps {
    /// Identifier placed on the plot container so the page can address it.
    /// Only applied when an image is rendered.
    #[prop_or_default]
    pub id: Option<AttrValue>,

    /// Payload produced by the server. `data.image` is a URL or data URI.
    #[prop_or_default]
    pub data: Option<PlotData>,

    /// Extra classes merged over the widget's base classes.
    #[prop_or_default]
    pub class_name: Option<AttrValue>,

    /// Called with the browser's `error` event when the image fails to load.
    #[prop_or_default]
    pub on_error: Option<Callback<Event>>,
}
