use serde::{Deserialize, Serialize};

/// Type tag carried by payloads that hold a pre-rendered Matplotlib figure.
pub const MATPLOTLIB_PLOT_TYPE: &str = "matplotlib_plot";

/// Data object handed to the plot widget.
///
/// The server renders a figure to a raster image and ships it either as a URL
/// or as an embedded `data:image/png;base64,...` URI in the `image` field. The
/// frontend never inspects the string; it is passed straight to an `<img>`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct PlotData {
    /// URL or data URI of the rendered plot. `None` when the server sent no image.
    #[serde(default)]
    pub image: Option<String>,
}

impl PlotData {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
        }
    }
}

/// Image source resolved once per render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImagePayload {
    /// No data object, no `image` field, or an empty `image` string.
    Missing,
    /// A non-empty image source.
    Present(String),
}

impl ImagePayload {
    pub fn from_data(data: Option<&PlotData>) -> Self {
        match data.and_then(|d| d.image.as_deref()) {
            Some(src) if !src.is_empty() => ImagePayload::Present(src.to_string()),
            _ => ImagePayload::Missing,
        }
    }
}

/// Envelope emitted by the server for every component on a page.
///
/// For plots this looks like
/// `{"type": "matplotlib_plot", "id": "plot-1", "data": {"image": "data:image/png;base64,..."}}`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ComponentPayload {
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub data: Option<PlotData>,
}

impl ComponentPayload {
    pub fn is_matplotlib_plot(&self) -> bool {
        self.component_type == MATPLOTLIB_PLOT_TYPE
    }

    /// Parses a JSON array of component payloads.
    pub fn parse_list(json: &str) -> Result<Vec<ComponentPayload>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
