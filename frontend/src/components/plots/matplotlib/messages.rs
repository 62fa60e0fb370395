use web_sys::Event;

pub enum Msg {
    /// The `<img>` fired its `error` event.
    LoadFailed(Event),
}
