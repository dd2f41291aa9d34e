//! Normalization stages.
//!
//! Each stage works on one kind of value, enabling composition via Pipeline.
//!
//! # Modules
//!
//! - `script`: Drops script preloads from head and bootstrap scripts from end of body (Components)
//! - `generator`: Drops `<meta name="generator">` from head (Components)
//! - `attrs`: Strips framework instrumentation attributes from head nodes (Components)
//! - `styles`: Turns inline `<style data-href>` into stylesheet links (Components)
//! - `announcer`: Drops the accessibility announcer from the root element (RootElement)

mod announcer;
mod attrs;
mod generator;
mod script;
mod styles;

pub use announcer::AnnouncerStrip;
pub use attrs::DataAttrStrip;
pub use generator::GeneratorStrip;
pub use script::ScriptStrip;
pub use styles::InlineStyleLink;
