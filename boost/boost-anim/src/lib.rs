#![doc = r#"boost-anim: the animation driver.

Consumes boost-frames sequences and forwards each frame to two seams:
- [`Canvas`]: draw points, segments and text on a named panel,
- [`Encoder`]: receive finished figures strictly in frame order.

[`DrawList`] records primitives in memory and [`JsonLinesEncoder`] writes one
JSON object per frame, so a full animation can be produced without a plotting
backend. [`Animation`] holds the three course presets.
"#]

pub mod canvas;
pub mod config;
pub mod driver;
pub mod encoder;
pub mod preset;
pub mod render;

pub use canvas::{Axis, Canvas, DrawList, DrawOp, Ink, Weight};
pub use config::AnimationConfig;
pub use driver::{DriveError, Driver};
pub use encoder::{EncodeError, Encoder, JsonLinesEncoder};
pub use preset::Animation;
pub use render::{interval_readout, panels, render_frame, velocity_label};
