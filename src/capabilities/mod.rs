//! Capabilities the shell must provide: rendering, a one-shot timer for
//! the navigation auto-collapse, and telemetry.

pub mod telemetry;
pub mod timer;

pub use crux_core::render::Render;
pub use telemetry::{Telemetry, TelemetryOperation};
pub use timer::{Timer, TimerOperation, TimerOutput};

use crux_core::capability::ProtoContext;
use crux_core::render::RenderOperation;
use crux_core::Request;

use crate::app::App;
use crate::event::Event;

pub enum Effect {
    Render(Request<RenderOperation>),
    Timer(Request<TimerOperation>),
    Telemetry(Request<TelemetryOperation>),
}

pub struct Capabilities {
    pub render: Render<Event>,
    pub timer: Timer<Event>,
    pub telemetry: Telemetry<Event>,
}

impl crux_core::WithContext<App, Effect> for Capabilities {
    fn new_with_context(context: ProtoContext<Effect, Event>) -> Capabilities {
        Capabilities {
            render: Render::new(context.specialize(Effect::Render)),
            timer: Timer::new(context.specialize(Effect::Timer)),
            telemetry: Telemetry::new(context.specialize(Effect::Telemetry)),
        }
    }
}
