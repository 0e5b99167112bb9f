use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Fire-and-forget telemetry. Events carry a name plus an optional
/// detail string; counters carry a name plus an increment. The shell
/// forwards them to whatever analytics sink the platform has.
#[derive(Clone)]
pub struct Telemetry<E> {
    context: CapabilityContext<TelemetryOperation, E>,
}

impl<Ev> Capability<Ev> for Telemetry<Ev> {
    type Operation = TelemetryOperation;
    type MappedSelf<MappedEv> = Telemetry<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Telemetry::new(self.context.map_event(f))
    }
}

impl<E> Telemetry<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<TelemetryOperation, E>) -> Self {
        Self { context }
    }

    pub fn event(&self, name: &str, detail: Option<String>) {
        self.send(TelemetryOperation::Event { name: name.to_string(), detail });
    }

    pub fn count(&self, name: &str, increment: u64) {
        self.send(TelemetryOperation::Count { name: name.to_string(), increment });
    }

    pub fn warn(&self, message: String) {
        self.send(TelemetryOperation::Warn { message });
    }

    fn send(&self, operation: TelemetryOperation) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }
}

pub type TelemetryCapability = Telemetry<crate::event::Event>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TelemetryOperation {
    Event { name: String, detail: Option<String> },
    Count { name: String, increment: u64 },
    Warn { message: String },
}

impl Operation for TelemetryOperation {
    type Output = ();
}
