mod edges;
mod facts;
mod ids;
mod metrics;
mod results;
mod scenario;

pub use edges::{InfluenceEdge, Polarity};
pub use facts::{BaseFacts, FactKey, TargetFacts};
pub use ids::{MetricKey, Period};
pub use metrics::{Metric, Perspective, UnitKind};
pub use results::{SimulatedFact, SimulatedValues};
pub use scenario::ScenarioInputs;
