mod metrics_engine;
mod validator;

pub use metrics_engine::IMetricsEngine;
pub use validator::IEventValidator;
