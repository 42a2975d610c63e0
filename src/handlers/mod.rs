mod fixtures;
mod health;
mod metrics;
mod teams;

pub use fixtures::fixtures_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use teams::teams_handler;
