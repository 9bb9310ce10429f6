pub mod cash_flows;
pub mod lsm;
pub mod npv;
pub mod path_generator;
pub mod regression;

pub use cash_flows::CashFlowMatrix;
pub use lsm::{LsmPricer, LsmResult, LsmSettings, StepDiagnostics};
pub use npv::{simulated_european, NpvEstimate};
pub use path_generator::{simulate_gbm, GeometricBrownianMotion, PathMatrix};
pub use regression::{
    LaguerreBasis, PowerBasis, RegressionBasis, RegressionBasisKind, RegressionEngine,
    RegressionFit,
};
