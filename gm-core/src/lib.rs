pub mod adjustments;
pub mod breakdown;
pub mod category;
pub mod factors;
pub mod inputs;
pub mod scenario;
