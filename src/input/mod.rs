// ============================================================================
// Input Module
// Controlled input state and its construction
// ============================================================================

mod big_number_input;
pub mod factory;

pub use big_number_input::BigNumberInput;
pub use factory::{create_from_config, BigNumberInputBuilder};
