pub mod beneficiaries;
pub mod role;
pub mod vesting_state;

pub use beneficiaries::*;
pub use role::*;
pub use vesting_state::*;
