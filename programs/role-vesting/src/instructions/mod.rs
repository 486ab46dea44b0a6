pub mod add_beneficiary;
pub mod create_schedule;
pub mod deposit_tokens;
pub mod emit_release_quote;
pub mod initialize;
pub mod withdraw;

pub use add_beneficiary::*;
pub use create_schedule::*;
pub use deposit_tokens::*;
pub use emit_release_quote::*;
pub use initialize::*;
pub use withdraw::*;
