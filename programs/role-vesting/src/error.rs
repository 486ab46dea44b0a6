use anchor_lang::prelude::*;

/// Custom error codes for the role vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Schedule has already been started")]
    ScheduleAlreadyStarted,

    #[msg("Duplicate beneficiary wallet in role bucket")]
    DuplicateBeneficiary,

    #[msg("Role bucket is full")]
    BucketFull,

    #[msg("Beneficiary index out of range")]
    IndexOutOfRange,

    #[msg("Nothing to release for this bucket")]
    NothingToRelease,

    #[msg("Role bucket has no beneficiaries")]
    EmptyBucket,

    #[msg("Beneficiary token accounts do not match bucket membership")]
    BeneficiaryAccountMismatch,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Deposit would exceed the vested allocation")]
    OverDeposit,

    #[msg("Deposit after schedule start is not allowed")]
    DepositAfterStart,

    #[msg("Math overflow")]
    MathOverflow,
}
