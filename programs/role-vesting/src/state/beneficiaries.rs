use anchor_lang::prelude::*;

use crate::constants::{MAX_BENEFICIARIES_PER_ROLE, ROLE_COUNT};
use crate::error::VestingError;
use crate::state::Role;

/// PDA holding every role bucket's membership list. Wallets are appended in
/// registration order and never removed; order is what makes the equal-share
/// transfer loop deterministic.
#[account]
pub struct Beneficiaries {
    /// Live member count per bucket, indexed by `Role`.
    pub counts: [u8; ROLE_COUNT],
    /// Fixed-capacity wallet slots per bucket; only the first `counts[r]`
    /// entries of row `r` are meaningful.
    pub wallets: [[Pubkey; MAX_BENEFICIARIES_PER_ROLE]; ROLE_COUNT],
}

impl Default for Beneficiaries {
    fn default() -> Self {
        Self {
            counts: [0; ROLE_COUNT],
            wallets: [[Pubkey::default(); MAX_BENEFICIARIES_PER_ROLE]; ROLE_COUNT],
        }
    }
}

impl Beneficiaries {
    /// Space for discriminator + counts + fixed wallet grid.
    pub const fn space() -> usize {
        8 + ROLE_COUNT + ROLE_COUNT * MAX_BENEFICIARIES_PER_ROLE * 32
    }

    /// Current membership of a bucket, in registration order.
    pub fn members(&self, role: Role) -> &[Pubkey] {
        &self.wallets[role.index()][..self.counts[role.index()] as usize]
    }

    pub fn member_count(&self, role: Role) -> usize {
        self.counts[role.index()] as usize
    }

    /// Indexed membership read.
    pub fn member_at(&self, role: Role, index: usize) -> std::result::Result<Pubkey, VestingError> {
        self.members(role)
            .get(index)
            .copied()
            .ok_or(VestingError::IndexOutOfRange)
    }

    /// Append a wallet to a bucket. A wallet may appear at most once per
    /// bucket; membership in several buckets at once is allowed.
    pub fn push(&mut self, role: Role, wallet: Pubkey) -> std::result::Result<(), VestingError> {
        let idx = role.index();
        let count = self.counts[idx] as usize;
        if count >= MAX_BENEFICIARIES_PER_ROLE {
            return Err(VestingError::BucketFull);
        }
        if self.wallets[idx][..count].contains(&wallet) {
            return Err(VestingError::DuplicateBeneficiary);
        }
        self.wallets[idx][count] = wallet;
        self.counts[idx] += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn push_preserves_registration_order() {
        let mut b = Beneficiaries::default();
        b.push(Role::Advisor, wallet(1)).unwrap();
        b.push(Role::Advisor, wallet(2)).unwrap();
        b.push(Role::Advisor, wallet(3)).unwrap();
        assert_eq!(b.members(Role::Advisor), &[wallet(1), wallet(2), wallet(3)]);
        assert_eq!(b.member_count(Role::Partner), 0);
    }

    #[test]
    fn duplicate_in_same_bucket_rejected() {
        let mut b = Beneficiaries::default();
        b.push(Role::Partner, wallet(7)).unwrap();
        assert!(matches!(
            b.push(Role::Partner, wallet(7)),
            Err(VestingError::DuplicateBeneficiary)
        ));
        assert_eq!(b.member_count(Role::Partner), 1);
    }

    #[test]
    fn same_wallet_may_join_another_bucket() {
        let mut b = Beneficiaries::default();
        b.push(Role::Advisor, wallet(7)).unwrap();
        b.push(Role::Mentor, wallet(7)).unwrap();
        assert_eq!(b.members(Role::Advisor), &[wallet(7)]);
        assert_eq!(b.members(Role::Mentor), &[wallet(7)]);
    }

    #[test]
    fn member_at_bounds() {
        let mut b = Beneficiaries::default();
        b.push(Role::Mentor, wallet(9)).unwrap();
        assert_eq!(b.member_at(Role::Mentor, 0).unwrap(), wallet(9));
        assert!(matches!(
            b.member_at(Role::Mentor, 1),
            Err(VestingError::IndexOutOfRange)
        ));
    }

    #[test]
    fn bucket_capacity_enforced() {
        let mut b = Beneficiaries::default();
        for n in 0..MAX_BENEFICIARIES_PER_ROLE {
            b.push(Role::Advisor, wallet(n as u8 + 1)).unwrap();
        }
        assert!(matches!(
            b.push(Role::Advisor, wallet(200)),
            Err(VestingError::BucketFull)
        ));
    }
}
