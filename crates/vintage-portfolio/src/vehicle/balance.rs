//! Running-balance derivation for transaction ledgers.

use rust_decimal::Decimal;

use crate::types::CashFlowRecord;

/// Recomputes the running balance of every record in a date-sorted ledger.
///
/// The balance is the cumulative net capital through each record:
/// `previous + investment - distribution`, rounded to 2 dp at every step.
/// Valuation updates move no cash, so they carry the previous balance
/// forward unchanged.
///
/// The whole chain is rederived on every mutation rather than patched
/// incrementally; inserting a back-dated record shifts every balance
/// after it, and a full pass is the only way to keep the chain honest.
pub(crate) fn rederive_running_balances(records: &mut [CashFlowRecord]) {
    let mut balance = Decimal::ZERO;
    for record in records.iter_mut() {
        balance =
            (balance + record.investment_amount() - record.distribution_amount()).round_dp(2);
        record.set_running_balance(balance);
    }
}
