use crate::core::models::Debt;
use crate::core::money::Money;
use tracing::debug;

/// Reduces a set of net balances to a minimal list of settling transactions.
///
/// Greedy two-pointer sweep: creditors sorted largest-owed first, debtors
/// sorted largest-owing first, always matching the current largest of each
/// side for `min(credit, debt)`. Balances within ε of zero never enter the
/// sweep and matches within ε produce no edge, so rounding residue from
/// proportional splitting is absorbed. For n participants with nonzero
/// balances this emits at most n - 1 edges.
///
/// Pure and deterministic: no I/O, no failure modes on numeric input, and
/// the same snapshot always yields the same edges.
pub fn simplify(balances: &[(String, Money)]) -> Vec<Debt> {
    let mut creditors: Vec<(&str, Money)> = balances
        .iter()
        .filter(|(_, net)| *net > Money::epsilon())
        .map(|(id, net)| (id.as_str(), *net))
        .collect();
    let mut debtors: Vec<(&str, Money)> = balances
        .iter()
        .filter(|(_, net)| *net < -Money::epsilon())
        .map(|(id, net)| (id.as_str(), -*net))
        .collect();

    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut debts = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let settled = debtors[i].1.min(creditors[j].1);

        if settled > Money::epsilon() {
            debts.push(Debt {
                from: debtors[i].0.to_string(),
                to: creditors[j].0.to_string(),
                amount: settled.round_to_cent(),
            });
        }

        debtors[i].1 -= settled;
        creditors[j].1 -= settled;

        if debtors[i].1 <= Money::epsilon() {
            i += 1;
        }
        if creditors[j].1 <= Money::epsilon() {
            j += 1;
        }
    }

    debug!("Simplified {} balances into {} debts", balances.len(), debts.len());
    debts
}
