use std::collections::BTreeMap;

/// Format a whole-unit price with its currency code, e.g. `53 KWD`.
///
/// Amounts are rendered without grouping so the figure matches what the
/// cart stores and what the tester reports.
#[must_use]
pub fn fmt_price(amount: u64, currency: &str) -> String {
    let amount = amount.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("amount", amount.as_str());
    vars.insert("currency", currency);
    super::tr("format.price", Some(&vars))
}
