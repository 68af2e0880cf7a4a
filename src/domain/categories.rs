use super::TransactionKind;

/// The allowed category names per transaction kind. This is explicit
/// configuration handed to the service at construction time rather than a
/// process-wide constant, so alternative sets can be injected in tests.
#[derive(Debug, Clone)]
pub struct CategorySet {
    income: Vec<String>,
    expense: Vec<String>,
}

impl CategorySet {
    pub fn new(income: Vec<String>, expense: Vec<String>) -> Self {
        Self { income, expense }
    }

    pub fn names(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    /// Resolve a 1-based menu index into a category name.
    pub fn resolve(&self, kind: TransactionKind, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.names(kind).get(i))
            .map(String::as_str)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(
            ["Salary", "Freelance", "Investments", "Other"]
                .map(String::from)
                .to_vec(),
            [
                "Food",
                "Utilities",
                "Rent",
                "Entertainment",
                "Transport",
                "Other",
            ]
            .map(String::from)
            .to_vec(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_one_based() {
        let categories = CategorySet::default();
        assert_eq!(
            categories.resolve(TransactionKind::Income, 1),
            Some("Salary")
        );
        assert_eq!(
            categories.resolve(TransactionKind::Expense, 6),
            Some("Other")
        );
    }

    #[test]
    fn test_resolve_out_of_range() {
        let categories = CategorySet::default();
        assert_eq!(categories.resolve(TransactionKind::Income, 0), None);
        assert_eq!(categories.resolve(TransactionKind::Income, 5), None);
        assert_eq!(categories.resolve(TransactionKind::Expense, 7), None);
    }
}
