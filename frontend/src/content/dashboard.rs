//! Sample figures for the dashboard preview. There is no live data source.

use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: &'static str,
    /// Percent change from last month.
    pub change: f64,
}

impl QuickStat {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// "↑ 12.5% from last month"
    pub fn change_label(&self) -> String {
        let arrow = if self.is_up() { '↑' } else { '↓' };
        format!("{} {}% from last month", arrow, self.change.abs())
    }
}

pub const QUICK_STATS: &[QuickStat] = &[
    QuickStat { title: "Total Revenue", value: "$24,500", change: 12.5 },
    QuickStat { title: "Total Expenses", value: "$18,300", change: -8.4 },
    QuickStat { title: "Net Profit", value: "$6,200", change: 15.3 },
    QuickStat { title: "Outstanding Invoices", value: "$3,500", change: -4.2 },
];

pub struct Series {
    pub label: &'static str,
    pub values: &'static [i32],
    pub rgb: (u8, u8, u8),
}

pub const CASH_FLOW_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const CASH_FLOW: &[Series] = &[
    Series {
        label: "Income",
        values: &[3000, 3500, 4000, 3800, 4200, 4500],
        rgb: (75, 192, 192),
    },
    Series {
        label: "Expenses",
        values: &[2500, 2800, 3000, 2900, 3100, 3300],
        rgb: (255, 99, 132),
    },
];

pub const EXPENSES_BY_CATEGORY: &[(&str, i32, (u8, u8, u8))] = &[
    ("Rent", 2000, (255, 99, 132)),
    ("Utilities", 500, (54, 162, 235)),
    ("Salaries", 3000, (255, 206, 86)),
    ("Marketing", 1000, (75, 192, 192)),
    ("Equipment", 800, (153, 102, 255)),
    ("Other", 700, (255, 159, 64)),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub amount: f64,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount >= 0.0
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Unsigned, two decimals: `$245.50`. Colour carries the sign.
    pub fn display_amount(&self) -> String {
        format!("${:.2}", self.amount.abs())
    }
}

pub const RECENT_TRANSACTIONS: &[Transaction] = &[
    Transaction {
        date: "2024-01-25",
        description: "Client Payment - ABC Corp",
        category: "Income",
        amount: 1500.00,
    },
    Transaction {
        date: "2024-01-24",
        description: "Office Supplies",
        category: "Expenses",
        amount: -245.50,
    },
    Transaction {
        date: "2024-01-23",
        description: "Monthly Rent",
        category: "Expenses",
        amount: -2000.00,
    },
    Transaction {
        date: "2024-01-22",
        description: "Client Payment - XYZ Ltd",
        category: "Income",
        amount: 3000.00,
    },
];

/// Upper bound for a chart's value axis, with 10% headroom.
pub fn axis_ceiling(values: impl IntoIterator<Item = i32>) -> i32 {
    let max = values.into_iter().max().unwrap_or(0).max(0);
    max + max / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_drop_the_sign() {
        assert_eq!(RECENT_TRANSACTIONS[0].display_amount(), "$1500.00");
        assert_eq!(RECENT_TRANSACTIONS[1].display_amount(), "$245.50");
        assert!(!RECENT_TRANSACTIONS[1].is_income());
    }

    #[test]
    fn transactions_are_newest_first() {
        let dates: Vec<_> = RECENT_TRANSACTIONS.iter().filter_map(Transaction::date).collect();
        assert_eq!(dates.len(), RECENT_TRANSACTIONS.len());
        assert!(dates.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn change_labels() {
        assert_eq!(QUICK_STATS[0].change_label(), "↑ 12.5% from last month");
        assert_eq!(QUICK_STATS[1].change_label(), "↓ 8.4% from last month");
    }

    #[test]
    fn series_line_up_with_months() {
        for series in CASH_FLOW {
            assert_eq!(series.values.len(), CASH_FLOW_MONTHS.len(), "{}", series.label);
        }
        assert_eq!(axis_ceiling(CASH_FLOW[0].values.iter().copied()), 4950);
        assert_eq!(axis_ceiling(Vec::new()), 0);
    }
}
