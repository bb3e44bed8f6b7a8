use crate::catalog::{Categorized, CategoryOption, Searchable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureSection {
    General,
    Accounting,
}

impl CategoryOption for FeatureSection {
    const ALL: &'static [Self] = &[FeatureSection::General, FeatureSection::Accounting];

    fn slug(self) -> &'static str {
        match self {
            FeatureSection::General => "general",
            FeatureSection::Accounting => "accounting",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FeatureSection::General => "General Features",
            FeatureSection::Accounting => "Accounting Features",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureEntry {
    pub id: u32,
    pub title: &'static str,
    pub icon: &'static str,
    /// CSS gradient stops, start then end.
    pub gradient: (&'static str, &'static str),
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub section: FeatureSection,
}

impl Searchable for FeatureEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.description];
        fields.extend_from_slice(self.details);
        fields
    }
}

impl Categorized for FeatureEntry {
    type Category = FeatureSection;

    fn category(&self) -> FeatureSection {
        self.section
    }
}

macro_rules! feature {
    ($id:expr, $section:ident, $title:expr, $icon:expr, ($from:expr, $to:expr), $description:expr, [$($detail:expr),* $(,)?]) => {
        FeatureEntry {
            id: $id,
            title: $title,
            icon: $icon,
            gradient: ($from, $to),
            description: $description,
            details: &[$($detail),*],
            section: FeatureSection::$section,
        }
    };
}

pub const FEATURES: &[FeatureEntry] = &[
    feature!(1, General, "Real-time Analytics", "📈", ("#60a5fa", "#22d3ee"),
        "Track your business performance in real-time with advanced analytics and insights.",
        ["Interactive dashboards", "Custom report generation", "Trend analysis", "Predictive analytics", "Export capabilities"]),
    feature!(2, General, "Multi-User Access", "👥", ("#c084fc", "#6366f1"),
        "Secure multi-user access with role-based permissions and activity tracking.",
        ["Role-based access control", "User activity logs", "Team collaboration", "Custom permissions", "Session management"]),
    feature!(3, General, "Cloud Backup", "☁️", ("#2dd4bf", "#22c55e"),
        "Automatic cloud backup with version control and data recovery options.",
        ["Automated backups", "Version history", "Data encryption", "Quick recovery", "Storage management"]),
    feature!(4, General, "Mobile Access", "📱", ("#f472b6", "#f43f5e"),
        "Access your accounts on-the-go with our mobile-responsive interface.",
        ["Mobile optimization", "Touch-friendly interface", "Offline capabilities", "Push notifications", "Secure login"]),
    feature!(5, General, "Advanced Security", "🔒", ("#fbbf24", "#f97316"),
        "Enterprise-grade security with encryption and multi-factor authentication.",
        ["Two-factor authentication", "Data encryption", "IP whitelisting", "Security alerts", "Compliance tools"]),
    feature!(6, General, "Performance Optimization", "🚀", ("#4ade80", "#10b981"),
        "Lightning-fast performance with optimized data processing and caching.",
        ["Fast data processing", "Smart caching", "Load balancing", "Resource optimization", "Response time monitoring"]),
    feature!(7, Accounting, "Double-entry Accounting", "📒", ("#34d399", "#14b8a6"),
        "Professional double-entry bookkeeping system for accurate financial records.",
        ["Automated balancing", "Error detection", "Multi-currency support", "Audit trails", "Account reconciliation"]),
    feature!(8, Accounting, "Point of Sale", "🛒", ("#fbbf24", "#f97316"),
        "Integrated POS system for seamless retail operations.",
        ["Real-time inventory", "Multiple payment methods", "Receipt customization", "Staff management", "Sales analytics"]),
    feature!(9, Accounting, "Invoicing & Billing", "🧾", ("#c084fc", "#ec4899"),
        "Professional invoicing and billing system with customizable templates.",
        ["Custom invoice templates", "Recurring billing", "Payment tracking", "Tax calculations", "Multi-currency support"]),
    feature!(10, Accounting, "Payment Processing", "💳", ("#3b82f6", "#4f46e5"),
        "Secure payment processing with multiple gateway integrations.",
        ["Multiple payment gateways", "Secure transactions", "Payment scheduling", "Automated reconciliation", "Payment history"]),
    feature!(11, Accounting, "Journal Entries", "📓", ("#4ade80", "#10b981"),
        "Comprehensive journal entry system for detailed financial tracking.",
        ["Multiple journal types", "Automated entries", "Entry templates", "Bulk entry import", "Audit logging"]),
    feature!(12, Accounting, "Financial Dashboard", "📊", ("#f87171", "#f43f5e"),
        "Real-time financial insights and performance metrics.",
        ["Key performance indicators", "Customizable widgets", "Real-time updates", "Data visualization", "Export capabilities"]),
    feature!(13, Accounting, "Offline Functionality", "📶", ("#22d3ee", "#3b82f6"),
        "Continue working seamlessly even without internet connection.",
        ["Offline data access", "Automatic syncing", "Data conflict resolution", "Background updates", "Local storage management"]),
    feature!(14, Accounting, "Financial Reports", "🥧", ("#facc15", "#f97316"),
        "Comprehensive financial reporting suite with customizable templates.",
        ["Custom report builder", "Scheduled reports", "Multiple formats", "Comparative analysis", "Drill-down capabilities"]),
    feature!(15, Accounting, "General Ledger", "📖", ("#818cf8", "#a855f7"),
        "Complete general ledger system with advanced tracking and reporting.",
        ["Account hierarchies", "Transaction tracking", "Account reconciliation", "Multi-period posting", "Closing periods"]),
    feature!(16, Accounting, "Financial Statements", "⚖️", ("#f472b6", "#f43f5e"),
        "Generate accurate P&L, Balance Sheet, and Trial Balance statements.",
        ["Profit & Loss Statement", "Balance Sheet", "Trial Balance", "Cash Flow Statement", "Comparative Statements"]),
    feature!(17, Accounting, "Bank Integration", "🏦", ("#38bdf8", "#3b82f6"),
        "Seamless integration with major banks for automatic transaction syncing.",
        ["Auto bank feeds", "Transaction matching", "Bank reconciliation", "Multi-bank support", "Secure connection"]),
    feature!(18, Accounting, "E-commerce Integration", "🏪", ("#a78bfa", "#a855f7"),
        "Connect with popular e-commerce platforms for seamless sales tracking.",
        ["Shopify integration", "WooCommerce sync", "Amazon connection", "Inventory sync", "Order management"]),
    feature!(19, Accounting, "Tax Management", "📄", ("#f87171", "#f43f5e"),
        "Comprehensive tax management with automatic calculations and filing support.",
        ["Tax calculations", "Filing preparation", "Tax reports", "Multiple tax rates", "Tax compliance"]),
    feature!(20, Accounting, "API Integration", "💻", ("#34d399", "#22c55e"),
        "Powerful API for custom integrations and third-party applications.",
        ["RESTful API", "Webhook support", "Custom endpoints", "API documentation", "Rate limiting"]),
    feature!(21, Accounting, "Payroll Integration", "💵", ("#22d3ee", "#3b82f6"),
        "Seamless integration with popular payroll systems and services.",
        ["Automatic sync", "Payroll processing", "Tax calculations", "Employee portal", "Payment scheduling"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, FilterCriteria};

    #[test]
    fn sections_split_the_catalog() {
        let general = filter(FEATURES, &FilterCriteria::category(FeatureSection::General));
        let accounting = filter(FEATURES, &FilterCriteria::category(FeatureSection::Accounting));
        assert_eq!(general.len(), 6);
        assert_eq!(accounting.len(), 15);
        assert_eq!(general.len() + accounting.len(), FEATURES.len());
        assert!(general.iter().map(|f| f.id).eq(1..=6));
    }

    #[test]
    fn details_are_searchable() {
        let criteria = FilterCriteria::default().with_query("woocommerce");
        let found = filter(FEATURES, &criteria);
        assert_eq!(found.iter().map(|f| f.id).collect::<Vec<_>>(), vec![18]);
    }
}
