use crate::catalog::{Categorized, CategoryOption, Searchable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpCategory {
    General,
    Billing,
    Technical,
    Security,
}

impl CategoryOption for HelpCategory {
    const ALL: &'static [Self] = &[
        HelpCategory::General,
        HelpCategory::Billing,
        HelpCategory::Technical,
        HelpCategory::Security,
    ];

    fn slug(self) -> &'static str {
        match self {
            HelpCategory::General => "general",
            HelpCategory::Billing => "billing",
            HelpCategory::Technical => "technical",
            HelpCategory::Security => "security",
        }
    }

    fn label(self) -> &'static str {
        match self {
            HelpCategory::General => "General",
            HelpCategory::Billing => "Billing",
            HelpCategory::Technical => "Technical",
            HelpCategory::Security => "Security",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: HelpCategory,
}

impl Searchable for FaqEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.question, self.answer]
    }
}

impl Categorized for FaqEntry {
    type Category = HelpCategory;

    fn category(&self) -> HelpCategory {
        self.category
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuickLink {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        icon: "📚",
        title: "Getting Started",
        description: "Learn the basics of using Groww Book and set up your account",
    },
    QuickLink {
        icon: "🎥",
        title: "Video Tutorials",
        description: "Watch step-by-step guides on using our features",
    },
    QuickLink {
        icon: "📝",
        title: "Documentation",
        description: "Detailed documentation on all features and integrations",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: 1,
        question: "How do I get started with Groww Book?",
        answer: "Getting started is easy! Simply sign up for an account, complete your business profile, and follow our setup wizard to configure your accounting preferences.",
        category: HelpCategory::General,
    },
    FaqEntry {
        id: 2,
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards, PayPal, and bank transfers for annual subscriptions. All payments are processed securely through our payment partners.",
        category: HelpCategory::Billing,
    },
    FaqEntry {
        id: 3,
        question: "How secure is my financial data?",
        answer: "We use bank-level encryption and security measures to protect your data. All information is stored in secure servers with regular backups.",
        category: HelpCategory::Security,
    },
    FaqEntry {
        id: 4,
        question: "Can I import data from other accounting software?",
        answer: "Yes, Groww Book supports importing data from most major accounting software including QuickBooks, Xero, and Excel spreadsheets.",
        category: HelpCategory::Technical,
    },
    FaqEntry {
        id: 5,
        question: "How do I cancel my subscription?",
        answer: "You can cancel your subscription at any time from your account settings. If you cancel, you'll continue to have access until the end of your billing period.",
        category: HelpCategory::Billing,
    },
    FaqEntry {
        id: 6,
        question: "Do you offer mobile apps?",
        answer: "Yes, we have mobile apps available for both iOS and Android devices. You can download them from the respective app stores.",
        category: HelpCategory::Technical,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, FilterCriteria};

    #[test]
    fn billing_filter_over_three_faqs_returns_the_billing_one() {
        let sample: Vec<FaqEntry> = [1, 2, 4]
            .iter()
            .filter_map(|id| FAQS.iter().find(|faq| faq.id == *id).cloned())
            .collect();
        let categories: Vec<_> = sample.iter().map(|faq| faq.category).collect();
        assert_eq!(
            categories,
            vec![HelpCategory::General, HelpCategory::Billing, HelpCategory::Technical]
        );

        let found = filter(&sample, &FilterCriteria::category(HelpCategory::Billing));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn answers_are_searched_too() {
        let criteria = FilterCriteria::default().with_query("quickbooks");
        let found = filter(FAQS, &criteria);
        assert_eq!(found.iter().map(|faq| faq.id).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn query_narrows_within_category() {
        let criteria = FilterCriteria::category(HelpCategory::Billing).with_query("cancel");
        let found = filter(FAQS, &criteria);
        assert_eq!(found.iter().map(|faq| faq.id).collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn every_category_has_an_entry() {
        for category in HelpCategory::ALL {
            assert!(FAQS.iter().any(|faq| faq.category == *category), "{category:?}");
        }
    }
}
