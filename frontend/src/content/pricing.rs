use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Annual,
    Monthly,
}

impl BillingPeriod {
    pub fn flipped(self) -> Self {
        match self {
            BillingPeriod::Annual => BillingPeriod::Monthly,
            BillingPeriod::Monthly => BillingPeriod::Annual,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanFeature {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Per-month price when billed yearly.
    pub annual_price: u32,
    pub monthly_price: u32,
    pub features: &'static [PlanFeature],
    pub gradient: (&'static str, &'static str),
    /// "r, g, b" used for the card glow.
    pub shadow_rgb: &'static str,
    pub popular: bool,
}

impl PricingTier {
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Annual => self.annual_price,
            BillingPeriod::Monthly => self.monthly_price,
        }
    }

    /// Whole percent saved per month by paying yearly, rounded down.
    pub fn annual_savings_percent(&self) -> u32 {
        if self.monthly_price == 0 || self.annual_price >= self.monthly_price {
            return 0;
        }
        (self.monthly_price - self.annual_price) * 100 / self.monthly_price
    }
}

macro_rules! plan_features {
    ($(($name:expr, $description:expr)),* $(,)?) => {
        &[$(PlanFeature { name: $name, description: $description }),*]
    };
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Basic",
        annual_price: 29,
        monthly_price: 39,
        features: plan_features![
            ("Up to 5 team members", "Perfect for small teams and startups"),
            ("Basic accounting features", "Essential tools for basic accounting needs"),
            ("Monthly reports", "Get insights into your monthly performance"),
            ("Email support", "24/7 email support for your queries"),
            ("5GB storage", "Secure cloud storage for your documents"),
            ("Basic integrations", "Connect with essential business tools"),
        ],
        gradient: ("#60a5fa", "#22d3ee"),
        shadow_rgb: "37, 99, 235",
        popular: false,
    },
    PricingTier {
        name: "Professional",
        annual_price: 49,
        monthly_price: 59,
        features: plan_features![
            ("Up to 15 team members", "Ideal for growing businesses"),
            ("Advanced accounting features", "Comprehensive accounting toolkit"),
            ("Real-time reports", "Live insights and analytics"),
            ("Priority support", "Fast response times and dedicated support"),
            ("15GB storage", "Expanded storage for all your needs"),
            ("Advanced integrations", "Connect with premium business tools"),
            ("Custom branding", "Add your brand identity"),
            ("API access", "Build custom integrations"),
        ],
        gradient: ("#818cf8", "#3b82f6"),
        shadow_rgb: "79, 70, 229",
        popular: true,
    },
    PricingTier {
        name: "Enterprise",
        annual_price: 99,
        monthly_price: 119,
        features: plan_features![
            ("Unlimited team members", "No limits on team size"),
            ("Enterprise features", "Full suite of enterprise tools"),
            ("Custom reports", "Tailored reporting solutions"),
            ("24/7 dedicated support", "Round-the-clock premium support"),
            ("Unlimited storage", "Store all your data without limits"),
            ("Premium integrations", "Access to exclusive integrations"),
            ("White labeling", "Complete brand customization"),
            ("Custom development", "Dedicated development resources"),
            ("SLA guarantee", "Guaranteed uptime and performance"),
        ],
        gradient: ("#c084fc", "#6366f1"),
        shadow_rgb: "126, 34, 206",
        popular: false,
    },
];

pub const TRUST_BADGES: &[&str] = &[
    "Secure Payments",
    "24/7 Support",
    "Money Back Guarantee",
    "Free Updates",
];

/// Case-insensitive lookup used when a plan name arrives in a URL.
pub fn find_tier(name: &str) -> Option<&'static PricingTier> {
    PRICING_TIERS
        .iter()
        .find(|tier| tier.name.eq_ignore_ascii_case(name))
}

/// The tier highlighted as "Most Popular", falling back to the first one.
pub fn featured_tier() -> &'static PricingTier {
    PRICING_TIERS
        .iter()
        .find(|tier| tier.popular)
        .unwrap_or(&PRICING_TIERS[0])
}

pub fn max_annual_savings_percent() -> u32 {
    PRICING_TIERS
        .iter()
        .map(PricingTier::annual_savings_percent)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_follow_billing_period() {
        let prices: Vec<_> = PRICING_TIERS
            .iter()
            .map(|t| (t.price(BillingPeriod::Annual), t.price(BillingPeriod::Monthly)))
            .collect();
        assert_eq!(prices, vec![(29, 39), (49, 59), (99, 119)]);
    }

    #[test]
    fn headline_savings_matches_basic_tier() {
        assert_eq!(PRICING_TIERS[0].annual_savings_percent(), 25);
        assert_eq!(max_annual_savings_percent(), 25);
    }

    #[test]
    fn url_plan_names_resolve() {
        assert_eq!(find_tier("professional").map(|t| t.name), Some("Professional"));
        assert!(find_tier("Platinum").is_none());
        assert_eq!(featured_tier().name, "Professional");
    }

    #[test]
    fn billing_period_round_trips_as_query_value() {
        assert_eq!(serde_json::to_string(&BillingPeriod::Monthly).unwrap(), "\"monthly\"");
        assert_eq!(BillingPeriod::Annual.flipped(), BillingPeriod::Monthly);
    }
}
