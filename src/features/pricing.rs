//! Pricing tiers shown on the landing page. Display only: there is no checkout.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const TIERS: [PricingTier; 2] = [
    PricingTier {
        name: "Free Course",
        price: "$0",
        period: "/forever",
        features: &[
            "5 core lessons",
            "Beginner trading fundamentals",
            "Free PDF guide",
            "Community access",
        ],
        highlighted: false,
    },
    PricingTier {
        name: "Premium Access",
        price: "$97",
        period: "/month",
        features: &[
            "Everything in Free",
            "Advanced trading strategies",
            "Live trading sessions",
            "1-on-1 mentorship",
            "Private Discord community",
            "Exclusive market analysis",
        ],
        highlighted: true,
    },
];

#[cfg(test)]
mod tests {
    use super::TIERS;

    #[test]
    fn exactly_one_highlighted_tier() {
        assert_eq!(TIERS.iter().filter(|tier| tier.highlighted).count(), 1);
    }
}
