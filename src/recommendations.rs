//! Static product recommendation catalog keyed by risk tier.
//!
//! Pure configuration data: no randomness, no external calls.

use crate::tiers::RiskTier;
use serde::Serialize;

/// A recommended product: card name plus its headline features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    /// Product name.
    pub name: &'static str,
    /// Headline feature text.
    pub features: &'static str,
}

/// Category label plus the ordered product list for one risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    /// Catalog category label.
    pub category: &'static str,
    /// Fixed 3-item product list.
    pub cards: Vec<ProductCard>,
}

const PREMIUM_CARDS: [ProductCard; 3] = [
    ProductCard {
        name: "Platinum Rewards Card",
        features: "High credit limit, premium rewards, travel benefits",
    },
    ProductCard {
        name: "Cashback Elite Card",
        features: "5% cashback on all purchases, no annual fee",
    },
    ProductCard {
        name: "Travel Master Card",
        features: "Air miles, lounge access, travel insurance",
    },
];

const STANDARD_CARDS: [ProductCard; 3] = [
    ProductCard {
        name: "Rewards Plus Card",
        features: "2% cashback, moderate credit limit",
    },
    ProductCard {
        name: "Shopping Card",
        features: "Special discounts on retail, 1.5% rewards",
    },
    ProductCard {
        name: "Fuel Saver Card",
        features: "Extra rewards on fuel purchases",
    },
];

const BASIC_CARDS: [ProductCard; 3] = [
    ProductCard {
        name: "Starter Credit Card",
        features: "Low credit limit, basic rewards",
    },
    ProductCard {
        name: "Building Credit Card",
        features: "Credit building features, financial education",
    },
    ProductCard {
        name: "Secured Credit Card",
        features: "Requires security deposit, helps build credit",
    },
];

const ALTERNATIVE_PRODUCTS: [ProductCard; 3] = [
    ProductCard {
        name: "Prepaid Card",
        features: "No credit check required, spending control",
    },
    ProductCard {
        name: "Secured Credit Card",
        features: "Security deposit required, credit building opportunity",
    },
    ProductCard {
        name: "Debit Card Plus",
        features: "Enhanced debit features, cashback on purchases",
    },
];

/// Look up the recommendation bundle for a risk tier.
pub fn recommend(tier: RiskTier) -> RecommendationBundle {
    let (category, cards) = match tier {
        RiskTier::Excellent => ("Premium Credit Cards", &PREMIUM_CARDS),
        RiskTier::Good => ("Standard Credit Cards", &STANDARD_CARDS),
        RiskTier::Fair => ("Basic Credit Cards", &BASIC_CARDS),
        RiskTier::Poor => ("Alternative Financial Products", &ALTERNATIVE_PRODUCTS),
    };
    RecommendationBundle {
        category,
        cards: cards.to_vec(),
    }
}
