//! The closed set of email categories.
//!
//! Each category carries its own subject/body style guidance, appended to the
//! drafting system prompt. The enumeration is fixed at 8 labels; menu input
//! that maps to nothing falls back to `ProductUpdates`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Email-intent label governing the drafting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ProductUpdates,
    Promotions,
    OrderReorder,
    EventDriven,
    CustomerRelationship,
    EducationalContent,
    Transactional,
    B2bPrograms,
}

/// All categories in menu order (`1` through `8`).
pub const ALL_CATEGORIES: [Category; 8] = [
    Category::ProductUpdates,
    Category::Promotions,
    Category::OrderReorder,
    Category::EventDriven,
    Category::CustomerRelationship,
    Category::EducationalContent,
    Category::Transactional,
    Category::B2bPrograms,
];

impl Category {
    /// The wire/prompt label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ProductUpdates => "product_updates",
            Category::Promotions => "promotions",
            Category::OrderReorder => "order_reorder",
            Category::EventDriven => "event_driven",
            Category::CustomerRelationship => "customer_relationship",
            Category::EducationalContent => "educational_content",
            Category::Transactional => "transactional",
            Category::B2bPrograms => "b2b_programs",
        }
    }

    /// Subject/body style rules injected into the drafting prompt.
    pub fn guidance(&self) -> &'static str {
        match self {
            Category::ProductUpdates => {
                "Announce new collections, restocks, catalogs, or customization options. \
                 Subject: product-specific and clear (e.g. \"New Fall Line Now Available\"). \
                 Body: emphasize what is new and its benefits to the buyer."
            }
            Category::Promotions => {
                "Seasonal discounts, bundles, volume deals, or exclusive offers. \
                 Subject: urgency or savings (e.g. \"Exclusive 20% Off for Distributors\"). \
                 Body: focus on cost savings, the time-limited nature, and value."
            }
            Category::OrderReorder => {
                "Reorder reminders, upselling, abandoned-order nudges, or loyalty campaigns. \
                 Subject: gentle reminder (e.g. \"Time to Restock Your Bestsellers\"). \
                 Body: highlight reorder convenience, loyalty perks, or add-ons."
            }
            Category::EventDriven => {
                "Invitations to trade shows, webinars, product demos, or open houses. \
                 Subject: event-specific (e.g. \"Invitation: Live Demo at XYZ Expo\"). \
                 Body: share event details, benefits of attending, and a call to register."
            }
            Category::CustomerRelationship => {
                "Welcomes, thank-yous, appreciation, or success stories. \
                 Subject: relationship-oriented (e.g. \"Thank You for Your Partnership\"). \
                 Body: strengthen trust, share case studies, or express gratitude."
            }
            Category::EducationalContent => {
                "Insights, industry trends, guides, or compliance updates. \
                 Subject: informative (e.g. \"Top 5 Trends in Wholesale\"). \
                 Body: provide knowledge and position us as thought leaders."
            }
            Category::Transactional => {
                "Order/shipping/payment confirmations with subtle marketing. \
                 Subject: operational first (e.g. \"Order Confirmed - Explore Add-ons\"). \
                 Body: give the transactional info plus a relevant upsell suggestion."
            }
            Category::B2bPrograms => {
                "Dealer onboarding, incentive programs, new partnerships, or territory news. \
                 Subject: business-focused (e.g. \"Join Our Distributor Incentive Program\"). \
                 Body: highlight program benefits, ROI, and growth opportunities."
            }
        }
    }

    /// Map an interactive menu selection (`"1"`–`"8"`) to a category.
    ///
    /// Blank or unrecognized input defaults to `ProductUpdates`; bad input is
    /// corrected, not reported.
    pub fn from_menu_choice(input: &str) -> Category {
        match input.trim() {
            "1" => Category::ProductUpdates,
            "2" => Category::Promotions,
            "3" => Category::OrderReorder,
            "4" => Category::EventDriven,
            "5" => Category::CustomerRelationship,
            "6" => Category::EducationalContent,
            "7" => Category::Transactional,
            "8" => Category::B2bPrograms,
            _ => Category::ProductUpdates,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
