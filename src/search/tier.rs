use crate::models::Listing;

/// Promotion tier of a listing. Variants are declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PromotionTier {
    PremiumFeatured,
    Premium,
    Featured,
    Standard,
}

impl PromotionTier {
    pub const COUNT: usize = 4;

    pub fn of(listing: &Listing) -> Self {
        match (listing.premium, listing.featured) {
            (true, true) => PromotionTier::PremiumFeatured,
            (true, false) => PromotionTier::Premium,
            (false, true) => PromotionTier::Featured,
            (false, false) => PromotionTier::Standard,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Stable partition of an already sorted sequence into promotion tiers.
///
/// Tier outranks the primary sort; within a tier the incoming order is kept.
pub fn promote(sorted: Vec<&Listing>) -> Vec<&Listing> {
    let len = sorted.len();
    let mut tiers: [Vec<&Listing>; PromotionTier::COUNT] = Default::default();
    for listing in sorted {
        tiers[PromotionTier::of(listing).index()].push(listing);
    }

    let mut promoted = Vec::with_capacity(len);
    for tier in tiers {
        promoted.extend(tier);
    }
    promoted
}
