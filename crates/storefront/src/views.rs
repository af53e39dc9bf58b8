//! Card view-models and derived display math.
//!
//! The filter engine operates on [`CardView`] records, never on rendered
//! markup: filtering flips the `visible` flag and templates project it as
//! a `hidden` attribute. Display derivations (star glyphs, discount
//! percent, grouped currency digits) are cosmetic and cached nowhere.

use shopverse_core::Rating;

use crate::catalog::Product;

/// Filled star glyph.
const STAR_FULL: char = '\u{2605}'; // ★
/// Empty star glyph, also used as the half-step cue.
const STAR_EMPTY: char = '\u{2606}'; // ☆

/// What the filter engine and card templates consume for one product.
#[derive(Debug, Clone)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub brand: String,
    /// Raw aggregate rating; filters use `floor` of this, never the glyphs.
    pub rating: Rating,
    /// Selling price, whole currency units.
    pub price: i64,
    /// Strike-through reference price.
    pub mrp: i64,
    pub discount_percent: i64,
    pub image: String,
    pub purchase_link: String,
    /// Flipped by the filter engine; templates hide the card when false.
    pub visible: bool,
}

impl CardView {
    /// Project a catalog product into its card view-model.
    #[must_use]
    pub fn from_product(p: &Product) -> Self {
        Self {
            id: p.id.as_str().to_owned(),
            title: p.title.clone(),
            brand: p.brand.clone(),
            rating: p.rating,
            price: p.price,
            mrp: p.mrp,
            discount_percent: discount_percent(p.price, p.mrp),
            image: p.image.clone(),
            purchase_link: p.purchase_link.clone(),
            visible: true,
        }
    }
}

/// One brand checkbox in the sidebar.
#[derive(Debug, Clone)]
pub struct BrandFacet {
    pub name: String,
    /// Query-parameter field name (`brand_<name>`).
    pub field: String,
    pub checked: bool,
}

/// What the sidebar template consumes: current selections projected back
/// onto the controls.
#[derive(Debug, Clone)]
pub struct SidebarView {
    pub brands: Vec<BrandFacet>,
    /// Empty string when the bound is at its default.
    pub price_gte: String,
    pub price_lte: String,
    pub stars_gte: i32,
    pub query: String,
    /// Where the clear-filters link points (the unfiltered page URL).
    pub clear_href: String,
}

impl SidebarView {
    /// Project the catalog's brands and the active filter state onto the
    /// sidebar controls.
    #[must_use]
    pub fn build(
        brand_names: &[String],
        fs: &crate::filter::FilterState,
        clear_href: impl Into<String>,
    ) -> Self {
        let brands = brand_names
            .iter()
            .map(|name| BrandFacet {
                field: format!("brand_{name}"),
                checked: fs.brands.contains(name),
                name: name.clone(),
            })
            .collect();

        Self {
            brands,
            price_gte: if fs.min_price > 0 {
                fs.min_price.to_string()
            } else {
                String::new()
            },
            price_lte: if fs.max_price < i64::MAX {
                fs.max_price.to_string()
            } else {
                String::new()
            },
            stars_gte: i32::from(fs.min_stars),
            query: fs.query.clone(),
            clear_href: clear_href.into(),
        }
    }
}

/// Render a rating as a fixed-width row of 5 star glyphs.
///
/// Full stars for the whole part, an extra cue glyph when the fractional
/// part is at least one half, padded with empty stars. Purely cosmetic;
/// the minimum-stars filter uses [`Rating::floor_stars`] directly.
#[must_use]
pub fn star_glyphs(rating: Rating) -> String {
    let full = usize::from(rating.floor_stars());
    let mut s = String::with_capacity(5 * STAR_FULL.len_utf8());
    for _ in 0..full.min(5) {
        s.push(STAR_FULL);
    }
    if rating.has_half_step() && s.chars().count() < 5 {
        s.push(STAR_EMPTY);
    }
    while s.chars().count() < 5 {
        s.push(STAR_EMPTY);
    }
    s
}

/// Percentage off the reference price, rounded to the nearest integer.
///
/// Callers must ensure `mrp > 0`; the seed catalog does. With
/// `0 < price <= mrp` the result lands in 0..=100.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn discount_percent(price: i64, mrp: i64) -> i64 {
    debug_assert!(mrp > 0, "discount_percent requires mrp > 0");
    ((1.0 - price as f64 / mrp as f64) * 100.0).round() as i64
}

/// Format a whole-rupee amount with Indian digit grouping.
///
/// The last group has 3 digits, every group before it has 2:
/// `109999` becomes `1,09,999`.
#[must_use]
pub fn format_inr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 {
            let rest = len - i;
            // Group boundary before the final 3 digits, then every 2.
            if rest == 3 || (rest > 3 && (rest - 3) % 2 == 0) {
                grouped.push(',');
            }
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn glyph_row_is_always_five_symbols() {
        let mut r = 0.0_f32;
        while r <= 5.0 {
            let glyphs = star_glyphs(Rating::clamped(r));
            assert_eq!(glyphs.chars().count(), 5, "rating {r}");
            r += 0.1;
        }
    }

    #[test]
    fn glyph_row_fills_floor_of_rating() {
        let mut r = 0.0_f32;
        while r <= 5.0 {
            let rating = Rating::clamped(r);
            let filled = star_glyphs(rating)
                .chars()
                .filter(|&c| c == STAR_FULL)
                .count();
            assert_eq!(filled, usize::from(rating.floor_stars()), "rating {r}");
            r += 0.25;
        }
    }

    #[test]
    fn half_step_cue_matches_threshold() {
        assert!(Rating::clamped(4.5).has_half_step());
        assert!(!Rating::clamped(4.4).has_half_step());
        // At 5.0 there is no room for a cue glyph.
        assert_eq!(star_glyphs(Rating::clamped(5.0)), "★★★★★");
    }

    #[test]
    fn whole_star_counts_fill_exactly_n() {
        assert_eq!(star_glyphs(Rating::clamped(4.0)), "★★★★☆");
        assert_eq!(star_glyphs(Rating::clamped(1.0)), "★☆☆☆☆");
        assert_eq!(star_glyphs(Rating::clamped(5.0)), "★★★★★");
    }

    #[test]
    fn discount_percent_known_values() {
        assert_eq!(discount_percent(59_999, 74_999), 20);
        assert_eq!(discount_percent(8_999, 12_999), 31);
        assert_eq!(discount_percent(100, 100), 0);
        assert_eq!(discount_percent(0, 100), 100);
    }

    #[test]
    fn discount_percent_stays_in_range() {
        for mrp in [1_i64, 7, 999, 4_599, 109_999] {
            for price in [0, mrp / 3, mrp / 2, mrp - 1, mrp] {
                let pct = discount_percent(price.max(0), mrp);
                assert!((0..=100).contains(&pct), "price={price} mrp={mrp} -> {pct}");
            }
        }
    }

    #[test]
    fn inr_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(2_999), "2,999");
        assert_eq!(format_inr(59_999), "59,999");
        assert_eq!(format_inr(109_999), "1,09,999");
        assert_eq!(format_inr(12_345_678), "1,23,45,678");
        assert_eq!(format_inr(-4_599), "-4,599");
    }

    #[test]
    fn sidebar_reflects_active_selections() {
        use std::collections::HashSet;

        let catalog = Catalog::seed();
        let fs = crate::filter::FilterState {
            brands: HashSet::from(["SoundHive".to_owned()]),
            min_price: 500,
            min_stars: 3,
            ..crate::filter::FilterState::default()
        };
        let sidebar = SidebarView::build(&catalog.brands(), &fs, "/");

        let soundhive = sidebar
            .brands
            .iter()
            .find(|b| b.name == "SoundHive")
            .expect("seed has SoundHive");
        assert!(soundhive.checked);
        assert_eq!(soundhive.field, "brand_SoundHive");
        assert!(sidebar.brands.iter().filter(|b| b.checked).count() == 1);
        assert_eq!(sidebar.price_gte, "500");
        assert_eq!(sidebar.price_lte, "");
        assert_eq!(sidebar.stars_gte, 3);
        assert_eq!(sidebar.clear_href, "/");
    }

    #[test]
    fn card_view_projects_product_fields() {
        let catalog = Catalog::seed();
        let p4 = catalog
            .get(&shopverse_core::ProductId::new("p4"))
            .expect("seed has p4");
        let card = CardView::from_product(p4);
        assert_eq!(card.id, "p4");
        assert_eq!(card.brand, "SoundHive");
        assert_eq!(card.discount_percent, 30);
        assert!(card.visible);
    }
}
