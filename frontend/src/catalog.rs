//! Search and category filtering shared by the Blog, Help, Features,
//! Pricing and Download pages.
//!
//! Every content kind exposes its searchable text through [`Searchable`] and
//! its category through [`Categorized`]; [`filter`] only ever talks to those
//! two traits, so pages never reach into record fields directly.

/// Text fields a free-text query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Records that belong to exactly one category.
pub trait Categorized {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;
}

/// A closed set of categories that can round-trip through a `<select>` value.
pub trait CategoryOption: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn slug(self) -> &'static str;
    fn label(self) -> &'static str;
}

const ALL_SLUG: &str = "all";

/// Category selector with an explicit "everything" choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    pub fn admits(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl<C: CategoryOption> CategoryFilter<C> {
    /// Unknown values fall back to `All`.
    pub fn from_slug(slug: &str) -> Self {
        C::ALL
            .iter()
            .copied()
            .find(|category| category.slug() == slug)
            .map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SLUG,
            CategoryFilter::Only(category) => category.slug(),
        }
    }
}

/// The user's current query and category choice for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria<C> {
    pub query: String,
    pub category: CategoryFilter<C>,
}

impl<C> Default for FilterCriteria<C> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: Copy + PartialEq> FilterCriteria<C> {
    pub fn category(category: C) -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::Only(category),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter<C>) -> Self {
        self.category = category;
        self
    }

    /// True while nothing narrows the catalog down.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    /// Category must be admitted AND (query empty OR some field contains it).
    ///
    /// The query is matched literally apart from case: surrounding whitespace
    /// is significant.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Searchable + Categorized<Category = C>,
    {
        if !self.category.admits(record.category()) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Returns the records matching `criteria`, in catalog order.
pub fn filter<'a, R>(catalog: &'a [R], criteria: &FilterCriteria<R::Category>) -> Vec<&'a R>
where
    R: Searchable + Categorized,
{
    catalog.iter().filter(|record| criteria.matches(*record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Kind {
        Red,
        Green,
        Blue,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        title: String,
        body: String,
        kind: Kind,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.body.as_str()]
        }
    }

    impl Categorized for Item {
        type Category = Kind;

        fn category(&self) -> Kind {
            self.kind
        }
    }

    fn item(title: &str, body: &str, kind: Kind) -> Item {
        Item {
            title: title.to_string(),
            body: body.to_string(),
            kind,
        }
    }

    impl CategoryOption for Kind {
        const ALL: &'static [Self] = &[Kind::Red, Kind::Green, Kind::Blue];

        fn slug(self) -> &'static str {
            match self {
                Kind::Red => "red",
                Kind::Green => "green",
                Kind::Blue => "blue",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Kind::Red => "Red",
                Kind::Green => "Green",
                Kind::Blue => "Blue",
            }
        }
    }

    fn kind_strategy() -> impl Strategy<Value = Kind> {
        prop_oneof![Just(Kind::Red), Just(Kind::Green), Just(Kind::Blue)]
    }

    fn item_strategy() -> impl Strategy<Value = Item> {
        ("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,24}", kind_strategy())
            .prop_map(|(title, body, kind)| Item { title, body, kind })
    }

    fn criteria_strategy() -> impl Strategy<Value = FilterCriteria<Kind>> {
        let category = prop_oneof![
            Just(CategoryFilter::All),
            kind_strategy().prop_map(CategoryFilter::Only),
        ];
        ("[a-zA-Z ]{0,3}", category)
            .prop_map(|(query, category)| FilterCriteria { query, category })
    }

    fn owned(found: Vec<&Item>) -> Vec<Item> {
        found.into_iter().cloned().collect()
    }

    #[test]
    fn empty_catalog_gives_empty_result() {
        let catalog: Vec<Item> = Vec::new();
        let criteria = FilterCriteria::default().with_query("anything");
        assert!(filter(&catalog, &criteria).is_empty());
    }

    #[test]
    fn match_in_body_alone_is_enough() {
        let catalog = vec![
            item("Quarterly close", "Reconcile every ledger", Kind::Red),
            item("Payroll", "Monthly runs", Kind::Green),
        ];
        let criteria = FilterCriteria::default().with_query("LEDGER");
        let found = filter(&catalog, &criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Quarterly close");
    }

    #[test]
    fn category_and_query_must_both_hold() {
        let catalog = vec![
            item("Tax deadlines", "", Kind::Red),
            item("Tax software", "", Kind::Blue),
        ];
        let criteria = FilterCriteria::category(Kind::Blue).with_query("tax");
        let found = filter(&catalog, &criteria);
        assert_eq!(found, vec![&catalog[1]]);
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        let catalog = vec![
            item("cash flow", "", Kind::Red),
            item("cashflow", "", Kind::Red),
        ];
        let criteria = FilterCriteria::default().with_query(" flow");
        let found = filter(&catalog, &criteria);
        assert_eq!(found, vec![&catalog[0]]);

        let blank = FilterCriteria::<Kind>::default().with_query("   ");
        assert!(filter(&catalog, &blank).is_empty());
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(CategoryFilter::<Kind>::from_slug("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_slug("green"), CategoryFilter::Only(Kind::Green));
        assert_eq!(CategoryFilter::<Kind>::from_slug("purple"), CategoryFilter::All);
        assert_eq!(CategoryFilter::Only(Kind::Blue).slug(), "blue");
        assert_eq!(CategoryFilter::<Kind>::All.slug(), "all");
    }

    #[test]
    fn unfiltered_only_for_default_criteria() {
        assert!(FilterCriteria::<Kind>::default().is_unfiltered());
        assert!(!FilterCriteria::<Kind>::default().with_query("x").is_unfiltered());
        assert!(!FilterCriteria::category(Kind::Red).is_unfiltered());
    }

    proptest! {
        #[test]
        fn default_criteria_is_identity(catalog in prop::collection::vec(item_strategy(), 0..20)) {
            let found = owned(filter(&catalog, &FilterCriteria::default()));
            prop_assert_eq!(found, catalog);
        }

        #[test]
        fn category_filter_is_complete_and_ordered(
            catalog in prop::collection::vec(item_strategy(), 0..20),
            kind in kind_strategy(),
        ) {
            let found = owned(filter(&catalog, &FilterCriteria::category(kind)));
            let expected: Vec<Item> = catalog.iter().filter(|i| i.kind == kind).cloned().collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn query_has_no_false_positives_or_negatives(
            catalog in prop::collection::vec(item_strategy(), 0..20),
            query in "[a-zA-Z]{1,3}",
        ) {
            let criteria = FilterCriteria::default().with_query(query.clone());
            let found = filter(&catalog, &criteria);
            let needle = query.to_lowercase();
            for record in &catalog {
                let hit = record.title.to_lowercase().contains(&needle)
                    || record.body.to_lowercase().contains(&needle);
                prop_assert_eq!(hit, found.iter().any(|f| std::ptr::eq(*f, record)));
            }
        }

        #[test]
        fn filtering_is_idempotent(
            catalog in prop::collection::vec(item_strategy(), 0..20),
            criteria in criteria_strategy(),
        ) {
            let once = owned(filter(&catalog, &criteria));
            let twice = owned(filter(&once, &criteria));
            prop_assert_eq!(once, twice);
        }
    }
}
