use chrono::NaiveDate;

use crate::catalog::{Categorized, CategoryOption, Searchable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlogCategory {
    Accounting,
    Tax,
    Business,
    Technology,
}

impl CategoryOption for BlogCategory {
    const ALL: &'static [Self] = &[
        BlogCategory::Accounting,
        BlogCategory::Tax,
        BlogCategory::Business,
        BlogCategory::Technology,
    ];

    fn slug(self) -> &'static str {
        match self {
            BlogCategory::Accounting => "accounting",
            BlogCategory::Tax => "tax",
            BlogCategory::Business => "business",
            BlogCategory::Technology => "technology",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BlogCategory::Accounting => "Accounting",
            BlogCategory::Tax => "Tax",
            BlogCategory::Business => "Business",
            BlogCategory::Technology => "Technology",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Author {
    pub name: &'static str,
    pub avatar: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub category: BlogCategory,
    pub author: Author,
    /// ISO `YYYY-MM-DD`.
    pub published: &'static str,
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    /// "December 15, 2023", or the raw string if it does not parse.
    pub fn display_date(&self) -> String {
        self.published_on()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.published.to_string())
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.excerpt]
    }
}

impl Categorized for BlogPost {
    type Category = BlogCategory;

    fn category(&self) -> BlogCategory {
        self.category
    }
}

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/100x100";

pub const FEATURED_POST: BlogPost = BlogPost {
    id: "future-of-ai-in-accounting",
    title: "The Future of AI in Accounting: 2024 Trends",
    excerpt: "Discover how artificial intelligence is revolutionizing the accounting industry and what it means for your business.",
    image: "https://via.placeholder.com/800x400",
    category: BlogCategory::Technology,
    author: Author {
        name: "Dr. Sarah Chen",
        avatar: PLACEHOLDER_AVATAR,
    },
    published: "2023-12-20",
};

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: "tax-planning-small-business",
        title: "Essential Tax Planning Strategies for Small Businesses",
        excerpt: "Learn the key tax planning strategies that can help your small business save money.",
        image: "https://via.placeholder.com/400x300",
        category: BlogCategory::Tax,
        author: Author {
            name: "John Smith",
            avatar: PLACEHOLDER_AVATAR,
        },
        published: "2023-12-15",
    },
    BlogPost {
        id: "understanding-cloud-accounting",
        title: "Understanding Cloud Accounting Software",
        excerpt: "A comprehensive guide to choosing and implementing cloud accounting solutions.",
        image: "https://via.placeholder.com/400x300",
        category: BlogCategory::Technology,
        author: Author {
            name: "Emily Brown",
            avatar: PLACEHOLDER_AVATAR,
        },
        published: "2023-12-10",
    },
    BlogPost {
        id: "financial-reporting-best-practices",
        title: "Financial Reporting Best Practices",
        excerpt: "Master the art of creating clear and effective financial reports for your stakeholders.",
        image: "https://via.placeholder.com/400x300",
        category: BlogCategory::Accounting,
        author: Author {
            name: "Michael Wong",
            avatar: PLACEHOLDER_AVATAR,
        },
        published: "2023-12-05",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, CategoryFilter, FilterCriteria};

    #[test]
    fn tax_query_finds_only_the_tax_planning_post() {
        let criteria = FilterCriteria::default().with_query("tax");
        let found = filter(BLOG_POSTS, &criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].title,
            "Essential Tax Planning Strategies for Small Businesses"
        );
    }

    #[test]
    fn business_category_is_empty_but_valid() {
        let criteria = FilterCriteria::category(BlogCategory::Business);
        assert!(filter(BLOG_POSTS, &criteria).is_empty());
    }

    #[test]
    fn technology_posts_keep_catalog_order() {
        let criteria = FilterCriteria::default()
            .with_category(CategoryFilter::from_slug("technology"));
        let ids: Vec<_> = filter(BLOG_POSTS, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["understanding-cloud-accounting"]);
    }

    #[test]
    fn dates_render_long_form() {
        assert_eq!(BLOG_POSTS[0].display_date(), "December 15, 2023");
        assert_eq!(FEATURED_POST.display_date(), "December 20, 2023");
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = BLOG_POSTS.iter().map(|p| p.id).collect();
        ids.push(FEATURED_POST.id);
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }
}
