use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::catalog::{filter, CategoryFilter, CategoryOption, FilterCriteria};
use crate::components::newsletter::NewsletterSignup;
use crate::content::blog::{BlogCategory, BlogPost, BLOG_POSTS, FEATURED_POST};

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: &'static BlogPost,
    #[prop_or_default]
    featured: bool,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <article class={classes!("card", "post-card", props.featured.then(|| "featured"))}>
            <img class="post-image" src={post.image} alt={post.title} />
            <div class="post-body">
                <span class="post-category">{post.category.label()}</span>
                <h3>{post.title}</h3>
                <p>{post.excerpt}</p>
                <div class="post-meta">
                    <img src={post.author.avatar} alt={post.author.name} />
                    <div>
                        <strong>{post.author.name}</strong>
                        <span>{post.display_date()}</span>
                    </div>
                </div>
            </div>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let criteria = use_state(FilterCriteria::<BlogCategory>::default);

    let on_search = {
        let criteria = criteria.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            criteria.set((*criteria).clone().with_query(input.value()));
        })
    };

    let on_category = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            criteria.set((*criteria).clone().with_category(CategoryFilter::from_slug(&select.value())));
        })
    };

    let posts = filter(BLOG_POSTS, &*criteria);

    html! {
        <div class="page page-gradient blog-page">
            <style>{r#"
                .blog-controls {
                    display: flex;
                    gap: 1rem;
                    max-width: 44rem;
                    margin: 0 auto 3rem;
                }
                .blog-controls .search-input {
                    flex: 2;
                }
                .blog-controls .category-select {
                    flex: 1;
                }
                .post-card {
                    padding: 0;
                    overflow: hidden;
                }
                .post-card:hover {
                    transform: translateY(-6px);
                }
                .post-card.featured {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    margin-bottom: 3rem;
                }
                .post-image {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                    display: block;
                }
                .post-card.featured .post-image {
                    height: 100%;
                    min-height: 280px;
                }
                .post-body {
                    padding: 1.5rem;
                }
                .post-category {
                    display: inline-block;
                    padding: 0.2rem 0.75rem;
                    border-radius: 9999px;
                    background: #e0e7ff;
                    color: #4338ca;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .post-body h3 {
                    margin: 0.75rem 0;
                }
                .post-body p {
                    color: #4b5563;
                }
                .post-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .post-meta img {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                }
                .post-meta span {
                    display: block;
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                .blog-newsletter {
                    margin-top: 5rem;
                    text-align: center;
                }
                .blog-newsletter .newsletter-form {
                    max-width: 28rem;
                    margin: 1.5rem auto 0;
                }
                @media (max-width: 768px) {
                    .blog-controls {
                        flex-direction: column;
                    }
                    .post-card.featured {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
            <div class="container">
                <div class="page-header fade-in-up">
                    <span class="pill">{"Blog"}</span>
                    <h1>{"Insights & Resources"}</h1>
                    <p>{"Accounting tips, tax guides and product news from the team."}</p>
                </div>

                <div class="blog-controls">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search articles..."
                        value={criteria.query.clone()}
                        oninput={on_search}
                    />
                    <select class="category-select" onchange={on_category}>
                        <option value="all" selected={criteria.category.slug() == "all"}>
                            {"All Categories"}
                        </option>
                        {
                            BlogCategory::ALL.iter().map(|&category| html! {
                                <option
                                    value={category.slug()}
                                    selected={criteria.category.slug() == category.slug()}
                                >
                                    {category.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                if criteria.is_unfiltered() {
                    <PostCard post={&FEATURED_POST} featured=true />
                }

                if posts.is_empty() {
                    <div class="empty-state">
                        <h3>{"No articles match your search"}</h3>
                        <p>{"Try a different keyword or category."}</p>
                    </div>
                } else {
                    <div class="grid grid-3">
                        {
                            posts.into_iter().map(|post| html! {
                                <PostCard key={post.id} {post} />
                            }).collect::<Html>()
                        }
                    </div>
                }

                <div class="card blog-newsletter">
                    <h2>{"Stay in the loop"}</h2>
                    <p>{"Get the latest articles delivered to your inbox every month."}</p>
                    <NewsletterSignup />
                </div>
            </div>
        </div>
    }
}
