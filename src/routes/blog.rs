//! Blog index. Load failures are logged and shown as an empty state; the page
//! never blocks on content.

use crate::components::{SiteShell, Spinner};
use crate::features::blog::{client, types::BlogPost};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = LocalResource::new(|| async {
        client::list_posts().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load blog posts");
            Vec::new()
        })
    });

    view! {
        <SiteShell>
            <section class="pt-16 pb-24 px-4">
                <div class="max-w-7xl mx-auto">
                    <h1 class="font-bold text-4xl sm:text-5xl mb-4">
                        "Trading " <span class="text-amber-300">"Insights"</span>
                    </h1>
                    <p class="text-slate-400 text-lg mb-12">
                        "Strategies, market analysis and lessons from the desk."
                    </p>
                    {move || match posts.get() {
                        None => view! {
                            <div class="flex justify-center py-16">
                                <Spinner />
                            </div>
                        }
                        .into_any(),
                        Some(posts) if posts.is_empty() => view! {
                            <p class="text-slate-400">"No posts yet. Check back soon."</p>
                        }
                        .into_any(),
                        Some(posts) => view! {
                            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                                {posts.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </section>
        </SiteShell>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = paths::blog_post(&post.slug);
    let published = post.published_label();

    view! {
        <A href=href {..} class="group block bg-slate-900/50 border border-slate-800 rounded-xl overflow-hidden hover:border-blue-500/50 transition-all">
            <img src=post.image_url alt=post.title.clone() class="h-48 w-full object-cover" />
            <div class="p-6">
                <div class="flex flex-wrap gap-2 mb-3">
                    {post
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full bg-blue-600/20 px-2 py-0.5 text-xs text-blue-300">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <h2 class="font-semibold text-xl mb-2 group-hover:text-blue-400 transition-colors">
                    {post.title}
                </h2>
                <p class="text-slate-400 text-sm mb-4">{post.excerpt}</p>
                <p class="text-xs text-slate-500">{format!("{} · {}", post.author, published)}</p>
            </div>
        </A>
    }
}
