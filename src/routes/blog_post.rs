use crate::app_lib::AppError;
use crate::components::{SiteShell, Spinner};
use crate::features::blog::{client, types::BlogPost};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let post = LocalResource::new(move || {
        let slug = slug();
        async move { client::fetch_post(&slug).await }
    });

    view! {
        <SiteShell>
            <section class="pt-16 pb-24 px-4">
                <div class="max-w-3xl mx-auto">
                    <A href=paths::BLOG {..} class="text-sm text-slate-400 hover:text-white">
                        "← Back to blog"
                    </A>
                    {move || match post.get() {
                        None => view! {
                            <div class="flex justify-center py-16">
                                <Spinner />
                            </div>
                        }
                        .into_any(),
                        Some(Ok(post)) => view! { <Article post=post /> }.into_any(),
                        Some(Err(err)) => view! { <PostUnavailable err=err /> }.into_any(),
                    }}
                </div>
            </section>
        </SiteShell>
    }
}

#[component]
fn Article(post: BlogPost) -> impl IntoView {
    let published = post.published_label();
    let paragraphs: Vec<String> = post.paragraphs().into_iter().map(str::to_string).collect();

    view! {
        <article class="mt-8">
            <div class="flex flex-wrap gap-2 mb-4">
                {post
                    .tags
                    .iter()
                    .cloned()
                    .map(|tag| {
                        view! {
                            <span class="rounded-full bg-blue-600/20 px-2 py-0.5 text-xs text-blue-300">
                                {tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <h1 class="font-bold text-4xl mb-4">{post.title.clone()}</h1>
            <p class="text-sm text-slate-400 mb-8">{format!("{} · {}", post.author, published)}</p>
            <img src=post.image_url.clone() alt=post.title.clone() class="w-full rounded-xl mb-8" />
            <div class="space-y-6 text-lg leading-relaxed text-slate-300">
                {paragraphs.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
            </div>
        </article>
    }
}

#[component]
fn PostUnavailable(err: AppError) -> impl IntoView {
    tracing::warn!(error = %err, "failed to load blog post");

    view! {
        <div class="py-24 text-center">
            <h1 class="text-3xl font-bold mb-4">"Post not found"</h1>
            <A href=paths::BLOG {..} class="text-amber-300 hover:underline">
                "Browse all posts"
            </A>
        </div>
    }
}
