#[cfg(target_arch = "wasm32")]
mod auth_callback;
#[cfg(target_arch = "wasm32")]
mod blog;
#[cfg(target_arch = "wasm32")]
mod blog_post;
#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod free_course;
#[cfg(target_arch = "wasm32")]
mod landing;
#[cfg(target_arch = "wasm32")]
mod not_found;
pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
pub(crate) use router::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod router {
    use super::auth_callback::AuthCallbackPage;
    use super::blog::BlogPage;
    use super::blog_post::BlogPostPage;
    use super::dashboard::DashboardPage;
    use super::free_course::FreeCoursePage;
    use super::landing::LandingPage;
    use super::not_found::NotFoundPage;
    use crate::features::auth::{RequireSession, navigation::Navigation};
    use leptos::prelude::*;
    use leptos_router::components::{Route, Routes};
    use leptos_router::hooks::use_location;
    use leptos_router::path;

    /// Resolves the fragment before any route matches: a login callback
    /// replaces the whole route table until it navigates away.
    #[component]
    pub fn AppRoutes() -> impl IntoView {
        let location = use_location();
        let is_callback = Memo::new(move |_| {
            location.hash.with(|hash| {
                location
                    .pathname
                    .with(|path| Navigation::resolve(path, hash).is_login_callback())
            })
        });

        view! {
            <Show
                when=move || !is_callback.get()
                fallback=move || {
                    let navigation = Navigation::resolve(
                        &location.pathname.get_untracked(),
                        &location.hash.get_untracked(),
                    );
                    match navigation {
                        Navigation::LoginCallback(callback) => {
                            view! { <AuthCallbackPage callback=callback /> }.into_any()
                        }
                        Navigation::Normal(_) => ().into_any(),
                    }
                }
            >
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:slug") view=BlogPostPage />
                    <Route path=path!("/free-course") view=FreeCoursePage />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <RequireSession><DashboardPage /></RequireSession> }
                    />
                </Routes>
            </Show>
        }
    }
}
