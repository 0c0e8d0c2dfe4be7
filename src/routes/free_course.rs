use crate::components::SiteShell;
use crate::features::course::{LESSONS, total_minutes};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn FreeCoursePage() -> impl IntoView {
    view! {
        <SiteShell>
            <section class="pt-16 pb-12 px-4">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="font-bold text-4xl sm:text-5xl mb-6">
                        "Free " <span class="text-amber-300">"Beginner Trading Course"</span>
                    </h1>
                    <p class="text-slate-400 text-lg">
                        "Start your trading journey with our comprehensive 5-lesson course designed for complete beginners."
                    </p>
                    <p class="mt-2 text-sm text-slate-500">
                        {format!("{} lessons, {} minutes total", LESSONS.len(), total_minutes())}
                    </p>
                </div>
            </section>
            <section class="pb-16 px-4">
                <div class="max-w-4xl mx-auto space-y-4">
                    {LESSONS
                        .iter()
                        .map(|lesson| {
                            view! {
                                <div class="bg-slate-900/50 border border-slate-800 p-6 rounded-xl">
                                    <div class="flex items-start gap-4">
                                        <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-full bg-blue-600/20 text-blue-300 font-bold">
                                            {lesson.number}
                                        </div>
                                        <div class="flex-1">
                                            <h3 class="font-semibold text-xl mb-1">{lesson.title}</h3>
                                            <p class="text-sm text-slate-400">{lesson.duration_label()}</p>
                                            <ul class="mt-3 grid gap-1 sm:grid-cols-3 text-sm text-slate-300">
                                                {lesson
                                                    .topics
                                                    .iter()
                                                    .map(|topic| view! { <li>{*topic}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="pb-24 px-4 text-center">
                <h2 class="font-bold text-2xl mb-4">"Ready to begin?"</h2>
                <p class="text-slate-400 mb-6">
                    "Sign up now to access all lessons and start your trading journey."
                </p>
                <A
                    href=paths::HOME
                    {..}
                    class="inline-block rounded-lg bg-blue-600 px-8 py-3 font-medium text-white hover:bg-blue-500"
                >
                    "Get Started"
                </A>
            </section>
        </SiteShell>
    }
}
