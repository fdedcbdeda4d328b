//! Landing page after account entry. Quiz browsing and hosting live in a
//! separate surface; this stays minimal.

use crate::app_lib::build_info::git_commit_hash;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 dark:bg-gray-900">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"QuizDeck"</h1>
            <p class="text-gray-500 dark:text-gray-400">"You are signed in and ready to play."</p>
            <A
                href="/auth/login"
                {..}
                class="text-sm font-medium text-indigo-600 hover:underline dark:text-indigo-400"
            >
                "Back to login"
            </A>
            <p class="text-xs text-gray-400 dark:text-gray-600">
                {format!("build {}", git_commit_hash())}
            </p>
        </div>
    }
}
