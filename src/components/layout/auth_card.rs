//! Centered card wrapper for the account screens. The auth forms render
//! inside this frame with the product mark on top, without the app chrome.

use leptos::prelude::*;

/// Wraps an auth form in the centered logo card.
#[component]
pub fn AuthCard(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-10 bg-gray-50 dark:bg-gray-900">
            <div class="w-full max-w-md rounded-2xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800 sm:p-8">
                <div class="mb-6 text-center text-2xl font-black tracking-tight text-indigo-600 dark:text-indigo-400">
                    "QuizDeck"
                </div>
                {children()}
            </div>
        </div>
    }
}
