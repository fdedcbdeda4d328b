mod home;
mod login;
mod signup;

pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use signup::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

/// Maps URL paths to screens. Unknown paths under `/auth` fall back to the
/// login screen; anything else redirects to `/auth/login`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path="/auth/login" /> }>
            <Route path=path!("/auth/login") view=LoginPage />
            <Route path=path!("/auth/sign-up") view=SignUpPage />
            <Route path=path!("/auth/*any") view=LoginPage />
            <Route path=path!("/home") view=HomePage />
        </Routes>
    }
}
