//! Login screen: a thin wrapper choosing the login form variant.

use crate::components::AuthCard;
use crate::features::auth::{fields::LOGIN_FORM, form::AuthForm};
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthCard>
            <AuthForm spec=&LOGIN_FORM />
        </AuthCard>
    }
}
