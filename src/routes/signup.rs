//! Sign-up screen: a thin wrapper choosing the registration form variant.
//! On success the form prompts the user to log in with the new account.

use crate::components::AuthCard;
use crate::features::auth::{fields::SIGN_UP_FORM, form::AuthForm};
use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <AuthCard>
            <AuthForm spec=&SIGN_UP_FORM />
        </AuthCard>
    }
}
