//! Static form metadata. One table per form variant drives both rendering
//! and validation, so the two can never disagree about which fields exist.

/// Input kind, controlling the rendered `type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
}

/// Static description of one form input.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Key used for the value map, the wire body, and validation errors.
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub autocomplete: &'static str,
}

/// Static description of one form variant: its fields, endpoint, fixed
/// messages, and the link to the sibling form.
pub struct FormSpec {
    pub heading: &'static str,
    pub fields: &'static [FieldSpec],
    /// API path the form posts to; the origin comes from configuration.
    pub endpoint: &'static str,
    pub submit_label: &'static str,
    pub success_message: &'static str,
    /// Shown when the server rejects without a usable message.
    pub fallback_error: &'static str,
    pub switch_prompt: &'static str,
    pub switch_label: &'static str,
    pub switch_href: &'static str,
}

const SIGN_UP_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "firstName",
        label: "First name",
        placeholder: "Ada",
        kind: FieldKind::Text,
        required: true,
        autocomplete: "given-name",
    },
    FieldSpec {
        key: "lastName",
        label: "Last name",
        placeholder: "Lovelace",
        kind: FieldKind::Text,
        required: true,
        autocomplete: "family-name",
    },
    FieldSpec {
        key: "email",
        label: "Email",
        placeholder: "name@inbox.im",
        kind: FieldKind::Text,
        required: true,
        autocomplete: "email",
    },
    FieldSpec {
        key: "password",
        label: "Password",
        placeholder: "",
        kind: FieldKind::Password,
        required: true,
        autocomplete: "new-password",
    },
];

const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "email",
        label: "Email",
        placeholder: "name@inbox.im",
        kind: FieldKind::Text,
        required: true,
        autocomplete: "email",
    },
    FieldSpec {
        key: "password",
        label: "Password",
        placeholder: "",
        kind: FieldKind::Password,
        required: true,
        autocomplete: "current-password",
    },
];

pub static SIGN_UP_FORM: FormSpec = FormSpec {
    heading: "Create account",
    fields: SIGN_UP_FIELDS,
    endpoint: "/auth/register",
    submit_label: "Sign up",
    success_message: "Success! Try to log in now!",
    fallback_error: "Something went wrong. Please try again.",
    switch_prompt: "Already have an account?",
    switch_label: "Log in",
    switch_href: "/auth/login",
};

pub static LOGIN_FORM: FormSpec = FormSpec {
    heading: "Log in",
    fields: LOGIN_FIELDS,
    endpoint: "/auth/login",
    submit_label: "Log in",
    success_message: "Login successfully",
    fallback_error: "Email or password is incorrect",
    switch_prompt: "Don't have an account?",
    switch_label: "Sign up",
    switch_href: "/auth/sign-up",
};

#[cfg(test)]
mod tests {
    use super::{FieldKind, FormSpec, LOGIN_FORM, SIGN_UP_FORM};

    fn keys(spec: &FormSpec) -> Vec<&'static str> {
        spec.fields.iter().map(|field| field.key).collect()
    }

    #[test]
    fn sign_up_form_lists_all_four_fields_in_order() {
        assert_eq!(
            keys(&SIGN_UP_FORM),
            vec!["firstName", "lastName", "email", "password"]
        );
    }

    #[test]
    fn login_form_lists_email_and_password() {
        assert_eq!(keys(&LOGIN_FORM), vec!["email", "password"]);
    }

    #[test]
    fn field_keys_are_unique_per_form() {
        for spec in [&SIGN_UP_FORM, &LOGIN_FORM] {
            let mut seen = keys(spec);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), spec.fields.len());
        }
    }

    #[test]
    fn every_field_is_required() {
        for spec in [&SIGN_UP_FORM, &LOGIN_FORM] {
            assert!(spec.fields.iter().all(|field| field.required));
        }
    }

    #[test]
    fn password_fields_render_masked() {
        for spec in [&SIGN_UP_FORM, &LOGIN_FORM] {
            let password = spec
                .fields
                .iter()
                .find(|field| field.key == "password")
                .expect("missing password field");
            assert_eq!(password.kind, FieldKind::Password);
        }
    }

    #[test]
    fn forms_post_to_their_own_endpoints() {
        assert_eq!(SIGN_UP_FORM.endpoint, "/auth/register");
        assert_eq!(LOGIN_FORM.endpoint, "/auth/login");
        assert_ne!(SIGN_UP_FORM.endpoint, LOGIN_FORM.endpoint);
    }

    #[test]
    fn switch_links_point_at_the_sibling_form() {
        assert_eq!(SIGN_UP_FORM.switch_href, "/auth/login");
        assert_eq!(LOGIN_FORM.switch_href, "/auth/sign-up");
    }
}
