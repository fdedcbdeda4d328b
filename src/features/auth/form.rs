//! Shared form controller for the login and sign-up screens. The two
//! variants differ only by their [`FormSpec`]; the controller owns the field
//! values, the inline validation errors, and the submission machine.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{
    client,
    fields::{FieldKind, FieldSpec, FormSpec},
    submission::{Phase, Submission, Ticket},
    types::FormValues,
    validate::{ValidationResult, validate},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

#[derive(Clone)]
/// Captures one attempt for the async action without borrowing signals.
struct SubmitJob {
    ticket: Ticket,
    endpoint: &'static str,
    values: FormValues,
}

/// Renders one account form and drives it through validation, submission,
/// and the result banners. Validation failures render inline under their
/// fields and never reach the network; the machine only runs once the field
/// list validates clean.
#[component]
pub fn AuthForm(spec: &'static FormSpec) -> impl IntoView {
    let values = RwSignal::new(FormValues::new());
    let field_errors = RwSignal::new(ValidationResult::new());
    let submission = RwSignal::new(Submission::new(spec.success_message, spec.fallback_error));

    let submit_action = Action::new_local(move |job: &SubmitJob| {
        let job = job.clone();
        async move {
            let outcome = client::submit(job.endpoint, &job.values).await;
            (job.ticket, outcome)
        }
    });

    Effect::new(move |_| {
        if let Some((ticket, outcome)) = submit_action.value().get() {
            submission.update(|state| state.finish(ticket, &outcome));
            if submission.with_untracked(|state| state.phase() == Phase::Succeeded) {
                values.set(FormValues::new());
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if submission.with_untracked(Submission::is_submitting) {
            return;
        }

        let current = values.get_untracked();
        let errors = validate(spec.fields, &current);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(ValidationResult::new());

        let mut ticket = None;
        submission.update(|state| {
            state.reset();
            ticket = state.begin();
        });
        if let Some(ticket) = ticket {
            submit_action.dispatch(SubmitJob {
                ticket,
                endpoint: spec.endpoint,
                values: current,
            });
        }
    };

    let on_switch = move |_| {
        values.set(FormValues::new());
        field_errors.set(ValidationResult::new());
        submission.update(Submission::reset);
    };

    let submitting = Signal::derive(move || submission.with(Submission::is_submitting));

    view! {
        <form class="w-full" novalidate=true on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                {spec.heading}
            </h1>

            {spec
                .fields
                .iter()
                .map(|field| field_row(field, values, field_errors))
                .collect_view()}

            {move || {
                submission
                    .with(|state| match state.phase() {
                        Phase::Succeeded => Some((AlertKind::Success, state.message().to_string())),
                        Phase::Failed => Some((AlertKind::Error, state.message().to_string())),
                        Phase::Idle | Phase::Submitting => None,
                    })
                    .map(|(kind, message)| {
                        view! {
                            <div class="mb-5">
                                <Alert kind=kind message=message />
                            </div>
                        }
                    })
            }}

            <Button button_type="submit" disabled=submitting>
                {move || if submitting.get() { "Please wait..." } else { spec.submit_label }}
            </Button>

            {move || submitting.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}

            <div class="mt-6 text-sm text-gray-500 dark:text-gray-400">
                <span>{spec.switch_prompt}</span>
                " "
                <A
                    href=spec.switch_href
                    {..}
                    class="font-medium text-indigo-600 hover:underline dark:text-indigo-400"
                    on:click=on_switch
                >
                    {spec.switch_label}
                </A>
            </div>
        </form>
    }
}

/// Renders one labeled input with its inline validation error.
fn field_row(
    field: &'static FieldSpec,
    values: RwSignal<FormValues>,
    field_errors: RwSignal<ValidationResult>,
) -> impl IntoView {
    let key = field.key;
    let input_type = match field.kind {
        FieldKind::Password => "password",
        FieldKind::Text => "text",
    };

    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for=key>
                {field.label}
            </label>
            <input
                id=key
                type=input_type
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-indigo-500 dark:focus:border-indigo-500"
                placeholder=field.placeholder
                autocomplete=field.autocomplete
                prop:value=move || values.with(|map| map.get(key).cloned().unwrap_or_default())
                on:input=move |event| {
                    values.update(|map| {
                        map.insert(key, event_target_value(&event));
                    });
                }
            />
            {move || {
                field_errors
                    .with(|errors| errors.get(key).cloned())
                    .map(|message| {
                        view! { <p class="mt-2 text-sm text-red-600 dark:text-red-500">{message}</p> }
                    })
            }}
        </div>
    }
}
