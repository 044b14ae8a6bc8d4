use dioxus::prelude::*;
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
    ToastOptions,
};

use api_client::api::auth as auth_api;
use shared_types::{Role, SignupRequest};

use crate::routes::Route;

/// Public signup page. Only student accounts can self-register; instructor
/// and admin accounts come from the admin user screen.
#[component]
pub fn Signup() -> Element {
    let toast = use_toast();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let request = SignupRequest {
            username: username(),
            email: email(),
            password: password(),
            role: Role::Student.wire_name().to_string(),
        };
        match auth_api::signup(&request).await {
            Ok(_) => {
                toast.success(
                    "Student account created successfully! Please login.".to_string(),
                    ToastOptions::new(),
                );
                navigator().push(Route::Login {});
            }
            Err(e) => {
                error_msg.set(Some(e.user_message()));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Student Account" }
                    CardDescription { "Sign up to start learning" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_signup,
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                placeholder: "Choose a username",
                                value: username(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Choose a password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Sign Up" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in here" }
                    }
                }
            }
        }
    }
}
