use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};

use api_client::api::auth as auth_api;
use api_client::session::Session;
use shared_types::{LoginRequest, Role};

use crate::auth::{self, use_auth};
use crate::routes::Route;

/// Login page. On success the token and profile land in local storage and
/// the user is sent to the dashboard for their role.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        match auth_api::login(&request).await {
            Ok(response) => {
                // Older backend builds returned the bare token, so fall back
                // to the JWT role claim and the submitted email when the
                // profile fields are absent.
                let role = match response.role.as_deref() {
                    Some(name) => Role::from_str_or_default(name),
                    None => api_client::jwt::decode_claims(&response.token)
                        .map(|claims| Role::from_str_or_default(&claims.role))
                        .unwrap_or_default(),
                };
                let session = Session {
                    token: response.token,
                    role,
                    email: response.email.unwrap_or_else(|| request.email.clone()),
                    username: response.username.unwrap_or_else(|| request.email.clone()),
                    user_id: None,
                };
                let destination = auth::dashboard_route(session.role);
                auth::start_session(&mut auth, session);
                navigator().push(destination);
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
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
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
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Signup {}, "Sign up here" }
                    }
                }
            }
        }
    }
}
