use contracts::shared::validation::{is_plausible_email, is_plausible_phone};
use contracts::system::auth::{RegisterRequest, VerifyChannel, VerifyCodeRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_session};

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    SignIn,
    Register,
    Verify,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (mode, set_mode) = signal(AuthMode::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (verify_channel, set_verify_channel) = signal(VerifyChannel::Email);
    let (verify_target, set_verify_target) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let switch_mode = move |next: AuthMode| {
        set_mode.set(next);
        set_error_message.set(None);
    };

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    session.establish(response);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Sign-in failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            full_name: full_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            password: password.get(),
        };

        if request.full_name.is_empty() {
            set_error_message.set(Some("Enter your name.".to_string()));
            return;
        }
        if !is_plausible_email(&request.email) {
            set_error_message.set(Some("That email address does not look right.".to_string()));
            return;
        }
        if !is_plausible_phone(&request.phone) {
            set_error_message.set(Some("That phone number does not look right.".to_string()));
            return;
        }
        if request.password.len() < 8 {
            set_error_message.set(Some("Password must be at least 8 characters.".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::register(request).await {
                Ok(response) => {
                    set_verify_channel.set(response.channel);
                    set_verify_target.set(response.target);
                    set_mode.set(AuthMode::Verify);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Registration failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = VerifyCodeRequest {
            channel: verify_channel.get(),
            target: verify_target.get(),
            code: code.get().trim().to_string(),
        };

        if request.code.is_empty() {
            set_error_message.set(Some("Enter the code you received.".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::verify_code(request).await {
                Ok(response) => {
                    session.establish(response);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Verification failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Adboard"</h1>
                <h2>
                    {move || match mode.get() {
                        AuthMode::SignIn => "Sign in",
                        AuthMode::Register => "Create account",
                        AuthMode::Verify => "Confirm your contact",
                    }}
                </h2>

                <Show when=move || session.expired_notice.get() && mode.get() == AuthMode::SignIn>
                    <div class="info-box">
                        "Your session has expired. Please sign in again."
                    </div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <Show when=move || mode.get() == AuthMode::SignIn>
                    <form on:submit=on_sign_in>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                    <div class="login-info">
                        <p>
                            "New here? "
                            <a href="#" on:click=move |ev| { ev.prevent_default(); switch_mode(AuthMode::Register); }>
                                "Create an account"
                            </a>
                        </p>
                    </div>
                </Show>

                <Show when=move || mode.get() == AuthMode::Register>
                    <form on:submit=on_register>
                        <div class="form-group">
                            <label for="full-name">"Full name"</label>
                            <input
                                type="text"
                                id="full-name"
                                prop:value=move || full_name.get()
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="reg-email">"Email"</label>
                            <input
                                type="email"
                                id="reg-email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="reg-phone">"Phone"</label>
                            <input
                                type="tel"
                                id="reg-phone"
                                placeholder="+919876543210"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="reg-password">"Password"</label>
                            <input
                                type="password"
                                id="reg-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Creating..." } else { "Create account" }}
                        </button>
                    </form>
                    <div class="login-info">
                        <p>
                            "Already registered? "
                            <a href="#" on:click=move |ev| { ev.prevent_default(); switch_mode(AuthMode::SignIn); }>
                                "Sign in"
                            </a>
                        </p>
                    </div>
                </Show>

                <Show when=move || mode.get() == AuthMode::Verify>
                    <form on:submit=on_verify>
                        <p class="login-hint">
                            "We sent a code to your "
                            {move || verify_channel.get().display_name()}
                            " "
                            <strong>{move || verify_target.get()}</strong>
                        </p>
                        <div class="form-group">
                            <label for="verify-code">"Verification code"</label>
                            <input
                                type="text"
                                id="verify-code"
                                inputmode="numeric"
                                prop:value=move || code.get()
                                on:input=move |ev| set_code.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Checking..." } else { "Confirm" }}
                        </button>
                    </form>
                    <div class="login-info">
                        <p>
                            <a href="#" on:click=move |ev| { ev.prevent_default(); switch_mode(AuthMode::SignIn); }>
                                "Back to sign in"
                            </a>
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
