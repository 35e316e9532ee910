use maud::{html, Markup};

use crate::names;

pub enum LoginState {
    NoError,
    IncorrectCredentials,
}

pub fn login(state: LoginState) -> Markup {
    let error_msg = match state {
        LoginState::NoError => None,
        LoginState::IncorrectCredentials => Some("Invalid credentials. Please try again."),
    };

    html! {
        h1 { "Log in" }
        article style="width: fit-content;" {
            form action=(names::LOGIN_URL) method="post" {
                label {
                    "Username"
                    @if error_msg.is_some() {
                        input name="username"
                              type="text"
                              autocomplete="username"
                              required="true"
                              aria-invalid="true"
                              aria-label="Username";
                    } @else {
                        input name="username"
                              type="text"
                              autocomplete="username"
                              required="true"
                              aria-label="Username";
                    }
                }
                label {
                    "Password"
                    @if error_msg.is_some() {
                        input name="password"
                              type="password"
                              autocomplete="current-password"
                              required="true"
                              aria-invalid="true"
                              aria-label="Password";
                    } @else {
                        input name="password"
                              type="password"
                              autocomplete="current-password"
                              required="true"
                              aria-label="Password";
                    }
                }
                @if let Some(msg) = error_msg {
                    p."error" { (msg) }
                }
                button type="submit" { "Log in" }
            }
        }
    }
}
