use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(username: Option<&str>) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { "QuizSmith" }
                        }
                    }
                }
                ul {
                    @if let Some(username) = username {
                        li { (username) }
                        li {
                            a href=(names::ADMIN_URL) { "Admin" }
                        }
                        li {
                            form action=(names::LOGOUT_URL) method="post" {
                                button type="submit" class="link" { "Log out" }
                            }
                        }
                    } @else {
                        li {
                            a href=(names::LOGIN_URL) { "Log in" }
                        }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page_with_user(title: &str, body: Markup, username: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (icon())

            title { (format!("{title} - QuizSmith")) }
        }

        body."container" {
            (header(username))
            (main(body))
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    page_with_user(title, body, None)
}
