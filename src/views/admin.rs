use maud::{html, Markup};

use crate::names;
use crate::store::{Metrics, Role, User};

fn admin_nav() -> Markup {
    html! {
        nav {
            ul {
                li { a href=(names::ADMIN_URL) { "Dashboard" } }
                li { a href=(names::ADMIN_USERS_URL) { "Users" } }
                li { a href=(names::ADMIN_REPORTS_URL) { "Reports" } }
                li { a href=(names::ADMIN_ISSUES_URL) { "Issues" } }
            }
        }
    }
}

pub fn dashboard(metrics: &Metrics, logs: &[String]) -> Markup {
    html! {
        h1 { "Admin dashboard" }
        (admin_nav())

        article {
            h2 { "System metrics" }
            table {
                tbody {
                    tr {
                        td { "CPU usage" }
                        td { (metrics.cpu_usage) }
                    }
                    tr {
                        td { "Memory usage" }
                        td { (metrics.memory_usage) }
                    }
                    tr {
                        td { "Question banks generated" }
                        td { (metrics.banks_generated) }
                    }
                }
            }
        }

        article {
            h2 { "Activity log" }
            ul {
                @for line in logs {
                    li { (line) }
                }
            }
        }
    }
}

pub fn users(users: &[User], message: Option<&str>) -> Markup {
    html! {
        h1 { "User management" }
        (admin_nav())

        @if let Some(msg) = message {
            p { (msg) }
        }

        article {
            table {
                thead { tr {
                    th { "Username" }
                    th { "Role" }
                    th { }
                } }
                tbody {
                    @for user in users {
                        tr {
                            td { (user.username) }
                            td { (user.role.as_str()) }
                            td {
                                form action=(names::delete_user_url(&user.username)) method="post" {
                                    button type="submit" class="outline" { "Remove" }
                                }
                            }
                        }
                    }
                }
            }
        }

        article style="width: fit-content;" {
            h2 { "Add user" }
            form action=(names::ADMIN_USERS_URL) method="post" {
                label {
                    "Username"
                    input name="username" type="text" required="true" aria-label="Username";
                }
                label {
                    "Role"
                    select name="role" aria-label="Role" {
                        @for role in [Role::Admin, Role::Trainer, Role::Employee] {
                            option value=(role.as_str()) { (role.as_str()) }
                        }
                    }
                }
                button type="submit" { "Add" }
            }
        }
    }
}

pub struct Report {
    pub total_users: usize,
    pub banks_generated: u64,
    pub cpu_usage: &'static str,
    pub memory_usage: &'static str,
}

pub fn reports(report: &Report) -> Markup {
    html! {
        h1 { "Reports" }
        (admin_nav())

        article {
            table {
                tbody {
                    tr {
                        td { "Total users" }
                        td { (report.total_users) }
                    }
                    tr {
                        td { "Total question banks generated" }
                        td { (report.banks_generated) }
                    }
                    tr {
                        td { "CPU usage" }
                        td { (report.cpu_usage) }
                    }
                    tr {
                        td { "Memory usage" }
                        td { (report.memory_usage) }
                    }
                }
            }
        }
    }
}

pub fn issues() -> Markup {
    html! {
        h1 { "Issue resolution" }
        (admin_nav())

        article {
            p { "No open issues. Issue tracking lands here once reporting is wired up." }
        }
    }
}
