//! In-memory user, session and activity store.
//!
//! Holds the app's bookkeeping: a user/role list, a generated-banks counter
//! with fixed cpu/memory gauges, and an activity log. Handlers receive a
//! cloned [`Store`] handle through the application state instead of
//! reaching for globals. Nothing here survives a restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ulid::Ulid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Trainer,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Trainer => "trainer",
            Role::Employee => "employee",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "trainer" => Some(Role::Trainer),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub role: Role,
    password: Option<String>,
}

/// Point-in-time snapshot for the dashboard and reports pages. The cpu and
/// memory gauges are fixture values, only the bank counter moves.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub cpu_usage: &'static str,
    pub memory_usage: &'static str,
    pub banks_generated: u64,
}

struct Inner {
    users: Vec<User>,
    sessions: HashMap<String, String>,
    logs: Vec<String>,
    banks_generated: u64,
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

impl Store {
    /// An empty store with no users, no sessions and zeroed activity.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                users: Vec::new(),
                sessions: HashMap::new(),
                logs: Vec::new(),
                banks_generated: 0,
            })),
        }
    }

    /// A store preloaded with the stock deployment fixture: one user per
    /// role, the activity counter and the startup log lines.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.users = vec![
                User {
                    username: "admin".to_owned(),
                    role: Role::Admin,
                    password: Some("adminpass".to_owned()),
                },
                User {
                    username: "trainer".to_owned(),
                    role: Role::Trainer,
                    password: Some("trainerpass".to_owned()),
                },
                User {
                    username: "employee".to_owned(),
                    role: Role::Employee,
                    password: Some("employeepass".to_owned()),
                },
            ];
            inner.logs = vec![
                "System initialized".to_owned(),
                "User admin logged in".to_owned(),
                "Question bank generated".to_owned(),
            ];
            inner.banks_generated = 34;
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Dummy credential check: plaintext comparison against the stored
    /// password. Users added through the admin console have none and can
    /// never log in.
    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        self.lock()
            .users
            .iter()
            .any(|u| u.username == username && u.password.as_deref() == Some(password))
    }

    pub fn create_session(&self, username: &str) -> String {
        let token = Ulid::new().to_string();
        let mut inner = self.lock();
        inner.sessions.insert(token.clone(), username.to_owned());
        inner.logs.push(format!("User {username} logged in"));
        tracing::info!("new session created for {username}");
        token
    }

    pub fn user_by_session(&self, token: &str) -> Option<User> {
        let inner = self.lock();
        let username = inner.sessions.get(token)?;
        inner.users.iter().find(|u| &u.username == username).cloned()
    }

    pub fn remove_session(&self, token: &str) {
        self.lock().sessions.remove(token);
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn add_user(&self, username: &str, role: Role) {
        let mut inner = self.lock();
        inner.users.push(User {
            username: username.to_owned(),
            role,
            password: None,
        });
        inner.logs.push(format!("User {username} added"));
        tracing::info!("user {username} added with role {}", role.as_str());
    }

    /// Removes every user with this username along with their sessions.
    pub fn remove_user(&self, username: &str) {
        let mut inner = self.lock();
        inner.users.retain(|u| u.username != username);
        inner.sessions.retain(|_, owner| owner != username);
        inner.logs.push(format!("User {username} removed"));
        tracing::info!("user {username} removed");
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            cpu_usage: "15%",
            memory_usage: "45%",
            banks_generated: self.lock().banks_generated,
        }
    }

    pub fn logs(&self) -> Vec<String> {
        self.lock().logs.clone()
    }

    pub fn record_bank(&self, topic: &str, difficulty: &str) {
        let mut inner = self.lock();
        inner.banks_generated += 1;
        inner
            .logs
            .push(format!("Question bank generated ({topic}, {difficulty})"));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
