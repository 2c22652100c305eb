//! core/session.rs
//! The signed-in user, and the store the rest of the app reads it from.
//!
//! Every value here is synthetic: the demo authenticator builds a fixed
//! profile and nothing is checked against a server.

/// How the learner's avatar looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarConfig {
    pub base: String,
    pub color: String,
    pub accessory: Option<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base: "fox".into(),
            color: "orange".into(),
            accessory: Some("explorer-hat".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub id: String,
    pub nickname: String,
    pub grade_level: u8,
    pub avatar: AvatarConfig,
    pub xp: u32,
    pub level: u32,
    pub streak_days: u32,
    pub stars: u32,
    pub gems: u32,
    pub is_authenticated: bool,
}

impl UserSession {
    pub const DEMO_NICKNAME: &'static str = "Explorer";

    /// The fixed demo profile.
    pub fn demo() -> Self {
        Self {
            id: "demo-user-001".into(),
            nickname: Self::DEMO_NICKNAME.into(),
            grade_level: 3,
            avatar: AvatarConfig::default(),
            xp: 1250,
            level: 5,
            streak_days: 7,
            stars: 42,
            gems: 15,
            is_authenticated: true,
        }
    }

    /// Demo profile named after the email's local part ("sam@x.org" -> "Sam").
    pub fn demo_for_email(email: &str) -> Self {
        let mut session = Self::demo();
        if let Some(name) = nickname_from_email(email) {
            session.nickname = name;
        }
        session
    }
}

fn nickname_from_email(email: &str) -> Option<String> {
    let local = email.trim().split('@').next()?.trim();
    let mut chars = local.chars();
    let first = chars.next()?;
    if !first.is_alphabetic() {
        return None;
    }
    Some(first.to_uppercase().chain(chars).collect())
}

/// Holds the current session for the rest of the app.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<UserSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, session: UserSession) {
        tracing::info!(user = %session.id, nickname = %session.nickname, "session started");
        self.current = Some(session);
    }

    pub fn clear(&mut self) -> Option<UserSession> {
        let previous = self.current.take();
        if let Some(s) = &previous {
            tracing::info!(user = %s.id, "session ended");
        }
        previous
    }

    pub fn current(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.as_ref().is_some_and(|s| s.is_authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_session_is_authenticated_with_fixed_stats() {
        let s = UserSession::demo();
        assert!(s.is_authenticated);
        assert_eq!(s.nickname, "Explorer");
        assert_eq!((s.level, s.xp, s.streak_days), (5, 1250, 7));
        assert_eq!((s.stars, s.gems), (42, 15));
    }

    #[test]
    fn nickname_comes_from_email_local_part() {
        assert_eq!(UserSession::demo_for_email("sam@school.org").nickname, "Sam");
        assert_eq!(UserSession::demo_for_email("  ada ").nickname, "Ada");
        assert_eq!(UserSession::demo_for_email("42@x.org").nickname, "Explorer");
        assert_eq!(UserSession::demo_for_email("@x.org").nickname, "Explorer");
    }

    #[test]
    fn store_set_and_clear() {
        let mut store = SessionStore::new();
        assert!(!store.is_authenticated());

        store.set(UserSession::demo());
        assert!(store.is_authenticated());
        assert_eq!(store.current().map(|s| s.level), Some(5));

        assert!(store.clear().is_some());
        assert!(store.current().is_none());
        assert!(store.clear().is_none());
    }
}
