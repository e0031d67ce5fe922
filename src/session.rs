//! Session-cookie capture and replay.

use std::sync::{Mutex, PoisonError};

use reqwest::header::{HeaderMap, SET_COOKIE};

/// One `name=value` pair captured from a panel response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SessionCookie {
    pub name: String,
    pub value: String,
}

/// Cookies from the panel's most recent response, replayed on later calls
/// so the panel can skip its session handshake.
///
/// Every completed response replaces the held set wholesale, so an empty
/// response set clears prior state. A transport failure leaves it untouched.
/// Access is serialized through the mutex; the lock is only held for the
/// copy in/out, never across a request.
#[derive(Debug, Default)]
pub(crate) struct SessionStore {
    cookies: Mutex<Vec<SessionCookie>>,
}

impl SessionStore {
    /// Value for an outbound `Cookie` header, or `None` when nothing is held.
    pub(crate) fn cookie_header(&self) -> Option<String> {
        let cookies = self.lock();
        if cookies.is_empty() {
            return None;
        }
        Some(
            cookies
                .iter()
                .map(|cookie| format!("{}={}", cookie.name, cookie.value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Replaces the held set with the `Set-Cookie` values on `headers`.
    pub(crate) fn record(&self, headers: &HeaderMap) {
        let fresh: Vec<SessionCookie> = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();
        *self.lock() = fresh;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SessionCookie>> {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn seed(&self, cookies: Vec<SessionCookie>) {
        *self.lock() = cookies;
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Vec<SessionCookie> {
        self.lock().clone()
    }
}

/// Extracts the leading `name=value` pair of a `Set-Cookie` header,
/// discarding attributes such as `Path` or `HttpOnly`.
fn parse_set_cookie(header: &str) -> Option<SessionCookie> {
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(SessionCookie {
        name: name.to_owned(),
        value: value.trim().to_owned(),
    })
}
