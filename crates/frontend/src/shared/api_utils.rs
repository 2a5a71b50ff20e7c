//! Адрес бэкенда для запросов из браузера.

const BACKEND_PORT: u16 = 3000;

fn backend_origin(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Base URL of the backend: the page's host on the backend port.
///
/// Empty when there is no window, so callers fall back to relative paths.
pub fn api_base() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return String::new();
    };
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    backend_origin(&protocol, &hostname)
}

/// Full URL for a backend path such as `/api/kpi/summary`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_origin() {
        assert_eq!(backend_origin("http:", "localhost"), "http://localhost:3000");
        assert_eq!(backend_origin("https:", "kpi.ncc.local"), "https://kpi.ncc.local:3000");
    }
}
