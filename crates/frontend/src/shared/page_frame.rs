//! PageFrame: root wrapper for every screen.
//!
//! Sets `id` as `"{entity}--{category}"` (e.g. `"a001_kpi--admin"`) and
//! `data-page-category`, so a DOM id copied from the inspector leads straight
//! to the module that renders it.

use leptos::prelude::*;

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
pub const PAGE_CAT_ADMIN: &str = "admin";
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Root class list: base class, category modifier, then `extra`.
fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_ADMIN => "page page--admin",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = page_class(category, class);

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class_per_category() {
        assert_eq!(page_class(PAGE_CAT_DASHBOARD, ""), "page page--dashboard");
        assert_eq!(page_class(PAGE_CAT_ADMIN, ""), "page page--admin");
        assert_eq!(page_class(PAGE_CAT_SYSTEM, ""), "page page--system");
        assert_eq!(page_class("unknown", ""), "page");
    }

    #[test]
    fn test_page_class_appends_extra() {
        assert_eq!(
            page_class(PAGE_CAT_SYSTEM, "page--centered"),
            "page page--system page--centered"
        );
    }
}
