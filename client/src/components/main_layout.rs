//! App chrome: sidebar navigation, breadcrumb header, wallet widget.

#[cfg(test)]
#[path = "main_layout_test.rs"]
mod main_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::wallet_connect::WalletConnect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { title: "Dashboard", href: "/", icon: "▦" },
    NavItem { title: "Register Asset", href: "/assets/register", icon: "+" },
    NavItem { title: "Asset Status", href: "/assets/status", icon: "◷" },
    NavItem { title: "Verification", href: "/assets/verification", icon: "✓" },
    NavItem { title: "Wallet", href: "/wallet-demo", icon: "◈" },
    NavItem { title: "Repayment", href: "/repayment", icon: "▭" },
    NavItem { title: "Tasks", href: "/tasks", icon: "☰" },
];

/// `/` only matches itself; other entries also match nested paths.
pub fn is_nav_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn crumbs(items: &[(&'static str, &'static str)]) -> Vec<Crumb> {
    items.iter().map(|&(label, href)| Crumb { label, href }).collect()
}

#[component]
pub fn MainLayout(breadcrumbs: Vec<Crumb>, children: Children) -> impl IntoView {
    let location = use_location();
    let last = breadcrumbs.len().saturating_sub(1);

    view! {
        <div class="layout">
            <aside class="sidebar">
                <a class="sidebar__brand" href="/">
                    <span class="sidebar__logo">"◆"</span>
                    <span class="sidebar__name">"ChainCredit"</span>
                </a>
                <nav class="sidebar__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let active = move || is_nav_active(&location.pathname.get(), item.href);
                            view! {
                                <a class="sidebar__link" class:sidebar__link--active=active href=item.href>
                                    <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
                                    <span>{item.title}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <div class="layout__main">
                <header class="layout__header">
                    <nav class="breadcrumbs" aria-label="Breadcrumb">
                        {breadcrumbs
                            .into_iter()
                            .enumerate()
                            .map(|(i, crumb)| {
                                if i == last {
                                    view! { <span class="breadcrumbs__current">{crumb.label}</span> }.into_any()
                                } else {
                                    view! {
                                        <a class="breadcrumbs__link" href=crumb.href>{crumb.label}</a>
                                        <span class="breadcrumbs__sep">"/"</span>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()}
                    </nav>
                    <WalletConnect />
                </header>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
