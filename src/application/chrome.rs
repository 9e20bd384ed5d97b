use crate::application::site::SiteService;
use crate::domain::entities::SiteSettings;
use crate::presentation::views::{
    BrandView, FooterView, LayoutChrome, NavigationLinkView, NavigationView, PageMetaView,
};

/// Fixed public navigation. Anchors point into the landing page sections.
const NAV_ENTRIES: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Services", "/#services"),
    ("Blog", "/blog"),
    ("Contact", "/#contact"),
];

#[derive(Clone)]
pub struct ChromeService {
    site: SiteService,
}

impl ChromeService {
    pub fn new(site: SiteService) -> Self {
        Self { site }
    }

    /// Chrome for a public page. `active_href` marks the matching navigation entry.
    pub async fn load(&self, active_href: &str) -> LayoutChrome {
        let settings = self.site.settings().await;
        build_chrome(&settings, active_href)
    }
}

fn build_chrome(settings: &SiteSettings, active_href: &str) -> LayoutChrome {
    let entries = NAV_ENTRIES
        .iter()
        .map(|(label, href)| NavigationLinkView {
            label: (*label).to_string(),
            href: (*href).to_string(),
            is_active: *href == active_href,
        })
        .collect();

    LayoutChrome {
        brand: BrandView {
            title: settings.brand_title.clone(),
            href: "/".to_string(),
        },
        navigation: NavigationView { entries },
        footer: FooterView {
            copy: format!("© {}. All rights reserved.", settings.brand_title),
            contact_email: settings.contact_email.clone(),
            contact_phone: settings.contact_phone.clone(),
        },
        meta: PageMetaView {
            title: settings.brand_title.clone(),
            description: settings.tagline.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_marks_active_entry_and_carries_branding() {
        let settings = SiteSettings {
            brand_title: "Wander Co".to_string(),
            ..SiteSettings::default()
        };
        let chrome = build_chrome(&settings, "/blog");

        let active: Vec<_> = chrome
            .navigation
            .entries
            .iter()
            .filter(|entry| entry.is_active)
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(active, vec!["Blog"]);
        assert_eq!(chrome.brand.title, "Wander Co");
        assert!(chrome.footer.copy.contains("Wander Co"));
        assert_eq!(chrome.meta.description, settings.tagline);
    }
}
