use leptos::prelude::*;

use super::{SocialIcon, BRAND_FACEBOOK, BRAND_GITHUB, BRAND_INSTAGRAM, BRAND_TWITTER};
use crate::config::SiteConfig;
use crate::content::FOOTER_LINKS;

#[component]
pub fn Footer(config: SiteConfig) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <nav class="footer-links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|label| {
                            view! {
                                <div class="footer-link-item">
                                    <a href="#" class="footer-link">{*label}</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="footer-social">
                    <SocialIcon name="Facebook" path=BRAND_FACEBOOK />
                    <SocialIcon name="Instagram" path=BRAND_INSTAGRAM />
                    <SocialIcon name="Twitter" path=BRAND_TWITTER />
                    <SocialIcon name="GitHub" path=BRAND_GITHUB />
                </div>
                <p class="footer-copyright">{config.copyright}</p>
            </div>
        </footer>
    }
}
