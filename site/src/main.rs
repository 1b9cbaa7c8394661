// Aesthetic site — browser entry point (trunk / WASM)

use aesthetic_site::components::SiteApp;
use aesthetic_site::styles::SITE_CSS;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| {
        view! {
            <style>{SITE_CSS}</style>
            <SiteApp />
        }
    });
}
