use leptos::prelude::*;

use super::{Icon, ICON_CHECK_CIRCLE};
use crate::content::{PricingPlan, PRICING_PLANS};

/// Three-tier pricing table.
#[component]
pub fn PricingPanel() -> impl IntoView {
    view! {
        <section class="panel panel-pricing" data-panel="pricing">
            <div class="container">
                <div class="section-header centered">
                    <h2 class="section-eyebrow">"Pricing"</h2>
                    <p class="section-title">"Plans for businesses of all sizes"</p>
                    <p class="section-description">
                        "Choose the perfect plan for your needs. All plans include our core features."
                    </p>
                </div>
                <div class="pricing-grid">
                    {PRICING_PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=*plan /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let (card_class, cta_class) = if plan.featured {
        ("plan-card featured", "btn btn-primary btn-block")
    } else {
        ("plan-card", "btn btn-dark btn-block")
    };

    view! {
        <div class=card_class data-plan=plan.name>
            <div class="plan-head">
                <h3 class="plan-name">{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>
                <p class="plan-price">
                    <span class="plan-amount">{plan.price}</span>
                    <span class="plan-period">"/mo"</span>
                </p>
                <a href="#" class=cta_class>{plan.cta_label()}</a>
            </div>
            <div class="plan-body">
                <h4 class="plan-includes">"What's included"</h4>
                <ul class="plan-features">
                    {plan
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="plan-feature">
                                    <Icon path=ICON_CHECK_CIRCLE class="plan-check" />
                                    <span>{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
